//! Analytics reporter that records page views as tracing events.

use crate::collaborators::Analytics;

/// Emits one `info` event per page view.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalytics;

impl Analytics for TracingAnalytics {
    fn track(&self, page_path: &str) {
        tracing::info!(page = %page_path, "Page view");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_track_emits_page_view_event() {
        let output = CapturedOutput::default();
        let writer = output.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let analytics: Arc<dyn Analytics> = Arc::new(TracingAnalytics);
        tracing::subscriber::with_default(subscriber, || analytics.track("/home"));

        let logged = String::from_utf8(output.0.lock().unwrap().clone()).unwrap();
        assert_eq!(logged.lines().count(), 1, "{logged}");
        assert!(logged.contains("INFO"), "{logged}");
        assert!(logged.contains("Page view"), "{logged}");
        assert!(logged.contains("page=/home"), "{logged}");
    }
}
