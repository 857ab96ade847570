//! Wall-clock source backed by the host's local time zone.

use chrono::{Local, NaiveDateTime};

use crate::collaborators::Clock;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
