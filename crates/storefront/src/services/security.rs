//! One-time login code generation.

use rand::Rng;

use crate::collaborators::CodeGenerator;

const CODE_RANGE: std::ops::Range<u32> = 100_000..1_000_000;

/// Generates random 6-digit codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> u32 {
        rand::rng().random_range(CODE_RANGE)
    }
}
