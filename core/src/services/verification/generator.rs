//! Default code generator backed by the operating system CSPRNG

use rand::{rngs::OsRng, Rng};

use crate::domain::entities::verification_code::{format_code, CODE_SPACE};

use super::traits::CodeGenerator;

/// Draws codes uniformly from `000000..=999999` using `OsRng`
#[derive(Debug, Default, Clone, Copy)]
pub struct OsCodeGenerator;

impl CodeGenerator for OsCodeGenerator {
    fn generate(&self) -> String {
        format_code(OsRng.gen_range(0..CODE_SPACE))
    }
}
