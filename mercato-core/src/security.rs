use rand::Rng;

pub trait CodeGenerator: Send + Sync {
    /// Produce a fresh one-time code. No reuse guarantee across calls; the
    /// code is never persisted here.
    fn generate_code(&self) -> u32;
}

/// Six-digit random codes for login emails.
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate_code(&self) -> u32 {
        rand::thread_rng().gen_range(100_000..1_000_000)
    }
}

/// Always returns the same code, for deterministic tests.
pub struct FixedCodeGenerator(pub u32);

impl CodeGenerator for FixedCodeGenerator {
    fn generate_code(&self) -> u32 {
        self.0
    }
}
