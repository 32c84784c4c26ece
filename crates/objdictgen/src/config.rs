// crates/objdictgen/src/config.rs
//! Generator settings that are not part of the dictionary itself.

/// Default tag written at the top of both generated documents.
pub const DEFAULT_BANNER: &str = "/* File generated by objdictgen. Should not be modified. */";

/// Default include path of the stack's data header.
pub const DEFAULT_STACK_HEADER: &str = "CanFestival/data.h";

/// Output settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Generated-file tag line, written verbatim.
    pub banner: String,
    /// Include path of the stack header declaring `CO_Data`, `subindex`, etc.
    pub stack_header: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            banner: DEFAULT_BANNER.to_string(),
            stack_header: DEFAULT_STACK_HEADER.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    pub fn with_stack_header(mut self, stack_header: impl Into<String>) -> Self {
        self.stack_header = stack_header.into();
        self
    }
}
