/// Trait for structs that provide metadata for logging
pub trait LogMetadata {
    fn meta(&self) -> String;
}

/// Identifies the node and pipeline stage a log line belongs to.
pub struct GenContext<'a> {
    pub node: &'a str,
    pub stage: &'static str,
}

impl<'a> GenContext<'a> {
    pub fn new(node: &'a str, stage: &'static str) -> Self {
        Self { node, stage }
    }
}

impl LogMetadata for GenContext<'_> {
    fn meta(&self) -> String {
        format!("node={}, stage={}", self.node, self.stage)
    }
}

// =============================================
// Logging Macros (namespaced under crate::log)
// =============================================

// ===== gen_info! =====
macro_rules! gen_info {
    ($ctx:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        let meta = $crate::log::LogMetadata::meta(&$ctx);
        ::log::info!(concat!("[{}] ", $fmt), meta $(, $($arg)+)?);
    }};
}

// ===== gen_warn! =====
macro_rules! gen_warn {
    ($ctx:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        let meta = $crate::log::LogMetadata::meta(&$ctx);
        ::log::warn!(concat!("[{}] ", $fmt), meta $(, $($arg)+)?);
    }};
}

// ===== gen_debug! =====
macro_rules! gen_debug {
    ($ctx:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        let meta = $crate::log::LogMetadata::meta(&$ctx);
        ::log::debug!(concat!("[{}] ", $fmt), meta $(, $($arg)+)?);
    }};
}

// ===== gen_trace! =====
macro_rules! gen_trace {
    ($ctx:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        let meta = $crate::log::LogMetadata::meta(&$ctx);
        ::log::trace!(concat!("[{}] ", $fmt), meta $(, $($arg)+)?);
    }};
}

// Re-export macros for use in other files
pub(crate) use gen_debug;
pub(crate) use gen_info;
pub(crate) use gen_trace;
pub(crate) use gen_warn;
