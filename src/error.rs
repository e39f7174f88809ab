//! Error types for page enhancement.
//!
//! Nothing here is ever shown to the visitor. A `MountSkip` records why a
//! setup task declined to run so the boot phase can log it and move on.

/// Reason a setup task left the page untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountSkip {
    #[error("anchor `{0}` not found")]
    MissingAnchor(&'static str),
    #[error("`{0}` already mounted")]
    AlreadyMounted(&'static str),
    #[error("no in-page section links")]
    NoSections,
    #[error("only {found} section links, need {required}")]
    TooFewLinks { found: usize, required: usize },
    #[error("browser API unavailable: {0}")]
    Unavailable(&'static str),
}

/// Failure while reading the optional page configuration block.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure of the asynchronous platform clipboard write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard API unavailable")]
    Unsupported,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}
