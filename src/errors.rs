use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Domain-specific error set for the grading tool.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Input parsing ------------------------------------------------------
    /// Malformed user or file input (marks, record rows, flag values).
    #[error("Parse error: {0}")]
    Parse(String),

    /// Menu selection outside the command surface.
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    // ---- Config -------------------------------------------------------------
    /// Any issue initializing/reading config (unreadable file, invalid JSON).
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// IO passthrough (import/export files, log files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (config decode).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create a parse error from any displayable value.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    /// Helper for an out-of-menu selection.
    pub fn invalid_choice<S: Into<String>>(selection: S) -> Self {
        Error::InvalidChoice(selection.into())
    }
}
