use thiserror::Error;

/// Represents errors surfaced at the crate's integration boundaries.
///
/// The conversion and redirect paths themselves never fail: malformed style
/// values or missing query parameters degrade to pass-through output instead
/// of raising. Errors only exist where the host hands us structured data.
#[derive(Error, Debug)]
pub enum StyleToolsError {
    /// Error occurred while parsing or emitting a JSON configuration payload.
    #[error("Failed to process configuration JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),
}

/// A type alias for `Result<T, StyleToolsError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, StyleToolsError>;
