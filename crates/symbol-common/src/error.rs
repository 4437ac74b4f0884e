//! Error types for the weather symbol services.

use thiserror::Error;

/// Result type alias using SymbolError.
pub type SymbolResult<T> = Result<T, SymbolError>;

/// Primary error type for symbol decoding and rendering.
#[derive(Debug, Error)]
pub enum SymbolError {
    // === Client Errors ===
    /// Malformed angle, weather code or render parameter, or a code that
    /// decodes to nothing.
    #[error("{0}")]
    InvalidInput(String),

    // === Asset Errors ===
    /// An individual fragment file is absent. Composites skip these.
    #[error("SVG fragment not found: {0}")]
    ResourceMissing(String),

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    RenderFailure(String),
}

impl SymbolError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            SymbolError::InvalidInput(_) => 400,
            SymbolError::ResourceMissing(_) => 404,
            SymbolError::RenderFailure(_) => 500,
        }
    }

    /// Whether the caller is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, SymbolError::InvalidInput(_))
    }
}
