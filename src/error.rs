//! Repository browser error handling.

use thiserror::Error;

/// Errors raised while configuring a browser or composing links.
#[derive(Error, Debug)]
pub enum BrowserError {
    /// The configured base URL is not a well-formed URL.
    #[error("Invalid browser URL '{url}': {source}")]
    InvalidConfiguration {
        /// The rejected configuration value.
        url: String,
        /// Underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// A derived link could not be built beneath the base URL.
    #[error("Failed to compose link '{segments}' under '{base}': {reason}")]
    LinkComposition {
        /// The normalized base URL.
        base: String,
        /// The path segments that could not be appended, joined by `/`.
        segments: String,
        /// Why the segments could not be appended.
        reason: &'static str,
    },

    /// No browser is registered under the requested name.
    #[error("Unknown repository browser '{0}'")]
    UnknownBrowser(String),
}

/// Convenience alias for browser results.
pub type Result<T> = std::result::Result<T, BrowserError>;
