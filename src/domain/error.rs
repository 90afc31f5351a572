//! Error types for the limelight controller.
//!
//! This module defines the centralized error type [`LimelightError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Errors exist only for startup-time validation (registry construction, trigger
//! binding, configuration loading). Runtime lifecycle requests are total functions
//! over current state plus input and never fail: a disallowed or unknown request
//! degrades to a logged no-op instead of an error.

use thiserror::Error;

/// The main error type for limelight operations.
///
/// This enum consolidates all error conditions that can occur while building the
/// controller: registry validation, trigger binding, and configuration parsing.
/// I/O and TOML parse failures from external crates convert automatically via
/// `#[from]`.
///
/// # Examples
///
/// ```
/// use limelight::domain::LimelightError;
///
/// fn validate_modal_list(modals: &[String]) -> Result<(), LimelightError> {
///     if modals.is_empty() {
///         return Err(LimelightError::Config("no modals declared".to_string()));
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Error)]
pub enum LimelightError {
    /// Modal registry validation failed.
    ///
    /// Occurs when the same modal identifier is registered twice, or when a
    /// trigger binding references an identifier the registry does not know.
    /// Surfaced during setup so invalid markup references fail fast rather
    /// than silently at request time.
    #[error("Registry error: {0}")]
    Registry(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed as TOML.
    ///
    /// Wraps errors from the `toml` crate. Automatically converts from
    /// `toml::de::Error` using the `#[from]` attribute.
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (reading a
    /// configuration file). Automatically converts from `std::io::Error`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for limelight operations.
///
/// This is a type alias for `std::result::Result<T, LimelightError>` that simplifies
/// function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use limelight::domain::Result;
///
/// fn build_controller() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, LimelightError>;
