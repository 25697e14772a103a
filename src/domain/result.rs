//! Result type alias for Casefile

use super::errors::CasefileError;

/// Result type alias for Casefile operations
///
/// # Examples
///
/// ```
/// use casefile::domain::result::Result;
/// use casefile::domain::errors::CasefileError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(CasefileError::Archive("disk full".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, CasefileError>;
