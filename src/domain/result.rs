//! Result type alias for CampusCoffee
//!
//! This module provides a convenient Result type alias that uses
//! CampusCoffeeError as the error type.

use super::errors::CampusCoffeeError;

/// Result type alias for CampusCoffee operations
///
/// # Examples
///
/// ```
/// use campus_coffee::domain::result::Result;
/// use campus_coffee::domain::errors::CampusCoffeeError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(CampusCoffeeError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, CampusCoffeeError>;
