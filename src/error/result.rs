//! Result type alias for admin client operations.

use super::admin_error::AdminError;

/// Type alias for Results using [`AdminError`].
pub type AdminResult<T> = Result<T, AdminError>;
