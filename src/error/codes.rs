//! Error code constants.
//!
//! Error codes are organized by category:
//! - 1xxx: Form and counter errors
//! - 3xxx: Validation errors
//! - 4xxx: Resource errors
//! - 5xxx: Internal/System errors

/// Numeric error code returned in the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    // ===== Form Errors (1xxx) =====

    /// The counter cannot advance without overflowing.
    pub const COUNTER_EXHAUSTED: Self = Self(1004);

    // ===== Validation Errors (3xxx) =====

    /// Bad request / malformed body.
    pub const BAD_REQUEST: Self = Self(3001);

    // ===== Resource Errors (4xxx) =====

    /// Resource not found.
    pub const NOT_FOUND: Self = Self(4001);

    // ===== Internal/System Errors (5xxx) =====

    /// Internal server error.
    pub const INTERNAL_ERROR: Self = Self(5002);

    /// Service unavailable.
    pub const SERVICE_UNAVAILABLE: Self = Self(5003);

    /// Get the error code as an i32.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}
