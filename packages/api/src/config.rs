//! Client-side API configuration.
//!
//! The base URL is baked in at compile time: set `API_BASE_URL` in the build
//! environment to point a bundle at another backend. There is no runtime
//! configuration surface.

/// Base URL of the FitDesk REST API, without a trailing slash.
pub fn api_base() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("http://localhost:3000/api/v1")
}

/// Request header carrying the opaque session token.
pub const AUTH_HEADER: &str = "x-access-token";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
    }
}
