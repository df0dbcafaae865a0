//! Security meta tag names.
//!
//! Pages can declare a subset of HTTP security policies through `<meta>` tags,
//! either with a `name` or an `http-equiv` attribute. Only these meta tags are
//! inspected; actual HTTP response headers are not.

/// Content Security Policy
pub const META_CONTENT_SECURITY_POLICY: &str = "content-security-policy";
/// X-XSS-Protection
pub const META_X_XSS_PROTECTION: &str = "x-xss-protection";
/// X-Frame-Options
pub const META_X_FRAME_OPTIONS: &str = "x-frame-options";
/// Referrer policy (`<meta name="referrer">`)
pub const META_REFERRER: &str = "referrer";
/// Permissions-Policy
pub const META_PERMISSIONS_POLICY: &str = "permissions-policy";

