//! RDAP media types (formerly known as mime types).

/// The "application/json" media type value.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// The "application/rdap+json" media type value.
pub const RDAP_MEDIA_TYPE: &str = "application/rdap+json";
