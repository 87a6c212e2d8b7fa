//! Canonical schema constants for structured logging
//!
//! Event names are passed to the logging macros as values. `tracing` field
//! names must be literal identifiers, so the `FIELD_*` keys are used where
//! events are read back (capture layer and tests) and mirror the emit sites.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Comparison context
pub const FIELD_FIELD_NAME: &str = "field";

// Cache context
pub const FIELD_CACHE_KEY: &str = "cache_key";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_CACHE_HIT: &str = "cache_hit";
pub const EVENT_CACHE_MISS: &str = "cache_miss";
pub const EVENT_CACHE_EVICT: &str = "cache_evict";
