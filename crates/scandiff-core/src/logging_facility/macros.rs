//! Canonical logging macros
//!
//! Every event carries `component`, `op` and `event`; extra fields are passed
//! through to `tracing` unchanged, so `%x` / `?x` work as usual.

#[doc(hidden)]
#[macro_export]
macro_rules! __scandiff_event {
    ($level:ident, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $event,
            $($($field)*)?
        );
    };
}

/// Log the start of an operation
///
/// ```
/// # use scandiff_core::log_op_start;
/// log_op_start!("compare_records");
/// log_op_start!("compare_records", columns = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__scandiff_event!(
            info,
            $op,
            $crate::scandiff_core_types::schema::EVENT_START
            $(, $($field)*)?
        );
    };
}

/// Log the successful end of an operation; `duration_ms` is mandatory
///
/// ```
/// # use scandiff_core::log_op_end;
/// log_op_end!("compare_records", duration_ms = 42);
/// log_op_end!("compare", duration_ms = 1, cached = true);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__scandiff_event!(
            info,
            $op,
            $crate::scandiff_core_types::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        );
    };
}

/// Log an operation failure with the error's kind and stable code
///
/// Accepts anything convertible into [`ExError`](crate::errors::ExError).
///
/// ```
/// # use scandiff_core::{log_op_error, errors::ScanDiffError};
/// let err = ScanDiffError::RecordNotObject { index: 0, found: "string".to_string() };
/// log_op_error!("validate_records", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__scandiff_event!(
            error,
            $op,
            $crate::scandiff_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code()
            $(, $($field)*)?
        );
    }};
}

/// Log a result-cache outcome (`hit`, `miss` or `evict`) at debug level
///
/// ```
/// # use scandiff_core::log_cache_event;
/// log_cache_event!(hit, "compare", cache_key = "3fa9c01b22de");
/// log_cache_event!(evict, "compare", evicted = 1, cache_size = 64);
/// ```
#[macro_export]
macro_rules! log_cache_event {
    (hit, $op:expr $(, $($field:tt)*)?) => {
        $crate::__scandiff_event!(
            debug,
            $op,
            $crate::scandiff_core_types::schema::EVENT_CACHE_HIT
            $(, $($field)*)?
        );
    };
    (miss, $op:expr $(, $($field:tt)*)?) => {
        $crate::__scandiff_event!(
            debug,
            $op,
            $crate::scandiff_core_types::schema::EVENT_CACHE_MISS
            $(, $($field)*)?
        );
    };
    (evict, $op:expr $(, $($field:tt)*)?) => {
        $crate::__scandiff_event!(
            debug,
            $op,
            $crate::scandiff_core_types::schema::EVENT_CACHE_EVICT
            $(, $($field)*)?
        );
    };
}
