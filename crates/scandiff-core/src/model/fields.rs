//! Well-known scan record field names.
//!
//! Records are open-ended mappings; these are the names the engine and the
//! display layer give special meaning to.

pub const APP_NAME: &str = "APP_NAME";
pub const PACKAGE_NAME: &str = "PACKAGE_NAME";
pub const VERSION_NAME: &str = "VERSION_NAME";
pub const SIZE: &str = "SIZE";
pub const SHA256: &str = "SHA256";
pub const NETWORK_FINDINGS: &str = "NETWORK_FINDINGS";
pub const NETWORK_SUMMARY: &str = "NETWORK_SUMMARY";
pub const DETECTED_TRACKERS: &str = "DETECTED_TRACKERS";
pub const TRACKER_DETAILS: &str = "TRACKER_DETAILS";
pub const TOP_MALWARE_PERMISSIONS: &str = "TOP_MALWARE_PERMISSIONS";
pub const PERMISSIONS: &str = "PERMISSIONS";
pub const OTHER_ABUSED_PERMISSIONS: &str = "OTHER_ABUSED_PERMISSIONS";
pub const EXPORTED_ACTIVITIES: &str = "EXPORTED_ACTIVITIES";
pub const EXPORTED_SERVICES: &str = "EXPORTED_SERVICES";
pub const EXPORTED_RECEIVERS: &str = "EXPORTED_RECEIVERS";
pub const EXPORTED_PROVIDERS: &str = "EXPORTED_PROVIDERS";
pub const DOMAINS: &str = "DOMAINS";
pub const CODE_ANALYSIS_STATISTICS: &str = "CODE_ANALYSIS_STATISTICS";
pub const CODE_ANALYSIS_MASVS: &str = "CODE_ANALYSIS_MASVS";
pub const CODE_ANALYSIS_CWE: &str = "CODE_ANALYSIS_CWE";
pub const CODE_ANALYSIS_OWASP: &str = "CODE_ANALYSIS_OWASP";

/// Row order used when presenting a comparison.
///
/// Fields outside this list are still compared but not displayed.
pub const DISPLAY_ORDER: &[&str] = &[
    APP_NAME,
    PACKAGE_NAME,
    SIZE,
    SHA256,
    NETWORK_FINDINGS,
    NETWORK_SUMMARY,
    DETECTED_TRACKERS,
    TRACKER_DETAILS,
    TOP_MALWARE_PERMISSIONS,
    PERMISSIONS,
    OTHER_ABUSED_PERMISSIONS,
    EXPORTED_ACTIVITIES,
    EXPORTED_SERVICES,
    EXPORTED_RECEIVERS,
    EXPORTED_PROVIDERS,
    DOMAINS,
    CODE_ANALYSIS_STATISTICS,
    CODE_ANALYSIS_MASVS,
    CODE_ANALYSIS_CWE,
    CODE_ANALYSIS_OWASP,
];
