pub mod fields;
pub mod record;

pub use fields::{APP_NAME, VERSION_NAME};
pub use record::ScanRecord;
