pub mod config_keys;
pub mod units;

pub use config_keys::{key_path, keys, namespace};
pub use units::{UNIT_NAMES, UNIT_PREFIX, unit_file_name, unit_name};
