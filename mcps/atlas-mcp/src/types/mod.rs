//! Response types for the Atlas tools

mod cleanup;
mod disk;
mod files;
mod health;
mod stats;

pub use cleanup::*;
pub use disk::*;
pub use files::*;
pub use health::*;
pub use stats::*;

const GB: f64 = 1024.0 * 1024.0 * 1024.0;
const MB: f64 = 1024.0 * 1024.0;

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn bytes_to_gb(bytes: u64) -> f64 {
    round2(bytes as f64 / GB)
}

pub fn bytes_to_mb(bytes: u64) -> f64 {
    round2(bytes as f64 / MB)
}

/// Current time as fractional seconds since the Unix epoch
pub fn epoch_seconds() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64 / 1000.0
}
