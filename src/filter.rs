//! Noise filtering.

use crate::PointRecord;

/// The ASPRS classification code for low points, which we treat as noise.
pub const LOW_POINT: u8 = 7;

/// Returns true if this record should be discarded as noise.
///
/// Only low points (classification code 7) are noise. Every other code, including high noise
/// (code 18), is kept.
///
/// # Examples
///
/// ```
/// use las_ingest::{PointRecord, filter};
/// let mut record = PointRecord::default();
/// assert!(!filter::is_noise(&record));
/// record.classification = 7;
/// assert!(filter::is_noise(&record));
/// ```
pub fn is_noise(record: &PointRecord) -> bool {
    record.classification == LOW_POINT
}
