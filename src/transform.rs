//! Conversions from decoded records into renderer-ready values.

use crate::PointRecord;

/// Converts a record's coordinates into a single-precision position.
///
/// The decoder has already applied the file's scale and offset, so this is only a cast.
///
/// # Examples
///
/// ```
/// use las_ingest::{PointRecord, transform};
/// let record = PointRecord { x: 1., y: 2., z: 3., ..Default::default() };
/// assert_eq!([1., 2., 3.], transform::to_position(&record));
/// ```
pub fn to_position(record: &PointRecord) -> [f32; 3] {
    [record.x as f32, record.y as f32, record.z as f32]
}

/// Converts a record's 16-bit color channels into 8-bit rgba, if the record has color.
///
/// # Examples
///
/// ```
/// use las_ingest::{PointRecord, transform};
/// let record = PointRecord { color: Some([65535, 0, 32768, 0]), ..Default::default() };
/// assert_eq!(Some([255, 0, 127, 0]), transform::to_color(&record));
/// assert_eq!(None, transform::to_color(&PointRecord::default()));
/// ```
pub fn to_color(record: &PointRecord) -> Option<[u8; 4]> {
    record.color.map(|channels| channels.map(scale_channel))
}

/// Rescales one 16-bit color channel to 8 bits, truncating toward zero.
pub fn scale_channel(raw: u16) -> u8 {
    (255.0 * f64::from(raw) / f64::from(u16::MAX)) as u8
}
