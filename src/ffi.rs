//! The C ABI.
//!
//! A host (a scripting runtime, a renderer) opens a cloud, ingests it, and reads the buffers
//! straight out of memory owned by this library:
//!
//! ```c
//! LasCloud *cloud = las_cloud_open("points.las");
//! if (!cloud) { /* open failed */ }
//! uint64_t n = las_cloud_ingest(cloud, true);
//! const float *positions = las_cloud_positions(cloud);   // 3 * n floats
//! const uint8_t *colors = las_cloud_has_colors(cloud) ? las_cloud_colors(cloud) : NULL;
//! las_cloud_close(cloud);
//! ```
//!
//! # Pointer lifetimes
//!
//! Every pointer returned here borrows memory owned by the cloud. The caller must never free it.
//! Position and color pointers are invalidated by the next `las_cloud_ingest` or by
//! `las_cloud_close`, so re-fetch them after every ingest. The bounds pointer lives until close.
//!
//! # Caller contract
//!
//! A cloud pointer must come from `las_cloud_open` and must not be used after
//! `las_cloud_close`. Closing twice, or using a closed cloud, is undefined behavior and isn't
//! detected. A cloud must not be used from two threads at once. Null cloud pointers are
//! tolerated: closing is a no-op and accessors return zero, null, or false.

use crate::{Error, LasSource, PointCloud};
use log::error;
use std::{
    ffi::{CStr, c_char},
    panic::{self, AssertUnwindSafe},
    path::Path,
    ptr,
};

/// The opaque cloud handle seen by C callers.
pub type LasCloud = PointCloud<LasSource>;

/// Returned by [las_cloud_ingest] when decoding fails.
pub const LAS_INGEST_FAILED: u64 = u64::MAX;

fn report(context: &str, err: &Error) {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    error!("{}: {}", context, message);
}

unsafe fn path<'a>(path: *const c_char) -> Result<&'a Path, Error> {
    if path.is_null() {
        return Err(Error::InvalidPath);
    }
    // SAFETY: the caller promises a nul-terminated string that outlives this call.
    let path = unsafe { CStr::from_ptr(path) };
    path.to_str()
        .map(Path::new)
        .map_err(|_| Error::InvalidPath)
}

/// Opens a las file and captures its bounds.
///
/// Returns null if the path is null or not UTF-8, or if the file can't be opened as a point
/// cloud. The reason is logged.
///
/// # Safety
///
/// `path` must be null or point to a nul-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn las_cloud_open(path: *const c_char) -> *mut LasCloud {
    let result = panic::catch_unwind(|| {
        // SAFETY: forwarded from the caller.
        let path = unsafe { self::path(path) }?;
        PointCloud::open(path)
    });
    match result {
        Ok(Ok(cloud)) => Box::into_raw(Box::new(cloud)),
        Ok(Err(err)) => {
            report("las_cloud_open", &err);
            ptr::null_mut()
        }
        Err(_) => {
            error!("las_cloud_open: panicked");
            ptr::null_mut()
        }
    }
}

/// Releases the decoder and frees the buffers.
///
/// # Safety
///
/// `cloud` must be null or a pointer returned by [las_cloud_open] that hasn't been closed. It's
/// invalid after this call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn las_cloud_close(cloud: *mut LasCloud) {
    if !cloud.is_null() {
        // SAFETY: the caller hands back ownership of a pointer from `Box::into_raw`.
        let cloud = unsafe { Box::from_raw(cloud) };
        if panic::catch_unwind(AssertUnwindSafe(move || cloud.close())).is_err() {
            error!("las_cloud_close: panicked");
        }
    }
}

/// Decodes the points into the buffers and returns how many were kept.
///
/// Low points are discarded when `filter_noise` is true. Previous buffer contents are replaced,
/// not appended to. Returns [LAS_INGEST_FAILED] if decoding fails or `cloud` is null.
///
/// # Safety
///
/// `cloud` must be null or a live pointer from [las_cloud_open]. Any position or color pointer
/// fetched before this call is invalid afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn las_cloud_ingest(cloud: *mut LasCloud, filter_noise: bool) -> u64 {
    // SAFETY: the caller promises a live, unaliased cloud.
    let Some(cloud) = (unsafe { cloud.as_mut() }) else {
        return LAS_INGEST_FAILED;
    };
    match panic::catch_unwind(AssertUnwindSafe(|| cloud.ingest(filter_noise))) {
        Ok(Ok(loaded)) => loaded,
        Ok(Err(err)) => {
            report("las_cloud_ingest", &err);
            LAS_INGEST_FAILED
        }
        Err(_) => {
            error!("las_cloud_ingest: panicked");
            LAS_INGEST_FAILED
        }
    }
}

/// Returns the number of points the file header declares.
///
/// # Safety
///
/// `cloud` must be null or a live pointer from [las_cloud_open].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn las_cloud_declared_point_count(cloud: *const LasCloud) -> u64 {
    // SAFETY: the caller promises a live cloud.
    unsafe { cloud.as_ref() }.map_or(0, LasCloud::declared_point_count)
}

/// Returns the number of points in the buffers.
///
/// # Safety
///
/// `cloud` must be null or a live pointer from [las_cloud_open].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn las_cloud_loaded_point_count(cloud: *const LasCloud) -> u64 {
    // SAFETY: the caller promises a live cloud.
    unsafe { cloud.as_ref() }.map_or(0, LasCloud::loaded_point_count)
}

/// Returns six contiguous floats: min x, min y, min z, max x, max y, max z.
///
/// # Safety
///
/// `cloud` must be null or a live pointer from [las_cloud_open]. The pointer is valid until the
/// cloud is closed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn las_cloud_bounds(cloud: *const LasCloud) -> *const f32 {
    // SAFETY: the caller promises a live cloud.
    unsafe { cloud.as_ref() }.map_or(ptr::null(), |cloud| cloud.bounds().as_ptr())
}

/// Returns the interleaved x, y, z positions.
///
/// # Safety
///
/// `cloud` must be null or a live pointer from [las_cloud_open]. Read at most
/// [las_cloud_positions_len] floats, and not after the next ingest or close.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn las_cloud_positions(cloud: *const LasCloud) -> *const f32 {
    // SAFETY: the caller promises a live cloud.
    unsafe { cloud.as_ref() }.map_or(ptr::null(), |cloud| cloud.positions().as_ptr())
}

/// Returns the number of floats behind [las_cloud_positions].
///
/// # Safety
///
/// `cloud` must be null or a live pointer from [las_cloud_open].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn las_cloud_positions_len(cloud: *const LasCloud) -> usize {
    // SAFETY: the caller promises a live cloud.
    unsafe { cloud.as_ref() }.map_or(0, |cloud| cloud.positions().len())
}

/// Returns the interleaved r, g, b, a colors. Only meaningful if [las_cloud_has_colors].
///
/// # Safety
///
/// `cloud` must be null or a live pointer from [las_cloud_open]. Read at most
/// [las_cloud_colors_len] bytes, and not after the next ingest or close.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn las_cloud_colors(cloud: *const LasCloud) -> *const u8 {
    // SAFETY: the caller promises a live cloud.
    unsafe { cloud.as_ref() }.map_or(ptr::null(), |cloud| cloud.colors().as_ptr())
}

/// Returns the number of bytes behind [las_cloud_colors].
///
/// # Safety
///
/// `cloud` must be null or a live pointer from [las_cloud_open].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn las_cloud_colors_len(cloud: *const LasCloud) -> usize {
    // SAFETY: the caller promises a live cloud.
    unsafe { cloud.as_ref() }.map_or(0, |cloud| cloud.colors().len())
}

/// Returns true if the color buffer is populated.
///
/// # Safety
///
/// `cloud` must be null or a live pointer from [las_cloud_open].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn las_cloud_has_colors(cloud: *const LasCloud) -> bool {
    // SAFETY: the caller promises a live cloud.
    unsafe { cloud.as_ref() }.is_some_and(LasCloud::has_colors)
}
