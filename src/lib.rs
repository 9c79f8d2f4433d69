//! Decode [ASPRS LAS](https://www.asprs.org/committee-general/laser-las-file-format-exchange-activities.html)
//! point clouds into flat, renderer-ready buffers.
//!
//! # Ingesting
//!
//! Open a `PointCloud` from a path. The header bounds are available right away:
//!
//! ```no_run
//! use las_ingest::PointCloud;
//! let cloud = PointCloud::open("points.las").unwrap();
//! let [min_x, min_y, min_z, max_x, max_y, max_z] = *cloud.bounds();
//! ```
//!
//! Then decode the points, optionally dropping low points (classification 7) as noise:
//!
//! ```no_run
//! use las_ingest::PointCloud;
//! let mut cloud = PointCloud::open("points.las").unwrap();
//! let loaded = cloud.ingest(true).unwrap();
//! println!("kept {} of {} points", loaded, cloud.declared_point_count());
//! for xyz in cloud.positions().chunks_exact(3) {
//!     println!("({}, {}, {})", xyz[0], xyz[1], xyz[2]);
//! }
//! ```
//!
//! Colors are rescaled from 16 to 8 bits per channel and stored as rgba, four bytes per point,
//! but only if the file's point format has color:
//!
//! ```no_run
//! # use las_ingest::PointCloud;
//! let mut cloud = PointCloud::open("points.las").unwrap();
//! cloud.ingest(false).unwrap();
//! if cloud.has_colors() {
//!     for rgba in cloud.colors().chunks_exact(4) {
//!         println!("{:?}", rgba);
//!     }
//! }
//! ```
//!
//! # Compression
//!
//! laz files are supported by enabling the `laz` feature, and decompressed in parallel with
//! `laz-parallel`:
//!
//! ```toml
//! [dependencies]
//! las-ingest = { version = "*", features = ["laz"] }
//! ```
//!
//! # Crossing the C boundary
//!
//! The [ffi] module exposes the same lifecycle as `extern "C"` functions, handing out borrowed
//! pointers into the cloud's buffers instead of copies.

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

pub mod cloud;
#[allow(unsafe_code)]
pub mod ffi;
pub mod filter;
pub mod source;
pub mod transform;

mod bounds;
mod error;

pub use crate::{
    bounds::Bounds,
    cloud::PointCloud,
    error::Error,
    source::{HeaderInfo, LasSource, PointRecord, PointSource, SourceOptions},
};

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
