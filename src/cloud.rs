//! Decoded point clouds.
//!
//! A [PointCloud] owns exactly one [PointSource] and the flat buffers that ingestion fills from
//! it. Open it, ingest, then hand the buffers to a renderer:
//!
//! ```no_run
//! use las_ingest::PointCloud;
//! let mut cloud = PointCloud::open("points.las").unwrap();
//! let loaded = cloud.ingest(true).unwrap();
//! assert_eq!(loaded as usize * 3, cloud.positions().len());
//! if cloud.has_colors() {
//!     assert_eq!(loaded as usize * 4, cloud.colors().len());
//! }
//! cloud.close();
//! ```
//!
//! A cloud isn't `Clone`, since the decoder's read cursor can't be duplicated. Callers on several
//! threads must serialize access themselves, e.g. one cloud per worker or a mutex around it.

use crate::{LasSource, PointSource, Result, SourceOptions, filter, source::HeaderInfo, transform};
use log::{debug, warn};
use std::{fmt, path::Path};

/// A decoded point cloud and the decoder it came from.
pub struct PointCloud<S: PointSource = LasSource> {
    source: S,
    bounds: [f32; 6],
    positions: Vec<f32>,
    colors: Vec<u8>,
}

impl PointCloud<LasSource> {
    /// Opens a las file.
    ///
    /// The bounds are captured right away; the position and color buffers stay empty until
    /// [ingest](PointCloud::ingest) is called.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_ingest::{Error, PointCloud};
    /// let err = PointCloud::open("does/not/exist.las").unwrap_err();
    /// assert!(matches!(err, Error::Open { .. }));
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<PointCloud<LasSource>> {
        PointCloud::open_with_options(path, SourceOptions::default())
    }

    /// Opens a las file with custom source options.
    pub fn open_with_options<P: AsRef<Path>>(
        path: P,
        options: SourceOptions,
    ) -> Result<PointCloud<LasSource>> {
        LasSource::with_options(path, options).map(PointCloud::from_source)
    }
}

impl<S: PointSource> PointCloud<S> {
    /// Wraps an already-open source.
    pub fn from_source(source: S) -> PointCloud<S> {
        let bounds = source.header().bounds.to_f32_array();
        PointCloud {
            source,
            bounds,
            positions: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Decodes every point record into the position (and maybe color) buffers, returning the
    /// number of points kept.
    ///
    /// If `filter_noise` is true, low points (see [filter::is_noise]) are discarded. Any previous
    /// contents are cleared first, so ingesting twice gives the same buffers as ingesting once.
    ///
    /// At most the header's declared number of records are read. A source that ends early,
    /// including a file truncated mid-record, isn't an error: ingestion stops and the smaller
    /// count is returned. Any other decoder failure is returned as an error and leaves the
    /// buffers empty.
    ///
    /// Slices borrowed from this cloud can't outlive this call. Raw pointers handed across the C
    /// boundary are invalidated by it.
    pub fn ingest(&mut self, filter_noise: bool) -> Result<u64> {
        self.positions.clear();
        self.colors.clear();
        let result = self.decode(filter_noise);
        if result.is_err() {
            self.positions.clear();
            self.colors.clear();
        }
        result
    }

    fn decode(&mut self, filter_noise: bool) -> Result<u64> {
        self.source.seek(0)?;
        let header = *self.source.header();
        if let Ok(capacity) = usize::try_from(header.point_count) {
            let _ = self.positions.try_reserve(capacity.saturating_mul(3));
            if header.has_color {
                let _ = self.colors.try_reserve(capacity.saturating_mul(4));
            }
        }

        let mut records_read = 0;
        let mut discarded = 0;
        while records_read < header.point_count {
            let record = match self.source.read_next() {
                Ok(Some(record)) => record,
                Ok(None) => break,
                Err(err) if err.is_truncation() => {
                    debug!("stopping at truncated record: {}", err);
                    break;
                }
                Err(err) => return Err(err),
            };
            records_read += 1;
            if filter_noise && filter::is_noise(&record) {
                discarded += 1;
                continue;
            }
            self.positions.extend_from_slice(&transform::to_position(&record));
            if header.has_color {
                // a colored format that decodes a colorless record still gets a slot
                let color = transform::to_color(&record).unwrap_or_default();
                self.colors.extend_from_slice(&color);
            }
        }

        if records_read < header.point_count {
            warn!(
                "source ended after {} of {} declared points",
                records_read, header.point_count
            );
        }
        let loaded = self.loaded_point_count();
        debug!(
            "ingested {} points ({} read, {} discarded as noise)",
            loaded, records_read, discarded
        );
        Ok(loaded)
    }

    /// Returns the header metadata of the underlying source.
    pub fn header(&self) -> &HeaderInfo {
        self.source.header()
    }

    /// Returns the number of points the header declares.
    pub fn declared_point_count(&self) -> u64 {
        self.source.header().point_count
    }

    /// Returns the number of points in the buffers.
    pub fn loaded_point_count(&self) -> u64 {
        (self.positions.len() / 3) as u64
    }

    /// Returns the header bounds as `[min_x, min_y, min_z, max_x, max_y, max_z]`.
    ///
    /// These never change after opening, whatever ingestion discards.
    pub fn bounds(&self) -> &[f32; 6] {
        &self.bounds
    }

    /// Returns the interleaved `x, y, z` positions, three floats per loaded point.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Returns the interleaved `r, g, b, a` colors, four bytes per loaded point.
    ///
    /// Empty when [has_colors](PointCloud::has_colors) is false.
    pub fn colors(&self) -> &[u8] {
        &self.colors
    }

    /// Returns true if the color buffer is populated.
    pub fn has_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    /// Releases the source and frees the buffers.
    pub fn close(self) {
        debug!("closing cloud with {} loaded points", self.loaded_point_count());
        self.source.close();
    }
}

impl<S: PointSource + fmt::Debug> fmt::Debug for PointCloud<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointCloud")
            .field("source", &self.source)
            .field("bounds", &self.bounds)
            .field("loaded_point_count", &self.loaded_point_count())
            .field("has_colors", &self.has_colors())
            .finish()
    }
}
