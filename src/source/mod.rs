//! Point record sources.
//!
//! The ingestion pipeline never looks at file bytes. It pulls typed records, one at a time, from
//! something that implements [PointSource]. [LasSource] is the implementation for las (and, with
//! the `laz` feature, laz) files:
//!
//! ```no_run
//! use las_ingest::{LasSource, PointSource};
//! let mut source = LasSource::from_path("points.las").unwrap();
//! println!("{} points declared", source.header().point_count);
//! while let Some(record) = source.read_next().unwrap() {
//!     println!("({}, {}, {})", record.x, record.y, record.z);
//! }
//! ```

mod las;

pub use self::las::LasSource;

use crate::{Bounds, Result};

/// One decoded point record.
///
/// Records are transient: the pipeline takes what it needs from one before asking for the next.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointRecord {
    /// The x coordinate, with the file's scale and offset already applied.
    pub x: f64,

    /// The y coordinate, with the file's scale and offset already applied.
    pub y: f64,

    /// The z coordinate, with the file's scale and offset already applied.
    pub z: f64,

    /// The ASPRS classification code.
    pub classification: u8,

    /// Raw 16-bit color channels, in decoded order: red, green, blue, and a fourth channel.
    ///
    /// The fourth channel is near infrared when the point format has it, and zero otherwise.
    pub color: Option<[u16; 4]>,
}

/// Header metadata, captured once when the source is opened.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderInfo {
    /// The number of point records the header declares.
    pub point_count: u64,

    /// The spatial bounds the header declares.
    pub bounds: Bounds,

    /// Does the point format carry color channels?
    pub has_color: bool,

    /// The point data format number, if the decoder could express it as one.
    pub point_format: Option<u8>,
}

/// Configuration for opening a [LasSource].
///
/// With the `laz` feature you can pick whether compressed data is decompressed in parallel;
/// without it there's nothing to configure.
#[derive(Clone, Copy, Debug, Default)]
pub struct SourceOptions {
    #[cfg(feature = "laz")]
    laz_parallelism: Option<::las::LazParallelism>,
}

impl SourceOptions {
    /// Changes the laz parallelism option.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "laz")]
    /// # {
    /// use las_ingest::SourceOptions;
    /// let options = SourceOptions::default().with_laz_parallelism(las::LazParallelism::No);
    /// # }
    /// ```
    #[cfg(feature = "laz")]
    pub fn with_laz_parallelism(mut self, laz_parallelism: ::las::LazParallelism) -> Self {
        self.laz_parallelism = Some(laz_parallelism);
        self
    }
}

impl From<SourceOptions> for ::las::ReaderOptions {
    fn from(options: SourceOptions) -> ::las::ReaderOptions {
        #[cfg(feature = "laz")]
        {
            match options.laz_parallelism {
                Some(laz_parallelism) => {
                    ::las::ReaderOptions::default().with_laz_parallelism(laz_parallelism)
                }
                None => ::las::ReaderOptions::default(),
            }
        }
        #[cfg(not(feature = "laz"))]
        {
            let _ = options;
            ::las::ReaderOptions::default()
        }
    }
}

/// A decoder that yields point records one at a time.
///
/// A source exclusively owns its read cursor, so it can't be shared between point clouds.
pub trait PointSource {
    /// Returns the header metadata, which never changes after the source is opened.
    fn header(&self) -> &HeaderInfo;

    /// Moves the read cursor to the given record, zero-indexed.
    fn seek(&mut self, index: u64) -> Result<()>;

    /// Reads the next record, or `None` at the end of the stream.
    fn read_next(&mut self) -> Result<Option<PointRecord>>;

    /// Releases the decoder and whatever file it holds.
    fn close(self)
    where
        Self: Sized,
    {
        drop(self)
    }
}

