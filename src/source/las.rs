use super::{HeaderInfo, PointRecord, PointSource, SourceOptions};
use crate::{Error, Result};
use log::debug;
use std::{fmt, fs::File, io::BufReader, path::Path};

/// A [PointSource] backed by a `las::Reader`.
pub struct LasSource {
    reader: ::las::Reader,
    header: HeaderInfo,
    index: u64,
}

impl LasSource {
    /// Opens a las file with default options.
    ///
    /// The underlying `File` is wrapped in a `BufReader`.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_ingest::LasSource;
    /// assert!(LasSource::from_path("does/not/exist.las").is_err());
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<LasSource> {
        LasSource::with_options(path, SourceOptions::default())
    }

    /// Opens a las file with custom options.
    pub fn with_options<P: AsRef<Path>>(path: P, options: SourceOptions) -> Result<LasSource> {
        let path = path.as_ref();
        let open_error = |source| Error::Open {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(|err| open_error(::las::Error::from(err)))?;
        let reader = ::las::Reader::with_options(BufReader::new(file), options.into())
            .map_err(open_error)?;
        let header = header_info(reader.header());
        debug!(
            "opened {} with {} points, format {:?}, color: {}",
            path.display(),
            header.point_count,
            header.point_format,
            header.has_color
        );
        Ok(LasSource {
            reader,
            header,
            index: 0,
        })
    }
}

fn header_info(header: &::las::Header) -> HeaderInfo {
    let format = header.point_format();
    HeaderInfo {
        point_count: header.number_of_points(),
        bounds: header.bounds().into(),
        has_color: format.has_color,
        point_format: format.to_u8().ok(),
    }
}

fn point_record(point: ::las::Point) -> PointRecord {
    let fourth = point.nir.unwrap_or(0);
    PointRecord {
        x: point.x,
        y: point.y,
        z: point.z,
        classification: u8::from(point.classification),
        color: point
            .color
            .map(|color| [color.red, color.green, color.blue, fourth]),
    }
}

impl PointSource for LasSource {
    fn header(&self) -> &HeaderInfo {
        &self.header
    }

    fn seek(&mut self, index: u64) -> Result<()> {
        self.reader.seek(index).map_err(|source| Error::Decode {
            records_read: self.index,
            source,
        })?;
        self.index = index;
        Ok(())
    }

    fn read_next(&mut self) -> Result<Option<PointRecord>> {
        match self.reader.read_point() {
            Ok(Some(point)) => {
                self.index += 1;
                Ok(Some(point_record(point)))
            }
            Ok(None) => Ok(None),
            Err(source) => Err(Error::Decode {
                records_read: self.index,
                source,
            }),
        }
    }
}

impl fmt::Debug for LasSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LasSource")
            .field("header", &self.header)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}
