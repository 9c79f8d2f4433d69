use std::path::PathBuf;
use thiserror::Error;

/// Crate-specific error enum.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The point cloud could not be opened.
    ///
    /// The file is missing, unreadable, or isn't something the decoder recognizes.
    #[error("could not open point cloud at {}", .path.display())]
    Open {
        /// The path we tried to open.
        path: PathBuf,

        /// The decoder's reason.
        #[source]
        source: las::Error,
    },

    /// The decoder failed part way through the point records.
    ///
    /// A stream that simply ends early is not an error, see [PointCloud::ingest](crate::PointCloud::ingest).
    #[error("decoding failed after {records_read} point records")]
    Decode {
        /// How many records were read before the failure.
        records_read: u64,

        /// The decoder's reason.
        #[source]
        source: las::Error,
    },

    /// A path handed across the C boundary was null or not valid UTF-8.
    #[error("the path is null or not valid utf-8")]
    InvalidPath,
}

impl Error {
    /// Returns true if this error means the decoder ran out of bytes mid-record.
    ///
    /// Truncated files are expected to end early, so the pipeline treats this as the end of the
    /// stream rather than a failure.
    pub(crate) fn is_truncation(&self) -> bool {
        matches!(
            self,
            Error::Decode {
                source: las::Error::Io(err),
                ..
            } if err.kind() == std::io::ErrorKind::UnexpectedEof
        )
    }
}
