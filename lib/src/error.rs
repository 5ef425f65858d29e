use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by a single conversion run.
///
/// Each variant is scoped to one request; nothing here is fatal to the process.
#[derive(Error, Debug)]
pub enum AsciiError {
    /// The source image is missing, unreadable, or not a supported raster format.
    #[error("could not decode image {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Settings are inconsistent or describe a degenerate conversion.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The output file could not be created or written.
    #[error("could not write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A settings file could not be read.
    #[error("could not read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AsciiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_detail_only_in_source() {
        let err = AsciiError::Write {
            path: PathBuf::from("/tmp/art.html"),
            source: std::io::Error::other("disk full"),
        };

        assert_eq!(err.to_string(), "could not write /tmp/art.html");
        assert_eq!(err.source().unwrap().to_string(), "disk full");
    }
}
