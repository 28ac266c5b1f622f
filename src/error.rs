use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("cannot allocate a {0}x{0} canvas")]
    Canvas(u32),

    #[error("degenerate geometry for {0}")]
    Geometry(&'static str),

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode {format}: {source}")]
    Encode {
        format: &'static str,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode icns element {size}x{size}: {source}")]
    Icns {
        size: u32,
        #[source]
        source: io::Error,
    },
}

impl IconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        IconError::Io { path: path.into(), source }
    }
}

pub type Result<T, E = IconError> = std::result::Result<T, E>;
