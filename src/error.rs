//! Error type shared by rendering, encoding and the output driver.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("invalid icon size: {0} (must be positive)")]
    InvalidSize(u32),

    #[error("cannot build {0} path from scene geometry")]
    Degenerate(&'static str),

    #[error("failed to encode {format} image")]
    Encode {
        format: &'static str,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode ICO container")]
    Ico(#[source] std::io::Error),

    #[error("i/o error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid generator config")]
    Config(#[from] serde_json::Error),
}

impl IconError {
    /// Wraps an I/O error with the path it happened on.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
