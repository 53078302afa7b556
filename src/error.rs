//! Error type for atlas serialization.

use std::error::Error;
use std::{fmt, io};

/// Error produced while writing the atlas to disk.
#[derive(Debug)]
pub enum AtlasError {
  /// Filesystem failure (missing directory, permissions, disk full).
  Io(io::Error),
  /// PNG encoding failure.
  Encode(image::ImageError),
}

impl fmt::Display for AtlasError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Io(e) => write!(f, "I/O error: {e}"),
      Self::Encode(e) => write!(f, "image encoding error: {e}"),
    }
  }
}

impl Error for AtlasError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      Self::Io(e) => Some(e),
      Self::Encode(e) => Some(e),
    }
  }
}

impl From<io::Error> for AtlasError {
  fn from(err: io::Error) -> Self {
    Self::Io(err)
  }
}

impl From<image::ImageError> for AtlasError {
  fn from(err: image::ImageError) -> Self {
    match err {
      image::ImageError::IoError(e) => Self::Io(e),
      other => Self::Encode(other),
    }
  }
}
