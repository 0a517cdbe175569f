use std::path::PathBuf;

use thiserror::Error;

/// Boxed codec error, so the domain does not depend on a particular codec crate.
pub type CodecError = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can go wrong while framing a single image.
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },
    #[error("degenerate source image {width}x{height}")]
    InvalidGeometry { width: u32, height: u32 },
    #[error("border ratio must be finite and non-negative, got {0}")]
    InvalidRatio(f64),
    #[error("canvas {width}x{height} exceeds the addressable image size")]
    CanvasTooLarge { width: u64, height: u64 },
    #[error("cannot encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages_name_the_file() {
        let err = FrameError::FileAccess {
            path: PathBuf::from("/photos/a.jpg"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "cannot access /photos/a.jpg: missing");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_geometry_message() {
        let err = FrameError::InvalidGeometry {
            width: 0,
            height: 10,
        };
        assert_eq!(err.to_string(), "degenerate source image 0x10");
    }
}
