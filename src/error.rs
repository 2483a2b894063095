use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FaviconError>;

/// Boxed encoder error from `image` or `ico`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can abort [`crate::setup`].
///
/// All variants are setup-time failures. Once setup succeeds there is no
/// runtime error path.
#[derive(Debug, Error)]
pub enum FaviconError {
    #[error("{source_name} image is empty")]
    EmptySource { source_name: &'static str },

    #[error("failed to decode {source_name} image: {source}")]
    Decode {
        source_name: &'static str,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode {name}: {source}")]
    Encode {
        name: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to serialize {document}: {source}")]
    Serialization {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("base path {base_path:?} contains route syntax ({{, }} or *)")]
    InvalidBasePath { base_path: String },

    #[error("cannot register route {path}: {reason}")]
    Route { path: String, reason: String },

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FaviconError {
    /// True for errors caused by unusable source bytes.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::EmptySource { .. } | Self::Decode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn encode_error_keeps_its_source() {
        let err = FaviconError::Encode {
            name: "favicon.ico".to_string(),
            source: Box::new(std::io::Error::new(std::io::ErrorKind::Other, "disk full")),
        };
        assert_eq!(err.source().unwrap().to_string(), "disk full");
        assert_eq!(err.to_string(), "failed to encode favicon.ico: disk full");
    }
}
