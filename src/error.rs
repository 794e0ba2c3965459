use std::io;
use std::path::PathBuf;
use thiserror::Error;
use write_fonts::read::ReadError;
use write_fonts::BuilderError;

#[derive(Debug, Error)]
pub enum TouchupError {
    #[error("Unrecognized subfamily name '{name}'")]
    UnknownStyle { name: String },

    #[error("Font has no name record for nameID {name_id}")]
    MissingName { name_id: u16 },

    #[error("Font has no '{tag}' table")]
    MissingTable { tag: String },

    #[error("Error parsing font: {0}")]
    Read(ReadError),

    #[error("Error compiling font: {0}")]
    Build(#[from] BuilderError),

    #[error("IO Error for file {}: '{}'", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not parse config file {}: {}", path.display(), source)]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<ReadError> for TouchupError {
    fn from(e: ReadError) -> Self {
        match e {
            ReadError::TableIsMissing(tag) => TouchupError::MissingTable {
                tag: tag.to_string(),
            },
            e => TouchupError::Read(e),
        }
    }
}

pub type Result<T, E = TouchupError> = std::result::Result<T, E>;
