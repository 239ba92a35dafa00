use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Parameter {0} not found in config")]
    MissingParameter(&'static str),

    #[error("Collection file not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Failed to read collection file: {path}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Collection is empty")]
    EmptyCollection,

    #[error("Invalid header in config: {0}")]
    InvalidHeader(String),

    #[error("Failed to build HTTP client")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
