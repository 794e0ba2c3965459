use crate::error::{Result, TouchupError};
use crate::metrics::VerticalMetrics;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const DEFAULT_COPYRIGHT: &str = "Copyright 2011 Google Inc. All Rights Reserved.";

/// Values written by the web fixes which are not derived from the font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebFixConfig {
    pub metrics: VerticalMetrics,
    pub copyright: String,
}

impl Default for WebFixConfig {
    fn default() -> Self {
        WebFixConfig {
            metrics: VerticalMetrics::default(),
            copyright: DEFAULT_COPYRIGHT.to_string(),
        }
    }
}

impl WebFixConfig {
    /// Load a JSON config; absent fields keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TouchupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| TouchupError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
