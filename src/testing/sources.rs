//! Access to the verified sample logs

use std::io;
use std::path::PathBuf;

use crate::error::PhysioError;
use crate::record::{ParseOptions, PhysioLog};

/// Sample names, without the `.puls` extension
pub const AVAILABLE_SAMPLES: &[&str] = &["sample_basic", "sample_five_params", "sample_with_ext2"];

pub struct PhysioSources;

impl PhysioSources {
    fn samples_dir() -> PathBuf {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data"))
    }

    /// Full path to a sample file
    pub fn sample_path(name: &str) -> Result<PathBuf, PhysioError> {
        if !AVAILABLE_SAMPLES.contains(&name) {
            return Err(PhysioError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!(
                    "Sample '{}' is not available. Available samples: {:?}",
                    name, AVAILABLE_SAMPLES
                ),
            )));
        }
        Ok(Self::samples_dir().join(format!("{}.puls", name)))
    }

    /// Raw text of a sample
    pub fn get_string(name: &str) -> Result<String, PhysioError> {
        Ok(std::fs::read_to_string(Self::sample_path(name)?)?)
    }

    /// Parse a sample with default options
    pub fn load(name: &str) -> Result<PhysioLog, PhysioError> {
        Self::load_with(name, ParseOptions::default())
    }

    pub fn load_with(name: &str, options: ParseOptions) -> Result<PhysioLog, PhysioError> {
        PhysioLog::from_path(Self::sample_path(name)?, options)
    }
}
