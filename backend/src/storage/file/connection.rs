use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use tracing::info;

pub const AVAILABILITY_FILE_NAME: &str = "availability-data.json";
pub const BOOKING_CONFIG_FILE_NAME: &str = "booking_config.yaml";

/// ContentConnection resolves the files of the data directory
#[derive(Debug, Clone)]
pub struct ContentConnection {
    base_directory: PathBuf,
}

impl ContentConnection {
    /// Open a data directory; it must already exist
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.is_dir() {
            bail!("Data directory {} does not exist", base_path.display());
        }

        info!("Using data directory: {}", base_path.display());
        Ok(Self {
            base_directory: base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn availability_file_path(&self) -> PathBuf {
        self.base_directory.join(AVAILABILITY_FILE_NAME)
    }

    pub fn booking_config_file_path(&self) -> PathBuf {
        self.base_directory.join(BOOKING_CONFIG_FILE_NAME)
    }
}
