//! Configuration management module.
//!
//! This module handles loading the application configuration: the workflow
//! server URL, the API access token, and the list page size.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/claim-tui";
const DEFAULT_PAGE_SIZE: usize = 25;

/// Oversees management of configuration file.
///
#[derive(Clone)]
pub struct Config {
    pub server_url: Option<String>,
    pub access_token: Option<String>,
    pub page_size: usize,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    pub server_url: String,
    pub access_token: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Config {
    /// Return a new empty instance.
    ///
    pub fn new() -> Config {
        Config {
            server_url: None,
            access_token: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. The configuration file must exist; there is no
    /// interactive onboarding.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        if !file_path.exists() {
            return Err(ConfigError::MissingFile { path: file_path }.into());
        }

        let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.clone(),
            message: format!("IO error: {}", e),
        })?;
        let data: FileSpec = serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        self.server_url = Some(data.server_url);
        self.access_token = Some(data.access_token);
        self.page_size = data.page_size;

        Ok(())
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("claim-tui-test-{}", name));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_load_missing_file() {
        let dir = scratch_dir("missing");
        let mut config = Config::new();
        let result = config.load(dir.to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::MissingFile { .. }))
        ));
    }

    #[test]
    fn test_load_parses_yaml() {
        let dir = scratch_dir("parses");
        fs::create_dir_all(&dir).unwrap();
        let mut file = fs::File::create(dir.join(FILE_NAME)).unwrap();
        writeln!(file, "server_url: http://localhost:3000/api").unwrap();
        writeln!(file, "access_token: secret").unwrap();
        writeln!(file, "page_size: 10").unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(
            config.server_url.as_deref(),
            Some("http://localhost:3000/api")
        );
        assert_eq!(config.access_token.as_deref(), Some("secret"));
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_load_defaults_page_size() {
        let dir = scratch_dir("default-page-size");
        fs::create_dir_all(&dir).unwrap();
        let mut file = fs::File::create(dir.join(FILE_NAME)).unwrap();
        writeln!(file, "server_url: http://localhost:3000/api").unwrap();
        writeln!(file, "access_token: secret").unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_load_rejects_bad_yaml() {
        let dir = scratch_dir("bad-yaml");
        fs::create_dir_all(&dir).unwrap();
        let mut file = fs::File::create(dir.join(FILE_NAME)).unwrap();
        writeln!(file, "server_url: [unclosed").unwrap();

        let mut config = Config::new();
        let result = config.load(dir.to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
    }
}
