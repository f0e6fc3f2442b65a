//! Loading the country dataset from a file or over HTTP.

use std::path::PathBuf;
use std::time::Duration;

use super::{Country, DataError};

/// Public restcountries v2 endpoint listing every country
pub const DEFAULT_DATA_URL: &str = "https://restcountries.com/v2/all";

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the country dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A JSON file in the restcountries v2 shape
    File(PathBuf),
    /// An HTTP endpoint returning the same JSON
    Url(String),
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Url(DEFAULT_DATA_URL.to_string())
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{}", url),
        }
    }
}

impl DataSource {
    /// Load and parse every country from this source.
    pub fn load(&self) -> Result<Vec<Country>, DataError> {
        log::info!("Loading countries from {}", self);
        let countries = match self {
            DataSource::File(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| DataError::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_countries(&json)?
            }
            DataSource::Url(url) => fetch(url)?,
        };

        if countries.is_empty() {
            return Err(DataError::Empty {
                source_name: self.to_string(),
            });
        }
        log::info!("Loaded {} countries", countries.len());
        Ok(countries)
    }
}

/// Parse a restcountries v2 JSON array.
pub fn parse_countries(json: &str) -> Result<Vec<Country>, DataError> {
    Ok(serde_json::from_str(json)?)
}

fn fetch(url: &str) -> Result<Vec<Country>, DataError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .user_agent(concat!("popviz/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let countries = client
        .get(url)
        .send()?
        .error_for_status()?
        .json::<Vec<Country>>()?;
    Ok(countries)
}
