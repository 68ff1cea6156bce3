use crate::domain::model::{Advocate, Degree, PhoneNumber};
use crate::domain::ports::{DatasetSource, Repository};
use crate::utils::error::{DirectoryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Immutable in-memory directory. `fetch_all` hands out the same shared slice every time.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    records: Arc<[Advocate]>,
}

impl InMemoryRepository {
    pub fn new(records: Vec<Advocate>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub async fn load(source: &dyn DatasetSource) -> Result<Self> {
        tracing::info!("📥 Loading advocates from {}", source.describe());
        let records = source.load().await?;
        tracing::info!("✅ Loaded {} advocates", records.len());
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Repository for InMemoryRepository {
    fn fetch_all(&self) -> Arc<[Advocate]> {
        Arc::clone(&self.records)
    }
}

/// Local JSON or CSV file. Format is picked from the extension; anything but `.csv` is JSON.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_csv(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    async fn load(&self) -> Result<Vec<Advocate>> {
        tracing::debug!("Reading dataset file: {}", self.path.display());
        let bytes = tokio::fs::read(&self.path).await?;
        if self.is_csv() {
            parse_csv(&bytes)
        } else {
            parse_json(&bytes)
        }
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Remote JSON dataset fetched with a single GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn load(&self) -> Result<Vec<Advocate>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .timeout(self.timeout)
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(DirectoryError::DatasetError {
                message: format!("{} returned HTTP {}", self.endpoint, response.status()),
            });
        }

        let bytes = response.bytes().await?;
        parse_json(&bytes)
    }

    fn describe(&self) -> String {
        format!("url {}", self.endpoint)
    }
}

/// Picks a source for a `--data` style location: `http(s)://` URLs go over the network,
/// everything else is a file path.
pub fn source_for(location: &str) -> Box<dyn DatasetSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(Path::new(location)))
    }
}

/// Accepts either a bare array of advocates or the `{ "data": [...] }` response envelope.
pub fn parse_json(bytes: &[u8]) -> Result<Vec<Advocate>> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    let records = match value {
        serde_json::Value::Array(_) => value,
        serde_json::Value::Object(mut obj) => match obj.remove("data") {
            Some(data @ serde_json::Value::Array(_)) => data,
            _ => {
                return Err(DirectoryError::DatasetError {
                    message: "expected a JSON array or an object with a \"data\" array".to_string(),
                })
            }
        },
        _ => {
            return Err(DirectoryError::DatasetError {
                message: "expected a JSON array of advocates".to_string(),
            })
        }
    };
    Ok(serde_json::from_value(records)?)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    first_name: String,
    last_name: String,
    city: String,
    degree: String,
    #[serde(default)]
    specialties: String,
    years_of_experience: u32,
    phone_number: String,
}

/// CSV with a camelCase header row; specialties are `;`-separated within their column.
pub fn parse_csv(bytes: &[u8]) -> Result<Vec<Advocate>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(bytes);

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
        let row = row?;
        let degree: Degree = row.degree.parse().map_err(|e| DirectoryError::DatasetError {
            // 第 1 行是標題
            message: format!("row {}: {}", index + 2, e),
        })?;

        records.push(Advocate {
            first_name: row.first_name,
            last_name: row.last_name,
            city: row.city,
            degree,
            specialties: row
                .specialties
                .split(';')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            years_of_experience: row.years_of_experience,
            phone_number: PhoneNumber::Text(row.phone_number),
        });
    }
    Ok(records)
}
