use std::future::Future;
use serde::{ Deserialize, Serialize };
use crate::error::FetchError;

/// One employee row as returned by the directory API. Extra fields in the payload are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl PersonRecord {
    pub fn parse_list(body: &str) -> Result<Vec<Self>, FetchError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Where the dashboard gets its records from.
pub trait RecordSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<PersonRecord>, FetchError>>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRecordSource {
    endpoint: String,
}

impl HttpRecordSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RecordSource for HttpRecordSource {
    async fn fetch(&self) -> Result<Vec<PersonRecord>, FetchError> {
        let response = reqwest::get(&self.endpoint).await?.error_for_status()?;
        let body = response.text().await?;
        PersonRecord::parse_list(&body)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DirectoryState {
    #[default]
    Loading,
    Ready(Vec<PersonRecord>),
    Failed(String),
}

impl DirectoryState {
    pub fn from_fetch(result: Result<Vec<PersonRecord>, FetchError>) -> Self {
        match result {
            Ok(records) => Self::Ready(records),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn records(&self) -> &[PersonRecord] {
        match self {
            Self::Ready(records) => records,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// `(id, name, email)` per record, in the order received.
    pub fn rows(&self) -> Vec<(i64, &str, &str)> {
        self.records()
            .iter()
            .map(|record| (record.id, record.name.as_str(), record.email.as_str()))
            .collect()
    }

    pub fn total(&self) -> usize {
        self.records().len()
    }
}

/// Runs one fetch against `source` and turns the outcome into the next view state.
pub async fn load_directory<S: RecordSource>(source: &S) -> DirectoryState {
    log::info!("Loading employee directory");
    let result = source.fetch().await;
    match &result {
        Ok(records) => log::info!("Loaded {} employee record(s)", records.len()),
        Err(e) => log::error!("Failed to load employee directory: {}", e),
    }
    DirectoryState::from_fetch(result)
}
