//! Remote sources of basemap styles.

use async_trait::async_trait;
use maybe_sync::{MaybeSend, MaybeSync};
use ortelius_style::StyleDocument;

use crate::error::OrteliusError;

/// Builds a request URL for a style identifier.
pub trait StyleUrlSource: (Fn(&str) -> String) + MaybeSend + MaybeSync {}
impl<T: Fn(&str) -> String> StyleUrlSource for T where T: MaybeSend + MaybeSync {}

/// Source of named basemap style documents.
#[async_trait]
pub trait StyleSource: MaybeSend + MaybeSync {
    /// Loads the style document registered under the given identifier.
    async fn load_style(&self, style_id: &str) -> Result<StyleDocument, OrteliusError>;
}

/// Style source that loads documents with single REST HTTP GET requests.
///
/// # Example
///
/// ```
/// use ortelius::RestStyleSource;
///
/// let source = RestStyleSource::new(|style_id: &str| {
///     format!("https://styles.example.com/v1/{style_id}.json")
/// });
/// assert_eq!(
///     source.url_for("basic-v9"),
///     "https://styles.example.com/v1/basic-v9.json"
/// );
/// ```
pub struct RestStyleSource {
    url_source: Box<dyn StyleUrlSource>,
    http_client: reqwest::Client,
}

impl RestStyleSource {
    /// Creates a source requesting the URLs built by `url_source`.
    pub fn new(url_source: impl StyleUrlSource + 'static) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent("ortelius/0.1")
            .build()
            .expect("failed to initialize HTTP client");

        Self {
            url_source: Box::new(url_source),
            http_client,
        }
    }

    /// Creates a source reading the `mapbox` account styles from the Mapbox
    /// styles API with the given access token.
    pub fn mapbox(access_token: impl Into<String>) -> Self {
        let access_token = access_token.into();
        Self::new(move |style_id: &str| {
            format!("https://api.mapbox.com/styles/v1/mapbox/{style_id}?access_token={access_token}")
        })
    }

    /// The URL the source would request for the given style identifier.
    pub fn url_for(&self, style_id: &str) -> String {
        (self.url_source)(style_id)
    }
}

#[async_trait]
impl StyleSource for RestStyleSource {
    async fn load_style(&self, style_id: &str) -> Result<StyleDocument, OrteliusError> {
        let url = self.url_for(style_id);

        log::info!("Loading style {style_id}");
        let response = self.http_client.get(&url).send().await?;
        if !response.status().is_success() {
            log::info!("Failed to load {url}: {}", response.status());
            return Err(OrteliusError::StyleFetch);
        }

        let bytes = response.bytes().await?;
        let document = serde_json::from_slice(&bytes)?;

        Ok(document)
    }
}
