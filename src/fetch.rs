//! Blocking HTTP access to device pages and the schema document.

use reqwest::blocking::Client;

use crate::config::Config;
use crate::error::ScrapeError;
use crate::schema::SchemaContext;

pub struct Fetcher {
    client: Client,
    config: Config,
}

impl Fetcher {
    pub fn new(config: Config) -> Result<Self, ScrapeError> {
        config.validate()?;
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;
        Ok(Self { client, config })
    }

    /// Markup of `{page_base_url}/{page}.php`
    pub fn fetch_page(&self, page: &str) -> Result<String, ScrapeError> {
        let url = self.config.page_url(page);
        self.get(&url)
    }

    /// Download and parse the configured schema
    pub fn fetch_schema(&self) -> Result<SchemaContext, ScrapeError> {
        let body = self.get(&self.config.schema_url)?;
        SchemaContext::from_yaml_str(&body)
    }

    fn get(&self, url: &str) -> Result<String, ScrapeError> {
        tracing::info!("GET {}", url);
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        tracing::debug!("received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
