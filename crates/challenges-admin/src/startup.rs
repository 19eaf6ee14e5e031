use anyhow::anyhow;
use http::Extensions;
use log::{debug, warn};
use reqwest_middleware::{
    reqwest::{self, Client, Url},
    ClientBuilder, ClientWithMiddleware, Middleware,
};
use std::{sync::Arc, time::Duration};

use crate::{
    config::{APISettings, Settings},
    infra::{ApiClient, FileSessionStore, SessionStore},
};

/// Everything a command needs to talk to the backend
pub struct AdminContext {
    pub settings: Settings,
    pub session: Arc<dyn SessionStore>,
    pub api: Arc<ApiClient>,
}

pub fn build_context(settings: Settings) -> Result<AdminContext, anyhow::Error> {
    let session: Arc<dyn SessionStore> =
        Arc::new(FileSessionStore::new(&settings.session_settings.data_folder));
    let api = build_api_client(&settings.api_settings, session.clone())?;
    debug!("challenges api configured at {}", api.base_url);

    Ok(AdminContext {
        settings,
        session,
        api: Arc::new(api),
    })
}

pub fn build_api_client(
    settings: &APISettings,
    session: Arc<dyn SessionStore>,
) -> Result<ApiClient, anyhow::Error> {
    let base_url = Url::parse(&settings.base_url)
        .map_err(|e| anyhow!("Failed to parse api base url: {}", e))?;
    let client = build_reqwest_client(settings)?;
    Ok(ApiClient::new(client, &base_url, session))
}

pub fn build_reqwest_client(settings: &APISettings) -> Result<ClientWithMiddleware, anyhow::Error> {
    let client = Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build()
        .map_err(|e| anyhow!("Failed to build http client: {}", e))?;

    Ok(ClientBuilder::new(client).with(LoggingMiddleware).build())
}

struct LoggingMiddleware;

#[async_trait::async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(
        &self,
        req: reqwest::Request,
        extensions: &mut Extensions,
        next: reqwest_middleware::Next<'_>,
    ) -> reqwest_middleware::Result<reqwest::Response> {
        let method = req.method().clone();
        let url = req.url().clone();

        debug!("Making {} request to: {}", method, url);

        let result = next.run(req, extensions).await;

        match &result {
            Ok(response) => {
                debug!("{} {} -> Status: {}", method, url, response.status());
            }
            Err(error) => {
                warn!("{} {} -> Error: {:?}", method, url, error);
            }
        }

        result
    }
}
