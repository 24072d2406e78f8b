use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::config::ClientConfig;
use crate::endpoints::Endpoints;
use crate::error::{ClientError, Target};
use crate::transport::{BoxError, HttpTransport, RawResponse, Transport};

/// Characters of an error response body kept on [`ClientError::Server`].
const ERROR_BODY_LIMIT: usize = 200;

/// Read-only client for the JusCABA public case API.
///
/// Holds no state between calls beyond its configuration; every method can
/// be called concurrently through a shared reference.
pub struct JuscabaClient<T = HttpTransport> {
    transport: T,
    endpoints: Endpoints,
    config: ClientConfig,
}

impl JuscabaClient<HttpTransport> {
    /// Create a client that talks to the service over HTTP.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(config.timeout)
            .map_err(|e| ClientError::Config(format!("building HTTP client: {e}")))?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> JuscabaClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, ClientError> {
        if config.page_size == 0 {
            return Err(ClientError::Config("page size must be at least 1".into()));
        }
        if config.search_size == 0 {
            return Err(ClientError::Config("search size must be at least 1".into()));
        }
        let endpoints = Endpoints::new(&config.base_url)?;
        Ok(Self {
            transport,
            endpoints,
            config,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub(crate) async fn get_json<D: DeserializeOwned>(
        &self,
        url: Url,
        target: Target,
    ) -> Result<D, ClientError> {
        let response = self.transport.get(&url).await;
        decode(response, url, target)
    }

    pub(crate) async fn post_form_json<D: DeserializeOwned>(
        &self,
        url: Url,
        form: &[(&str, String)],
        target: Target,
    ) -> Result<D, ClientError> {
        let response = self.transport.post_form(&url, form).await;
        decode(response, url, target)
    }
}

fn decode<D: DeserializeOwned>(
    response: Result<RawResponse, BoxError>,
    url: Url,
    target: Target,
) -> Result<D, ClientError> {
    let response = match response {
        Ok(response) => response,
        Err(source) => {
            warn!(request = %target, url = %url, error = %source, "request failed");
            return Err(ClientError::RemoteUnavailable {
                target,
                url: url.into(),
                source,
            });
        }
    };

    if !(200..300).contains(&response.status) {
        let body: String = String::from_utf8_lossy(&response.body)
            .chars()
            .take(ERROR_BODY_LIMIT)
            .collect();
        warn!(
            request = %target,
            url = %url,
            http_status = response.status,
            "server returned an error status"
        );
        return Err(ClientError::Server {
            target,
            url: url.into(),
            status: response.status,
            body,
        });
    }

    serde_json::from_slice(&response.body).map_err(|source| {
        warn!(
            request = %target,
            url = %url,
            http_status = response.status,
            error = %source,
            "failed to decode json"
        );
        ClientError::Decode {
            target,
            url: url.into(),
            status: response.status,
            source,
        }
    })
}
