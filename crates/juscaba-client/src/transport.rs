//! The HTTP seam. The pipeline only needs GET and form-encoded POST returning
//! a status and a body; [`HttpTransport`] provides them over `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Status and body of a completed request. Non-2xx statuses are not errors
/// at this level; the client turns them into [`ClientError::Server`].
///
/// [`ClientError::Server`]: crate::ClientError::Server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<RawResponse, BoxError>;

    async fn post_form(&self, url: &Url, form: &[(&str, String)]) -> Result<RawResponse, BoxError>;
}

pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("juscaba/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    async fn read(response: reqwest::Response) -> Result<RawResponse, BoxError> {
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse, BoxError> {
        let response = self.client.get(url.clone()).send().await?;
        Self::read(response).await
    }

    async fn post_form(&self, url: &Url, form: &[(&str, String)]) -> Result<RawResponse, BoxError> {
        let response = self.client.post(url.clone()).form(form).send().await?;
        Self::read(response).await
    }
}
