//! In-memory transport for tests: canned replies keyed by full URL.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Url;

use crate::JuscabaClient;
use crate::config::ClientConfig;
use crate::endpoints::{DEFAULT_BASE_URL, Endpoints};
use crate::transport::{BoxError, RawResponse, Transport};

#[derive(Debug, Clone)]
enum Reply {
    Body { status: u16, body: String },
    Unreachable(String),
}

#[derive(Debug, Default)]
pub(crate) struct StubTransport {
    routes: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
    forms: Mutex<Vec<Vec<(String, String)>>>,
}

impl StubTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn on(self, url: Url, body: impl Into<String>) -> Self {
        self.on_status(url, 200, body)
    }

    pub(crate) fn on_status(mut self, url: Url, status: u16, body: impl Into<String>) -> Self {
        self.routes.insert(
            url.into(),
            Reply::Body {
                status,
                body: body.into(),
            },
        );
        self
    }

    pub(crate) fn unreachable(mut self, url: Url) -> Self {
        self.routes
            .insert(url.into(), Reply::Unreachable("connection refused".into()));
        self
    }

    /// Every URL requested, in order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn forms(&self) -> Vec<Vec<(String, String)>> {
        self.forms.lock().unwrap().clone()
    }

    fn reply(&self, url: &Url) -> Result<RawResponse, BoxError> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.routes.get(url.as_str()) {
            Some(Reply::Body { status, body }) => Ok(RawResponse {
                status: *status,
                body: body.clone().into_bytes(),
            }),
            Some(Reply::Unreachable(msg)) => Err(msg.clone().into()),
            None => Err(format!("no route for {url}").into()),
        }
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse, BoxError> {
        self.reply(url)
    }

    async fn post_form(&self, url: &Url, form: &[(&str, String)]) -> Result<RawResponse, BoxError> {
        self.forms.lock().unwrap().push(
            form.iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        );
        self.reply(url)
    }
}

pub(crate) fn endpoints() -> Endpoints {
    Endpoints::new(DEFAULT_BASE_URL).unwrap()
}

pub(crate) fn client(stub: StubTransport) -> JuscabaClient<StubTransport> {
    JuscabaClient::with_transport(ClientConfig::default(), stub).unwrap()
}

/// A ficha body for the given number and year.
pub(crate) fn ficha(number: i64, year: i64) -> String {
    format!(
        r#"{{"numero": {number}, "anio": {year}, "sufijo": 0, "caratula": "CASE {number}",
            "ubicacion": {{"organismo": "JUZGADO 2", "dependencia": null}},
            "objetosJuicio": [], "tieneSentencia": 0, "esPrivado": 0, "monto": 0}}"#
    )
}

/// A page body holding entries with the given ids.
pub(crate) fn page(act_ids: &[i64], last: bool) -> String {
    let content: Vec<String> = act_ids
        .iter()
        .map(|id| {
            format!(r#"{{"actId": {id}, "titulo": "ACT {id}", "esCedula": 0, "poseeAdjunto": 0}}"#)
        })
        .collect();
    format!(
        r#"{{"content": [{}], "last": {last}, "numberOfElements": {}}}"#,
        content.join(","),
        act_ids.len()
    )
}
