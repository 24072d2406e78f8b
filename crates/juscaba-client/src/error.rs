use std::fmt;

use thiserror::Error;

use crate::transport::BoxError;

/// What a failed request was for, carrying the identifying parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Search { identifier: String },
    Case { exp_id: i64 },
    /// A search candidate fetched while resolving `identifier`.
    Candidate { identifier: String, exp_id: i64 },
    EntriesPage { exp_id: i64, page: u32 },
    NoticeAttachments { exp_id: i64, act_id: i64 },
    GenericAttachments { exp_id: i64, act_id: i64 },
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Search { identifier } => write!(f, "search for {identifier:?}"),
            Target::Case { exp_id } => write!(f, "case expId={exp_id}"),
            Target::Candidate { identifier, exp_id } => {
                write!(f, "candidate expId={exp_id} for {identifier:?}")
            }
            Target::EntriesPage { exp_id, page } => {
                write!(f, "entries page {page} of expId={exp_id}")
            }
            Target::NoticeAttachments { exp_id, act_id } => {
                write!(f, "notice attachments of actId={act_id} expId={exp_id}")
            }
            Target::GenericAttachments { exp_id, act_id } => {
                write!(f, "attachments of actId={act_id} expId={exp_id}")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{target}: request to {url} failed: {source}")]
    RemoteUnavailable {
        target: Target,
        url: String,
        source: BoxError,
    },
    #[error("{target}: {url} returned HTTP {status}: {body}")]
    Server {
        target: Target,
        url: String,
        status: u16,
        body: String,
    },
    #[error("{target}: could not decode response from {url} (HTTP {status}): {source}")]
    Decode {
        target: Target,
        url: String,
        status: u16,
        source: serde_json::Error,
    },
    #[error("no case matches identifier {identifier:?}")]
    NotFound { identifier: String },
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// The request this error came from, if it came from one.
    pub fn target(&self) -> Option<&Target> {
        match self {
            ClientError::RemoteUnavailable { target, .. }
            | ClientError::Server { target, .. }
            | ClientError::Decode { target, .. } => Some(target),
            ClientError::NotFound { .. } | ClientError::Config(_) => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            ClientError::RemoteUnavailable { url, .. }
            | ClientError::Server { url, .. }
            | ClientError::Decode { url, .. } => Some(url),
            ClientError::NotFound { .. } | ClientError::Config(_) => None,
        }
    }

    /// HTTP status of the response, when one arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } | ClientError::Decode { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound { .. })
    }
}
