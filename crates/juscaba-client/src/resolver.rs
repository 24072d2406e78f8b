//! Case resolution: search, then fetch candidates until one matches.

use juscaba_core::CaseRecord;
use serde::Deserialize;
use tracing::{debug, info};

use crate::JuscabaClient;
use crate::error::{ClientError, Target};
use crate::transport::Transport;

#[derive(Deserialize)]
struct SearchResult {
    #[serde(default)]
    content: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(rename = "expId")]
    exp_id: i64,
}

impl<T: Transport> JuscabaClient<T> {
    /// Case handles returned by a free-text search, in service order.
    pub async fn search_candidates(&self, identifier: &str) -> Result<Vec<i64>, ClientError> {
        let url = self.endpoints().search();
        let form = self
            .endpoints()
            .search_form(identifier, self.config().search_size);
        let target = Target::Search {
            identifier: identifier.to_string(),
        };

        let result: SearchResult = self.post_form_json(url, &form, target).await?;
        Ok(result
            .content
            .unwrap_or_default()
            .into_iter()
            .map(|c| c.exp_id)
            .collect())
    }

    /// Fetch the full record for a case handle.
    pub async fn fetch_case(&self, exp_id: i64) -> Result<CaseRecord, ClientError> {
        self.fetch_case_for(exp_id, Target::Case { exp_id }).await
    }

    async fn fetch_case_for(
        &self,
        exp_id: i64,
        target: Target,
    ) -> Result<CaseRecord, ClientError> {
        let url = self.endpoints().case(exp_id);
        let mut case: CaseRecord = self.get_json(url, target).await?;
        case.exp_id = exp_id;
        Ok(case)
    }

    /// Resolve an identifier like `"182908/2020-0"` to its case record.
    ///
    /// Candidates are fetched in search order and the first whose
    /// `"{number}/{year}"` prefixes `identifier` wins. Any failed fetch
    /// aborts the resolution; there is no best-effort fallback.
    pub async fn resolve(&self, identifier: &str) -> Result<CaseRecord, ClientError> {
        let candidates = self.search_candidates(identifier).await?;
        debug!(identifier, candidates = candidates.len(), "search returned");

        for exp_id in candidates {
            let target = Target::Candidate {
                identifier: identifier.to_string(),
                exp_id,
            };
            let case = self.fetch_case_for(exp_id, target).await?;
            if case.matches(identifier) {
                info!(identifier, exp_id, "resolved case");
                return Ok(case);
            }
            debug!(identifier, exp_id, found = %case.display_id(), "candidate does not match");
        }

        info!(identifier, "cannot find case");
        Err(ClientError::NotFound {
            identifier: identifier.to_string(),
        })
    }
}
