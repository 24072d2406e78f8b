//! Exhaustive, strictly sequential retrieval of a case's procedural entries.

use juscaba_core::{CaseRecord, EntriesPage, ProceduralEntry};
use tracing::info;

use crate::JuscabaClient;
use crate::error::{ClientError, Target};
use crate::transport::Transport;

impl<T: Transport> JuscabaClient<T> {
    pub async fn fetch_entries_page(
        &self,
        case: &CaseRecord,
        page: u32,
    ) -> Result<EntriesPage, ClientError> {
        info!(exp_id = case.exp_id, page, "getting actuaciones");
        let url = self
            .endpoints()
            .entries_page(case.exp_id, page, self.config().page_size);
        let target = Target::EntriesPage {
            exp_id: case.exp_id,
            page,
        };
        self.get_json(url, target).await
    }

    /// Every entry of the case, in page order then within-page order.
    ///
    /// Pages are requested from 0 until one comes back with no content. The
    /// `last` flag is ignored: a page flagged last may still carry entries.
    /// Any page failure discards what was collected so far.
    pub async fn fetch_all_entries(
        &self,
        case: &CaseRecord,
    ) -> Result<Vec<ProceduralEntry>, ClientError> {
        let mut entries = Vec::new();
        let mut page = 0;
        loop {
            let batch = self.fetch_entries_page(case, page).await?;
            if batch.is_empty() {
                break;
            }
            entries.extend(batch.content);
            page += 1;
        }
        info!(exp_id = case.exp_id, pages = page, count = entries.len(), "fetched actuaciones");
        Ok(entries)
    }
}
