//! Document derivation: the URLs reachable from one procedural entry.

use futures::stream::{self, StreamExt};
use juscaba_core::{
    Attachment, AttachmentKind, CaseRecord, DocumentDescriptor, GenericAttachments,
    NoticeAttachment, ProceduralEntry,
};
use reqwest::Url;
use tracing::{debug, warn};

use crate::JuscabaClient;
use crate::endpoints::Endpoints;
use crate::error::{ClientError, Target};
use crate::transport::Transport;

impl<T: Transport> JuscabaClient<T> {
    /// Documents reachable from `entry`.
    ///
    /// Always starts with the entry's own PDF, followed by the notified
    /// entry's PDF when the entry links one, followed by its listed
    /// attachments when it is flagged as having any. A failure to list
    /// attachments is logged and leaves the earlier descriptors untouched.
    pub async fn derive_documents(
        &self,
        case: &CaseRecord,
        entry: &ProceduralEntry,
    ) -> Vec<DocumentDescriptor> {
        let endpoints = self.endpoints();
        let mut documents = vec![DocumentDescriptor::new(
            endpoints.entry_pdf(entry.act_id, case.exp_id),
            case,
            entry,
            AttachmentKind::Regular,
            "",
        )];

        if let Some(reference) = entry.notified_entry() {
            documents.push(DocumentDescriptor::new(
                endpoints.notified_entry_pdf(reference, case.exp_id, entry.act_id),
                case,
                entry,
                AttachmentKind::NotifiedEntry,
                "",
            ));
        }

        if entry.has_attachment() {
            match self.list_attachments(case, entry).await {
                Ok(attachments) => documents.extend(attachments),
                Err(err) => warn!(
                    exp_id = case.exp_id,
                    act_id = entry.act_id,
                    error = %err,
                    "skipping attachments"
                ),
            }
        }

        debug!(act_id = entry.act_id, count = documents.len(), "derived documents");
        documents
    }

    /// Attachment descriptors for an entry, from the notice or generic listing
    /// depending on [`ProceduralEntry::is_notice`]. Ignores the attachment flag.
    pub async fn list_attachments(
        &self,
        case: &CaseRecord,
        entry: &ProceduralEntry,
    ) -> Result<Vec<DocumentDescriptor>, ClientError> {
        let exp_id = case.exp_id;
        let act_id = entry.act_id;

        if entry.is_notice() {
            let url = self.endpoints().notice_attachments(&entry.cuij, exp_id);
            let target = Target::NoticeAttachments { exp_id, act_id };
            let listing: Vec<NoticeAttachment> = self.get_json(url, target).await?;
            Ok(self.attachment_documents(
                case,
                entry,
                &listing,
                AttachmentKind::NoticeAttachment,
                Endpoints::notice_attachment_pdf,
            ))
        } else {
            let url = self.endpoints().generic_attachments(act_id, exp_id);
            let target = Target::GenericAttachments { exp_id, act_id };
            let listing: GenericAttachments = self.get_json(url, target).await?;
            Ok(self.attachment_documents(
                case,
                entry,
                &listing.adjuntos,
                AttachmentKind::GenericAttachment,
                Endpoints::generic_attachment_pdf,
            ))
        }
    }

    fn attachment_documents<A: Attachment>(
        &self,
        case: &CaseRecord,
        entry: &ProceduralEntry,
        listing: &[A],
        kind: AttachmentKind,
        pdf: fn(&Endpoints, i64, i64) -> Url,
    ) -> Vec<DocumentDescriptor> {
        listing
            .iter()
            .filter_map(|attachment| {
                let Some(id) = attachment.attachment_id() else {
                    debug!(act_id = entry.act_id, "attachment without id");
                    return None;
                };
                Some(DocumentDescriptor::new(
                    pdf(self.endpoints(), id, case.exp_id),
                    case,
                    entry,
                    kind,
                    attachment.display_name(),
                ))
            })
            .collect()
    }

    /// [`derive_documents`](Self::derive_documents) over every entry, at most
    /// `concurrency` entries in flight. Results keep entry order.
    pub async fn derive_all_documents(
        &self,
        case: &CaseRecord,
        entries: &[ProceduralEntry],
    ) -> Vec<DocumentDescriptor> {
        let per_entry: Vec<Vec<DocumentDescriptor>> = stream::iter(entries)
            .map(|entry| self.derive_documents(case, entry))
            .buffered(self.config().concurrency.max(1))
            .collect()
            .await;
        per_entry.into_iter().flatten().collect()
    }
}
