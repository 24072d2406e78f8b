//! Document references derived from procedural entries, and the two
//! attachment-listing shapes the service returns.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::case::CaseRecord;
use crate::de::nullable;
use crate::entry::ProceduralEntry;

/// What kind of document a descriptor points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    /// The entry's own PDF.
    Regular,
    /// The PDF of the entry a notice refers to.
    NotifiedEntry,
    /// An attachment listed for a notice.
    NoticeAttachment,
    /// An attachment listed for any other entry.
    GenericAttachment,
}

impl AttachmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttachmentKind::Regular => "regular",
            AttachmentKind::NotifiedEntry => "notified_entry",
            AttachmentKind::NoticeAttachment => "notice_attachment",
            AttachmentKind::GenericAttachment => "generic_attachment",
        }
    }

    pub fn is_attachment(&self) -> bool {
        matches!(
            self,
            AttachmentKind::NoticeAttachment | AttachmentKind::GenericAttachment
        )
    }
}

impl fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A retrievable document reference. Holds the access URL, never the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDescriptor {
    pub url: String,
    /// Owning entry, as [`ProceduralEntry::id`].
    pub entry_id: String,
    /// Owning case, as [`CaseRecord::display_id`].
    pub case_number: String,
    pub kind: AttachmentKind,
    /// Empty for non-attachment kinds.
    pub name: String,
}

impl DocumentDescriptor {
    pub fn new(
        url: impl Into<String>,
        case: &CaseRecord,
        entry: &ProceduralEntry,
        kind: AttachmentKind,
        name: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            entry_id: entry.id(),
            case_number: case.display_id(),
            kind,
            name: name.into(),
        }
    }
}

/// Common view over the attachment-listing objects.
///
/// Objects without an identifier are not downloadable and are skipped.
pub trait Attachment {
    fn attachment_id(&self) -> Option<i64>;
    fn display_name(&self) -> &str;
}

/// Element of the notice-attachment listing (a bare JSON array).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NoticeAttachment {
    #[serde(rename = "adjuntoId", default)]
    pub id: Option<i64>,
    #[serde(rename = "adjuntoNombre", default, deserialize_with = "nullable")]
    pub name: String,
}

impl Attachment for NoticeAttachment {
    fn attachment_id(&self) -> Option<i64> {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GenericAttachment {
    #[serde(rename = "adjId", default)]
    pub id: Option<i64>,
    #[serde(rename = "titulo", default, deserialize_with = "nullable")]
    pub title: String,
}

impl Attachment for GenericAttachment {
    fn attachment_id(&self) -> Option<i64> {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}

/// Body of the generic attachment listing: `{"adjuntos": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GenericAttachments {
    #[serde(default, deserialize_with = "nullable")]
    pub adjuntos: Vec<GenericAttachment>,
}
