//! Procedural entries ("actuaciones") and the paged listing that carries them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::de::{int_flag, nullable, optional_millis};

/// Convert a date-or-absent epoch-milliseconds value into a UTC timestamp.
pub fn epoch_millis(value: Option<i64>) -> Option<DateTime<Utc>> {
    value
        .filter(|&ms| ms > 0)
        .and_then(DateTime::<Utc>::from_timestamp_millis)
}

/// One event in a case's docket: a filing, ruling, notice or note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProceduralEntry {
    #[serde(rename = "actId", default, deserialize_with = "nullable")]
    pub act_id: i64,
    #[serde(rename = "codigo", default, deserialize_with = "nullable")]
    pub code: String,
    #[serde(rename = "titulo", default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(rename = "firmantes", default, deserialize_with = "nullable")]
    pub signers: String,
    #[serde(rename = "fechaFirma", default, deserialize_with = "optional_millis")]
    pub signed: Option<i64>,
    #[serde(rename = "fechaNotificacion", default, deserialize_with = "optional_millis")]
    pub notified: Option<i64>,
    /// Notices ("cédulas") list their attachments through a different endpoint.
    #[serde(rename = "esCedula", default, deserialize_with = "int_flag")]
    pub is_notice: bool,
    /// Advisory only: gates the attachment listing, never the base document.
    #[serde(rename = "poseeAdjunto", default, deserialize_with = "nullable")]
    pub attachment_flag: i64,
    /// The entry whose PDF a notice refers to.
    #[serde(rename = "actuacionesNotificadas", default)]
    pub notified_entries: Option<String>,
    /// Token required to list a notice's attachments.
    #[serde(default, deserialize_with = "nullable")]
    pub cuij: String,
}

impl ProceduralEntry {
    /// Identity string used on derived documents, e.g. `"actuacion 4521"`.
    pub fn id(&self) -> String {
        format!("actuacion {}", self.act_id)
    }

    pub fn is_notice(&self) -> bool {
        self.is_notice
    }

    pub fn has_attachment(&self) -> bool {
        self.attachment_flag > 0
    }

    /// The linked entry reference, if present and non-empty.
    pub fn notified_entry(&self) -> Option<&str> {
        self.notified_entries
            .as_deref()
            .filter(|reference| !reference.is_empty())
    }

    pub fn signed_at(&self) -> Option<DateTime<Utc>> {
        epoch_millis(self.signed)
    }

    pub fn notified_at(&self) -> Option<DateTime<Utc>> {
        epoch_millis(self.notified)
    }
}

/// An entry tagged with its case's display number, for flat listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryWithCase<'a> {
    #[serde(flatten)]
    pub entry: &'a ProceduralEntry,
    #[serde(rename = "numeroDeExpediente")]
    pub case_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    #[serde(default, deserialize_with = "nullable")]
    pub page_number: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub page_size: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub offset: i64,
}

/// One page of the `expedientes/actuaciones` listing.
///
/// Only `content` drives pagination; `last` is informational and a page
/// flagged `last` may still carry entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntriesPage {
    #[serde(default, deserialize_with = "nullable")]
    pub content: Vec<ProceduralEntry>,
    #[serde(default, deserialize_with = "nullable")]
    pub total_pages: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub total_elements: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub number_of_elements: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub last: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub first: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub size: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub number: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub pageable: Pageable,
}

impl EntriesPage {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
