//! Data model of the JusCABA public case API, with no I/O.
//!
//! Case records ([`CaseRecord`]), the paged procedural entries that make up a
//! docket ([`ProceduralEntry`], [`EntriesPage`]), the document descriptors
//! derived from them ([`DocumentDescriptor`]) and `NUMBER/YEAR[-SUFFIX]`
//! case identifiers ([`CaseIdentifier`]).

pub mod case;
mod de;
pub mod document;
pub mod entry;
pub mod identifier;

pub use case::{CaseRecord, Filings, Location, Subject};
pub use document::{
    Attachment, AttachmentKind, DocumentDescriptor, GenericAttachment, GenericAttachments,
    NoticeAttachment,
};
pub use entry::{EntriesPage, EntryWithCase, Pageable, ProceduralEntry, epoch_millis};
pub use identifier::{CaseIdentifier, IdentifierError};
