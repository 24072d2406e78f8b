//! Human-readable rendering for cases, procedural entries and documents.
//!
//! Cases render as a vertical card grouped into sections; entries and
//! documents render one per line so the output stays greppable.

use std::fmt::Write;

use juscaba_core::{CaseRecord, DocumentDescriptor, ProceduralEntry, epoch_millis};

const MAX_LIST_ITEMS: usize = 10;
const LABEL_WIDTH: usize = 26;

// ── Case card ──

/// Render a case record as a card grouped by section. Empty sections are omitted.
pub fn case_card(case: &CaseRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", case.display_id());
    if !case.caption.is_empty() {
        let _ = writeln!(out, "{}", case.caption);
    }
    let _ = writeln!(out);

    section(
        &mut out,
        "Identity",
        &[
            ("exp_id", Some(case.exp_id.to_string())),
            ("number", Some(case.number.to_string())),
            ("year", Some(case.year.to_string())),
            ("suffix", case.suffix.map(|s| s.to_string())),
            ("cuij", non_empty(&case.cuij)),
            ("case_type", non_empty(&case.case_type)),
        ],
    );
    section(
        &mut out,
        "Location",
        &[
            ("office", non_empty(&case.location.office)),
            ("dependency", non_empty(&case.location.dependency)),
            (
                "first_instance_office",
                non_empty(&case.filings.organismo_primera_instancia),
            ),
            (
                "first_instance_clerk",
                non_empty(&case.filings.secretaria_primera_instancia),
            ),
            (
                "second_instance_office",
                non_empty(&case.filings.organismo_segunda_instancia),
            ),
            (
                "second_instance_clerk",
                non_empty(&case.filings.secretaria_segunda_instancia),
            ),
        ],
    );
    subjects(&mut out, case);
    section(
        &mut out,
        "Status",
        &[
            ("has_ruling", Some(yes_no(case.has_ruling()))),
            ("is_private", Some(yes_no(case.is_private()))),
            ("amount", (case.amount != 0.0).then(|| format!("{:.2}", case.amount))),
            ("tags", non_empty(&case.tags)),
        ],
    );
    section(
        &mut out,
        "Dates",
        &[
            ("started", date(case.started)),
            ("last_activity", date(case.last_activity)),
        ],
    );
    out
}

fn section(out: &mut String, header: &str, rows: &[(&str, Option<String>)]) {
    if rows.iter().all(|(_, value)| value.is_none()) {
        return;
    }
    let _ = writeln!(out, "{header}");
    for (label, value) in rows {
        if let Some(value) = value {
            let _ = writeln!(out, "  {label:<LABEL_WIDTH$} {value}");
        }
    }
    let _ = writeln!(out);
}

fn subjects(out: &mut String, case: &CaseRecord) {
    let len = case.subjects.len();
    if len == 0 {
        return;
    }
    let _ = writeln!(out, "Subjects ({len})");
    for subject in case.subjects.iter().take(MAX_LIST_ITEMS) {
        let marker = if subject.is_principal() { "*" } else { " " };
        let _ = write!(out, "  {marker} {}", subject.description);
        if !subject.matter.is_empty() {
            let _ = write!(out, "  [{}]", subject.matter);
        }
        let _ = writeln!(out);
    }
    if len > MAX_LIST_ITEMS {
        let _ = writeln!(out, "  ... and {} more", len - MAX_LIST_ITEMS);
    }
    let _ = writeln!(out);
}

// ── Entries and documents ──

/// One line per entry: signature date, id, code, title and markers.
pub fn entry_line(entry: &ProceduralEntry) -> String {
    let signed = date(entry.signed).unwrap_or_else(|| "-".into());
    let mut line = format!(
        "{signed:<10}  {:>10}  {:<8}  {}",
        entry.act_id, entry.code, entry.title
    );
    if entry.is_notice() {
        line.push_str("  [cedula]");
    }
    if entry.has_attachment() {
        line.push_str("  [adjuntos]");
    }
    if let Some(reference) = entry.notified_entry() {
        let _ = write!(line, "  -> {reference}");
    }
    line
}

/// Entry, kind and name on one line, the URL indented on the next.
/// Attachments always get a name column, `(unnamed)` when the listing had none.
pub fn document_lines(doc: &DocumentDescriptor) -> String {
    let mut head = format!("{:<18}  {:<18}", doc.entry_id, doc.kind.as_str());
    if doc.kind.is_attachment() {
        let name = doc.name.trim();
        head.push_str("  ");
        head.push_str(if name.is_empty() { "(unnamed)" } else { name });
    }
    format!("{}\n    {}", head.trim_end(), doc.url)
}

// ── Helpers ──

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn yes_no(b: bool) -> String {
    let s = if b { "yes" } else { "no" };
    s.to_string()
}

fn date(millis: Option<i64>) -> Option<String> {
    epoch_millis(millis).map(|dt| dt.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use juscaba_core::{AttachmentKind, Location, Subject};

    fn case() -> CaseRecord {
        CaseRecord {
            exp_id: 345678,
            number: 182908,
            year: 2020,
            suffix: Some(0),
            caption: "GCBA SOBRE AMPARO".into(),
            location: Location {
                office: "JUZGADO 2".into(),
                dependency: String::new(),
            },
            subjects: vec![Subject {
                description: "AMPARO - SALUD".into(),
                principal_flag: 1,
                matter: "CAYT".into(),
                ..Default::default()
            }],
            ruling_flag: 1,
            started: Some(1_600_790_400_000),
            ..Default::default()
        }
    }

    #[test]
    fn card_groups_sections_and_skips_empty_values() {
        let card = case_card(&case());
        assert!(card.starts_with("=== 182908/2020 ===\nGCBA SOBRE AMPARO\n"));
        assert!(card.contains("Identity\n"));
        assert!(card.contains("office                     JUZGADO 2"));
        assert!(!card.contains("dependency"));
        assert!(card.contains("  * AMPARO - SALUD  [CAYT]"));
        assert!(card.contains("has_ruling                 yes"));
        assert!(card.contains("started                    2020-09-22"));
        assert!(!card.contains("last_activity"));
        assert!(!card.contains("amount"));
    }

    #[test]
    fn card_truncates_long_subject_lists() {
        let mut case = case();
        case.subjects = (0..13)
            .map(|i| Subject {
                description: format!("OBJETO {i}"),
                ..Default::default()
            })
            .collect();
        let card = case_card(&case);
        assert!(card.contains("Subjects (13)"));
        assert!(card.contains("OBJETO 9"));
        assert!(!card.contains("OBJETO 10"));
        assert!(card.contains("... and 3 more"));
    }

    #[test]
    fn entry_line_marks_notices() {
        let entry = ProceduralEntry {
            act_id: 4521,
            code: "CED".into(),
            title: "CEDULA".into(),
            is_notice: true,
            attachment_flag: 1,
            notified_entries: Some("998877".into()),
            ..Default::default()
        };
        let line = entry_line(&entry);
        assert!(line.starts_with("-           "), "{line}");
        assert!(line.contains("4521  CED"), "{line}");
        assert!(line.ends_with("[cedula]  [adjuntos]  -> 998877"), "{line}");
    }

    #[test]
    fn document_lines_put_url_on_second_line() {
        let doc = DocumentDescriptor {
            url: "https://host/pdf".into(),
            entry_id: "actuacion 1".into(),
            case_number: "1/2020".into(),
            kind: AttachmentKind::Regular,
            name: String::new(),
        };
        let lines = document_lines(&doc);
        assert_eq!(lines, "actuacion 1         regular\n    https://host/pdf");
    }

    #[test]
    fn document_lines_name_attachments_only() {
        let mut doc = DocumentDescriptor {
            url: "https://host/adjunto".into(),
            entry_id: "actuacion 1".into(),
            case_number: "1/2020".into(),
            kind: AttachmentKind::NoticeAttachment,
            name: "escrito.pdf".into(),
        };
        let lines = document_lines(&doc);
        assert!(
            lines.starts_with("actuacion 1         notice_attachment   escrito.pdf\n"),
            "{lines}"
        );

        doc.name = String::new();
        assert!(document_lines(&doc).contains("(unnamed)"));

        doc.kind = AttachmentKind::NotifiedEntry;
        doc.name = "ignored".into();
        let lines = document_lines(&doc);
        assert!(lines.starts_with("actuacion 1         notified_entry\n"), "{lines}");
    }
}
