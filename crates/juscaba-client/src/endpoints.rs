//! URL construction for the `expedientes` API.
//!
//! Several endpoints take a JSON document inside a query parameter. Those
//! documents are built as `serde_json` values and percent-encoded by the
//! URL serializer, so identifiers with quotes or ampersands stay intact.

use reqwest::Url;
use serde_json::{Value, json};

use crate::error::ClientError;

pub const DEFAULT_BASE_URL: &str = "https://eje.juscaba.gob.ar/iol-api/api/public/expedientes";

/// Search mode for case identifiers ("carátula/número").
const SEARCH_KIND: &str = "CAU";

#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ClientError::Config(format!("invalid base URL {base_url:?}: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "base URL {base_url:?} must be http or https"
            )));
        }
        Ok(Self { base })
    }

    fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Url {
        let mut url = self.base.clone();
        let joined = format!("{}/{}", self.base.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url.set_query(None);
        if !params.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }
        url
    }

    /// Case search; the body is [`Endpoints::search_form`].
    pub fn search(&self) -> Url {
        self.endpoint("lista", &[])
    }

    /// Form fields for the search POST: a single `info` JSON document whose
    /// `filter` is itself a JSON string.
    pub fn search_form(&self, identifier: &str, size: u32) -> [(&'static str, String); 1] {
        let filter = json!({ "identificador": identifier }).to_string();
        let info = json!({
            "filter": filter,
            "tipoBusqueda": SEARCH_KIND,
            "page": 0,
            "size": size,
        });
        [("info", info.to_string())]
    }

    pub fn case(&self, exp_id: i64) -> Url {
        self.endpoint("ficha", &[("expId", exp_id.to_string())])
    }

    /// One page of entries, with every entry kind enabled and ministry access off.
    pub fn entries_page(&self, exp_id: i64, page: u32, size: u32) -> Url {
        let filter = json!({
            "cedulas": true,
            "escritos": true,
            "despachos": true,
            "notas": true,
            "expId": exp_id,
            "accesoMinisterios": false,
        });
        self.endpoint(
            "actuaciones",
            &[
                ("filtro", filter.to_string()),
                ("page", page.to_string()),
                ("size", size.to_string()),
            ],
        )
    }

    pub fn notice_attachments(&self, cuij: &str, exp_id: i64) -> Url {
        let filter = json!({
            "cedulaCuij": cuij,
            "expId": exp_id,
            "ministerios": false,
        });
        self.endpoint("cedulas/adjuntos", &[("filter", filter.to_string())])
    }

    pub fn generic_attachments(&self, act_id: i64, exp_id: i64) -> Url {
        self.endpoint(
            "actuaciones/adjuntos",
            &[
                ("actId", act_id.to_string()),
                ("expId", exp_id.to_string()),
                ("accesoMinisterios", "false".to_string()),
            ],
        )
    }

    fn pdf(&self, act_id: Value, exp_id: i64, notice_id: Value) -> Url {
        let datos = json!({
            "actId": act_id,
            "expId": exp_id,
            "esNota": false,
            "cedulaId": notice_id,
            "ministerios": false,
        });
        self.endpoint("actuaciones/pdf", &[("datos", datos.to_string())])
    }

    /// The entry's own PDF.
    pub fn entry_pdf(&self, act_id: i64, exp_id: i64) -> Url {
        self.pdf(json!(act_id), exp_id, Value::Null)
    }

    /// PDF of the entry a notice refers to. The API takes the linked
    /// reference as `actId` and the notice itself as `cedulaId`.
    pub fn notified_entry_pdf(&self, reference: &str, exp_id: i64, notice_id: i64) -> Url {
        self.pdf(json!(reference), exp_id, json!(notice_id))
    }

    pub fn notice_attachment_pdf(&self, attachment_id: i64, exp_id: i64) -> Url {
        self.attachment_pdf("cedulas/adjuntoPdf", attachment_id, exp_id)
    }

    pub fn generic_attachment_pdf(&self, attachment_id: i64, exp_id: i64) -> Url {
        self.attachment_pdf("actuaciones/adjuntoPdf", attachment_id, exp_id)
    }

    fn attachment_pdf(&self, path: &str, attachment_id: i64, exp_id: i64) -> Url {
        let filter = json!({
            "aacId": attachment_id,
            "expId": exp_id,
            "ministerios": false,
        });
        self.endpoint(path, &[("filter", filter.to_string())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new(DEFAULT_BASE_URL).unwrap()
    }

    fn param(url: &Url, key: &str) -> String {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .unwrap_or_else(|| panic!("{url} has no {key} parameter"))
    }

    fn json_param(url: &Url, key: &str) -> Value {
        serde_json::from_str(&param(url, key)).unwrap()
    }

    #[test]
    fn case_url() {
        let url = endpoints().case(345678);
        assert_eq!(
            url.as_str(),
            "https://eje.juscaba.gob.ar/iol-api/api/public/expedientes/ficha?expId=345678"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let ep = Endpoints::new("http://localhost:8080/api/").unwrap();
        assert_eq!(ep.case(1).as_str(), "http://localhost:8080/api/ficha?expId=1");
    }

    #[test]
    fn rejects_bad_base() {
        assert!(Endpoints::new("not a url").is_err());
        assert!(Endpoints::new("ftp://example.org").is_err());
    }

    #[test]
    fn search_form_nests_filter_as_string() {
        let [(key, info)] = endpoints().search_form("182908/2020-0", 10);
        assert_eq!(key, "info");
        let info: Value = serde_json::from_str(&info).unwrap();
        assert_eq!(info["tipoBusqueda"], "CAU");
        assert_eq!(info["page"], 0);
        assert_eq!(info["size"], 10);
        let filter: Value = serde_json::from_str(info["filter"].as_str().unwrap()).unwrap();
        assert_eq!(filter, json!({"identificador": "182908/2020-0"}));
    }

    #[test]
    fn entries_page_filter() {
        let url = endpoints().entries_page(345678, 2, 100);
        assert!(url.path().ends_with("/expedientes/actuaciones"));
        assert_eq!(param(&url, "page"), "2");
        assert_eq!(param(&url, "size"), "100");
        assert_eq!(
            json_param(&url, "filtro"),
            json!({
                "cedulas": true, "escritos": true, "despachos": true, "notas": true,
                "expId": 345678, "accesoMinisterios": false
            })
        );
    }

    #[test]
    fn notice_attachments_escapes_cuij() {
        let cuij = r#"CED "7"&x=1"#;
        let url = endpoints().notice_attachments(cuij, 9);
        assert!(url.path().ends_with("/cedulas/adjuntos"));
        let filter = json_param(&url, "filter");
        assert_eq!(filter["cedulaCuij"], cuij);
        assert_eq!(filter["expId"], 9);
        assert_eq!(filter["ministerios"], false);
        assert_eq!(url.query_pairs().count(), 1);
    }

    #[test]
    fn generic_attachments_url() {
        let url = endpoints().generic_attachments(4521, 9);
        assert!(url.path().ends_with("/actuaciones/adjuntos"));
        assert_eq!(param(&url, "actId"), "4521");
        assert_eq!(param(&url, "expId"), "9");
        assert_eq!(param(&url, "accesoMinisterios"), "false");
    }

    #[test]
    fn entry_pdf_has_null_notice() {
        let datos = json_param(&endpoints().entry_pdf(4521, 9), "datos");
        assert_eq!(datos["actId"], 4521);
        assert_eq!(datos["expId"], 9);
        assert_eq!(datos["esNota"], false);
        assert!(datos["cedulaId"].is_null());
    }

    #[test]
    fn notified_pdf_swaps_ids() {
        let url = endpoints().notified_entry_pdf("998877", 9, 4521);
        assert!(url.path().ends_with("/actuaciones/pdf"));
        let datos = json_param(&url, "datos");
        assert_eq!(datos["actId"], "998877");
        assert_eq!(datos["cedulaId"], 4521);
    }

    #[test]
    fn attachment_pdfs() {
        let ep = endpoints();
        let notice = ep.notice_attachment_pdf(77, 9);
        let generic = ep.generic_attachment_pdf(5, 9);
        assert!(notice.path().ends_with("/cedulas/adjuntoPdf"));
        assert!(generic.path().ends_with("/actuaciones/adjuntoPdf"));
        assert_eq!(
            json_param(&notice, "filter"),
            json!({"aacId": 77, "expId": 9, "ministerios": false})
        );
        assert_eq!(json_param(&generic, "filter")["aacId"], 5);
    }
}
