//! Case records ("fichas") as returned by the `expedientes/ficha` endpoint.

use serde::{Deserialize, Serialize};

use crate::de::{nullable, optional_millis};

/// First and second instance offices a case has been filed with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filings {
    #[serde(default, deserialize_with = "nullable")]
    pub organismo_primera_instancia: String,
    #[serde(default, deserialize_with = "nullable")]
    pub secretaria_primera_instancia: String,
    #[serde(default, deserialize_with = "nullable")]
    pub organismo_segunda_instancia: String,
    #[serde(default, deserialize_with = "nullable")]
    pub secretaria_segunda_instancia: String,
}

/// One subject-matter classification of a case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(rename = "objetoJuicio", default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(rename = "categoria", default, deserialize_with = "nullable")]
    pub category: String,
    #[serde(rename = "esPrincipal", default, deserialize_with = "nullable")]
    pub principal_flag: i64,
    #[serde(rename = "materia", default, deserialize_with = "nullable")]
    pub matter: String,
}

impl Subject {
    pub fn is_principal(&self) -> bool {
        self.principal_flag > 0
    }
}

/// Court office currently holding the case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "organismo", default, deserialize_with = "nullable")]
    pub office: String,
    #[serde(rename = "dependencia", default, deserialize_with = "nullable")]
    pub dependency: String,
}

/// Canonical metadata for one judicial case.
///
/// `number`, `year` and `suffix` identify the case within the remote system.
/// `exp_id` is the service's internal handle; the ficha body does not carry
/// it, so the resolver fills it in from the search candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    #[serde(rename = "expId", default)]
    pub exp_id: i64,
    #[serde(rename = "radicaciones", default, deserialize_with = "nullable")]
    pub filings: Filings,
    #[serde(rename = "numero", default, deserialize_with = "nullable")]
    pub number: i64,
    #[serde(rename = "anio", default, deserialize_with = "nullable")]
    pub year: i64,
    #[serde(rename = "sufijo", default)]
    pub suffix: Option<i64>,
    #[serde(rename = "objetosJuicio", default, deserialize_with = "nullable")]
    pub subjects: Vec<Subject>,
    #[serde(rename = "ubicacion", default, deserialize_with = "nullable")]
    pub location: Location,
    /// Epoch milliseconds.
    #[serde(rename = "fechaInicio", default, deserialize_with = "optional_millis")]
    pub started: Option<i64>,
    /// Epoch milliseconds.
    #[serde(rename = "ultimoMovimiento", default, deserialize_with = "optional_millis")]
    pub last_activity: Option<i64>,
    #[serde(rename = "tieneSentencia", default, deserialize_with = "nullable")]
    pub ruling_flag: i64,
    #[serde(rename = "esPrivado", default, deserialize_with = "nullable")]
    pub private_flag: i64,
    #[serde(rename = "tipoExpediente", default, deserialize_with = "nullable")]
    pub case_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub cuij: String,
    #[serde(rename = "caratula", default, deserialize_with = "nullable")]
    pub caption: String,
    #[serde(rename = "monto", default, deserialize_with = "nullable")]
    pub amount: f64,
    #[serde(rename = "etiquetas", default, deserialize_with = "nullable")]
    pub tags: String,
}

impl CaseRecord {
    /// `"{number}{separator}{year}"`.
    pub fn case_number(&self, separator: &str) -> String {
        format!("{}{}{}", self.number, separator, self.year)
    }

    /// Canonical display form, `"{number}/{year}"`. The suffix is never included.
    pub fn display_id(&self) -> String {
        self.case_number("/")
    }

    /// Stable record id for callers that store cases, e.g. `"ficha 182908-2020"`.
    pub fn id(&self) -> String {
        format!("ficha {}", self.case_number("-"))
    }

    /// Whether this record is the case named by a user-supplied identifier.
    ///
    /// A prefix match: the identifier may carry a `-{suffix}` the display form lacks.
    pub fn matches(&self, identifier: &str) -> bool {
        identifier.starts_with(&self.display_id())
    }

    pub fn has_ruling(&self) -> bool {
        self.ruling_flag > 0
    }

    pub fn is_private(&self) -> bool {
        self.private_flag > 0
    }

    /// The subject flagged as principal, falling back to the first listed.
    pub fn main_subject(&self) -> Option<&Subject> {
        self.subjects
            .iter()
            .find(|s| s.is_principal())
            .or_else(|| self.subjects.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FICHA: &str = r#"{
        "radicaciones": {
            "secretariaPrimeraInstancia": "Secretaría N°1",
            "organismoSegundaInstancia": null,
            "secretariaSegundaInstancia": null,
            "organismoPrimeraInstancia": "Juzgado CAyT N°2"
        },
        "numero": 182908,
        "anio": 2020,
        "sufijo": 0,
        "objetosJuicio": [
            {"objetoJuicio": "AMPARO - OTROS", "categoria": "AMPARO", "esPrincipal": 0, "materia": "CAYT"},
            {"objetoJuicio": "AMPARO - SALUD", "categoria": "AMPARO", "esPrincipal": 1, "materia": "CAYT"}
        ],
        "ubicacion": {"organismo": "JUZGADO 2", "dependencia": "SECRETARIA 3"},
        "fechaInicio": 1600790400000,
        "ultimoMovimiento": null,
        "tieneSentencia": 1,
        "esPrivado": 0,
        "tipoExpediente": "EXP",
        "cuij": "J-01-00182908-4/2020-0",
        "caratula": "GCBA SOBRE AMPARO",
        "monto": 1500.5,
        "etiquetas": null
    }"#;

    #[test]
    fn decodes_ficha_with_nulls() {
        let case: CaseRecord = serde_json::from_str(FICHA).unwrap();
        assert_eq!(case.exp_id, 0);
        assert_eq!(case.number, 182908);
        assert_eq!(case.year, 2020);
        assert_eq!(case.suffix, Some(0));
        assert_eq!(case.filings.organismo_primera_instancia, "Juzgado CAyT N°2");
        assert_eq!(case.filings.organismo_segunda_instancia, "");
        assert_eq!(case.location.dependency, "SECRETARIA 3");
        assert_eq!(case.started, Some(1_600_790_400_000));
        assert!(case.last_activity.is_none());
        assert_eq!(case.tags, "");
        assert_eq!(case.amount, 1500.5);
        assert!(case.has_ruling());
        assert!(!case.is_private());
    }

    #[test]
    fn display_forms() {
        let case: CaseRecord = serde_json::from_str(FICHA).unwrap();
        assert_eq!(case.display_id(), "182908/2020");
        assert_eq!(case.case_number("-"), "182908-2020");
        assert_eq!(case.id(), "ficha 182908-2020");
    }

    #[test]
    fn matches_identifier_with_suffix() {
        let case: CaseRecord = serde_json::from_str(FICHA).unwrap();
        assert!(case.matches("182908/2020-0"));
        assert!(case.matches("182908/2020"));
        assert!(!case.matches("18290/2020-0"));
        assert!(!case.matches("182908/2019-0"));
        assert!(!case.matches("1182908/2020"));
    }

    #[test]
    fn main_subject_prefers_principal() {
        let case: CaseRecord = serde_json::from_str(FICHA).unwrap();
        assert_eq!(case.main_subject().unwrap().description, "AMPARO - SALUD");

        let none = CaseRecord::default();
        assert!(none.main_subject().is_none());
    }

    #[test]
    fn exp_id_survives_roundtrip() {
        let mut case: CaseRecord = serde_json::from_str(FICHA).unwrap();
        case.exp_id = 345_678;
        let json = serde_json::to_string(&case).unwrap();
        let parsed: CaseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.exp_id, 345_678);
        assert_eq!(parsed, case);
    }
}
