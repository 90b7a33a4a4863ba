use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Verdict returned by the corrosion detection endpoint. The wire names are
/// the service's lowercase snake_case labels.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Display, EnumString)]
pub enum Prediction {
    #[serde(rename = "corrosion")]
    #[strum(serialize = "corrosion")]
    Corrosion,
    #[serde(rename = "no_corrosion")]
    #[strum(serialize = "no_corrosion")]
    NoCorrosion,
}

impl Prediction {
    pub fn is_corrosion(self) -> bool {
        self == Prediction::Corrosion
    }

    /// Headline text for the prediction region.
    pub fn label(self) -> &'static str {
        match self {
            Prediction::Corrosion => "CORROSION DETECTED",
            Prediction::NoCorrosion => "NO CORROSION",
        }
    }

    /// Display color for the headline: red for corrosion, green otherwise.
    pub fn color(self) -> &'static str {
        match self {
            Prediction::Corrosion => "red",
            Prediction::NoCorrosion => "green",
        }
    }
}

/// Response body of `POST /upload`. The service also returns bookkeeping
/// fields (`uploaded_at`, `project_id`, correction flags); serde ignores
/// what the UI has no use for.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct InspectionResponse {
    pub prediction: Prediction,
    pub confidence: f32,
    pub annotated_path: String,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
}

impl InspectionResponse {
    /// Confidence as a percentage with one decimal place, e.g. `87.0%`.
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }

    /// Absolute URL of the server-annotated image. `annotated_path` is
    /// server-relative and already starts with a slash.
    pub fn annotated_url(&self, base: &str) -> String {
        format!("{}{}", base, self.annotated_path)
    }
}

/// Trims an inspection note; `None` when nothing remains.
pub fn normalize_note(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_corrosion_response() {
        let body = r#"{
            "id": 12,
            "image_path": "/images/abc.jpg",
            "annotated_path": "/out/1.png",
            "prediction": "corrosion",
            "confidence": 0.87,
            "project_id": "rig-7",
            "uploaded_at": "2026-08-01T10:00:00"
        }"#;
        let resp: InspectionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.prediction, Prediction::Corrosion);
        assert_eq!(resp.annotated_path, "/out/1.png");
        assert_eq!(resp.id, Some(12));
        assert_eq!(resp.image_path.as_deref(), Some("/images/abc.jpg"));
    }

    #[test]
    fn decodes_minimal_response() {
        let body = r#"{"prediction":"no_corrosion","confidence":0.42,"annotated_path":"/out/2.png"}"#;
        let resp: InspectionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.prediction, Prediction::NoCorrosion);
        assert_eq!(resp.id, None);
        assert_eq!(resp.image_path, None);
    }

    #[test]
    fn rejects_unknown_prediction_label() {
        let body = r#"{"prediction":"rust","confidence":0.5,"annotated_path":"/out/3.png"}"#;
        assert!(serde_json::from_str::<InspectionResponse>(body).is_err());
    }

    #[test]
    fn rejects_missing_fields() {
        let body = r#"{"prediction":"corrosion","confidence":0.5}"#;
        assert!(serde_json::from_str::<InspectionResponse>(body).is_err());
    }

    #[test]
    fn corrosion_headline_is_red() {
        assert_eq!(Prediction::Corrosion.label(), "CORROSION DETECTED");
        assert_eq!(Prediction::Corrosion.color(), "red");
        assert!(Prediction::Corrosion.is_corrosion());
    }

    #[test]
    fn no_corrosion_headline_is_green() {
        assert_eq!(Prediction::NoCorrosion.label(), "NO CORROSION");
        assert_eq!(Prediction::NoCorrosion.color(), "green");
        assert!(!Prediction::NoCorrosion.is_corrosion());
    }

    #[test]
    fn formats_confidence_to_one_decimal() {
        let mut resp = InspectionResponse {
            prediction: Prediction::Corrosion,
            confidence: 0.87,
            annotated_path: "/out/1.png".into(),
            image_path: None,
            id: None,
        };
        assert_eq!(resp.confidence_percent(), "87.0%");
        resp.confidence = 0.42;
        assert_eq!(resp.confidence_percent(), "42.0%");
        resp.confidence = 0.876;
        assert_eq!(resp.confidence_percent(), "87.6%");
    }

    #[test]
    fn joins_annotated_url_onto_base() {
        let resp = InspectionResponse {
            prediction: Prediction::NoCorrosion,
            confidence: 0.42,
            annotated_path: "/out/2.png".into(),
            image_path: None,
            id: None,
        };
        assert_eq!(
            resp.annotated_url("http://localhost:8000"),
            "http://localhost:8000/out/2.png"
        );
    }

    #[test]
    fn note_normalization_trims_and_rejects_blank() {
        assert_eq!(normalize_note("  check weld seam  "), Some("check weld seam"));
        assert_eq!(normalize_note(""), None);
        assert_eq!(normalize_note("   \t\n"), None);
    }

    #[test]
    fn prediction_round_trips_through_strum() {
        use std::str::FromStr;
        assert_eq!(Prediction::from_str("corrosion").unwrap(), Prediction::Corrosion);
        assert_eq!(Prediction::NoCorrosion.to_string(), "no_corrosion");
    }
}
