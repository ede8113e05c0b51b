//! The flat export bundle written at decode time and read back on import.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::analysis::ats::AtsReport;
use crate::analysis::tone::ToneResult;
use crate::decoder::style::DecodeStyle;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("session file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("session file must be a JSON object")]
    NotAnObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportBundle {
    pub input: String,
    pub decoded: String,
    pub style: DecodeStyle,
    pub buzzword_score: f64,
    pub tone: ToneResult,
    pub ats: AtsReport,
    pub quality_score: u32,
}

pub fn create_export_bundle(
    input: &str,
    decoded: &str,
    style: DecodeStyle,
    buzzword_score: f64,
    tone: &ToneResult,
    ats: &AtsReport,
    quality_score: u32,
) -> ExportBundle {
    ExportBundle {
        input: input.to_string(),
        decoded: decoded.to_string(),
        style,
        buzzword_score,
        tone: tone.clone(),
        ats: ats.clone(),
        quality_score,
    }
}

impl ExportBundle {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Best-effort parse of an uploaded session file.
///
/// Missing keys take their defaults. If any present key has the wrong shape,
/// the full parse is abandoned and only `input` and `style` are salvaged.
pub fn parse_uploaded_session(raw: &str) -> Result<ExportBundle, BundleError> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Object(map) = &value else {
        return Err(BundleError::NotAnObject);
    };

    match ExportBundle::deserialize(&value) {
        Ok(bundle) => Ok(bundle),
        Err(e) => {
            tracing::warn!("partial session restore: {e}");
            Ok(ExportBundle {
                input: map
                    .get("input")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                style: map
                    .get("style")
                    .and_then(Value::as_str)
                    .map(DecodeStyle::from_name)
                    .unwrap_or_default(),
                ..ExportBundle::default()
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ats::check_ats_friendly;
    use crate::analysis::tone::{analyze_tone, ToneCategory};

    fn sample_bundle() -> ExportBundle {
        let text = "We led a strategic roadmap";
        create_export_bundle(
            text,
            "We led a plan",
            DecodeStyle::GenZ,
            20.0,
            &analyze_tone(text),
            &check_ats_friendly(text),
            47,
        )
    }

    #[test]
    fn test_bundle_json_round_trip() {
        let bundle = sample_bundle();
        let json = bundle.to_json().unwrap();
        let parsed = parse_uploaded_session(&json).unwrap();
        assert_eq!(parsed, bundle);
    }

    #[test]
    fn test_bundle_json_keys() {
        let value = serde_json::to_value(sample_bundle()).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["ats", "buzzword_score", "decoded", "input", "quality_score", "style", "tone"]
        );
        assert_eq!(value["style"], "Gen Z");
        assert_eq!(value["tone"]["corporate"], 2);
    }

    #[test]
    fn test_missing_keys_default() {
        let parsed = parse_uploaded_session(r#"{"input": "hello"}"#).unwrap();
        assert_eq!(parsed.input, "hello");
        assert_eq!(parsed.style, DecodeStyle::PlainEnglish);
        assert_eq!(parsed.quality_score, 0);
        assert!(parsed.tone.is_empty());
    }

    #[test]
    fn test_wrong_shape_salvages_input_and_style() {
        let raw = r#"{"input": "hi", "style": "Haiku", "quality_score": "high", "tone": [1]}"#;
        let parsed = parse_uploaded_session(raw).unwrap();
        assert_eq!(parsed.input, "hi");
        assert_eq!(parsed.style, DecodeStyle::Haiku);
        assert_eq!(parsed.quality_score, 0);
    }

    #[test]
    fn test_rejects_non_object_and_garbage() {
        assert!(matches!(
            parse_uploaded_session("[1, 2]"),
            Err(BundleError::NotAnObject)
        ));
        assert!(matches!(
            parse_uploaded_session("{not json"),
            Err(BundleError::Json(_))
        ));
    }

    #[test]
    fn test_tone_keys_deserialize_to_categories() {
        let parsed = parse_uploaded_session(r#"{"tone": {"fluff": 3}}"#).unwrap();
        assert_eq!(parsed.tone.get(&ToneCategory::Fluff), Some(&3));
    }
}
