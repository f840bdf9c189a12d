//! Parsing and validation of the model's JSON payload.

use serde::Deserialize;
use serde_json::Value;
use sift_core::{Error, Result, Sentiment};

use crate::prompt::TOPIC_COUNT;
use crate::types::ExtractedMetadata;

/// Payload exactly as the model is asked to produce it.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMetadata {
    summary: String,
    #[serde(default)]
    title: Option<String>,
    topics: Vec<String>,
    sentiment: String,
    confidence: Value,
}

/// Parse model output into validated metadata. Any shape problem is an
/// [`Error::Parse`].
pub fn parse_metadata(content: &str) -> Result<ExtractedMetadata> {
    let json = strip_code_fence(content);
    if json.is_empty() {
        return Err(Error::Parse("Model returned an empty response".into()));
    }

    let value: Value = serde_json::from_str(json)
        .map_err(|e| Error::Parse(format!("Model response is not JSON: {}", e)))?;
    if !value.is_object() {
        return Err(Error::Parse("Model response is not a JSON object".into()));
    }
    let raw: RawMetadata = serde_json::from_value(value)
        .map_err(|e| Error::Parse(format!("Model response has the wrong shape: {}", e)))?;

    let summary = raw.summary.trim().to_string();
    if summary.is_empty() {
        return Err(Error::Parse("Summary is empty".into()));
    }

    let topics: Vec<String> = raw.topics.iter().map(|t| t.trim().to_string()).collect();
    if topics.len() != TOPIC_COUNT || topics.iter().any(|t| t.is_empty()) {
        return Err(Error::Parse(format!(
            "Expected exactly {} non-empty topics, got {:?}",
            TOPIC_COUNT, raw.topics
        )));
    }

    let sentiment: Sentiment = raw.sentiment.parse()?;
    let confidence = normalize_confidence(&raw.confidence)?;
    let title = raw
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    Ok(ExtractedMetadata {
        summary,
        title,
        topics,
        sentiment,
        confidence,
    })
}

/// Map a model-supplied confidence onto `[0.0, 1.0]`.
///
/// Accepts numbers and numeric strings. A trailing `%`, or a value in
/// `(1, 100]`, is read as a percentage.
pub fn normalize_confidence(value: &Value) -> Result<f64> {
    let (raw, percent) = match value {
        Value::Number(n) => (
            n.as_f64()
                .ok_or_else(|| Error::Parse(format!("Confidence out of range: {}", n)))?,
            false,
        ),
        Value::String(s) => {
            let s = s.trim();
            let (digits, percent) = match s.strip_suffix('%') {
                Some(d) => (d.trim_end(), true),
                None => (s, false),
            };
            let parsed = digits
                .parse::<f64>()
                .map_err(|_| Error::Parse(format!("Confidence is not a number: {:?}", s)))?;
            (parsed, percent)
        }
        other => {
            return Err(Error::Parse(format!(
                "Confidence is not a number: {}",
                other
            )))
        }
    };

    if raw.is_nan() {
        return Err(Error::Parse("Confidence is NaN".into()));
    }

    let scaled = if percent || (raw > 1.0 && raw <= 100.0) {
        raw / 100.0
    } else {
        raw
    };
    Ok(scaled.clamp(0.0, 1.0))
}

/// Strip a surrounding markdown code fence, if any.
fn strip_code_fence(response: &str) -> &str {
    let trimmed = response.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (```json) up to the first newline.
    let body = match rest.find('\n') {
        Some(i) => &rest[i + 1..],
        None => rest,
    };
    body.trim_end().trim_end_matches("```").trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(overrides: Value) -> String {
        let mut base = json!({
            "summary": "A hospital adopted AI diagnostics.",
            "title": "AI in Healthcare",
            "topics": ["AI", "Healthcare", "Diagnostics"],
            "sentiment": "positive",
            "confidence": 0.9
        });
        if let (Some(obj), Some(extra)) = (base.as_object_mut(), overrides.as_object()) {
            for (k, v) in extra {
                obj.insert(k.clone(), v.clone());
            }
        }
        base.to_string()
    }

    #[test]
    fn test_well_formed() {
        let meta = parse_metadata(&payload(json!({}))).unwrap();
        assert_eq!(meta.title.as_deref(), Some("AI in Healthcare"));
        assert_eq!(meta.topics.len(), 3);
        assert_eq!(meta.sentiment, Sentiment::Positive);
        assert!((meta.confidence - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_code_fence_and_case() {
        let fenced = format!("```json\n{}\n```", payload(json!({"sentiment": " Negative "})));
        let meta = parse_metadata(&fenced).unwrap();
        assert_eq!(meta.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_title_optional() {
        let meta = parse_metadata(&payload(json!({"title": null}))).unwrap();
        assert!(meta.title.is_none());

        let meta = parse_metadata(&payload(json!({"title": "  "}))).unwrap();
        assert!(meta.title.is_none());

        let without = r#"{"summary":"s","topics":["a","b","c"],"sentiment":"neutral","confidence":0.5}"#;
        assert!(parse_metadata(without).unwrap().title.is_none());
    }

    #[test]
    fn test_malformed_payloads() {
        let cases = [
            "not json at all".to_string(),
            "[1, 2, 3]".to_string(),
            String::new(),
            r#"{"summary":"s","topics":["a","b","c"],"sentiment":"neutral"}"#.to_string(),
            payload(json!({"extra": true})),
            payload(json!({"sentiment": "mixed"})),
            payload(json!({"topics": ["a", "b"]})),
            payload(json!({"topics": ["a", "b", "c", "d"]})),
            payload(json!({"topics": ["a", "", "c"]})),
            payload(json!({"confidence": "high"})),
            payload(json!({"confidence": null})),
            payload(json!({"summary": ""})),
        ];
        for case in &cases {
            assert!(
                matches!(parse_metadata(case), Err(Error::Parse(_))),
                "expected parse error for {}",
                case
            );
        }
    }

    #[test]
    fn test_confidence_normalization() {
        let norm = |v: Value| normalize_confidence(&v).unwrap();
        assert_eq!(norm(json!(0.42)), 0.42);
        assert_eq!(norm(json!(1)), 1.0);
        assert_eq!(norm(json!(85)), 0.85);
        assert_eq!(norm(json!("0.7")), 0.7);
        assert_eq!(norm(json!("85%")), 0.85);
        assert_eq!(norm(json!("0.5%")), 0.005);
        assert_eq!(norm(json!(250)), 1.0);
        assert_eq!(norm(json!(-0.3)), 0.0);
        assert!(normalize_confidence(&json!("NaN")).is_err());
        assert!(normalize_confidence(&json!(true)).is_err());
    }
}
