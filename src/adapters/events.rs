use crate::core::MessageBatch;
use crate::domain::model::EventEnvelope;
use crate::utils::error::{FunctionError, Result};
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadFormat {
    /// JSON 陣列，元素為字串或 `{"body": ..., "content_type": ...}`
    #[default]
    Json,
    /// 每一行非空白文字為一筆訊息
    Lines,
}

impl FromStr for PayloadFormat {
    type Err = FunctionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(PayloadFormat::Json),
            "lines" | "text" => Ok(PayloadFormat::Lines),
            other => Err(FunctionError::ConfigError {
                message: format!("Unknown payload format: {}", other),
            }),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEvent {
    Text(String),
    Envelope(EventEnvelope),
}

pub fn decode_events(payload: &str, format: PayloadFormat) -> Result<Vec<EventEnvelope>> {
    match format {
        PayloadFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(payload)?;
            if !value.is_array() {
                return Err(FunctionError::PayloadError {
                    message: "expected a JSON array of events".to_string(),
                });
            }

            let raw: Vec<RawEvent> =
                serde_json::from_value(value).map_err(|e| FunctionError::PayloadError {
                    message: e.to_string(),
                })?;

            Ok(raw
                .into_iter()
                .map(|event| match event {
                    RawEvent::Text(body) => EventEnvelope::new(body),
                    RawEvent::Envelope(envelope) => envelope,
                })
                .collect())
        }
        PayloadFormat::Lines => Ok(payload
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .map(EventEnvelope::new)
            .collect()),
    }
}

/// 只留 body；要記錄 content type 時改用 `MessageSink::process_events`
pub fn into_batch(events: Vec<EventEnvelope>) -> MessageBatch {
    events.into_iter().map(|event| event.body).collect()
}

pub fn decode_batch(payload: &str, format: PayloadFormat) -> Result<MessageBatch> {
    Ok(into_batch(decode_events(payload, format)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_strings_and_envelopes() {
        let payload = r#"["plain", {"body": "wrapped", "contentType": "text/plain"}, {"body": ""}]"#;
        let events = decode_events(payload, PayloadFormat::Json).unwrap();

        assert_eq!(events.len(), 3);
        assert_eq!(events[0], EventEnvelope::new("plain"));
        assert_eq!(events[1].body, "wrapped");
        assert_eq!(events[1].content_type.as_deref(), Some("text/plain"));
        assert_eq!(events[2].body, "");
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(matches!(
            decode_events(r#"{"body": "x"}"#, PayloadFormat::Json),
            Err(FunctionError::PayloadError { .. })
        ));
        assert!(matches!(
            decode_events("[1, 2]", PayloadFormat::Json),
            Err(FunctionError::PayloadError { .. })
        ));
        assert!(matches!(
            decode_events("not json", PayloadFormat::Json),
            Err(FunctionError::SerializationError(_))
        ));
    }

    #[test]
    fn test_decode_lines_keeps_order() {
        let batch = decode_batch("first\r\n\n  \nsecond\n", PayloadFormat::Lines).unwrap();
        assert_eq!(batch.messages(), ["first", "second"]);
    }

    #[test]
    fn test_empty_array_is_empty_batch() {
        let batch = decode_batch("[]", PayloadFormat::Json).unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<PayloadFormat>().unwrap(), PayloadFormat::Json);
        assert_eq!("lines".parse::<PayloadFormat>().unwrap(), PayloadFormat::Lines);
        assert!("xml".parse::<PayloadFormat>().is_err());
    }
}
