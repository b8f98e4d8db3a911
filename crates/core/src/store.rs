//! Whole-file JSON persistence for creative lists.
//!
//! Files are a single JSON array written with 2-space indentation. There is
//! no schema version; readers rely on the record types in [`crate::types`].

use crate::error::{CreativeError, CreativeResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Serialize `records` as a pretty-printed JSON array and write it to `path`.
pub fn write_json_array<T: Serialize>(path: &Path, records: &[T]) -> CreativeResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    debug!(path = %path.display(), count = records.len(), "wrote JSON array");
    Ok(())
}

/// Read `path` and parse it as JSON without assuming a shape.
///
/// A missing file maps to [`CreativeError::FileNotFound`] so callers can
/// report it distinctly from other I/O failures.
pub fn read_json_value(path: &Path) -> CreativeResult<serde_json::Value> {
    let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CreativeError::FileNotFound(path.display().to_string()),
        _ => CreativeError::Io(e),
    })?;
    Ok(serde_json::from_str(&contents)?)
}

/// Read a JSON array of typed records back from `path`.
pub fn read_json_array<T: DeserializeOwned>(path: &Path) -> CreativeResult<Vec<T>> {
    match read_json_value(path)? {
        value @ serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        _ => Err(CreativeError::Validation(format!(
            "{} must contain a JSON array",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AdFormat, Creative, CreativeVariation, HookType, Tone, VariationStatus};
    use std::path::PathBuf;
    use uuid::Uuid;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("{name}-{}.json", Uuid::new_v4()))
    }

    #[test]
    fn test_creatives_survive_write_and_read() {
        let path = temp_path("creatives");
        let creatives = vec![
            Creative {
                id: "creative_1".into(),
                headline: "Acme Kettle".into(),
                description: "A premium, exclusive, high-end take on kettles.".into(),
                cta: "Shop Now".into(),
                tone: Some(Tone::Luxury),
                hook_type: None,
                format: Some(AdFormat::Carousel),
            },
            Creative {
                id: "creative_2".into(),
                headline: "Acme Kettle - Limited Offer".into(),
                description: "Get kettles with special pricing.".into(),
                cta: "Learn More".into(),
                tone: None,
                hook_type: Some(HookType::Urgency),
                format: None,
            },
        ];

        write_json_array(&path, &creatives).unwrap();
        let back: Vec<Creative> = read_json_array(&path).unwrap();
        assert_eq!(back, creatives);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n  {\n    \"id\": \"creative_1\""));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_field_order_preserved() {
        let path = temp_path("variations");
        let variations = vec![CreativeVariation {
            variation_id: "v_1".into(),
            product: "Kettle".into(),
            audience: "tea lovers".into(),
            hook_type: HookType::Benefit,
            format: AdFormat::SingleImage,
            copy: None,
            status: VariationStatus::Failed,
        }];
        write_json_array(&path, &variations).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let positions: Vec<usize> = ["variation_id", "product", "audience", "hook_type", "format", "copy", "status"]
            .iter()
            .map(|k| raw.find(&format!("\"{k}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let back: Vec<CreativeVariation> = read_json_array(&path).unwrap();
        assert_eq!(back, variations);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_distinct() {
        let path = temp_path("does-not-exist");
        let err = read_json_value(&path).unwrap_err();
        assert!(matches!(err, CreativeError::FileNotFound(_)));
        assert!(err.to_string().starts_with("Error: Creatives file not found:"));
    }

    #[test]
    fn test_object_is_not_an_array() {
        let path = temp_path("object");
        std::fs::write(&path, r#"{"headline":"x"}"#).unwrap();
        let err = read_json_array::<Creative>(&path).unwrap_err();
        assert!(matches!(err, CreativeError::Validation(_)));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_invalid_json() {
        let path = temp_path("broken");
        std::fs::write(&path, "[{").unwrap();
        let err = read_json_value(&path).unwrap_err();
        assert!(err.to_string().starts_with("Error parsing JSON:"));
        std::fs::remove_file(&path).ok();
    }
}
