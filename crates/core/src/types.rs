use crate::error::CreativeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Call-to-action label used when a creative does not specify one.
pub const DEFAULT_CTA: &str = "Shop Now";

/// Persuasive angle of a piece of ad copy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HookType {
    Urgency,
    Curiosity,
    Emotion,
    Benefit,
    SocialProof,
}

impl HookType {
    /// Rotation order used by the variation generator.
    pub const ALL: [HookType; 5] = [
        HookType::Urgency,
        HookType::Curiosity,
        HookType::Emotion,
        HookType::Benefit,
        HookType::SocialProof,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HookType::Urgency => "urgency",
            HookType::Curiosity => "curiosity",
            HookType::Emotion => "emotion",
            HookType::Benefit => "benefit",
            HookType::SocialProof => "social_proof",
        }
    }
}

impl fmt::Display for HookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookType {
    type Err = CreativeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookType::ALL
            .into_iter()
            .find(|h| h.as_str() == s.trim())
            .ok_or_else(|| CreativeError::Validation(format!("unknown hook type '{s}'")))
    }
}

/// Ad placement format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AdFormat {
    SingleImage,
    Carousel,
}

impl AdFormat {
    pub const ALL: [AdFormat; 2] = [AdFormat::SingleImage, AdFormat::Carousel];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdFormat::SingleImage => "single_image",
            AdFormat::Carousel => "carousel",
        }
    }

    /// Format list used when the caller does not pick one.
    pub fn defaults() -> Vec<AdFormat> {
        AdFormat::ALL.to_vec()
    }
}

impl fmt::Display for AdFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdFormat {
    type Err = CreativeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdFormat::ALL
            .into_iter()
            .find(|f| f.as_str() == s.trim())
            .ok_or_else(|| CreativeError::Validation(format!("unknown ad format '{s}'")))
    }
}

/// Voice of a template-generated creative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Energetic,
    Professional,
    Casual,
    Luxury,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Energetic, Tone::Professional, Tone::Casual, Tone::Luxury];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Energetic => "energetic",
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Luxury => "luxury",
        }
    }

    /// Descriptive phrase injected into template copy.
    pub fn description(&self) -> &'static str {
        match self {
            Tone::Energetic => "high-energy, bold, action-driven",
            Tone::Professional => "polished, trustworthy, authoritative",
            Tone::Casual => "friendly, relaxed, conversational",
            Tone::Luxury => "premium, exclusive, high-end",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = CreativeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| CreativeError::Validation(format!("unknown tone '{s}'")))
    }
}

/// A candidate piece of ad text plus its targeting metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Creative {
    pub id: String,
    pub headline: String,
    pub description: String,
    #[serde(default = "default_cta")]
    pub cta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook_type: Option<HookType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<AdFormat>,
}

fn default_cta() -> String {
    DEFAULT_CTA.to_string()
}

/// Outcome of copy generation for one variation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VariationStatus {
    Generated,
    Failed,
}

/// One output record of the variation generator.
///
/// `copy` is `None` when the text-generation call failed; it serializes
/// as `null` so downstream readers can tell a failure from empty copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreativeVariation {
    pub variation_id: String,
    pub product: String,
    pub audience: String,
    pub hook_type: HookType,
    pub format: AdFormat,
    pub copy: Option<String>,
    pub status: VariationStatus,
}

impl CreativeVariation {
    pub fn is_failed(&self) -> bool {
        self.status == VariationStatus::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&HookType::SocialProof).unwrap(),
            "\"social_proof\""
        );
        assert_eq!(
            serde_json::to_string(&AdFormat::SingleImage).unwrap(),
            "\"single_image\""
        );
        assert_eq!(serde_json::to_string(&Tone::Luxury).unwrap(), "\"luxury\"");

        for hook in HookType::ALL {
            assert_eq!(hook.as_str().parse::<HookType>().unwrap(), hook);
        }
        for format in AdFormat::ALL {
            assert_eq!(format.to_string().parse::<AdFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_unknown_values_rejected() {
        assert!("carousell".parse::<AdFormat>().is_err());
        assert!("fomo".parse::<HookType>().is_err());
        assert!("grumpy".parse::<Tone>().is_err());
        assert_eq!("  Luxury ".parse::<Tone>().unwrap(), Tone::Luxury);
    }

    #[test]
    fn test_creative_defaults_cta_and_skips_empty_optionals() {
        let creative: Creative = serde_json::from_str(
            r#"{"id":"creative_1","headline":"Fresh","description":"New in store"}"#,
        )
        .unwrap();
        assert_eq!(creative.cta, DEFAULT_CTA);
        assert!(creative.tone.is_none());

        let json = serde_json::to_string(&creative).unwrap();
        assert!(!json.contains("tone"));
        assert!(!json.contains("format"));
    }

    #[test]
    fn test_failed_variation_serializes_null_copy() {
        let variation = CreativeVariation {
            variation_id: "v_1".into(),
            product: "Trail Runner".into(),
            audience: "runners".into(),
            hook_type: HookType::Urgency,
            format: AdFormat::Carousel,
            copy: None,
            status: VariationStatus::Failed,
        };
        let json = serde_json::to_value(&variation).unwrap();
        assert!(json["copy"].is_null());
        assert_eq!(json["status"], "failed");
        assert!(variation.is_failed());
    }
}
