//! Deterministic, model-free creative templates.
//!
//! Two sources: a tone table that flavours generic headlines, and a fixed
//! set of brand/product fixtures used to smoke-test the pipeline.

use creative_core::error::{CreativeError, CreativeResult};
use creative_core::types::{AdFormat, Creative, Tone, DEFAULT_CTA};

/// Tone phrase for a known tone name; anything else is returned unchanged.
pub fn describe_tone(raw: &str) -> &str {
    match raw.parse::<Tone>() {
        Ok(tone) => tone.description(),
        Err(_) => raw,
    }
}

/// Number of headline/CTA slots tone-driven creatives rotate through.
const TONE_SLOT_COUNT: usize = 3;

/// Headline and CTA for rotation slot `slot`.
fn tone_slot(slot: usize, brand: &str, product: &str) -> (String, &'static str) {
    match slot % TONE_SLOT_COUNT {
        0 => (format!("{brand} {product}"), DEFAULT_CTA),
        1 => (format!("{product} by {brand}"), "Learn More"),
        _ => (format!("Meet the new {brand} {product}"), "Explore"),
    }
}

/// Builds creatives from the tone table. Pure interpolation, no I/O.
#[derive(Debug, Clone)]
pub struct ToneTemplateGenerator {
    brand: String,
    product: String,
    tone: Tone,
}

impl ToneTemplateGenerator {
    pub fn new(brand: impl Into<String>, product: impl Into<String>, tone: Tone) -> Self {
        Self {
            brand: brand.into(),
            product: product.into(),
            tone,
        }
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn description(&self) -> String {
        format!(
            "A {} take on {} from {}.",
            self.tone.description(),
            self.product.to_lowercase(),
            self.brand
        )
    }

    /// `count` creatives `creative_1..=creative_count`, headlines cycling
    /// through the slot table and formats cycling by index.
    pub fn generate(&self, count: usize, formats: &[AdFormat]) -> CreativeResult<Vec<Creative>> {
        if formats.is_empty() {
            return Err(CreativeError::Validation(
                "at least one ad format is required".to_string(),
            ));
        }

        let description = self.description();
        Ok((0..count)
            .map(|i| {
                let (headline, cta) = tone_slot(i, &self.brand, &self.product);
                Creative {
                    id: format!("creative_{}", i + 1),
                    headline,
                    description: description.clone(),
                    cta: cta.to_string(),
                    tone: Some(self.tone),
                    hook_type: None,
                    format: Some(formats[i % formats.len()]),
                }
            })
            .collect())
    }
}

/// A brand/product/tone triple used by the pipeline smoke test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineFixture {
    pub brand: &'static str,
    pub product: &'static str,
    pub tone: Tone,
}

pub const PIPELINE_FIXTURES: [PipelineFixture; 3] = [
    PipelineFixture {
        brand: "Nike",
        product: "Running Shoes",
        tone: Tone::Energetic,
    },
    PipelineFixture {
        brand: "Apple",
        product: "iPhone 15",
        tone: Tone::Professional,
    },
    PipelineFixture {
        brand: "Coca-Cola",
        product: "Sparkling Water",
        tone: Tone::Casual,
    },
];

/// The two creatives produced for fixture number `index` (1-based).
pub fn fixture_creatives(index: usize, fixture: &PipelineFixture) -> [Creative; 2] {
    let PipelineFixture {
        brand,
        product,
        tone,
    } = *fixture;
    let lower = product.to_lowercase();

    [
        Creative {
            id: format!("test_creative_{index}_1"),
            headline: format!("{brand} {product} - Discover Excellence"),
            description: format!(
                "Experience the latest {lower} innovation. Premium quality guaranteed."
            ),
            cta: "Explore".to_string(),
            tone: Some(tone),
            hook_type: None,
            format: None,
        },
        Creative {
            id: format!("test_creative_{index}_2"),
            headline: format!("{brand} {product} - Limited Offer"),
            description: format!("Get {lower} with special pricing. Offer ends soon!"),
            cta: "Learn More".to_string(),
            tone: Some(tone),
            hook_type: None,
            format: None,
        },
    ]
}

/// Every fixture creative in order: fixture 1's pair, then fixture 2's, ...
pub fn all_fixture_creatives() -> Vec<Creative> {
    PIPELINE_FIXTURES
        .iter()
        .enumerate()
        .flat_map(|(i, fixture)| fixture_creatives(i + 1, fixture))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_tone() {
        assert_eq!(describe_tone("luxury"), "premium, exclusive, high-end");
        assert_eq!(describe_tone("casual"), "friendly, relaxed, conversational");
        assert_eq!(describe_tone("whimsical"), "whimsical");
    }

    #[test]
    fn test_luxury_phrase_independent_of_brand() {
        for (brand, product) in [("Acme", "Kettle"), ("Rolex", "Submariner"), ("", "")] {
            let generator = ToneTemplateGenerator::new(brand, product, Tone::Luxury);
            assert!(generator
                .description()
                .contains("premium, exclusive, high-end"));
            assert_eq!(generator.tone().description(), "premium, exclusive, high-end");
        }
    }

    #[test]
    fn test_tone_generator_cycles() {
        let generator = ToneTemplateGenerator::new("Nike", "Running Shoes", Tone::Energetic);
        let creatives = generator.generate(4, &AdFormat::defaults()).unwrap();
        assert_eq!(creatives.len(), 4);

        assert_eq!(creatives[0].id, "creative_1");
        assert_eq!(creatives[0].headline, "Nike Running Shoes");
        assert_eq!(creatives[0].cta, "Shop Now");
        assert_eq!(creatives[1].headline, "Running Shoes by Nike");
        assert_eq!(creatives[2].headline, "Meet the new Nike Running Shoes");
        assert_eq!(creatives[3].headline, creatives[0].headline);

        assert_eq!(creatives[0].format, Some(AdFormat::SingleImage));
        assert_eq!(creatives[1].format, Some(AdFormat::Carousel));
        assert_eq!(creatives[2].format, Some(AdFormat::SingleImage));
        assert_eq!(
            creatives[0].description,
            "A high-energy, bold, action-driven take on running shoes from Nike."
        );

        assert_eq!(creatives, generator.generate(4, &AdFormat::defaults()).unwrap());
        assert!(generator.generate(2, &[]).is_err());
    }

    #[test]
    fn test_placeholder_text_in_names_is_literal() {
        let generator = ToneTemplateGenerator::new("{product} Labs", "{brand} Mug", Tone::Casual);
        let creatives = generator.generate(3, &[AdFormat::SingleImage]).unwrap();
        assert_eq!(creatives[0].headline, "{product} Labs {brand} Mug");
        assert_eq!(creatives[1].headline, "{brand} Mug by {product} Labs");
        assert_eq!(creatives[2].headline, "Meet the new {product} Labs {brand} Mug");
    }

    #[test]
    fn test_fixture_creatives() {
        let creatives = all_fixture_creatives();
        assert_eq!(creatives.len(), 6);

        assert_eq!(creatives[0].id, "test_creative_1_1");
        assert_eq!(creatives[0].headline, "Nike Running Shoes - Discover Excellence");
        assert_eq!(
            creatives[0].description,
            "Experience the latest running shoes innovation. Premium quality guaranteed."
        );
        assert_eq!(creatives[0].cta, "Explore");

        assert_eq!(creatives[3].id, "test_creative_2_2");
        assert_eq!(creatives[3].headline, "Apple iPhone 15 - Limited Offer");
        assert_eq!(
            creatives[3].description,
            "Get iphone 15 with special pricing. Offer ends soon!"
        );
        assert_eq!(creatives[3].cta, "Learn More");
        assert_eq!(creatives[5].tone, Some(Tone::Casual));
    }
}
