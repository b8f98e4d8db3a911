use std::sync::Arc;

use creative_core::config::{GeminiConfig, DEFAULT_MAX_COPY_CHARS};
use creative_core::error::{CreativeError, CreativeResult};
use creative_core::types::{AdFormat, CreativeVariation, HookType, VariationStatus};
use tracing::{error, info, warn};

use crate::gemini::GeminiClient;
use crate::textgen::TextGenerator;

/// Produces N creative variations, rotating hook types and formats by index.
///
/// When a [`TextGenerator`] is attached each variation gets model-written
/// copy; otherwise copy comes from [`CreativeGenerator::template_copy`].
pub struct CreativeGenerator {
    account_id: String,
    model: Option<Arc<dyn TextGenerator>>,
    max_copy_chars: usize,
}

/// Variations plus how many of them failed copy generation.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub variations: Vec<CreativeVariation>,
    pub failed: usize,
}

impl GenerationReport {
    pub fn generated(&self) -> usize {
        self.variations.len() - self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

impl CreativeGenerator {
    pub fn new(account_id: impl Into<String>, model: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            account_id: account_id.into(),
            model,
            max_copy_chars: DEFAULT_MAX_COPY_CHARS,
        }
    }

    /// Attach a Gemini client if the config carries an API key.
    pub fn from_config(account_id: impl Into<String>, cfg: &GeminiConfig) -> CreativeResult<Self> {
        let model = GeminiClient::from_config(cfg)?.map(|c| Arc::new(c) as Arc<dyn TextGenerator>);
        Ok(Self::new(account_id, model).with_max_copy_chars(cfg.max_copy_chars))
    }

    pub fn with_max_copy_chars(mut self, max_copy_chars: usize) -> Self {
        self.max_copy_chars = max_copy_chars;
        self
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn uses_model(&self) -> bool {
        self.model.is_some()
    }

    /// Copy used when no model is configured.
    pub fn template_copy(product: &str) -> String {
        format!("Check out {product} today!")
    }

    pub fn build_prompt(&self, product: &str, audience: &str, hook_type: HookType) -> String {
        format!(
            "Generate a compelling {hook} hook for a Meta ad.\n\
             Product: {product}\n\
             Target Audience: {audience}\n\
             \n\
             Requirements:\n\
             - Max {max} characters\n\
             - Include call-to-action\n\
             - Create urgency or curiosity\n\
             - Be specific and benefit-focused\n\
             \n\
             Return ONLY the ad copy, no explanation.",
            hook = hook_type,
            max = self.max_copy_chars,
        )
    }

    /// Copy for one hook. Errors only when the model call fails.
    pub async fn generate_copy(
        &self,
        product: &str,
        audience: &str,
        hook_type: HookType,
    ) -> CreativeResult<String> {
        let Some(model) = &self.model else {
            return Ok(Self::template_copy(product));
        };

        let prompt = self.build_prompt(product, audience, hook_type);
        let copy = model.generate(&prompt).await?;
        let chars = copy.chars().count();
        if chars > self.max_copy_chars {
            warn!(
                model = model.name(),
                %hook_type,
                chars,
                limit = self.max_copy_chars,
                "generated copy exceeds advisory length"
            );
        }
        Ok(copy)
    }

    /// Generate `count` variations. Variation `i` uses hook
    /// `HookType::ALL[i % 5]` and format `formats[i % formats.len()]`.
    ///
    /// A failed model call leaves `copy` empty and marks the variation
    /// failed; the loop carries on with the next one.
    pub async fn generate_variations(
        &self,
        product: &str,
        audience: &str,
        count: usize,
        formats: &[AdFormat],
    ) -> CreativeResult<GenerationReport> {
        if formats.is_empty() {
            return Err(CreativeError::Validation(
                "at least one ad format is required".to_string(),
            ));
        }

        info!(
            account_id = %self.account_id,
            product,
            count,
            ai = self.uses_model(),
            "generating creative variations"
        );

        let mut variations = Vec::with_capacity(count);
        let mut failed = 0;

        for i in 0..count {
            let hook_type = HookType::ALL[i % HookType::ALL.len()];
            let format = formats[i % formats.len()];
            let variation_id = format!("v_{}", i + 1);

            let (copy, status) = match self.generate_copy(product, audience, hook_type).await {
                Ok(copy) => (Some(copy), VariationStatus::Generated),
                Err(e) => {
                    error!(%variation_id, %hook_type, error = %e, "copy generation failed");
                    failed += 1;
                    (None, VariationStatus::Failed)
                }
            };

            variations.push(CreativeVariation {
                variation_id,
                product: product.to_string(),
                audience: audience.to_string(),
                hook_type,
                format,
                copy,
                status,
            });
        }

        info!(total = variations.len(), failed, "variation generation complete");
        Ok(GenerationReport { variations, failed })
    }
}
