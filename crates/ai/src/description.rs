use std::sync::Arc;

use async_trait::async_trait;

use crate::config::DescriptionConfig;
use crate::error::AiError;
use crate::gemini::GeminiDescriptionGenerator;

/// Returned when no API key is configured.
pub const DISABLED_FALLBACK: &str = "AI description generation is disabled. API key not configured.";

/// Returned when generation was attempted and failed.
pub const FAILED_FALLBACK: &str = "Could not generate AI description at this time.";

/// Produces a short marketing description for a tile name.
///
/// The result is always displayable: generated text or one of the fallback
/// strings. Callers treat both the same way.
#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    async fn describe(&self, name: &str) -> String;
}

#[async_trait]
impl<G> DescriptionGenerator for Arc<G>
where
    G: DescriptionGenerator + ?Sized,
{
    async fn describe(&self, name: &str) -> String {
        (**self).describe(name).await
    }
}

/// Generator used when generation is not configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledDescriptionGenerator;

#[async_trait]
impl DescriptionGenerator for DisabledDescriptionGenerator {
    async fn describe(&self, _name: &str) -> String {
        DISABLED_FALLBACK.to_string()
    }
}

/// Pick the generator for a configuration.
///
/// Missing API key yields the disabled generator (with a warning); a configured
/// key yields the Gemini client.
pub fn generator_from_config(
    config: DescriptionConfig,
) -> Result<Arc<dyn DescriptionGenerator>, AiError> {
    if !config.is_enabled() {
        tracing::warn!("API_KEY not set; AI description generation is disabled");
        return Ok(Arc::new(DisabledDescriptionGenerator));
    }

    tracing::info!(model = %config.model, "AI description generation enabled");
    Ok(Arc::new(GeminiDescriptionGenerator::new(config)?))
}
