//! Text-generation capability.
//!
//! The generator only needs `prompt -> copy`. Anything that can answer a
//! prompt (a hosted model, a canned script in tests) plugs in here.

use async_trait::async_trait;
use creative_core::error::CreativeResult;
#[cfg(any(test, feature = "test-util"))]
use creative_core::error::CreativeError;
#[cfg(any(test, feature = "test-util"))]
use std::collections::VecDeque;
#[cfg(any(test, feature = "test-util"))]
use std::sync::Mutex;

/// A source of model-written ad copy.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Answer one prompt. Errors are per-call; callers decide whether the
    /// batch continues.
    async fn generate(&self, prompt: &str) -> CreativeResult<String>;
}

/// Replays queued answers in order and records every prompt it was sent.
/// Once the queue is empty every call fails. Test builds only; downstream
/// crates opt in with the `test-util` feature.
#[cfg(any(test, feature = "test-util"))]
#[derive(Default)]
pub struct ScriptedTextGenerator {
    answers: Mutex<VecDeque<Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
}

#[cfg(any(test, feature = "test-util"))]
impl ScriptedTextGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()))
    }

    pub fn fail(self, reason: impl Into<String>) -> Self {
        self.push(Err(reason.into()))
    }

    fn push(self, entry: Result<String, String>) -> Self {
        self.answers
            .lock()
            .expect("scripted generator mutex poisoned")
            .push_back(entry);
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .expect("scripted generator mutex poisoned")
            .clone()
    }
}

#[cfg(any(test, feature = "test-util"))]
#[async_trait]
impl TextGenerator for ScriptedTextGenerator {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, prompt: &str) -> CreativeResult<String> {
        self.prompts
            .lock()
            .expect("scripted generator mutex poisoned")
            .push(prompt.to_string());

        let next = self
            .answers
            .lock()
            .expect("scripted generator mutex poisoned")
            .pop_front();

        match next {
            Some(Ok(text)) => Ok(text),
            Some(Err(reason)) => Err(CreativeError::TextGeneration(reason)),
            None => Err(CreativeError::TextGeneration(
                "no scripted answer left".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_answers_in_order_then_fails() {
        let scripted = ScriptedTextGenerator::new().answer("first").fail("quota");
        assert_eq!(scripted.generate("a").await.unwrap(), "first");
        assert!(matches!(
            scripted.generate("b").await,
            Err(CreativeError::TextGeneration(reason)) if reason == "quota"
        ));
        assert!(scripted.generate("c").await.is_err());
        assert_eq!(scripted.prompts(), vec!["a", "b", "c"]);
    }
}
