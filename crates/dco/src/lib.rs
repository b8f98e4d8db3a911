//! Creative copy generation: index-rotated variations with optional
//! model-written copy, plus fixed tone and fixture templates.

pub mod gemini;
pub mod generator;
pub mod templates;
pub mod textgen;

pub use gemini::GeminiClient;
pub use generator::{CreativeGenerator, GenerationReport};
pub use templates::{describe_tone, ToneTemplateGenerator};
pub use textgen::TextGenerator;
