//! Pass-through configuration for the rest of the agent pipeline.
//!
//! The speech-to-text, language-model, and voice-activity-detection
//! engines are external collaborators; the worker only hands them these
//! records. Defaults mirror the values the production agents run with.

use crate::synthesis::SynthesisOptions;
use serde::{Deserialize, Serialize};

/// Speech-to-text engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SttOptions {
    pub model: String,
    pub language: String,
    pub interim_results: bool,
    pub smart_format: bool,
    pub punctuate: bool,
}

impl Default for SttOptions {
    fn default() -> Self {
        Self {
            model: "nova-2-general".to_string(),
            language: "pl".to_string(),
            interim_results: true,
            smart_format: true,
            punctuate: true,
        }
    }
}

/// Language-model configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmOptions {
    pub model: String,
    pub temperature: f32,
}

impl Default for LlmOptions {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
        }
    }
}

/// Voice-activity detection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VadOptions {
    pub enabled: bool,
}

impl Default for VadOptions {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Everything the session runtime needs to run one agent: the instruction
/// prompt plus the four engine configurations. The TTS part comes from the
/// per-job profile resolution; the rest is static.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentOptions {
    pub instructions: String,
    pub greeting: String,
    pub stt: SttOptions,
    pub llm: LlmOptions,
    pub tts: SynthesisOptions,
    pub vad: VadOptions,
}

impl AgentOptions {
    pub fn new(
        instructions: impl Into<String>,
        greeting: impl Into<String>,
        tts: SynthesisOptions,
    ) -> Self {
        Self {
            instructions: instructions.into(),
            greeting: greeting.into(),
            stt: SttOptions::default(),
            llm: LlmOptions::default(),
            tts,
            vad: VadOptions::default(),
        }
    }
}
