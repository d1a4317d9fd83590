//! Voice pipeline configuration for the kumpel platform.
//!
//! A kumpel worker attaches a conversational agent (STT → LLM → TTS, with
//! voice-activity detection) to a LiveKit room. Which synthetic voice the
//! agent speaks with is decided per job by the resolver in this crate:
//! given the room name and the job's optional metadata blob, it picks one
//! profile from an immutable, validated registry with a fixed precedence
//! and fallback order, and never fails at request time.
//!
//! The speech engines themselves are external collaborators; this crate
//! only produces the configuration records they consume and handles the
//! room/session plumbing around them.

pub mod agent;
pub mod config;
pub mod error;
pub mod metadata;
pub mod pipeline;
pub mod registry;
pub mod resolver;
pub mod service;
pub mod synthesis;

pub use agent::{AgentSession, TranscriptionEvent};
pub use config::LiveKitConfig;
pub use error::VoiceError;
pub use metadata::MetadataOutcome;
pub use pipeline::{AgentOptions, LlmOptions, SttOptions, VadOptions};
pub use registry::VoiceRegistry;
pub use resolver::{resolve, MatchRule, Resolution, ResolutionInput, ResolutionTrace};
pub use service::RoomService;
pub use synthesis::SynthesisOptions;
