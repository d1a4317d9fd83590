//! Shared type definitions for the kumpel voice agent platform.
//!
//! This crate holds the foundational voice configuration types used across
//! all kumpel crates: voice profiles, speech speed descriptors, emotion
//! tags, and the placeholder-detection predicate applied to voice
//! identifiers.
//!
//! No crate in the workspace depends on anything *except* `kumpel-types`
//! for cross-cutting type definitions. This keeps the dependency graph
//! clean and prevents circular dependencies.

pub mod voice;

pub use voice::{is_placeholder_voice_id, EmotionTag, SpeechSpeed, SpeedPreset, VoiceProfile};
