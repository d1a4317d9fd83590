//! Voice profile definitions.
//!
//! This module defines the types for configuring speech synthesis for
//! agents. A `VoiceProfile` maps a logical name to a specific TTS model and
//! its parameters. Profiles are declared in static configuration and are
//! never mutated after startup; the resolver in `kumpel-voice` selects one
//! per incoming job.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Symbolic speech rate presets accepted by the synthesis backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedPreset {
    Slowest,
    Slow,
    #[default]
    Normal,
    Fast,
    Fastest,
}

impl fmt::Display for SpeedPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Slowest => "slowest",
            Self::Slow => "slow",
            Self::Normal => "normal",
            Self::Fast => "fast",
            Self::Fastest => "fastest",
        };
        f.write_str(s)
    }
}

/// Speech rate for a voice profile.
///
/// Source configurations use two interchangeable forms: a symbolic preset
/// (`"slow"`) or a numeric multiplier (`0.9`, where `1.0` is normal). Both
/// are kept as written and passed through to the synthesis backend verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpeechSpeed {
    /// Named rate, e.g. `"slow"`.
    Preset(SpeedPreset),
    /// Rate multiplier, `1.0` is normal speed.
    Multiplier(f32),
}

impl Default for SpeechSpeed {
    fn default() -> Self {
        Self::Preset(SpeedPreset::Normal)
    }
}

impl fmt::Display for SpeechSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(p) => p.fmt(f),
            Self::Multiplier(m) => m.fmt(f),
        }
    }
}

/// Error returned when an emotion tag does not have the `<emotion>:<intensity>` shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed emotion tag '{0}': expected '<emotion>:<intensity>'")]
pub struct EmotionTagError(pub String);

/// A single emotion directive for the synthesis backend.
///
/// Tags have the shape `<emotion>:<intensity>` (e.g. `"positivity:high"`).
/// Only the shape is validated; the emotion and intensity vocabularies are
/// owned by the backend and passed through verbatim, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmotionTag(String);

impl EmotionTag {
    /// Parses a tag, accepting only the `<emotion>:<intensity>` shape with
    /// a non-empty value on each side of a single colon.
    pub fn parse(tag: &str) -> Result<Self, EmotionTagError> {
        let mut parts = tag.splitn(2, ':');
        match (parts.next(), parts.next()) {
            (Some(emotion), Some(intensity))
                if !emotion.trim().is_empty()
                    && !intensity.trim().is_empty()
                    && !intensity.contains(':') =>
            {
                Ok(Self(tag.to_string()))
            }
            _ => Err(EmotionTagError(tag.to_string())),
        }
    }

    /// Returns the tag exactly as declared.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for EmotionTag {
    type Err = EmotionTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EmotionTag {
    type Error = EmotionTagError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<EmotionTag> for String {
    fn from(tag: EmotionTag) -> Self {
        tag.0
    }
}

impl fmt::Display for EmotionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A voice profile configuration.
///
/// Defines how an agent's voice sounds. Profiles are identified by `name`
/// within the registry and the remaining fields are handed to the synthesis
/// backend unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceProfile {
    /// Registry key, unique among all profiles (e.g. `default`, `male`, `female`).
    pub name: String,
    /// TTS model identifier (e.g. `sonic-2`).
    pub model: String,
    /// Synthetic voice identifier, opaque to this platform.
    pub voice_id: String,
    /// Speech rate, symbolic or numeric.
    #[serde(default)]
    pub speed: SpeechSpeed,
    /// IETF language tag (e.g. `pl`).
    pub language: String,
    /// Ordered emotion directives, passed through verbatim.
    #[serde(default)]
    pub emotion: Vec<EmotionTag>,
}

impl VoiceProfile {
    /// Whether this profile's voice id is an unfilled template value.
    pub fn has_placeholder_voice(&self) -> bool {
        is_placeholder_voice_id(&self.voice_id)
    }
}

/// Detects configuration values that were never replaced with a real voice
/// identifier.
///
/// Recognized sentinel shapes, all of which occur in shipped configuration
/// templates:
/// - empty or whitespace-only values
/// - `YOUR_..._HERE` uppercase template markers (e.g. `YOUR_VOICE_ID_HERE`)
/// - angle-bracketed values (e.g. `<voice-id>`)
pub fn is_placeholder_voice_id(voice_id: &str) -> bool {
    let v = voice_id.trim();
    if v.is_empty() {
        return true;
    }
    if v.starts_with("YOUR_") && v.ends_with("_HERE") {
        return true;
    }
    v.starts_with('<') && v.ends_with('>')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emotion_tag_accepts_well_formed() {
        for tag in ["positivity:high", "curiosity:low", "surprise:high"] {
            assert_eq!(EmotionTag::parse(tag).unwrap().as_str(), tag);
        }
    }

    #[test]
    fn emotion_tag_rejects_malformed() {
        for tag in ["", "positivity", ":high", "positivity:", "a:b:c", "  :  "] {
            assert!(EmotionTag::parse(tag).is_err(), "should reject {:?}", tag);
        }
    }

    #[test]
    fn emotion_tag_order_preserved_through_serde() {
        let tags: Vec<EmotionTag> =
            serde_json::from_str(r#"["surprise:high", "curiosity:low"]"#).unwrap();
        assert_eq!(tags[0].as_str(), "surprise:high");
        assert_eq!(tags[1].as_str(), "curiosity:low");
    }

    #[test]
    fn speed_deserializes_from_both_forms() {
        let symbolic: SpeechSpeed = serde_json::from_str(r#""slow""#).unwrap();
        assert_eq!(symbolic, SpeechSpeed::Preset(SpeedPreset::Slow));

        let numeric: SpeechSpeed = serde_json::from_str("0.9").unwrap();
        assert_eq!(numeric, SpeechSpeed::Multiplier(0.9));
    }

    #[test]
    fn speed_round_trips_verbatim() {
        assert_eq!(
            serde_json::to_string(&SpeechSpeed::Preset(SpeedPreset::Slow)).unwrap(),
            r#""slow""#
        );
        assert_eq!(serde_json::to_string(&SpeechSpeed::Multiplier(0.9)).unwrap(), "0.9");
    }

    #[test]
    fn profile_deserializes_from_toml() {
        let profile: VoiceProfile = toml::from_str(
            r#"
            name = "female"
            model = "sonic-2-2025-05-08"
            voice_id = "575a5d29-1fdc-4d4e-9afa-5a9a71759864"
            speed = "slow"
            language = "pl"
            emotion = ["curiosity:low", "positivity:high"]
            "#,
        )
        .unwrap();
        assert_eq!(profile.name, "female");
        assert_eq!(profile.speed, SpeechSpeed::Preset(SpeedPreset::Slow));
        assert_eq!(profile.emotion.len(), 2);
    }

    #[test]
    fn placeholder_predicate() {
        assert!(is_placeholder_voice_id(""));
        assert!(is_placeholder_voice_id("   "));
        assert!(is_placeholder_voice_id("YOUR_VOICE_ID_HERE"));
        assert!(is_placeholder_voice_id("YOUR_CARTESIA_VOICE_ID_HERE"));
        assert!(is_placeholder_voice_id("<voice-id>"));

        assert!(!is_placeholder_voice_id("575a5d29-1fdc-4d4e-9afa-5a9a71759864"));
        assert!(!is_placeholder_voice_id("YOUR_VOICE"));
        assert!(!is_placeholder_voice_id("alloy"));
    }
}
