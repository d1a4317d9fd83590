//! Synthesis backend configuration contract.
//!
//! The speech-synthesis collaborator constructs its engine from exactly
//! these fields under exactly these names. A resolved `VoiceProfile` maps
//! onto them verbatim — no normalization, no reordering of emotion tags.

use kumpel_types::voice::{EmotionTag, SpeechSpeed, VoiceProfile};
use serde::{Deserialize, Serialize};

/// Configuration record handed to the synthesis backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisOptions {
    pub model: String,
    pub voice: String,
    pub speed: SpeechSpeed,
    pub language: String,
    pub emotion: Vec<EmotionTag>,
}

impl From<&VoiceProfile> for SynthesisOptions {
    fn from(profile: &VoiceProfile) -> Self {
        Self {
            model: profile.model.clone(),
            voice: profile.voice_id.clone(),
            speed: profile.speed,
            language: profile.language.clone(),
            emotion: profile.emotion.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kumpel_types::voice::SpeedPreset;

    #[test]
    fn fields_pass_through_verbatim() {
        let profile = VoiceProfile {
            name: "female".to_string(),
            model: "sonic-2-2025-05-08".to_string(),
            voice_id: "575a5d29-1fdc-4d4e-9afa-5a9a71759864".to_string(),
            speed: SpeechSpeed::Preset(SpeedPreset::Slow),
            language: "pl".to_string(),
            emotion: vec![
                EmotionTag::parse("curiosity:low").unwrap(),
                EmotionTag::parse("positivity:high").unwrap(),
            ],
        };

        let options = SynthesisOptions::from(&profile);
        assert_eq!(options.model, profile.model);
        assert_eq!(options.voice, profile.voice_id);
        assert_eq!(options.speed, profile.speed);
        assert_eq!(options.language, profile.language);
        assert_eq!(options.emotion, profile.emotion);
    }

    #[test]
    fn serializes_under_backend_field_names() {
        let profile = VoiceProfile {
            name: "default".to_string(),
            model: "sonic-2".to_string(),
            voice_id: "3d335974-4c4a-400a-84dc-ebf4b73aada6".to_string(),
            speed: SpeechSpeed::Multiplier(0.9),
            language: "pl".to_string(),
            emotion: vec![EmotionTag::parse("positivity:high").unwrap()],
        };

        let json = serde_json::to_value(SynthesisOptions::from(&profile)).unwrap();
        assert_eq!(json["model"], "sonic-2");
        assert_eq!(json["voice"], "3d335974-4c4a-400a-84dc-ebf4b73aada6");
        assert!(json["speed"].is_number());
        assert_eq!(json["language"], "pl");
        assert_eq!(json["emotion"][0], "positivity:high");
    }
}
