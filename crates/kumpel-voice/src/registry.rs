//! The fixed set of voice profiles available to a worker.
//!
//! The registry is built once at process start from static configuration
//! and is read-only afterwards. Construction validates the one invariant
//! request-time resolution relies on: the `default` profile exists and is
//! usable (not an unfilled template). A registry that fails validation is
//! a configuration defect and the worker must not start.

use crate::error::VoiceError;
use kumpel_types::voice::{EmotionTag, SpeechSpeed, SpeedPreset, VoiceProfile};
use std::collections::HashMap;

/// Name of the profile every resolution can fall back to.
pub const DEFAULT_PROFILE: &str = "default";

/// Immutable mapping from profile name to voice profile.
#[derive(Debug, Clone)]
pub struct VoiceRegistry {
    profiles: HashMap<String, VoiceProfile>,
}

impl VoiceRegistry {
    /// Builds a registry from a list of profiles, validating it.
    ///
    /// # Errors
    ///
    /// Returns `VoiceError::Registry` if two profiles share a name, if no
    /// `default` profile is present, or if the `default` profile's voice id
    /// is an unfilled placeholder.
    pub fn new(profiles: Vec<VoiceProfile>) -> Result<Self, VoiceError> {
        let mut map = HashMap::with_capacity(profiles.len());
        for profile in profiles {
            if map.contains_key(&profile.name) {
                return Err(VoiceError::Registry(format!(
                    "duplicate profile name '{}'",
                    profile.name
                )));
            }
            map.insert(profile.name.clone(), profile);
        }

        let default = map.get(DEFAULT_PROFILE).ok_or_else(|| {
            VoiceError::Registry(format!("missing required '{}' profile", DEFAULT_PROFILE))
        })?;

        if default.has_placeholder_voice() {
            return Err(VoiceError::Registry(format!(
                "'{}' profile has a placeholder voice id '{}' — fill in a real voice identifier",
                DEFAULT_PROFILE, default.voice_id
            )));
        }

        Ok(Self { profiles: map })
    }

    /// The built-in profile set shipped with the worker.
    ///
    /// Configuration may replace this set entirely via `[[profiles]]`
    /// tables; the same validation applies either way.
    pub fn builtin() -> Self {
        let profiles = vec![
            VoiceProfile {
                name: "default".to_string(),
                model: "sonic-2".to_string(),
                voice_id: "3d335974-4c4a-400a-84dc-ebf4b73aada6".to_string(),
                speed: SpeechSpeed::Multiplier(0.9),
                language: "pl".to_string(),
                emotion: vec![
                    EmotionTag::parse("curiosity:medium").expect("valid builtin tag"),
                    EmotionTag::parse("positivity:high").expect("valid builtin tag"),
                ],
            },
            VoiceProfile {
                name: "female".to_string(),
                model: "sonic-2-2025-05-08".to_string(),
                voice_id: "575a5d29-1fdc-4d4e-9afa-5a9a71759864".to_string(),
                speed: SpeechSpeed::Preset(SpeedPreset::Slow),
                language: "pl".to_string(),
                emotion: vec![
                    EmotionTag::parse("curiosity:low").expect("valid builtin tag"),
                    EmotionTag::parse("positivity:high").expect("valid builtin tag"),
                    EmotionTag::parse("surprise:high").expect("valid builtin tag"),
                ],
            },
            VoiceProfile {
                name: "male".to_string(),
                model: "sonic-2".to_string(),
                voice_id: "da05e96d-ca10-4220-9042-d8acef654fa9".to_string(),
                speed: SpeechSpeed::Preset(SpeedPreset::Normal),
                language: "pl".to_string(),
                emotion: vec![EmotionTag::parse("positivity:medium").expect("valid builtin tag")],
            },
        ];

        Self::new(profiles).expect("builtin profile set must validate")
    }

    /// Looks up a profile by name.
    pub fn get(&self, name: &str) -> Option<&VoiceProfile> {
        self.profiles.get(name)
    }

    /// The profile resolution falls back to. Guaranteed present by
    /// construction.
    pub fn default_profile(&self) -> &VoiceProfile {
        self.profiles
            .get(DEFAULT_PROFILE)
            .expect("registry invariant: default profile always present")
    }

    /// Whether a profile with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// Number of registered profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Iterates over all registered profiles in no particular order.
    pub fn profiles(&self) -> impl Iterator<Item = &VoiceProfile> {
        self.profiles.values()
    }
}
