//! Per-job voice profile resolution.
//!
//! Maps a job's room name and optional metadata to exactly one profile
//! from the registry. The precedence order is fixed:
//!
//! 1. Room-name convention: the segment after the final `-` in the room
//!    name, when it names a registered profile.
//! 2. Metadata selector: a `personality` or `voice` field in the job
//!    metadata naming a registered profile.
//! 3. The registry's `default` profile.
//!
//! A profile selected by rule 1 or 2 whose voice id turns out to be an
//! unfilled placeholder is replaced by `default`; the registry guarantees
//! at construction time that `default` itself is usable, which makes
//! resolution infallible. Malformed metadata, unknown selector values, and
//! unmatched room names are all normal fallthroughs, never errors.
//!
//! Resolution is pure and synchronous: no I/O, no shared mutable state,
//! identical inputs against an unchanged registry produce identical output.

use crate::metadata::{parse_metadata, MetadataOutcome};
use crate::registry::VoiceRegistry;
use kumpel_types::voice::VoiceProfile;

/// Untrusted per-job input considered by resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionInput {
    /// Room identifier supplied by the session runtime; may be empty.
    pub room_name: String,
    /// Optional metadata blob attached to the job, expected to be JSON
    /// when present but possibly malformed.
    pub raw_metadata: Option<String>,
}

impl ResolutionInput {
    pub fn new(room_name: impl Into<String>, raw_metadata: Option<String>) -> Self {
        Self {
            room_name: room_name.into(),
            raw_metadata,
        }
    }
}

/// Which precedence rule selected the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// The room name's trailing segment named the profile.
    RoomName,
    /// A metadata selector field named the profile.
    Metadata,
    /// Nothing matched; the `default` profile was used.
    Default,
}

/// Record of how one resolution was decided. Observability only — nothing
/// downstream branches on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionTrace {
    /// Rule that produced the final profile.
    pub rule: MatchRule,
    /// Room name that was considered.
    pub room_name: String,
    /// How the metadata blob was classified.
    pub metadata: MetadataOutcome,
    /// Whether the initially selected profile was a placeholder and the
    /// `default` profile was substituted.
    pub placeholder_fallback: bool,
}

/// Outcome of resolving one job.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub profile: VoiceProfile,
    pub trace: ResolutionTrace,
}

/// Extracts the profile name a room name encodes, if any.
///
/// The convention is `<prefix>-<profile>`: the segment after the final
/// hyphen selects a profile (`voice-assistant-room-male` → `male`). A room
/// name without a hyphen encodes nothing.
fn room_name_selector(room_name: &str) -> Option<&str> {
    room_name
        .rsplit_once('-')
        .map(|(_, suffix)| suffix)
        .filter(|suffix| !suffix.is_empty())
}

/// Resolves one job's voice profile against the registry.
///
/// Never fails: every malformed or unrecognized input falls through the
/// precedence chain and lands on the `default` profile at worst.
pub fn resolve(registry: &VoiceRegistry, input: &ResolutionInput) -> Resolution {
    let metadata = parse_metadata(input.raw_metadata.as_deref());

    let (rule, selected) = if let Some(profile) = room_name_selector(&input.room_name)
        .and_then(|name| registry.get(name))
    {
        (MatchRule::RoomName, profile)
    } else if let Some(profile) = match &metadata {
        MetadataOutcome::Selector(name) => registry.get(name),
        _ => None,
    } {
        (MatchRule::Metadata, profile)
    } else {
        (MatchRule::Default, registry.default_profile())
    };

    let placeholder_fallback = selected.has_placeholder_voice();
    let profile = if placeholder_fallback {
        registry.default_profile()
    } else {
        selected
    };

    Resolution {
        profile: profile.clone(),
        trace: ResolutionTrace {
            rule,
            room_name: input.room_name.clone(),
            metadata,
            placeholder_fallback,
        },
    }
}
