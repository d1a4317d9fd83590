use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("LiveKit API error: {0}")]
    LiveKit(#[from] livekit_api::access_token::AccessTokenError),

    #[error("Room service error: {0}")]
    RoomService(String),

    #[error("Invalid voice registry: {0}")]
    Registry(String),

    #[error("Voice profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Agent session error: {0}")]
    Session(String),
}
