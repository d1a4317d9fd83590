use kumpel_voice::{
    AgentOptions, AgentSession, LiveKitConfig, RoomService, SynthesisOptions, VoiceError,
    VoiceRegistry,
};

const DEFAULT_URL: &str = "http://localhost:7880";
const DEFAULT_KEY: &str = "devkey";
const DEFAULT_SECRET: &str = "secret";

fn options() -> AgentOptions {
    let registry = VoiceRegistry::builtin();
    AgentOptions::new(
        "You are a supportive voice companion.",
        "Cześć! Jak mogę Ci dzisiaj pomóc?",
        SynthesisOptions::from(registry.default_profile()),
    )
}

#[test]
fn agent_join_token_is_minted() {
    let config = LiveKitConfig::new(DEFAULT_URL, DEFAULT_KEY, DEFAULT_SECRET);
    let service = RoomService::new(config);

    let token = service
        .agent_join_token("voice-assistant-room-1")
        .expect("failed to generate token");

    assert!(!token.is_empty());
}

#[test]
fn join_token_carries_publish_and_subscribe_grants() {
    use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
    use serde::Deserialize;

    let config = LiveKitConfig::new(DEFAULT_URL, DEFAULT_KEY, DEFAULT_SECRET);
    let service = RoomService::new(config);

    let token = service
        .join_token("perm-room", "user-perm", "Perm User")
        .expect("failed to generate token");

    #[derive(Deserialize)]
    struct Claims {
        video: VideoClaims,
    }

    #[derive(Deserialize)]
    struct VideoClaims {
        #[serde(rename = "canPublish")]
        can_publish: bool,
        #[serde(rename = "canSubscribe")]
        can_subscribe: bool,
        #[serde(rename = "roomJoin")]
        room_join: bool,
    }

    let validation = Validation::new(Algorithm::HS256);
    let key = DecodingKey::from_secret(DEFAULT_SECRET.as_bytes());
    let token_data = decode::<Claims>(&token, &key, &validation).expect("failed to decode token");

    assert!(token_data.claims.video.can_publish, "canPublish should be true");
    assert!(token_data.claims.video.can_subscribe, "canSubscribe should be true");
    assert!(token_data.claims.video.room_join, "roomJoin should be true");
}

#[test]
fn service_disabled_without_url() {
    let service = RoomService::new(LiveKitConfig::default());
    assert!(!service.is_enabled());
}

#[tokio::test]
async fn agent_session_lifecycle() {
    let mut session = AgentSession::connect(
        DEFAULT_URL,
        "a-token",
        "voice-assistant-room-1",
        "job-1",
        options(),
    )
    .await
    .expect("connect failed");

    assert!(session.is_connected());
    session.say("Cześć!").await.expect("say failed");

    session.disconnect().await;
    assert!(!session.is_connected());

    match session.say("dropped").await {
        Err(VoiceError::Session(msg)) => assert!(msg.contains("not connected")),
        other => panic!("expected Session error, got {:?}", other),
    }
}

#[tokio::test]
async fn transcriptions_reach_subscribers() {
    let session = AgentSession::connect(DEFAULT_URL, "a-token", "room-x", "job-2", options())
        .await
        .expect("connect failed");

    let mut rx = session.subscribe_transcriptions();
    session
        .publish_transcription("user-123", "dzień dobry")
        .expect("publish failed");

    let event = rx.try_recv().expect("no event delivered");
    assert_eq!(event.room_name, "room-x");
    assert_eq!(event.speaker_identity, "user-123");
    assert_eq!(event.text, "dzień dobry");
}
