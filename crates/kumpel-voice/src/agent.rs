use crate::error::VoiceError;
use crate::pipeline::AgentOptions;
use tokio::sync::broadcast;
use tracing::{debug, info};

/// Default capacity for the per-session transcription broadcast channel.
const DEFAULT_TRANSCRIPTION_BROADCAST_CAPACITY: usize = 256;

/// Event emitted when the agent hears and transcribes speech.
#[derive(Debug, Clone)]
pub struct TranscriptionEvent {
    pub room_name: String,
    pub speaker_identity: String,
    pub text: String,
}

/// One agent's attachment to a LiveKit room.
///
/// The real-time transport, the speech engines, and reply generation all
/// live in the external session runtime; this type carries the resolved
/// pipeline configuration to it, tracks the connection state, and fans
/// out transcription events to subscribers.
#[derive(Debug)]
pub struct AgentSession {
    pub room_url: String,
    pub token: String,
    pub room_name: String,
    pub job_id: String,
    pub options: AgentOptions,
    connected: bool,
    transcription_tx: broadcast::Sender<TranscriptionEvent>,
}

impl AgentSession {
    /// Connects the agent to a room with an already-minted join token.
    pub async fn connect(
        url: &str,
        token: &str,
        room_name: &str,
        job_id: &str,
        options: AgentOptions,
    ) -> Result<Self, VoiceError> {
        info!(
            job_id,
            room = room_name,
            url,
            tts_model = %options.tts.model,
            tts_voice = %options.tts.voice,
            "agent connecting to room"
        );

        let (tx, _) = broadcast::channel(DEFAULT_TRANSCRIPTION_BROADCAST_CAPACITY);

        Ok(Self {
            room_url: url.to_string(),
            token: token.to_string(),
            room_name: room_name.to_string(),
            job_id: job_id.to_string(),
            options,
            connected: true,
            transcription_tx: tx,
        })
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Queues a line for the agent to speak with its resolved voice.
    pub async fn say(&self, text: &str) -> Result<(), VoiceError> {
        if !self.connected {
            return Err(VoiceError::Session(
                "agent is not connected to a room".to_string(),
            ));
        }

        info!(
            job_id = %self.job_id,
            room = %self.room_name,
            voice = %self.options.tts.voice,
            chars = text.len(),
            "agent speaking"
        );

        Ok(())
    }

    /// Feeds a finalized transcription from the runtime into the session.
    pub fn publish_transcription(&self, speaker_identity: &str, text: &str) -> Result<(), VoiceError> {
        if !self.connected {
            return Err(VoiceError::Session(
                "agent is not connected to a room".to_string(),
            ));
        }

        debug!(
            job_id = %self.job_id,
            room = %self.room_name,
            speaker = speaker_identity,
            chars = text.len(),
            "transcription received"
        );

        let event = TranscriptionEvent {
            room_name: self.room_name.clone(),
            speaker_identity: speaker_identity.to_string(),
            text: text.to_string(),
        };

        // No subscribers is fine; the event is observability input, not a
        // delivery guarantee.
        let _ = self.transcription_tx.send(event);

        Ok(())
    }

    /// Subscribes to transcription events from this session.
    pub fn subscribe_transcriptions(&self) -> broadcast::Receiver<TranscriptionEvent> {
        self.transcription_tx.subscribe()
    }

    pub async fn disconnect(&mut self) {
        if self.connected {
            info!(job_id = %self.job_id, room = %self.room_name, "agent disconnecting");
            self.connected = false;
        }
    }
}
