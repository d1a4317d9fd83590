//! Kumpel worker binary — attaches one voice agent to a LiveKit room.
//!
//! Starts with structured logging, loads configuration, validates the
//! voice registry (fatal on misconfiguration), resolves the voice profile
//! for the configured job, and runs the agent session until SIGTERM/SIGINT.

mod config;
mod prompts;

use kumpel_voice::{
    resolve, AgentOptions, AgentSession, ResolutionInput, RoomService, SynthesisOptions,
    VoiceRegistry,
};
use tracing_subscriber::EnvFilter;

fn resolve_config_path() -> (Option<String>, &'static str) {
    if let Some(path) = std::env::args()
        .nth(1)
        .filter(|value| !value.trim().is_empty())
    {
        return (Some(path), "cli-arg");
    }

    if let Ok(path) = std::env::var("KUMPEL_CONFIG_PATH") {
        if !path.trim().is_empty() {
            return (Some(path), "env-var");
        }
    }

    (None, "default")
}

#[tokio::main]
async fn main() {
    let (resolved_config_path, config_source) = resolve_config_path();
    let selected_config_path = resolved_config_path.as_deref().or(Some("kumpel.toml"));

    // Load configuration
    let config = config::load_config(selected_config_path)
        .expect("failed to load configuration — the worker cannot start without valid config");

    // Initialize tracing
    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.logging.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!(
        source = config_source,
        path = selected_config_path.unwrap_or("<none>"),
        "resolved startup configuration path"
    );

    // Build the voice registry. An unusable registry is a configuration
    // defect and the one fatal condition here; it must surface at startup,
    // never at job time.
    let registry = match config.profiles.clone() {
        Some(profiles) => VoiceRegistry::new(profiles)
            .expect("invalid [[profiles]] configuration — fix the profile set before starting"),
        None => VoiceRegistry::builtin(),
    };
    tracing::info!(profiles = registry.len(), "voice registry validated");

    let service = RoomService::new(config.livekit.clone());
    if !service.is_enabled() {
        tracing::warn!("livekit.url is empty; set it in config or KUMPEL_LIVEKIT_URL");
    }

    let job = &config.job;
    tracing::info!(job_id = %job.id, room = %job.room, "job received, resolving voice profile");

    // Per-job voice resolution. Never fails; worst case is the default
    // profile.
    let input = ResolutionInput::new(job.room.clone(), job.metadata.clone());
    let resolution = resolve(&registry, &input);
    tracing::info!(
        job_id = %job.id,
        profile = %resolution.profile.name,
        rule = ?resolution.trace.rule,
        metadata = ?resolution.trace.metadata,
        placeholder_fallback = resolution.trace.placeholder_fallback,
        "voice profile resolved"
    );

    let options = AgentOptions::new(
        prompts::instructions(&resolution.profile.name),
        prompts::greeting(&resolution.profile.name),
        SynthesisOptions::from(&resolution.profile),
    );

    let token = match service.agent_join_token(&job.room) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(job_id = %job.id, error = %e, "failed to mint join token");
            return;
        }
    };

    let mut session =
        match AgentSession::connect(service.url(), &token, &job.room, &job.id, options).await {
            Ok(session) => session,
            Err(e) => {
                tracing::error!(job_id = %job.id, error = %e, "failed to connect to room");
                return;
            }
        };

    let greeting = session.options.greeting.clone();
    if let Err(e) = session.say(&greeting).await {
        tracing::error!(job_id = %job.id, error = %e, "failed to send greeting");
    }

    tracing::info!(job_id = %job.id, room = %job.room, "agent session running");
    shutdown_signal().await;

    session.disconnect().await;
    tracing::info!(job_id = %job.id, "kumpel worker shut down");
}

/// Waits for a SIGINT (Ctrl+C) or SIGTERM signal for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { tracing::info!("received SIGINT, initiating graceful shutdown"); }
        () = terminate => { tracing::info!("received SIGTERM, initiating graceful shutdown"); }
    }
}
