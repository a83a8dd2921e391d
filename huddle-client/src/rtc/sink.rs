use huddle_core::ParticipantName;
use tracing::info;

/// Rendering target for incoming audio, the playback-element analog of a
/// browser client.
pub trait AudioSink: Send + Sync {
    fn play(&self, source: &ParticipantName, track_id: &str);
}

/// Sink that only reports the stream. A real frontend would route the track's
/// samples to an output device here.
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&self, source: &ParticipantName, track_id: &str) {
        info!("Remote audio from {} available (track {})", source, track_id);
    }
}
