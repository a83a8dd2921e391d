use crate::error::SessionError;
use crate::rtc::MediaEvent;
use async_trait::async_trait;
use huddle_core::ParticipantName;
use tokio::sync::mpsc;

/// One end of a real-time media session with a remote party.
#[async_trait]
pub trait PeerConnection: Send + Sync {
    /// Apply the SDP answer received for this connection's offer.
    async fn set_remote_answer(&self, sdp: String) -> Result<(), SessionError>;

    async fn close(&self) -> Result<(), SessionError>;
}

/// Narrow seam over the platform real-time-communication stack.
///
/// All long-running work (capture acquisition, offer generation, candidate
/// gathering) happens inside the stack; completions come back to the session
/// as [`MediaEvent`]s on the channel handed to the constructors.
#[async_trait]
pub trait RtcStack: Send + Sync + 'static {
    /// Handle to a captured local audio source.
    type Capture: Send;

    /// Acquire microphone audio. Video is never requested.
    async fn acquire_audio(&self) -> Result<Self::Capture, SessionError>;

    /// Create the offer side of the call: a connection configured to receive
    /// audio only, with the captured track attached. Generates an SDP offer
    /// and reports `OfferReady` once candidate gathering completes.
    async fn create_local_peer(
        &self,
        name: &ParticipantName,
        capture: Self::Capture,
        event_tx: mpsc::Sender<MediaEvent>,
    ) -> Result<Box<dyn PeerConnection>, SessionError>;

    /// Create a receive-only connection for a remote participant.
    async fn create_receiver(
        &self,
        name: &ParticipantName,
        event_tx: mpsc::Sender<MediaEvent>,
    ) -> Result<Box<dyn PeerConnection>, SessionError>;
}
