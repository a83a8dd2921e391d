use async_trait::async_trait;
use huddle_core::{ParticipantName, RoomName};

/// Outbound half of the signaling channel, as seen by the session.
///
/// Sends are fire-and-forget: a send on a closed channel is dropped with a
/// warning, never surfaced as an error.
#[async_trait]
pub trait SignalingOutput: Send + Sync {
    /// Send the joinRoom request carrying the local SDP offer.
    async fn send_join(&self, name: ParticipantName, room: RoomName, sdp_offer: String);

    /// Send the leaveRoom notification.
    async fn send_leave(&self);

    /// Close the underlying transport.
    async fn close(&self);
}
