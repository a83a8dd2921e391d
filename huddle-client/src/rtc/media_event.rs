use huddle_core::ParticipantName;

/// Completions surfaced by the RTC stack to the session event loop.
#[derive(Debug)]
pub enum MediaEvent {
    /// Local candidate gathering finished; carries the final offer SDP.
    OfferReady { sdp: String },

    /// A remote audio track became available on the local connection.
    RemoteAudio { track_id: String },

    /// The RTC stack reported a dropped connection for a participant.
    Disconnected { name: ParticipantName },
}
