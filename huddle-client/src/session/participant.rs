use crate::rtc::{AudioSink, PeerConnection};
use huddle_core::ParticipantName;
use std::sync::Arc;

/// One tracked room member: the local participant or a remote one.
///
/// Owns the peer-connection handle and a reference to the rendering target
/// for incoming audio. Created on arrival notification or local join,
/// destroyed on leave notification or room exit.
pub struct Participant {
    pub name: ParticipantName,
    pub peer: Box<dyn PeerConnection>,
    pub sink: Arc<dyn AudioSink>,
}

impl Participant {
    pub fn new(
        name: ParticipantName,
        peer: Box<dyn PeerConnection>,
        sink: Arc<dyn AudioSink>,
    ) -> Self {
        Self { name, peer, sink }
    }
}
