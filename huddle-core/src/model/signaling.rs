use crate::model::participant::ParticipantName;
use crate::model::room::RoomName;
use serde::{Deserialize, Serialize};

/// Control messages exchanged with the signaling server as JSON text frames.
///
/// The wire format tags each message with an `id` field; payload fields are
/// camelCase except for the `answer_sdp` kind, which is snake_case on both
/// the tag and the field. Unknown kinds fail deserialization and are dropped
/// by the transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "id")]
pub enum SignalMessage {
    /// Request to join a room, carrying the local SDP offer.
    #[serde(rename = "joinRoom", rename_all = "camelCase")]
    JoinRoom {
        name: ParticipantName,
        room: RoomName,
        sdp_offer: String,
    },

    /// Notification that the local participant is leaving.
    #[serde(rename = "leaveRoom")]
    LeaveRoom,

    /// Roster of participants already in the room, sent to a new joiner.
    #[serde(rename = "existingParticipants")]
    ExistingParticipants { data: Vec<ParticipantName> },

    /// A new participant entered the room.
    #[serde(rename = "newParticipantArrived")]
    NewParticipantArrived { name: ParticipantName },

    /// A participant left the room.
    #[serde(rename = "participantLeft")]
    ParticipantLeft { name: ParticipantName },

    /// SDP answer for a specific remote participant's connection.
    #[serde(rename = "receiveVideoAnswer", rename_all = "camelCase")]
    ReceiveVideoAnswer {
        name: ParticipantName,
        sdp_answer: String,
    },

    /// SDP answer for the local offer sent in `joinRoom`.
    #[serde(rename = "answer_sdp")]
    AnswerSdp { answer_sdp: String },
}
