use huddle_core::{ParticipantName, RoomName};

/// Local user actions fed into the session loop.
#[derive(Debug)]
pub enum SessionCommand {
    /// Join a room under the given display name.
    Register {
        name: ParticipantName,
        room: RoomName,
    },

    /// Leave the current room and end the session.
    Leave,
}
