mod participant;
mod room;
mod signaling;

pub use participant::ParticipantName;
pub use room::RoomName;
pub use signaling::SignalMessage;
