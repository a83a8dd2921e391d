pub mod model;

pub use model::{ParticipantName, RoomName, SignalMessage};
