mod participant;
mod session;
mod session_command;

pub use participant::Participant;
pub use session::{Session, SessionState};
pub use session_command::SessionCommand;
