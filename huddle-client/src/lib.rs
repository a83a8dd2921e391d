pub mod config;
pub mod error;
pub mod rtc;
pub mod session;
pub mod signaling;

pub use config::ClientConfig;
pub use error::SessionError;
pub use rtc::{
    AudioSink, LogSink, MediaEvent, PeerConnection, RtcStack, TrackCapture, WebRtcStack,
};
pub use session::{Participant, Session, SessionCommand, SessionState};
pub use signaling::{SignalingOutput, WsTransport};
