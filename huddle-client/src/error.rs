use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("signaling transport error: {0}")]
    Transport(String),

    #[error("media capture failed: {0}")]
    Capture(String),

    #[error("rtc stack error: {0}")]
    Rtc(#[from] webrtc::Error),
}
