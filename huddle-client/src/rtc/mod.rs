mod media_event;
mod peer;
mod rtc_peer;
mod sink;
mod track_capture;

pub use media_event::MediaEvent;
pub use peer::{PeerConnection, RtcStack};
pub use rtc_peer::{RtcPeer, WebRtcStack};
pub use sink::{AudioSink, LogSink};
pub use track_capture::TrackCapture;
