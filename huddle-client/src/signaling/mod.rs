mod signaling_output;
mod ws_transport;

pub use signaling_output::SignalingOutput;
pub use ws_transport::WsTransport;
