use crate::error::SessionError;
use crate::signaling::SignalingOutput;
use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use huddle_core::{ParticipantName, RoomName, SignalMessage};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::protocol::Message;
use tracing::{debug, error, info, warn};

/// WebSocket signaling channel.
///
/// One persistent duplex connection to the signaling endpoint: a writer task
/// drains an unbounded queue into the socket, a reader task parses each text
/// frame as a [`SignalMessage`] and forwards it into the session's inbound
/// channel. Unparseable frames are logged and dropped. No reconnection, no
/// backpressure: a transport error ends the tasks and later sends become
/// no-ops.
pub struct WsTransport {
    out_tx: mpsc::UnboundedSender<Message>,
}

impl WsTransport {
    pub async fn connect(
        url: &str,
        signal_tx: mpsc::Sender<SignalMessage>,
    ) -> Result<Self, SessionError> {
        let (socket, _) = connect_async(url)
            .await
            .map_err(|e| SessionError::Transport(e.to_string()))?;
        info!("Signaling channel connected: {}", url);

        let (mut sender, mut receiver) = socket.split();
        let (out_tx, mut out_rx) = mpsc::unbounded_channel::<Message>();

        tokio::spawn(async move {
            while let Some(msg) = out_rx.recv().await {
                if sender.send(msg).await.is_err() {
                    break;
                }
            }
        });

        tokio::spawn(async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<SignalMessage>(&text) {
                        Ok(signal) => {
                            debug!("Received message: {}", text);
                            if signal_tx.send(signal).await.is_err() {
                                break;
                            }
                        }
                        Err(e) => warn!("Invalid signaling frame: {}: {}", e, text),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
            info!("Signaling channel closed");
        });

        Ok(Self { out_tx })
    }

    fn send(&self, msg: &SignalMessage) {
        match serde_json::to_string(msg) {
            Ok(json) => {
                debug!("Sending message: {}", json);
                if self.out_tx.send(Message::Text(json)).is_err() {
                    warn!("Signaling channel not open, message dropped");
                }
            }
            Err(e) => error!("Failed to serialize signaling message: {}", e),
        }
    }
}

#[async_trait]
impl SignalingOutput for WsTransport {
    async fn send_join(&self, name: ParticipantName, room: RoomName, sdp_offer: String) {
        self.send(&SignalMessage::JoinRoom {
            name,
            room,
            sdp_offer,
        });
    }

    async fn send_leave(&self) {
        self.send(&SignalMessage::LeaveRoom);
    }

    async fn close(&self) {
        let _ = self.out_tx.send(Message::Close(None));
    }
}
