use crate::config::ClientConfig;
use crate::error::SessionError;
use crate::rtc::media_event::MediaEvent;
use crate::rtc::peer::{PeerConnection, RtcStack};
use crate::rtc::track_capture::TrackCapture;
use async_trait::async_trait;
use huddle_core::ParticipantName;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tracing::info;
use webrtc::media::Sample;
use webrtc::api::APIBuilder;
use webrtc::api::interceptor_registry::register_default_interceptors;
use webrtc::api::media_engine::MediaEngine;
use webrtc::ice_transport::ice_candidate::RTCIceCandidate;
use webrtc::ice_transport::ice_server::RTCIceServer;
use webrtc::interceptor::registry::Registry;
use webrtc::peer_connection::RTCPeerConnection;
use webrtc::peer_connection::configuration::RTCConfiguration;
use webrtc::peer_connection::peer_connection_state::RTCPeerConnectionState;
use webrtc::peer_connection::sdp::session_description::RTCSessionDescription;
use webrtc::rtp_transceiver::RTCRtpTransceiver;
use webrtc::rtp_transceiver::RTCRtpTransceiverInit;
use webrtc::rtp_transceiver::rtp_codec::RTPCodecType;
use webrtc::rtp_transceiver::rtp_receiver::RTCRtpReceiver;
use webrtc::rtp_transceiver::rtp_transceiver_direction::RTCRtpTransceiverDirection;
use webrtc::track::track_local::TrackLocal;
use webrtc::track::track_remote::TrackRemote;

/// Wrapper around one `webrtc` crate peer connection.
pub struct RtcPeer {
    peer_connection: Arc<RTCPeerConnection>,
}

impl RtcPeer {
    /// Offer side of the call: attaches the captured audio track, generates
    /// an SDP offer and reports `OfferReady` once candidate gathering ends
    /// (signalled by the `None` candidate).
    pub async fn new_local(
        name: &ParticipantName,
        track: Arc<dyn TrackLocal + Send + Sync>,
        ice_servers: Vec<String>,
        event_tx: mpsc::Sender<MediaEvent>,
    ) -> Result<Self, SessionError> {
        let pc = Self::new_connection(ice_servers).await?;
        Self::watch_connection_state(&pc, name, event_tx.clone());

        let _ = pc.add_track(track).await?;

        // The server mixes the whole room into one stream and delivers it on
        // the local connection.
        let track_tx = event_tx.clone();
        pc.on_track(Box::new(
            move |track: Arc<TrackRemote>,
                  _receiver: Arc<RTCRtpReceiver>,
                  _transceiver: Arc<RTCRtpTransceiver>| {
                let tx = track_tx.clone();
                Box::pin(async move {
                    let _ = tx
                        .send(MediaEvent::RemoteAudio {
                            track_id: track.id(),
                        })
                        .await;
                })
            },
        ));

        // The offer is only published once gathering completes, so the SDP
        // sent in joinRoom already carries every candidate.
        let gather_pc = Arc::downgrade(&pc);
        let gather_tx = event_tx;
        pc.on_ice_candidate(Box::new(move |candidate: Option<RTCIceCandidate>| {
            let tx = gather_tx.clone();
            let pc = gather_pc.clone();
            Box::pin(async move {
                if candidate.is_some() {
                    return;
                }
                let Some(pc) = pc.upgrade() else { return };
                let Some(desc) = pc.local_description().await else {
                    return;
                };
                let _ = tx.send(MediaEvent::OfferReady { sdp: desc.sdp }).await;
            })
        }));

        let offer = pc.create_offer(None).await?;
        pc.set_local_description(offer).await?;

        Ok(Self {
            peer_connection: pc,
        })
    }

    /// Receive-only connection for a remote participant.
    pub async fn new_receiver(
        name: &ParticipantName,
        ice_servers: Vec<String>,
        event_tx: mpsc::Sender<MediaEvent>,
    ) -> Result<Self, SessionError> {
        let pc = Self::new_connection(ice_servers).await?;
        Self::watch_connection_state(&pc, name, event_tx);

        pc.add_transceiver_from_kind(
            RTPCodecType::Audio,
            Some(RTCRtpTransceiverInit {
                direction: RTCRtpTransceiverDirection::Recvonly,
                send_encodings: vec![],
            }),
        )
        .await?;

        Ok(Self {
            peer_connection: pc,
        })
    }

    async fn new_connection(
        ice_servers: Vec<String>,
    ) -> Result<Arc<RTCPeerConnection>, SessionError> {
        let mut media = MediaEngine::default();
        media.register_default_codecs()?;
        let registry = register_default_interceptors(Registry::new(), &mut media)?;

        let api = APIBuilder::new()
            .with_media_engine(media)
            .with_interceptor_registry(registry)
            .build();

        let config = RTCConfiguration {
            ice_servers: vec![RTCIceServer {
                urls: ice_servers,
                ..Default::default()
            }],
            ..Default::default()
        };

        Ok(Arc::new(api.new_peer_connection(config).await?))
    }

    fn watch_connection_state(
        pc: &Arc<RTCPeerConnection>,
        name: &ParticipantName,
        event_tx: mpsc::Sender<MediaEvent>,
    ) {
        let watched = name.clone();
        pc.on_peer_connection_state_change(Box::new(move |state: RTCPeerConnectionState| {
            let tx = event_tx.clone();
            let name = watched.clone();
            Box::pin(async move {
                info!("Peer connection state for {}: {}", name, state);
                match state {
                    RTCPeerConnectionState::Failed
                    | RTCPeerConnectionState::Disconnected
                    | RTCPeerConnectionState::Closed => {
                        let _ = tx.send(MediaEvent::Disconnected { name }).await;
                    }
                    _ => {}
                }
            })
        }));
    }
}

#[async_trait]
impl PeerConnection for RtcPeer {
    async fn set_remote_answer(&self, sdp: String) -> Result<(), SessionError> {
        let desc = RTCSessionDescription::answer(sdp)?;
        self.peer_connection.set_remote_description(desc).await?;
        Ok(())
    }

    async fn close(&self) -> Result<(), SessionError> {
        self.peer_connection.close().await?;
        Ok(())
    }
}

/// [`RtcStack`] backed by the `webrtc` crate.
pub struct WebRtcStack {
    config: ClientConfig,
    source_rx: Mutex<Option<mpsc::Receiver<Sample>>>,
}

impl WebRtcStack {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            source_rx: Mutex::new(None),
        }
    }

    /// Attach an external audio source; its samples feed the outbound track
    /// once capture is acquired.
    pub fn with_source(config: ClientConfig, source: mpsc::Receiver<Sample>) -> Self {
        Self {
            config,
            source_rx: Mutex::new(Some(source)),
        }
    }
}

#[async_trait]
impl RtcStack for WebRtcStack {
    type Capture = TrackCapture;

    async fn acquire_audio(&self) -> Result<TrackCapture, SessionError> {
        let source = self.source_rx.lock().await.take();
        Ok(TrackCapture::new(source))
    }

    async fn create_local_peer(
        &self,
        name: &ParticipantName,
        capture: TrackCapture,
        event_tx: mpsc::Sender<MediaEvent>,
    ) -> Result<Box<dyn PeerConnection>, SessionError> {
        let peer = RtcPeer::new_local(
            name,
            capture.into_track(),
            self.config.ice_servers.clone(),
            event_tx,
        )
        .await?;
        Ok(Box::new(peer))
    }

    async fn create_receiver(
        &self,
        name: &ParticipantName,
        event_tx: mpsc::Sender<MediaEvent>,
    ) -> Result<Box<dyn PeerConnection>, SessionError> {
        let peer = RtcPeer::new_receiver(name, self.config.ice_servers.clone(), event_tx).await?;
        Ok(Box::new(peer))
    }
}
