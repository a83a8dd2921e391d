use crate::rtc::{AudioSink, MediaEvent, RtcStack};
use crate::session::participant::Participant;
use crate::session::session_command::SessionCommand;
use crate::signaling::SignalingOutput;
use huddle_core::{ParticipantName, RoomName, SignalMessage};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Lifecycle of one local call session.
#[derive(Debug)]
pub enum SessionState {
    Idle,
    Joining {
        name: ParticipantName,
        room: RoomName,
    },
    InRoom {
        name: ParticipantName,
        room: RoomName,
    },
    Left,
}

/// Session coordinator: owns the membership map and drives it from local
/// commands, inbound signaling messages and RTC completions, all on one
/// event loop.
pub struct Session<S: RtcStack> {
    state: SessionState,
    participants: HashMap<ParticipantName, Participant>,
    command_rx: mpsc::Receiver<SessionCommand>,
    signal_rx: mpsc::Receiver<SignalMessage>,
    media_rx: mpsc::Receiver<MediaEvent>,
    media_tx: mpsc::Sender<MediaEvent>,
    signaling: Arc<dyn SignalingOutput>,
    rtc: Arc<S>,
    sink: Arc<dyn AudioSink>,
}

impl<S: RtcStack> Session<S> {
    pub fn new(
        command_rx: mpsc::Receiver<SessionCommand>,
        signal_rx: mpsc::Receiver<SignalMessage>,
        signaling: Arc<dyn SignalingOutput>,
        rtc: Arc<S>,
        sink: Arc<dyn AudioSink>,
    ) -> Self {
        let (media_tx, media_rx) = mpsc::channel(256);

        Self {
            state: SessionState::Idle,
            participants: HashMap::new(),
            command_rx,
            signal_rx,
            media_rx,
            media_tx,
            signaling,
            rtc,
            sink,
        }
    }

    pub async fn run(mut self) {
        info!("Session event loop started");

        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => {
                    match cmd {
                        Some(c) => self.handle_command(c).await,
                        None => {
                            info!("Command channel closed. Shutting down session.");
                            break;
                        }
                    }
                }

                msg = self.signal_rx.recv() => {
                    match msg {
                        Some(m) => self.handle_signal(m).await,
                        None => {
                            warn!("Signaling channel closed unexpectedly");
                            break;
                        }
                    }
                }

                evt = self.media_rx.recv() => {
                    match evt {
                        Some(e) => self.handle_media_event(e).await,
                        None => {
                            warn!("Media event channel closed unexpectedly");
                            break;
                        }
                    }
                }
            }

            if matches!(self.state, SessionState::Left) {
                break;
            }
        }

        info!("Session event loop finished");
    }

    async fn handle_command(&mut self, cmd: SessionCommand) {
        match cmd {
            SessionCommand::Register { name, room } => self.register(name, room).await,
            SessionCommand::Leave => self.leave_room().await,
        }
    }

    /// `Idle -> Joining`: acquire microphone audio, build the local
    /// connection (receive-audio-only) with the captured track attached and
    /// generate an SDP offer. The joinRoom message goes out later, once
    /// candidate gathering completes.
    async fn register(&mut self, name: ParticipantName, room: RoomName) {
        if !matches!(self.state, SessionState::Idle) {
            warn!("Register ignored in state {:?}", self.state);
            return;
        }

        info!("Registering as {} in room {}", name, room);

        let capture = match self.rtc.acquire_audio().await {
            Ok(capture) => capture,
            Err(e) => {
                error!("Audio capture failed: {}", e);
                return;
            }
        };

        let peer = match self
            .rtc
            .create_local_peer(&name, capture, self.media_tx.clone())
            .await
        {
            Ok(peer) => peer,
            Err(e) => {
                error!("Failed to create local peer connection: {}", e);
                return;
            }
        };

        self.participants.insert(
            name.clone(),
            Participant::new(name.clone(), peer, self.sink.clone()),
        );
        self.state = SessionState::Joining { name, room };
    }

    /// `InRoom -> Left`: one leaveRoom message, every tracked connection
    /// closed, the membership map emptied, the channel closed.
    async fn leave_room(&mut self) {
        if !matches!(self.state, SessionState::InRoom { .. }) {
            warn!("Leave ignored in state {:?}", self.state);
            return;
        }

        info!("Leaving room");
        self.signaling.send_leave().await;

        let names: Vec<ParticipantName> = self.participants.keys().cloned().collect();
        for name in names {
            self.remove_participant(&name).await;
        }

        self.signaling.close().await;
        self.state = SessionState::Left;
    }

    async fn handle_signal(&mut self, msg: SignalMessage) {
        if matches!(self.state, SessionState::Idle | SessionState::Left) {
            debug!("Ignoring signaling message outside of a session: {:?}", msg);
            return;
        }

        match msg {
            SignalMessage::ExistingParticipants { data } => {
                for name in data {
                    self.add_receiver(name).await;
                }
            }

            SignalMessage::NewParticipantArrived { name } => {
                info!("Participant {} arrived", name);
                self.add_receiver(name).await;
            }

            SignalMessage::ParticipantLeft { name } => {
                info!("Participant {} left", name);
                self.remove_participant(&name).await;
            }

            SignalMessage::ReceiveVideoAnswer { name, sdp_answer } => {
                let Some(participant) = self.participants.get(&name) else {
                    warn!("Answer for unknown participant {}", name);
                    return;
                };
                if let Err(e) = participant.peer.set_remote_answer(sdp_answer).await {
                    error!("SDP answer rejected for {}: {}", name, e);
                }
            }

            SignalMessage::AnswerSdp { answer_sdp } => {
                self.apply_local_answer(answer_sdp).await;
            }

            SignalMessage::JoinRoom { .. } | SignalMessage::LeaveRoom => {
                warn!("Server sent a client-only message kind, ignoring");
            }
        }
    }

    async fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            // End of candidate gathering. The offer now carries every
            // candidate, so this is the moment joinRoom goes out.
            MediaEvent::OfferReady { sdp } => {
                let (name, room) = match &self.state {
                    SessionState::Joining { name, room } => (name.clone(), room.clone()),
                    state => {
                        debug!("Discarding local offer in state {:?}", state);
                        return;
                    }
                };

                self.signaling
                    .send_join(name.clone(), room.clone(), sdp)
                    .await;
                self.state = SessionState::InRoom { name, room };
            }

            // Mixed room audio arrives on the local connection; bind it to
            // the local participant's playback sink.
            MediaEvent::RemoteAudio { track_id } => {
                let local = match &self.state {
                    SessionState::Joining { name, .. } | SessionState::InRoom { name, .. } => {
                        name.clone()
                    }
                    state => {
                        debug!("Remote audio in state {:?}, ignoring", state);
                        return;
                    }
                };

                if let Some(participant) = self.participants.get(&local) {
                    participant.sink.play(&participant.name, &track_id);
                }
            }

            MediaEvent::Disconnected { name } => {
                warn!("RTC stack reported {} disconnected", name);
                self.remove_participant(&name).await;
            }
        }
    }

    /// Apply the answer for the local offer sent in joinRoom.
    async fn apply_local_answer(&mut self, answer_sdp: String) {
        let local = match &self.state {
            SessionState::Joining { name, .. } | SessionState::InRoom { name, .. } => name.clone(),
            state => {
                warn!("answer_sdp received in state {:?}, ignoring", state);
                return;
            }
        };

        let Some(participant) = self.participants.get(&local) else {
            warn!("No local participant entry for {}", local);
            return;
        };

        if let Err(e) = participant.peer.set_remote_answer(answer_sdp).await {
            error!("Failed to apply answer to local connection: {}", e);
        }
    }

    /// Track a remote participant with a receive-only connection. Re-adding
    /// a known name is a no-op.
    async fn add_receiver(&mut self, name: ParticipantName) {
        if self.participants.contains_key(&name) {
            debug!("Participant {} already tracked", name);
            return;
        }

        match self.rtc.create_receiver(&name, self.media_tx.clone()).await {
            Ok(peer) => {
                self.participants.insert(
                    name.clone(),
                    Participant::new(name, peer, self.sink.clone()),
                );
            }
            Err(e) => error!("Failed to create receiver for {}: {}", name, e),
        }
    }

    /// Close and drop a tracked participant. Unknown names are a no-op.
    async fn remove_participant(&mut self, name: &ParticipantName) {
        let Some(participant) = self.participants.remove(name) else {
            return;
        };
        if let Err(e) = participant.peer.close().await {
            warn!("Error closing connection for {}: {}", name, e);
        }
    }
}
