use std::time::Duration;

use crate::integration::{create_test_session, init_tracing, register};
use crate::utils::SentMessage;
use huddle_client::SessionCommand;
use huddle_core::{ParticipantName, SignalMessage};

#[tokio::test]
async fn test_leave_room() {
    init_tracing();

    let mut session = create_test_session();
    register(&mut session, "alice", "lobby").await;

    session
        .signal_tx
        .send(SignalMessage::NewParticipantArrived { name: "bob".into() })
        .await
        .unwrap();
    assert!(session.rtc.wait_for_events(3, 1000).await);

    session
        .command_tx
        .send(SessionCommand::Leave)
        .await
        .expect("Failed to send leave command");

    // Exactly one leaveRoom, then the transport close.
    assert_eq!(session.sent_rx.recv().await, Some(SentMessage::Leave));
    assert_eq!(session.sent_rx.recv().await, Some(SentMessage::Close));
    assert_eq!(session.signaling.leave_count().await, 1);

    // Every tracked connection is disposed, local included.
    assert!(session.rtc.wait_for_events(5, 1000).await);
    assert!(session.rtc.has_closed(&ParticipantName::from("alice")).await);
    assert!(session.rtc.has_closed(&ParticipantName::from("bob")).await);

    // The session loop terminates.
    tokio::time::timeout(Duration::from_secs(1), session.task)
        .await
        .expect("Session loop did not finish")
        .unwrap();
}
