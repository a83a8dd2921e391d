use std::time::Duration;

use crate::integration::{create_test_session, init_tracing, register};
use crate::utils::RtcEvent;
use huddle_core::{ParticipantName, SignalMessage};

#[tokio::test]
async fn test_unknown_participant_left_is_noop() {
    init_tracing();

    let mut session = create_test_session();
    register(&mut session, "alice", "lobby").await;

    session
        .signal_tx
        .send(SignalMessage::ParticipantLeft {
            name: "ghost".into(),
        })
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(50)).await;

    // Nothing was closed and the session still processes messages.
    let events = session.rtc.events().await;
    assert!(!events.iter().any(|e| matches!(e, RtcEvent::Closed { .. })));

    session
        .signal_tx
        .send(SignalMessage::NewParticipantArrived { name: "bob".into() })
        .await
        .unwrap();

    assert!(session.rtc.wait_for_events(3, 1000).await);
    assert!(session.rtc.has_receiver(&ParticipantName::from("bob")).await);
}
