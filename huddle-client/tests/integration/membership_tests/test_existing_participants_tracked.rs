use std::time::Duration;

use crate::integration::{create_test_session, init_tracing, register};
use crate::utils::RtcEvent;
use huddle_core::{ParticipantName, SignalMessage};

#[tokio::test]
async fn test_existing_participants_tracked() {
    init_tracing();

    let mut session = create_test_session();
    register(&mut session, "alice", "lobby").await;

    session
        .signal_tx
        .send(SignalMessage::ExistingParticipants {
            data: vec!["bob".into(), "carol".into()],
        })
        .await
        .unwrap();

    assert!(session.rtc.wait_for_events(4, 1000).await);
    assert!(session.rtc.has_receiver(&ParticipantName::from("bob")).await);
    assert!(
        session
            .rtc
            .has_receiver(&ParticipantName::from("carol"))
            .await
    );

    // A later arrival notification for a tracked name does not create a
    // second connection.
    session
        .signal_tx
        .send(SignalMessage::NewParticipantArrived { name: "bob".into() })
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(50)).await;

    let receivers = session
        .rtc
        .events()
        .await
        .into_iter()
        .filter(|e| {
            matches!(e, RtcEvent::ReceiverCreated { name } if name == &ParticipantName::from("bob"))
        })
        .count();
    assert_eq!(receivers, 1);
}
