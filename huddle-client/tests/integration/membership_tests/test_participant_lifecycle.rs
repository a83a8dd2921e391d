use crate::integration::{create_test_session, init_tracing, register};
use huddle_core::{ParticipantName, SignalMessage};

/// The scenario from the group-call protocol: bob arrives, his answer is
/// applied, then he leaves and his connection is disposed.
#[tokio::test]
async fn test_participant_lifecycle() {
    init_tracing();

    let mut session = create_test_session();
    register(&mut session, "alice", "lobby").await;

    let bob = ParticipantName::from("bob");

    session
        .signal_tx
        .send(SignalMessage::NewParticipantArrived { name: bob.clone() })
        .await
        .unwrap();

    assert!(session.rtc.wait_for_events(3, 1000).await);
    assert!(session.rtc.has_receiver(&bob).await);

    session
        .signal_tx
        .send(SignalMessage::ReceiveVideoAnswer {
            name: bob.clone(),
            sdp_answer: "v=0 bob-answer".to_owned(),
        })
        .await
        .unwrap();

    assert!(session.rtc.wait_for_events(4, 1000).await);
    assert_eq!(
        session.rtc.answers_for(&bob).await,
        vec!["v=0 bob-answer".to_owned()]
    );

    session
        .signal_tx
        .send(SignalMessage::ParticipantLeft { name: bob.clone() })
        .await
        .unwrap();

    assert!(session.rtc.wait_for_events(5, 1000).await);
    assert!(session.rtc.has_closed(&bob).await);
}
