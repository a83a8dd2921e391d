use crate::integration::{create_test_session, init_tracing, register};
use huddle_core::{ParticipantName, SignalMessage};

#[tokio::test]
async fn test_answer_sdp_applied_locally() {
    init_tracing();

    let mut session = create_test_session();
    register(&mut session, "alice", "lobby").await;

    session
        .signal_tx
        .send(SignalMessage::AnswerSdp {
            answer_sdp: "v=0 room-answer".to_owned(),
        })
        .await
        .unwrap();

    assert!(session.rtc.wait_for_events(3, 1000).await);

    // The answer for the joinRoom offer lands on the local connection.
    let alice = ParticipantName::from("alice");
    assert_eq!(
        session.rtc.answers_for(&alice).await,
        vec!["v=0 room-answer".to_owned()]
    );
}
