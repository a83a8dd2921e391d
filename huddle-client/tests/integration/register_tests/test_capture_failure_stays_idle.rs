use std::time::Duration;

use crate::integration::{create_test_session_with, init_tracing};
use crate::utils::MockRtcStack;
use huddle_client::SessionCommand;

#[tokio::test]
async fn test_capture_failure_stays_idle() {
    init_tracing();

    let mut session = create_test_session_with(MockRtcStack::failing_capture());

    session
        .command_tx
        .send(SessionCommand::Register {
            name: "alice".into(),
            room: "lobby".into(),
        })
        .await
        .expect("Failed to send register command");

    tokio::time::sleep(Duration::from_millis(50)).await;

    // No joinRoom went out and no peer connection exists.
    assert!(session.signaling.sent().await.is_empty());
    assert!(session.rtc.events().await.is_empty());
    assert!(session.sent_rx.try_recv().is_err());
}
