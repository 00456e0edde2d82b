//! Integration tests for the run operation
//!
//! Drives a `SessionController` end to end against the recording mock
//! transport and a recording message sink, covering the full run flow:
//! precondition failure, open-on-demand, ordered line streaming, the
//! deliberate silent no-op, and failure messaging.

use std::sync::{Arc, Mutex};

use boardlink::{
    Error, MessageSink, MockTransport, SerialTransport, SessionController, SessionState,
    UserMessage,
};

/// Message sink that records everything it is asked to show
#[derive(Default)]
struct RecordingSink {
    messages: Mutex<Vec<UserMessage>>,
}

impl RecordingSink {
    fn shown(&self) -> Vec<UserMessage> {
        self.messages.lock().unwrap().clone()
    }
}

impl MessageSink for RecordingSink {
    fn show(&self, message: &UserMessage) {
        self.messages.lock().unwrap().push(message.clone());
    }
}

fn controller(
    mock: &MockTransport,
) -> (SessionController, Arc<RecordingSink>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    let sink = Arc::new(RecordingSink::default());
    let controller = SessionController::new(Box::new(mock.clone()), sink.clone());
    (controller, sink)
}

#[tokio::test]
async fn run_without_editor_reports_and_never_opens() {
    let mock = MockTransport::new();
    let (mut controller, sink) = controller(&mock);

    let result = controller.run(None).await;

    assert!(matches!(result, Err(Error::NoActiveEditor)));
    assert_eq!(mock.open_calls(), 0);
    assert!(mock.sent_lines().is_empty());

    let shown = sink.shown();
    assert_eq!(shown.len(), 1);
    assert!(shown[0].title.contains("active editor tabs"));
}

#[tokio::test]
async fn run_on_idle_session_opens_once_and_streams_in_order() {
    let mock = MockTransport::new();
    let (mut controller, sink) = controller(&mock);

    controller.run(Some("print(1)\nprint(2)\n")).await.unwrap();

    assert_eq!(mock.open_calls(), 1);
    // Trailing newline yields a trailing empty line, sent as-is.
    assert_eq!(mock.sent_lines(), vec!["print(1)", "print(2)", ""]);
    assert_eq!(controller.state(), SessionState::Interactive);
    assert!(sink.shown().is_empty());
}

#[tokio::test]
async fn run_twice_reuses_the_open_session() {
    let mock = MockTransport::new();
    let (mut controller, _sink) = controller(&mock);

    controller.run(Some("x = 1\n")).await.unwrap();
    controller.run(Some("y = 2\n")).await.unwrap();

    assert_eq!(mock.open_calls(), 1);
    assert_eq!(mock.sent_lines(), vec!["x = 1", "", "y = 2", ""]);
}

#[tokio::test]
async fn run_sends_one_write_per_line_unbatched() {
    let mock = MockTransport::new();
    let (mut controller, _sink) = controller(&mock);

    let script = "a\nb\nc";
    controller.run(Some(script)).await.unwrap();

    // No newline normalization, no batching: exactly the split lines.
    let lines = mock.sent_lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn failed_open_surfaces_one_message_and_sends_nothing() {
    let mut mock = MockTransport::new();
    mock.fail_open = true;
    let (mut controller, sink) = controller(&mock);

    let result = controller.run(Some("print(1)\n")).await;

    assert!(matches!(result, Err(Error::ConnectionFailed { .. })));
    assert_eq!(controller.state(), SessionState::Idle);
    assert!(mock.sent_lines().is_empty());

    let shown = sink.shown();
    assert_eq!(shown.len(), 1);
    assert!(shown[0].title.contains("Could not connect"));
}

#[tokio::test]
async fn open_that_does_not_connect_is_a_silent_noop() {
    let mut mock = MockTransport::new();
    mock.open_stays_closed = true;
    let (mut controller, sink) = controller(&mock);

    let result = controller.run(Some("print(1)\n")).await;

    // Best-effort policy: no lines sent, no error, no message.
    assert!(result.is_ok());
    assert_eq!(controller.state(), SessionState::Idle);
    assert!(mock.sent_lines().is_empty());
    assert!(sink.shown().is_empty());
}

#[tokio::test]
async fn toggle_then_run_does_not_reopen() {
    let mock = MockTransport::new();
    let (mut controller, _sink) = controller(&mock);

    controller.toggle_repl().await.unwrap();
    assert_eq!(controller.state(), SessionState::Interactive);

    controller.run(Some("print('hi')\n")).await.unwrap();

    assert_eq!(mock.open_calls(), 1);
    assert_eq!(mock.sent_lines(), vec!["print('hi')", ""]);
}

#[tokio::test]
async fn toggle_off_closes_the_transport() {
    let mock = MockTransport::new();
    let (mut controller, _sink) = controller(&mock);

    controller.toggle_repl().await.unwrap();
    controller.toggle_repl().await.unwrap();

    assert_eq!(controller.state(), SessionState::Idle);
    assert!(!mock.is_open());
}

#[tokio::test]
async fn write_failure_fails_outright_with_no_resume() {
    let mut mock = MockTransport::new();
    mock.fail_writes = true;
    let (mut controller, _sink) = controller(&mock);

    let result = controller.run(Some("print(1)\nprint(2)\n")).await;

    assert!(matches!(result, Err(Error::WriteFailed { .. })));
    // The session is dropped; a later run must reopen.
    assert_eq!(controller.state(), SessionState::Idle);
}
