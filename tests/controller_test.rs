//! Controller state machine behavior through the public API.

use linejoiner::clipboard::{ClipboardBackend, ClipboardContents, ClipboardError, MemoryClipboard};
use linejoiner::{join_lines, Controller, Mode, PollOutcome, Status};

/// Reads succeed but every write fails
struct ReadOnlyClipboard(String);

impl ClipboardBackend for ReadOnlyClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        Ok(self.0.clone())
    }

    fn clear(&mut self) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("read only".to_string()))
    }

    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("read only".to_string()))
    }
}

/// Clearing works but writes are refused, as when another app holds the clipboard
struct BusyWriteClipboard(MemoryClipboard);

impl ClipboardBackend for BusyWriteClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.0.read_text()
    }

    fn clear(&mut self) -> Result<(), ClipboardError> {
        self.0.clear()
    }

    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("busy".to_string()))
    }
}

#[test]
fn failed_manual_write_keeps_clipboard_contents() {
    let shared = MemoryClipboard::with_text("keep\nme");
    let mut clipboard = BusyWriteClipboard(shared.clone());
    let mut controller = Controller::new(Mode::Manual);

    let err = controller
        .process_now(&mut clipboard, &mut |_| {})
        .unwrap_err();

    assert_eq!(err, ClipboardError::Unavailable("busy".to_string()));
    assert_eq!(shared.text().as_deref(), Some("keep\nme"));
    assert_eq!(controller.last_processed(), "");
}

#[test]
fn failed_automatic_write_keeps_clipboard_contents() {
    let shared = MemoryClipboard::with_text("copied\ntext");
    let mut clipboard = BusyWriteClipboard(shared.clone());
    let mut controller = Controller::new(Mode::Automatic);

    let outcome = controller.poll(&mut clipboard, &mut |_| {});

    assert!(matches!(outcome, PollOutcome::Failed(_)));
    assert_eq!(shared.text().as_deref(), Some("copied\ntext"));
    assert_eq!(controller.status(), Status::Waiting);
}

#[test]
fn new_value_triggers_exactly_one_write() {
    let mut clipboard = MemoryClipboard::with_text("line one\nline two\n");
    let mut controller = Controller::new(Mode::Automatic);

    for _ in 0..5 {
        controller.poll(&mut clipboard, &mut |_| {});
    }

    assert_eq!(clipboard.write_count(), 1);
    assert_eq!(
        controller.last_processed(),
        join_lines("line one\nline two\n")
    );
}

#[test]
fn write_failure_keeps_last_processed() {
    let mut clipboard = ReadOnlyClipboard("a\nb".to_string());
    let mut controller = Controller::new(Mode::Automatic);
    let mut seen = Vec::new();

    let outcome = controller.poll(&mut clipboard, &mut |s| seen.push(s));

    assert!(matches!(
        outcome,
        PollOutcome::Failed(ClipboardError::Unavailable(_))
    ));
    assert_eq!(controller.last_processed(), "");
    assert_eq!(controller.status(), Status::Waiting);
    assert_eq!(seen, vec![Status::Processing, Status::Waiting]);
}

#[test]
fn unavailable_clipboard_is_not_fatal() {
    let mut clipboard = MemoryClipboard::with_contents(ClipboardContents::Unavailable);
    let mut controller = Controller::new(Mode::Automatic);

    for _ in 0..3 {
        assert!(matches!(
            controller.poll(&mut clipboard, &mut |_| {}),
            PollOutcome::Failed(_)
        ));
    }

    clipboard.set_text("back\nagain");
    assert!(matches!(
        controller.poll(&mut clipboard, &mut |_| {}),
        PollOutcome::Processed(_)
    ));
    assert_eq!(controller.status(), Status::Done);
}

#[test]
fn manual_result_is_not_reprocessed_by_next_poll() {
    let mut clipboard = MemoryClipboard::with_text("x\ny");
    let mut controller = Controller::new(Mode::Manual);

    controller.process_now(&mut clipboard, &mut |_| {}).unwrap();
    controller.set_mode(Mode::Automatic);

    assert_eq!(
        controller.poll(&mut clipboard, &mut |_| {}),
        PollOutcome::Unchanged
    );
    assert_eq!(clipboard.write_count(), 1);
}
