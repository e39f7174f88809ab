use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

#[derive(Default)]
struct FakeClipboard {
    reject: Option<ClipboardError>,
    written: RefCell<Vec<String>>,
    legacy: RefCell<Vec<String>>,
}

impl ClipboardBackend for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(err) = &self.reject {
            return Err(err.clone());
        }
        self.written.borrow_mut().push(text.to_owned());
        Ok(())
    }

    fn legacy_copy(&self, text: &str) {
        self.legacy.borrow_mut().push(text.to_owned());
    }
}

#[derive(Default)]
struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl Notify for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_owned());
    }
}

#[test]
fn platform_write_copies_exact_text_and_confirms_once() {
    let clipboard = FakeClipboard::default();
    let notifier = RecordingNotifier::default();

    block_on(copy_text(&clipboard, &notifier, "+49 711 685 65884"));

    assert_eq!(*clipboard.written.borrow(), vec!["+49 711 685 65884".to_owned()]);
    assert!(clipboard.legacy.borrow().is_empty());
    assert_eq!(*notifier.messages.borrow(), vec![COPIED_MESSAGE.to_owned()]);
}

#[test]
fn unsupported_api_falls_back_to_legacy_copy() {
    let clipboard = FakeClipboard { reject: Some(ClipboardError::Unsupported), ..FakeClipboard::default() };
    let notifier = RecordingNotifier::default();

    block_on(copy_text(&clipboard, &notifier, "someone@example.org"));

    assert!(clipboard.written.borrow().is_empty());
    assert_eq!(*clipboard.legacy.borrow(), vec!["someone@example.org".to_owned()]);
    assert_eq!(notifier.messages.borrow().len(), 1);
}

#[test]
fn rejected_write_still_confirms_exactly_once() {
    let clipboard = FakeClipboard {
        reject: Some(ClipboardError::Rejected("NotAllowedError".into())),
        ..FakeClipboard::default()
    };
    let notifier = RecordingNotifier::default();

    block_on(copy_text(&clipboard, &notifier, "x"));

    assert_eq!(*clipboard.legacy.borrow(), vec!["x".to_owned()]);
    assert_eq!(*notifier.messages.borrow(), vec!["Copied!".to_owned()]);
}
