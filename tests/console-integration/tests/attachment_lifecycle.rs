use spares_common::attachment::{AttachmentKind, MAX_ATTACHMENT_BYTES};
use spares_common::toast::ToastKind;
use spares_console_integration::ConsoleHarness;

#[test]
fn oversized_file_is_rejected_without_a_url() {
    let mut h = ConsoleHarness::setup();

    let id = h.pick_file("engine-bay.mov", "video/quicktime", MAX_ATTACHMENT_BYTES + 1);

    assert!(id.is_none());
    assert!(h.composer.attachments().is_empty());
    let toast = h.toasts.last().expect("error toast");
    assert_eq!(toast.kind, ToastKind::Error);
    assert!(toast.text.starts_with("engine-bay.mov is too large"));
}

#[test]
fn file_at_the_limit_is_accepted() {
    let mut h = ConsoleHarness::setup();
    assert!(h
        .pick_file("manual.pdf", "application/pdf", MAX_ATTACHMENT_BYTES)
        .is_some());
}

/// Mixed batch: each file is judged on its own.
#[test]
fn batch_keeps_valid_files() {
    let mut h = ConsoleHarness::setup();
    h.pick_file("pads.jpg", "image/jpeg", 5 * 1024);
    h.pick_file("huge.zip", "application/zip", 20 * 1024 * 1024);
    h.pick_file("noise.mp3", "audio/mpeg", 300 * 1024);

    let kinds: Vec<AttachmentKind> = h.composer.attachments().iter().map(|a| a.kind).collect();
    assert_eq!(kinds, [AttachmentKind::Image, AttachmentKind::Audio]);
    assert_eq!(h.composer.attachments()[0].size, "5.0 KB");
    assert_eq!(h.toasts.len(), 1);
}

#[test]
fn removing_a_pending_attachment_revokes_its_url() {
    let mut h = ConsoleHarness::setup();
    let id = h.pick_file("pads.jpg", "image/jpeg", 2048).expect("accepted");
    let url = h.composer.attachments()[0].url.as_str().to_string();

    assert!(h.composer.remove_attachment(id));
    assert!(h.revoker.was_revoked(&url));
}

/// Sent attachments stay viewable in the history until the store goes away.
#[test]
fn sent_attachment_outlives_the_composer() {
    let mut h = ConsoleHarness::setup();
    let ben = h.chat_id("Ben Okafor").expect("seeded chat");
    h.pick_file("invoice.pdf", "application/pdf", 40 * 1024);
    let url = h.composer.attachments()[0].url.as_str().to_string();

    h.send(&ben).expect("send succeeds");
    h.composer.discard();
    assert!(h.revoker.revoked().is_empty());

    let chat = h.state.chat(&ben).expect("chat");
    assert_eq!(chat.last_message, "📎 invoice.pdf");
    let last = chat.messages.last().expect("message");
    assert_eq!(last.attachments[0].kind, AttachmentKind::Document);

    let revoker = h.revoker.clone();
    drop(h);
    assert_eq!(revoker.revoked(), [url]);
}

#[test]
fn discarding_the_draft_releases_every_url() {
    let mut h = ConsoleHarness::setup();
    h.pick_file("a.png", "image/png", 10);
    h.pick_file("b.png", "image/png", 10);

    h.composer.discard();

    assert_eq!(h.revoker.revoked().len(), 2);
}
