use spares_common::chat::{ChatStatus, Sender};
use spares_common::search::chat_matches;
use spares_common::{AdminError, Command};
use spares_console_integration::ConsoleHarness;

#[test]
fn opening_a_chat_clears_its_unread_count() {
    let mut h = ConsoleHarness::setup();
    let asha = h.chat_id("Asha Verma").expect("seeded chat");
    let before = h.state.unread_total();
    let unread = h.state.chat(&asha).map(|c| c.unread_count).unwrap_or_default();
    assert!(unread > 0);

    h.dispatch(Command::MarkChatRead(asha.clone()));

    assert_eq!(h.state.chat(&asha).map(|c| c.unread_count), Some(0));
    assert_eq!(h.state.unread_total(), before - unread);
}

/// A reply lands only in the conversation it was sent to.
#[test]
fn reply_goes_to_selected_chat_only() {
    let mut h = ConsoleHarness::setup();
    let ben = h.chat_id("Ben Okafor").expect("seeded chat");
    let carla = h.chat_id("Carla Mendes").expect("seeded chat");
    let carla_history = h.state.chat(&carla).map(|c| c.messages.len());

    h.composer.set_text("  Your tracking number is 1Z999AA1.  ");
    let sent = h.send(&ben).expect("send succeeds");
    assert!(sent.is_some());

    let chat = h.state.chat(&ben).expect("chat");
    let last = chat.messages.last().expect("message");
    assert_eq!(last.sender, Sender::Admin);
    assert_eq!(last.text, "Your tracking number is 1Z999AA1.");
    assert_eq!(chat.last_message, "Your tracking number is 1Z999AA1.");
    assert_eq!(chat.last_message_time, h.now);
    assert_eq!(h.state.chat(&carla).map(|c| c.messages.len()), carla_history);
    assert_eq!(h.composer.text(), "");
}

#[test]
fn empty_draft_sends_nothing() {
    let mut h = ConsoleHarness::setup();
    let ben = h.chat_id("Ben Okafor").expect("seeded chat");
    let before = h.state.chat(&ben).map(|c| c.messages.len());

    h.composer.set_text("   ");
    assert_eq!(h.send(&ben), Ok(None));
    assert_eq!(h.state.chat(&ben).map(|c| c.messages.len()), before);
}

#[test]
fn closing_and_reopening_a_chat() {
    let mut h = ConsoleHarness::setup();
    let carla = h.chat_id("Carla Mendes").expect("seeded chat");

    h.dispatch(Command::SetChatStatus(carla.clone(), ChatStatus::Closed));
    assert_eq!(h.state.chat(&carla).map(|c| c.is_open()), Some(false));

    h.dispatch(Command::SetChatStatus(carla.clone(), ChatStatus::Open));
    assert_eq!(h.state.chat(&carla).map(|c| c.is_open()), Some(true));
}

#[test]
fn chat_search_matches_customer_name() {
    let h = ConsoleHarness::setup();
    let by_name: Vec<_> = h
        .state
        .chats()
        .iter()
        .filter(|c| chat_matches(c, "dmitri"))
        .collect();
    assert_eq!(by_name.len(), 1);

    let by_message = h
        .state
        .chats()
        .iter()
        .filter(|c| chat_matches(c, "ordering two sets"))
        .count();
    assert_eq!(by_message, 0);
}

#[test]
fn sending_to_missing_chat_keeps_the_draft() {
    let mut h = ConsoleHarness::setup();
    let missing = spares_common::chat::ChatId("CH-999".into());
    h.composer.set_text("Hello?");

    assert_eq!(h.send(&missing), Err(AdminError::ChatNotFound(missing.clone())));
    assert_eq!(h.composer.text(), "Hello?");
}
