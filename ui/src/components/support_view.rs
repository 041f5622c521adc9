use chrono::{Local, Utc};
use dioxus::prelude::*;

use spares_common::attachment::{Attachment, AttachmentKind, FileMeta};
use spares_common::badge::chat_badge;
use spares_common::chat::{format_time, ChatId, ChatStatus, Sender, SupportChat, SupportPane};
use spares_common::search::chat_matches;
use spares_common::{AdminState, Command, Composer};

use super::admin_state::{dispatch, use_admin_state, use_config, use_notifier, Notifier};
use super::object_url::lease_object_url;
use super::primitives::{Avatar, StatusBadge};

fn send_draft(
    mut composer: Signal<Composer>,
    mut state: Signal<AdminState>,
    pane: Signal<SupportPane>,
    notifier: Notifier,
) {
    let Some(chat_id) = pane.read().selected().cloned() else {
        return;
    };
    let result = composer.write().send(&mut state.write(), &chat_id, Utc::now());
    match result {
        Ok(Some(_)) => notifier.success("Message sent"),
        Ok(None) => {}
        Err(err) => notifier.report(&err),
    }
}

#[component]
pub fn SupportView() -> Element {
    let state = use_admin_state();
    let config = use_config();
    let notifier = use_notifier();
    let mut pane = use_signal(SupportPane::default);
    let mut chat_search = use_signal(String::new);
    let composer = use_signal(|| Composer::new(config.max_attachment_bytes));

    let needle = chat_search.read().clone();
    let state_read = state.read();
    let mut chats: Vec<SupportChat> = state_read
        .chats()
        .iter()
        .filter(|c| chat_matches(c, &needle))
        .cloned()
        .collect();
    let selected = pane
        .read()
        .selected()
        .and_then(|id| state_read.chat(id).cloned());
    drop(state_read);
    chats.sort_by(|a, b| b.last_message_time.cmp(&a.last_message_time));

    let selected_id = selected.as_ref().map(|c| c.id.clone());
    let layout_class = if selected.is_some() {
        "support-view show-detail"
    } else {
        "support-view show-list"
    };

    rsx! {
        div { class: "{layout_class}",
            div { class: "chat-list-pane",
                div { class: "page-header",
                    h2 { "Support" }
                }
                input {
                    r#type: "search",
                    placeholder: "Search conversations...",
                    value: "{chat_search}",
                    oninput: move |evt| chat_search.set(evt.value()),
                }
                if chats.is_empty() {
                    p { class: "empty-state", "No conversations found." }
                }
                ul { class: "chat-list",
                    {chats.iter().map(|chat| {
                        let id = chat.id.clone();
                        let time = format_time(&chat.last_message_time.with_timezone(&Local));
                        let active = selected_id.as_ref() == Some(&chat.id);
                        rsx! {
                            li {
                                key: "{chat.id}",
                                class: if active { "chat-list-item active" } else { "chat-list-item" },
                                onclick: move |_| {
                                    pane.set(SupportPane::Detail(id.clone()));
                                    dispatch(state, notifier, Command::MarkChatRead(id.clone()));
                                },
                                Avatar { name: chat.customer_name.clone() }
                                div { class: "chat-list-body",
                                    div { class: "chat-list-top",
                                        span { class: "chat-list-name", "{chat.customer_name}" }
                                        span { class: "chat-list-time", "{time}" }
                                    }
                                    div { class: "chat-list-bottom",
                                        span { class: "chat-list-preview", "{chat.last_message}" }
                                        if chat.unread_count > 0 {
                                            span { class: "unread-count", "{chat.unread_count}" }
                                        }
                                        StatusBadge { badge: chat_badge(chat.status) }
                                    }
                                }
                            }
                        }
                    })}
                }
            }

            div { class: "chat-detail-pane",
                if let Some(chat) = selected {
                    ChatDetail { chat, composer, pane }
                } else {
                    p { class: "empty-state", "Select a conversation to start replying." }
                }
            }
        }
    }
}

#[component]
fn ChatDetail(chat: SupportChat, composer: Signal<Composer>, pane: Signal<SupportPane>) -> Element {
    let state = use_admin_state();
    let notifier = use_notifier();
    let mut back = pane;

    let toggle_to = if chat.is_open() {
        ChatStatus::Closed
    } else {
        ChatStatus::Open
    };
    let toggle_label = if chat.is_open() { "Close chat" } else { "Reopen chat" };
    let chat_id: ChatId = chat.id.clone();

    rsx! {
        div { class: "chat-header",
            button {
                class: "btn btn-ghost back-button",
                onclick: move |_| back.set(SupportPane::List),
                "← Back"
            }
            Avatar { name: chat.customer_name.clone() }
            div { class: "chat-header-title",
                h3 { "{chat.customer_name}" }
                StatusBadge { badge: chat_badge(chat.status) }
            }
            button {
                class: "btn btn-secondary",
                onclick: move |_| {
                    if dispatch(state, notifier, Command::SetChatStatus(chat_id.clone(), toggle_to)).is_some() {
                        notifier.success(format!("Chat {}", toggle_to.label()));
                    }
                },
                "{toggle_label}"
            }
        }

        div { class: "chat-messages",
            for message in chat.messages.iter() {
                {
                    let bubble_class = match message.sender {
                        Sender::Admin => "chat-bubble chat-sent",
                        Sender::Customer => "chat-bubble chat-received",
                    };
                    let time = format_time(&message.timestamp.with_timezone(&Local));
                    rsx! {
                        div { class: "{bubble_class}", key: "{message.id}",
                            for attachment in message.attachments.iter() {
                                AttachmentView { attachment: attachment.clone() }
                            }
                            if !message.text.is_empty() {
                                p { "{message.text}" }
                            }
                            span { class: "chat-time", "{time}" }
                        }
                    }
                }
            }
        }

        ComposerBar { composer, pane, notifier }
    }
}

#[component]
fn AttachmentView(attachment: Attachment) -> Element {
    let url = attachment.url.as_str().to_string();
    match attachment.kind {
        AttachmentKind::Image => rsx! {
            img { class: "chat-image", src: "{url}", alt: "{attachment.name}" }
        },
        AttachmentKind::Audio => rsx! {
            audio { class: "chat-audio", controls: true, src: "{url}" }
        },
        AttachmentKind::Document | AttachmentKind::Other => rsx! {
            a {
                class: "chat-file",
                href: "{url}",
                download: "{attachment.name}",
                span { class: "file-name", "{attachment.name}" }
                span { class: "file-size", " ({attachment.size})" }
            }
        },
    }
}

#[component]
fn ComposerBar(composer: Signal<Composer>, pane: Signal<SupportPane>, notifier: Notifier) -> Element {
    let state = use_admin_state();
    let mut composer = composer;

    let pending: Vec<Attachment> = composer.read().attachments().to_vec();
    let text = composer.read().text().to_string();
    let can_send = composer.read().can_send();

    let on_files = move |evt: FormEvent| {
        for file in evt.files() {
            let meta = FileMeta::new(
                file.name(),
                file.content_type().unwrap_or_default(),
                file.size(),
            );
            if let Err(err) = composer.read().accept(&meta) {
                notifier.report(&err);
                continue;
            }
            spawn(async move {
                let bytes = match file.read_bytes().await {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        tracing::warn!("could not read {}: {e}", meta.name);
                        notifier.error(format!("Could not read {}", meta.name));
                        return;
                    }
                };
                match lease_object_url(&bytes, &meta.mime) {
                    Ok(url) => {
                        composer.write().push(&meta, url);
                    }
                    Err(e) => {
                        tracing::warn!("{e}");
                        notifier.error(format!("Could not attach {}", meta.name));
                    }
                }
            });
        }
    };

    rsx! {
        div { class: "composer",
            if !pending.is_empty() {
                div { class: "pending-attachments",
                    for attachment in pending {
                        {
                            let id = attachment.id;
                            rsx! {
                                span { class: "attachment-chip", key: "{id}",
                                    "{attachment.kind.label()}: {attachment.name} ({attachment.size})"
                                    button {
                                        class: "chip-remove",
                                        title: "Remove attachment",
                                        onclick: move |_| {
                                            composer.write().remove_attachment(id);
                                        },
                                        "✕"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "composer-row",
                label { class: "attach-button", title: "Attach files",
                    "📎"
                    input {
                        r#type: "file",
                        multiple: true,
                        style: "display: none",
                        onchange: on_files,
                    }
                }
                input {
                    r#type: "text",
                    placeholder: "Type a message...",
                    value: "{text}",
                    oninput: move |evt| composer.write().set_text(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            send_draft(composer, state, pane, notifier);
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    disabled: !can_send,
                    onclick: move |_| send_draft(composer, state, pane, notifier),
                    "Send"
                }
            }
        }
    }
}
