//! Floating chat widget with a scripted automated reply.
//!
//! The widget owns its `ChatSession`; nothing is shared with other
//! components. Each accepted user message schedules exactly one bot reply
//! after `BOT_REPLY_DELAY`. Replies are guarded by the widget's `Liveness`,
//! so a reply due after unmount is dropped.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatSession, MessageId, Sender};
use crate::util::clock::{ClockFn, local_time_label};
use crate::util::deferred::{BOT_REPLY_DELAY, Liveness, Scheduler, use_scheduler};

/// Submit the session draft and schedule the scripted reply.
///
/// Returns the new user message id, or `None` when the draft was rejected
/// (panel closed, or blank after trimming).
pub fn send_message(
    session: RwSignal<ChatSession>,
    scheduler: &dyn Scheduler,
    liveness: &Liveness,
    clock: ClockFn,
) -> Option<MessageId> {
    let sent = session.try_update(|s| s.submit_draft(clock())).flatten()?;
    let reply = liveness.guard("chat reply", move || {
        session.try_update(|s| s.push_bot_reply(clock()));
    });
    scheduler.schedule(BOT_REPLY_DELAY, reply);
    Some(sent)
}

fn bubble_class(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "chat-widget__message chat-widget__message--user",
        Sender::Bot => "chat-widget__message chat-widget__message--bot",
    }
}

fn render_message(message: &ChatMessage) -> impl IntoView + use<> {
    let text = message.text().to_owned();
    let timestamp = message.timestamp().to_owned();
    view! {
        <div class=bubble_class(message.sender())>
            <p class="chat-widget__text">{text}</p>
            <span class="chat-widget__time">{timestamp}</span>
        </div>
    }
}

/// Bottom-corner toggle button and chat panel.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let scheduler = use_scheduler();
    let liveness = Liveness::for_current_owner();
    let session = RwSignal::new(ChatSession::new(local_time_label()));
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view while the panel is open.
    Effect::new(move || {
        let (open, _count) = session.with(|s| (s.is_open(), s.messages().len()));

        #[cfg(feature = "hydrate")]
        {
            if open {
                if let Some(el) = messages_ref.get() {
                    el.set_scroll_top(el.scroll_height());
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = open;
        }
    });

    let send = Callback::new(move |()| {
        send_message(session, scheduler.as_dyn(), &liveness, local_time_label);
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send.run(());
        }
    };

    let is_open = move || session.with(ChatSession::is_open);

    view! {
        <div class="chat-widget">
            <Show when=is_open>
                <div class="chat-widget__panel" role="dialog" aria-label="Chat with Cadence">
                    <div class="chat-widget__header">
                        <span class="chat-widget__status-dot"></span>
                        <div>
                            <p class="chat-widget__title">"Cadence Support"</p>
                            <p class="chat-widget__subtitle">"We typically reply in a few minutes"</p>
                        </div>
                    </div>
                    <div class="chat-widget__messages" node_ref=messages_ref>
                        {move || session.with(|s| s.messages().iter().map(render_message).collect_view())}
                    </div>
                    <div class="chat-widget__input-row">
                        <input
                            class="chat-widget__input"
                            type="text"
                            placeholder="Type your message..."
                            prop:value=move || session.with(|s| s.draft().to_owned())
                            on:input=move |ev| session.update(|s| s.set_draft(event_target_value(&ev)))
                            on:keydown=on_keydown
                        />
                        <button
                            class="btn btn--primary chat-widget__send"
                            on:click=move |_| send.run(())
                            disabled=move || !session.with(ChatSession::can_send)
                        >
                            "Send"
                        </button>
                    </div>
                </div>
            </Show>
            <button
                class="chat-widget__toggle"
                aria-label=move || if is_open() { "Close chat" } else { "Open chat" }
                aria-expanded=move || if is_open() { "true" } else { "false" }
                on:click=move |_| session.update(ChatSession::toggle)
            >
                {move || if is_open() { "\u{2715}" } else { "\u{1F4AC}" }}
            </button>
        </div>
    }
}
