use std::time::Duration;

use leptos::reactive::owner::Owner;

use super::*;
use crate::state::chat::CANNED_REPLY;
use crate::util::deferred::manual::ManualScheduler;

fn fixed_clock() -> String {
    "10:30".to_owned()
}

fn open_session() -> RwSignal<ChatSession> {
    let mut session = ChatSession::new(fixed_clock());
    session.toggle();
    RwSignal::new(session)
}

fn draft(session: RwSignal<ChatSession>, text: &str) {
    session.update(|s| s.set_draft(text));
}

fn count(session: RwSignal<ChatSession>) -> usize {
    session.with_untracked(|s| s.messages().len())
}

#[test]
fn send_hello_then_bot_reply_after_delay() {
    let scheduler = ManualScheduler::default();
    let liveness = Liveness::new();
    let session = open_session();

    draft(session, "Hello");
    let id = send_message(session, &scheduler, &liveness, fixed_clock);

    assert_eq!(id, Some(MessageId(2)));
    assert_eq!(count(session), 2);
    assert_eq!(session.with_untracked(|s| s.draft().to_owned()), "");

    scheduler.advance(BOT_REPLY_DELAY - Duration::from_millis(1));
    assert_eq!(count(session), 2);

    scheduler.advance(Duration::from_millis(1));
    assert_eq!(count(session), 3);
    session.with_untracked(|s| {
        let last = s.last().unwrap();
        assert_eq!(last.sender(), Sender::Bot);
        assert_eq!(last.text(), CANNED_REPLY);
    });
}

#[test]
fn blank_draft_is_not_sent_and_schedules_nothing() {
    let scheduler = ManualScheduler::default();
    let liveness = Liveness::new();
    let session = open_session();

    for text in ["", "   ", "\n\t"] {
        draft(session, text);
        assert_eq!(send_message(session, &scheduler, &liveness, fixed_clock), None);
    }

    assert_eq!(count(session), 1);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn closed_panel_does_not_send() {
    let scheduler = ManualScheduler::default();
    let liveness = Liveness::new();
    let session = RwSignal::new(ChatSession::new(fixed_clock()));

    draft(session, "Hello");
    assert_eq!(send_message(session, &scheduler, &liveness, fixed_clock), None);
    assert_eq!(count(session), 1);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn rapid_messages_each_get_one_reply_in_order() {
    let scheduler = ManualScheduler::default();
    let liveness = Liveness::new();
    let session = open_session();

    for text in ["one", "two", "three"] {
        draft(session, text);
        send_message(session, &scheduler, &liveness, fixed_clock);
    }
    assert_eq!(count(session), 4);
    assert_eq!(scheduler.pending(), 3);

    scheduler.advance(BOT_REPLY_DELAY);
    assert_eq!(count(session), 7);

    let senders: Vec<Sender> = session.with_untracked(|s| s.messages().iter().map(ChatMessage::sender).collect());
    assert_eq!(
        senders,
        vec![Sender::Bot, Sender::User, Sender::User, Sender::User, Sender::Bot, Sender::Bot, Sender::Bot]
    );
    let ids: Vec<u64> = session.with_untracked(|s| s.messages().iter().map(|m| m.id().0).collect());
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn reply_after_unmount_is_suppressed() {
    let scheduler = ManualScheduler::default();
    let liveness = Liveness::new();
    let session = open_session();

    draft(session, "Hello");
    send_message(session, &scheduler, &liveness, fixed_clock);
    assert_eq!(count(session), 2);

    liveness.end();
    scheduler.advance(BOT_REPLY_DELAY);

    assert_eq!(count(session), 2);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn owner_cleanup_ends_liveness_and_pending_reply_is_harmless() {
    let scheduler = ManualScheduler::default();
    let owner = Owner::new();

    let (session, liveness) = owner.with(|| {
        let liveness = Liveness::for_current_owner();
        (open_session(), liveness)
    });

    draft(session, "Hello");
    send_message(session, &scheduler, &liveness, fixed_clock);

    owner.cleanup();
    assert!(!liveness.is_alive());

    // Fires after unmount: must neither panic nor write.
    scheduler.advance(BOT_REPLY_DELAY);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn bubble_class_distinguishes_senders() {
    assert!(bubble_class(Sender::User).ends_with("--user"));
    assert!(bubble_class(Sender::Bot).ends_with("--bot"));
}
