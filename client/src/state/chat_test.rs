use super::*;

fn open_session() -> ChatSession {
    let mut session = ChatSession::new("09:00".to_owned());
    session.toggle();
    session
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_session_is_closed_with_welcome_message() {
    let session = ChatSession::new("09:00".to_owned());
    assert!(!session.is_open());
    assert_eq!(session.messages().len(), 1);

    let welcome = &session.messages()[0];
    assert_eq!(welcome.id(), MessageId(1));
    assert_eq!(welcome.sender(), Sender::Bot);
    assert_eq!(welcome.text(), WELCOME_MESSAGE);
    assert_eq!(welcome.timestamp(), "09:00");
}

#[test]
fn toggle_alternates_open_and_closed() {
    let mut session = ChatSession::new("09:00".to_owned());
    session.toggle();
    assert!(session.is_open());
    session.toggle();
    assert!(!session.is_open());
}

// =============================================================
// submit_draft
// =============================================================

#[test]
fn submit_draft_appends_text_as_typed_and_clears_draft() {
    let mut session = open_session();
    session.set_draft("  Hello  ");

    let id = session.submit_draft("09:01".to_owned());

    assert_eq!(id, Some(MessageId(2)));
    assert_eq!(session.messages().len(), 2);
    let last = session.last().unwrap();
    assert_eq!(last.sender(), Sender::User);
    assert_eq!(last.text(), "  Hello  ");
    assert_eq!(last.timestamp(), "09:01");
    assert_eq!(session.draft(), "");
}

#[test]
fn submit_draft_ignores_empty_and_whitespace() {
    for draft in ["", " ", "\t\n  "] {
        let mut session = open_session();
        session.set_draft(draft);
        assert_eq!(session.submit_draft("09:01".to_owned()), None);
        assert_eq!(session.messages().len(), 1, "draft {draft:?}");
        assert_eq!(session.draft(), draft);
    }
}

#[test]
fn submit_draft_refused_while_closed() {
    let mut session = ChatSession::new("09:00".to_owned());
    session.set_draft("Hello");
    assert!(!session.can_send());
    assert_eq!(session.submit_draft("09:01".to_owned()), None);
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.draft(), "Hello");
}

#[test]
fn bot_reply_uses_canned_text() {
    let mut session = open_session();
    let id = session.push_bot_reply("09:02".to_owned());
    let last = session.last().unwrap();
    assert_eq!(last.id(), id);
    assert_eq!(last.sender(), Sender::Bot);
    assert_eq!(last.text(), CANNED_REPLY);
}

#[test]
fn identifiers_strictly_increase() {
    let mut session = open_session();
    for text in ["one", "two", "three"] {
        session.set_draft(text);
        session.submit_draft("09:03".to_owned());
        session.push_bot_reply("09:03".to_owned());
    }

    let ids: Vec<u64> = session.messages().iter().map(|m| m.id().0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn message_id_displays_as_number() {
    assert_eq!(MessageId(42).to_string(), "42");
}
