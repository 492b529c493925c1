//! Last-error slot semantics: set on failure, cleared by the next
//! operation, non-destructive reads, and isolation between sessions.

use dbseal_udf::UdfSession;
use pretty_assertions::assert_eq;

const KEY32: &[u8] = b"12345678901234567890123456789012";

#[test]
fn successful_operation_leaves_no_error() {
    let mut session = UdfSession::new();
    let envelope = session.encrypt(b"payload", KEY32, "aes-256-cbc", None);
    assert!(envelope.is_some());
    assert_eq!(session.last_error(), None);
}

#[test]
fn round_trip_through_one_session() {
    let mut session = UdfSession::new();
    let envelope = session
        .encrypt(b"session payload", KEY32, "aes-256-cbc", None)
        .unwrap();
    let plaintext = session.decrypt(&envelope, KEY32, "aes-256-cbc").unwrap();
    assert_eq!(plaintext, b"session payload");
    assert_eq!(session.last_error(), None);
}

#[test]
fn failed_encrypt_returns_none_and_sets_error() {
    let mut session = UdfSession::new();
    assert!(session.encrypt(b"payload", b"shortkey", "aes-256-cbc", None).is_none());

    let msg = session.last_error().expect("error should be set");
    assert!(msg.contains("invalid key length"), "got: {msg}");
    assert!(msg.contains("aes-256-cbc"), "got: {msg}");
    assert!(msg.contains("32"), "got: {msg}");
    assert!(msg.contains('8'), "got: {msg}");
}

#[test]
fn wrong_key_decrypt_reports_bad_decrypt() {
    let mut session = UdfSession::new();
    let envelope = session
        .encrypt(b"payload", KEY32, "aes-256-cbc", None)
        .unwrap();

    let wrong_key: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ012345";
    assert!(session.decrypt(&envelope, wrong_key, "aes-256-cbc").is_none());
    let msg = session.last_error().expect("error should be set");
    assert!(msg.contains("bad decrypt"), "got: {msg}");
}

#[test]
fn next_successful_operation_clears_the_error() {
    let mut session = UdfSession::new();
    assert!(session.encrypt(b"payload", KEY32, "no-such-cipher", None).is_none());
    assert!(session.last_error().is_some());

    assert!(session.encrypt(b"payload", KEY32, "aes-256-cbc", None).is_some());
    assert_eq!(session.last_error(), None);
}

#[test]
fn next_failed_operation_replaces_the_error() {
    let mut session = UdfSession::new();
    assert!(session.encrypt(b"payload", KEY32, "no-such-cipher", None).is_none());
    let first = session.last_error().unwrap().to_string();
    assert!(first.contains("unknown cipher"));

    assert!(session.encrypt(b"payload", b"shortkey", "aes-256-cbc", None).is_none());
    let second = session.last_error().unwrap();
    assert!(second.contains("invalid key length"));
    assert_ne!(first, second);
}

#[test]
fn reading_the_error_does_not_clear_it() {
    let mut session = UdfSession::new();
    assert!(session.encrypt(b"payload", KEY32, "no-such-cipher", None).is_none());

    let first_read = session.last_error().map(str::to_string);
    let second_read = session.last_error().map(str::to_string);
    assert!(first_read.is_some());
    assert_eq!(first_read, second_read);
}

#[test]
fn sessions_do_not_share_error_state() {
    let mut failing = UdfSession::new();
    let mut clean = UdfSession::new();

    assert!(failing.encrypt(b"payload", b"shortkey", "aes-256-cbc", None).is_none());
    assert!(clean.encrypt(b"payload", KEY32, "aes-256-cbc", None).is_some());

    assert!(failing.last_error().is_some());
    assert_eq!(clean.last_error(), None);
}

#[test]
fn short_envelope_error_reaches_the_session() {
    let mut session = UdfSession::new();
    assert!(session.decrypt(&[0u8; 16], KEY32, "aes-256-cbc").is_none());
    let msg = session.last_error().expect("error should be set");
    assert!(msg.contains("envelope too short"), "got: {msg}");
}
