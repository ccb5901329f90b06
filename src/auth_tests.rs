use super::*;

#[test]
fn test_digest_is_stable_hex() {
    let d = digest_hex("fleet-pass");
    assert_eq!(d.len(), 64);
    assert_eq!(d, digest_hex("fleet-pass"));
    assert_ne!(d, digest_hex("fleet-pass2"));
}

#[test]
fn test_verify_accepts_matching_passphrase() {
    let expected = digest_hex("correct horse");
    assert!(verify(&expected, "correct horse"));
    assert!(!verify(&expected, "wrong horse"));
}

#[test]
fn test_verify_ignores_digest_case_and_whitespace() {
    let expected = digest_hex("secret").to_uppercase();
    assert!(verify(&format!("  {expected}  "), "secret"));
}

#[test]
fn test_verify_rejects_malformed_digest() {
    assert!(!verify("", "secret"));
    assert!(!verify("abc123", "secret"));
}

#[test]
fn test_session_flow() {
    let expected = digest_hex("secret");
    let mut session = Session::new();
    assert!(!session.is_authenticated());

    assert!(!session.login(&expected, "nope"));
    assert!(!session.is_authenticated());

    assert!(session.login(&expected, "secret"));
    assert!(session.is_authenticated());

    session.logout();
    assert!(!session.is_authenticated());
}
