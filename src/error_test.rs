use super::*;

#[test]
fn fetch_errors_are_classified() {
    assert!(ModalError::NetworkFailure("offline".to_owned()).is_fetch_error());
    assert!(ModalError::HttpStatus(500).is_fetch_error());
    assert!(ModalError::MalformedResponse("eof".to_owned()).is_fetch_error());
    assert!(ModalError::Timeout(3000).is_fetch_error());
}

#[test]
fn setup_and_trigger_errors_are_not_fetch_errors() {
    assert!(!ModalError::MissingIdentifier.is_fetch_error());
    assert!(!ModalError::MissingElement("modal".to_owned()).is_fetch_error());
    assert!(!ModalError::InvalidConfig("bad".to_owned()).is_fetch_error());
}

#[test]
fn display_messages_name_the_failure() {
    assert_eq!(ModalError::MissingIdentifier.to_string(), "trigger has no game id");
    assert_eq!(ModalError::HttpStatus(404).to_string(), "board request returned status 404");
    assert_eq!(ModalError::Timeout(250).to_string(), "board request timed out after 250 ms");
    assert_eq!(
        ModalError::MissingElement("#modal-close".to_owned()).to_string(),
        "missing element: #modal-close"
    );
}
