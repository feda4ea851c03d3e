use super::*;

#[test]
fn present_attribute_becomes_game_id() {
    let id = GameId::from_attribute(Some("42".to_owned())).expect("id");
    assert_eq!(id.as_str(), "42");
    assert_eq!(id.to_string(), "42");
}

#[test]
fn absent_attribute_is_missing_identifier() {
    assert_eq!(GameId::from_attribute(None), Err(ModalError::MissingIdentifier));
}

#[test]
fn blank_attribute_is_missing_identifier() {
    assert_eq!(GameId::from_attribute(Some(String::new())), Err(ModalError::MissingIdentifier));
    assert_eq!(GameId::from_attribute(Some("  ".to_owned())), Err(ModalError::MissingIdentifier));
}
