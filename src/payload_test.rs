use super::*;
use crate::consts::ENDPOINT_PREFIX;

fn id(raw: &str) -> GameId {
    GameId::from_attribute(Some(raw.to_owned())).expect("id")
}

#[test]
fn board_endpoint_formats_expected_path() {
    assert_eq!(board_endpoint(ENDPOINT_PREFIX, &id("42")), "/api/admin/get_board/42/");
}

#[test]
fn board_endpoint_honors_custom_prefix() {
    assert_eq!(board_endpoint("/staff/boards/", &id("7")), "/staff/boards/7/");
}

#[test]
fn payload_parses_board_html() {
    let payload = BoardPayload::from_json(r#"{"board_html": "<div>Board 42</div>"}"#).expect("payload");
    assert_eq!(payload.board_html, "<div>Board 42</div>");
}

#[test]
fn payload_ignores_extra_fields() {
    let payload = BoardPayload::from_json(r#"{"board_html": "<b>X</b>", "game": 3}"#).expect("payload");
    assert_eq!(payload.board_html, "<b>X</b>");
}

#[test]
fn payload_without_board_html_is_malformed() {
    let err = BoardPayload::from_json(r#"{"html": "<b>X</b>"}"#).expect_err("missing field");
    assert!(matches!(err, ModalError::MalformedResponse(_)));
}

#[test]
fn non_json_body_is_malformed() {
    let err = BoardPayload::from_json("<html>Server Error</html>").expect_err("not json");
    assert!(matches!(err, ModalError::MalformedResponse(_)));
}

#[test]
fn non_string_board_html_is_malformed() {
    let err = BoardPayload::from_json(r#"{"board_html": null}"#).expect_err("null field");
    assert!(matches!(err, ModalError::MalformedResponse(_)));
}

#[test]
fn any_status_passes_without_ok_requirement() {
    assert_eq!(check_status(404, false), Ok(()));
    assert_eq!(check_status(500, false), Ok(()));
    let payload = BoardPayload::from_json(r#"{"board_html": "<p>not found</p>"}"#).expect("payload");
    assert_eq!(payload.board_html, "<p>not found</p>");
}

#[test]
fn non_2xx_status_fails_when_ok_required() {
    assert_eq!(check_status(200, true), Ok(()));
    assert_eq!(check_status(204, true), Ok(()));
    assert_eq!(check_status(302, true), Err(ModalError::HttpStatus(302)));
    assert_eq!(check_status(404, true), Err(ModalError::HttpStatus(404)));
}
