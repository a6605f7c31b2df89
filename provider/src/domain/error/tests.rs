//! Tests for the error payload constructors and serde contract.

use rstest::rstest;
use serde_json::json;

use super::*;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::invalid_credentials("no match"), ErrorCode::InvalidCredentials)]
#[case(Error::invalid_auth_token("stale"), ErrorCode::InvalidAuthToken)]
#[case(Error::artist_not_found("artist '-1' is not registered"), ErrorCode::ArtistNotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_expected_codes(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn details_survive_attachment_and_round_trip() {
    let error = Error::invalid_request("bad").with_details(json!({ "field": "username" }));

    let serialised = serde_json::to_string(&error).expect("error serialises");
    let parsed: Error = serde_json::from_str(&serialised).expect("error parses back");

    assert_eq!(parsed, error);
    assert_eq!(parsed.details(), Some(&json!({ "field": "username" })));
}

#[rstest]
fn codes_use_snake_case_on_the_wire() {
    let error = Error::invalid_auth_token("stale token");
    let value = serde_json::to_value(&error).expect("error serialises");
    assert_eq!(value["code"], "invalid_auth_token");
}

#[rstest]
fn deserialisation_rejects_blank_messages() {
    let result: Result<Error, _> =
        serde_json::from_str(r#"{"code":"internal_error","message":"   "}"#);
    assert!(result.is_err());
}

#[rstest]
fn display_uses_the_message() {
    let error = Error::artist_not_found("artist '9' is not registered");
    assert_eq!(error.to_string(), "artist '9' is not registered");
}
