use super::*;

#[test]
fn display_text_matches_user_messages() {
    assert_eq!(CalcError::InvalidNumbers.to_string(), INVALID_NUMBERS_MESSAGE);
    assert_eq!(CalcError::InvalidOperator("%".into()).to_string(), INVALID_OPERATOR_MESSAGE);
    assert_eq!(CalcError::BackendUnspecified { status: 500 }.to_string(), UNKNOWN_ERROR_MESSAGE);
    assert_eq!(CalcError::Transport("refused".into()).to_string(), NETWORK_ERROR_MESSAGE);
    assert_eq!(CalcError::MalformedResponse("eof".into()).to_string(), NETWORK_ERROR_MESSAGE);
}

#[test]
fn backend_message_is_shown_verbatim() {
    assert_eq!(CalcError::Backend("division by zero".into()).to_string(), "division by zero");
}

#[test]
fn only_validation_errors_are_local() {
    assert!(CalcError::InvalidNumbers.is_local());
    assert!(CalcError::InvalidOperator("x".into()).is_local());
    assert!(!CalcError::Backend("x".into()).is_local());
    assert!(!CalcError::Transport("x".into()).is_local());
}

#[test]
fn detail_keeps_transport_cause() {
    assert_eq!(CalcError::Transport("connection refused".into()).detail(), "connection refused");
    assert_eq!(
        CalcError::BackendUnspecified { status: 502 }.detail(),
        "status 502 without error message"
    );
}
