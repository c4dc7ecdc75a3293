use super::*;
use crate::net::types::ROLE_OWNER;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  a@x.com  ", "secret1"),
        Ok(("a@x.com".to_owned(), "secret1".to_owned()))
    );
}

#[test]
fn validate_login_input_rejects_missing_fields() {
    assert_eq!(validate_login_input("", "secret1"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@x.com", ""), Err("Enter both email and password."));
    assert_eq!(validate_login_input("   ", "secret1"), Err("Enter both email and password."));
}

#[test]
fn login_outcome_yields_session_pair_on_success() {
    let resp = AuthResponse {
        success: true,
        message: None,
        token: Some("tok-1".to_owned()),
        user: Some(OwnerUser {
            name: "Ann".to_owned(),
            email: "a@x.com".to_owned(),
            role: ROLE_OWNER.to_owned(),
        }),
    };
    let (token, user) = login_outcome(&resp).unwrap();
    assert_eq!(token, "tok-1");
    assert_eq!(user.email, "a@x.com");
}

#[test]
fn login_outcome_surfaces_server_message() {
    let resp = AuthResponse {
        success: false,
        message: Some("Invalid credentials".to_owned()),
        token: None,
        user: None,
    };
    assert_eq!(login_outcome(&resp), Err("Invalid credentials".to_owned()));
}

#[test]
fn login_outcome_falls_back_to_generic_message() {
    let resp = AuthResponse { success: false, message: None, token: None, user: None };
    assert_eq!(login_outcome(&resp), Err("Login failed".to_owned()));

    // A "successful" response without a session payload is still a failure.
    let incomplete = AuthResponse { success: true, message: None, token: None, user: None };
    assert_eq!(login_outcome(&incomplete), Err("Login failed".to_owned()));
}
