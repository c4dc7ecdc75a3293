use super::*;

#[test]
fn flow_starts_on_the_signup_screen() {
    assert_eq!(SignupStep::default(), SignupStep::Signup);
}

#[test]
fn signup_success_advances_to_verify() {
    assert_eq!(next_step_after_signup(true), SignupStep::Verify);
}

#[test]
fn signup_failure_stays_on_signup() {
    assert_eq!(next_step_after_signup(false), SignupStep::Signup);
}

#[test]
fn valid_form_trims_name_and_email() {
    let form = validate_signup_form("  Ann  ", " a@x.com ", "secret1", "secret1").unwrap();
    assert_eq!(form.name, "Ann");
    assert_eq!(form.email, "a@x.com");
    assert_eq!(form.password, "secret1");
}

#[test]
fn missing_fields_block_submission() {
    assert_eq!(
        validate_signup_form("", "a@x.com", "secret1", "secret1"),
        Err("All fields are required.")
    );
    assert_eq!(
        validate_signup_form("Ann", "   ", "secret1", "secret1"),
        Err("All fields are required.")
    );
}

#[test]
fn password_mismatch_blocks_submission() {
    assert_eq!(
        validate_signup_form("Ann", "a@x.com", "secret1", "secret2"),
        Err("Passwords do not match")
    );
}

#[test]
fn short_password_blocks_submission() {
    assert_eq!(
        validate_signup_form("Ann", "a@x.com", "12345", "12345"),
        Err("Password must be at least 6 characters")
    );
}

#[test]
fn six_character_password_is_accepted() {
    assert!(validate_signup_form("Ann", "a@x.com", "123456", "123456").is_ok());
}

#[test]
fn code_input_is_trimmed_and_required() {
    assert_eq!(validate_code_input(" 123456 "), Ok("123456".to_owned()));
    assert_eq!(validate_code_input("   "), Err("Enter the verification code."));
}
