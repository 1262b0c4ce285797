use super::*;

fn valid_form() -> RegisterForm {
    RegisterForm {
        full_name: " Nguyen Thi Lan ".to_owned(),
        email: " lan@example.com ".to_owned(),
        phone: String::new(),
        password: "Secret123".to_owned(),
        confirm_password: "Secret123".to_owned(),
    }
}

#[test]
fn valid_form_builds_trimmed_request() {
    assert_eq!(
        validate_register_input(&valid_form()),
        Ok(RegisterRequest {
            email: "lan@example.com".to_owned(),
            full_name: "Nguyen Thi Lan".to_owned(),
            phone: None,
            password: "Secret123".to_owned(),
        })
    );
}

#[test]
fn phone_is_carried_when_given() {
    let form = RegisterForm { phone: "0912345678".to_owned(), ..valid_form() };
    let request = validate_register_input(&form).unwrap();
    assert_eq!(request.phone.as_deref(), Some("0912345678"));
}

#[test]
fn short_name_is_rejected_first() {
    let form = RegisterForm { full_name: "Al".to_owned(), email: "bad".to_owned(), ..valid_form() };
    assert_eq!(validate_register_input(&form), Err("Name must be at least 3 characters."));
}

#[test]
fn bad_email_is_rejected() {
    let form = RegisterForm { email: "lan@example".to_owned(), ..valid_form() };
    assert_eq!(validate_register_input(&form), Err("Enter a valid email address."));
}

#[test]
fn bad_phone_is_rejected() {
    let form = RegisterForm { phone: "123".to_owned(), ..valid_form() };
    assert_eq!(validate_register_input(&form), Err("Phone must be 10 digits starting with 0."));
}

#[test]
fn weak_password_is_rejected() {
    let form = RegisterForm { password: "secret".to_owned(), confirm_password: "secret".to_owned(), ..valid_form() };
    assert_eq!(validate_register_input(&form), Err("Password must be at least 8 characters."));
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let form = RegisterForm { confirm_password: "Secret124".to_owned(), ..valid_form() };
    assert_eq!(validate_register_input(&form), Err("Passwords do not match."));
}
