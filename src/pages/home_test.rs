use super::*;

#[test]
fn greeting_for_signed_in_user_uses_display_name() {
    let user = User {
        id: None,
        email: "lan@example.com".to_owned(),
        name: "Nguyen Thi Lan".to_owned(),
        phone: None,
        token: "tok".to_owned(),
    };
    assert_eq!(greeting_for(Some(&user)), "Welcome back, Nguyen Thi Lan.");
}

#[test]
fn greeting_for_visitor_prompts_sign_in() {
    assert_eq!(greeting_for(None), "Sign in to start an application.");
}
