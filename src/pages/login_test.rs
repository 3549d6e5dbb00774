use super::*;

#[test]
fn validate_phone_input_trims_and_requires_value() {
    assert_eq!(validate_phone_input("  9876543210 "), Ok("9876543210".to_owned()));
    assert_eq!(validate_phone_input("   "), Err("phone_required"));
}

#[test]
fn validate_signup_input_requires_name_first() {
    assert_eq!(validate_signup_input(" ", "", Role::Worker, Language::En), Err("name_required"));
    assert_eq!(validate_signup_input("Asha", " ", Role::Worker, Language::En), Err("phone_required"));
}

#[test]
fn validate_signup_input_carries_role_and_language() {
    let request = validate_signup_input(" Asha ", " 555 ", Role::Doctor, Language::Ta).unwrap();
    assert_eq!(
        request,
        SignupRequest { name: "Asha".to_owned(), role: Role::Doctor, phone: "555".to_owned(), language: Language::Ta }
    );
}

#[test]
fn validation_messages_are_translated() {
    for key in ["phone_required", "name_required"] {
        assert_ne!(t(Language::En, key), key);
    }
}
