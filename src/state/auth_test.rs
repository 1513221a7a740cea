use super::*;

// =============================================================
// Form defaults
// =============================================================

#[test]
fn login_form_default_is_empty() {
    let form = LoginForm::default();
    assert_eq!(form.username, "");
    assert_eq!(form.password, "");
}

#[test]
fn register_form_default_is_empty() {
    let form = RegisterForm::default();
    assert_eq!(form.username, "");
    assert_eq!(form.password, "");
    assert_eq!(form.confirm, "");
}

// =============================================================
// AuthForms defaults
// =============================================================

#[test]
fn auth_forms_default_both_dialogs_hidden() {
    let forms = AuthForms::default();
    assert!(!forms.show_login);
    assert!(!forms.show_register);
}

#[test]
fn auth_forms_default_contents_empty() {
    let forms = AuthForms::default();
    assert_eq!(forms.login, LoginForm::default());
    assert_eq!(forms.register, RegisterForm::default());
}
