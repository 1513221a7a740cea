//! Dialog lifecycle and submit sequencing for the auth forms.
//!
//! ERROR HANDLING
//! ==============
//! Validation checks run in a fixed order and the first failure aborts the
//! submit before any side effect beyond its own notification: no store
//! write, no navigation, no change to the form cell. The storage and
//! navigation boundaries themselves are treated as always succeeding.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::routes;
use crate::state::auth::{AuthForms, LoginForm, RegisterForm};

use super::{AuthProvider, Navigator, Notifier};

/// Alert text when the login form is missing a field.
pub const MSG_LOGIN_MISSING: &str = "Please enter username and password";
/// Alert text when the registration form is missing a field.
pub const MSG_REGISTER_MISSING: &str = "Please fill all fields";
/// Alert text when the registration passwords differ.
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match!";

/// Why a submit was rejected. The user-facing wording lives in the `MSG_*`
/// constants (login and register use different missing-field text);
/// `Display` here is for logs and test output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("required field is empty")]
    MissingField,
    #[error("password confirmation does not match")]
    PasswordMismatch,
}

/// Show the login dialog with freshly cleared fields.
pub fn open_login(forms: &mut AuthForms) {
    forms.show_login = true;
    forms.login = LoginForm::default();
}

/// Hide the login dialog, keeping whatever the user typed.
pub fn close_login(forms: &mut AuthForms) {
    forms.show_login = false;
}

/// Show the registration dialog with freshly cleared fields.
pub fn open_register(forms: &mut AuthForms) {
    forms.show_register = true;
    forms.register = RegisterForm::default();
}

/// Hide the registration dialog, keeping whatever the user typed.
pub fn close_register(forms: &mut AuthForms) {
    forms.show_register = false;
}

/// Validate the login form and, on success, record the identity, confirm to
/// the user, and navigate to the game hub.
///
/// Visibility flags are untouched either way: a failed submit leaves the
/// dialog open with its contents intact, and a successful one leaves it to
/// be unmounted by navigation.
///
/// # Errors
///
/// [`ValidationError::MissingField`] when the username or password is empty.
pub fn submit_login(
    form: &LoginForm,
    provider: &impl AuthProvider,
    notifier: &impl Notifier,
    navigator: &impl Navigator,
) -> Result<(), ValidationError> {
    if form.username.is_empty() || form.password.is_empty() {
        notifier.notify(MSG_LOGIN_MISSING);
        return Err(ValidationError::MissingField);
    }

    provider.login(&form.username, &form.password);
    notifier.notify(&format!("Login successful!\nWelcome {}", form.username));
    navigator.go(routes::GAME);
    Ok(())
}

/// Validate the registration form and, on success, record the identity,
/// confirm to the user, and navigate to the game hub.
///
/// Presence is checked before the password/confirm comparison, so an empty
/// `confirm` against a non-empty password reports a mismatch rather than a
/// missing field.
///
/// # Errors
///
/// [`ValidationError::MissingField`] when the username or password is
/// empty; [`ValidationError::PasswordMismatch`] when the confirmation
/// differs from the password.
pub fn submit_register(
    form: &RegisterForm,
    provider: &impl AuthProvider,
    notifier: &impl Notifier,
    navigator: &impl Navigator,
) -> Result<(), ValidationError> {
    if form.username.is_empty() || form.password.is_empty() {
        notifier.notify(MSG_REGISTER_MISSING);
        return Err(ValidationError::MissingField);
    }
    if form.password != form.confirm {
        notifier.notify(MSG_PASSWORD_MISMATCH);
        return Err(ValidationError::PasswordMismatch);
    }

    provider.register(&form.username, &form.password);
    notifier.notify(&format!(
        "Registration successful!\nWelcome {}",
        form.username
    ));
    navigator.go(routes::GAME);
    Ok(())
}
