#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// In-progress contents of the login dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// In-progress contents of the registration dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub confirm: String,
}

/// Visibility and contents of the two auth dialogs.
///
/// Owned by the UI layer as a single `RwSignal` provided via context and
/// mutated only through the functions in [`crate::auth::controller`].
/// Opening a dialog always resets its form; closing keeps whatever the user
/// typed.
#[derive(Clone, Debug, Default)]
pub struct AuthForms {
    pub show_login: bool,
    pub show_register: bool,
    pub login: LoginForm,
    pub register: RegisterForm,
}
