//! Login form definitions

use super::types::{InputField, InputFieldKind, LoginForm};

/// Key of the account creation form
pub const REGISTER_FORM: &str = "register";

/// Key of the email/password login form
pub const LOGIN_FORM: &str = "login";

/// The forms a host can show: register first, then login
pub fn login_forms() -> Vec<LoginForm> {
    vec![
        LoginForm {
            key: REGISTER_FORM.to_string(),
            label: "Register".to_string(),
            icon: InputFieldKind::Misc,
            fields: vec![
                InputField::required(InputFieldKind::Username, "username", "Username"),
                InputField::required(InputFieldKind::Email, "email", "Email"),
                InputField::required(InputFieldKind::Password, "password", "Password"),
            ],
        },
        LoginForm {
            key: LOGIN_FORM.to_string(),
            label: "Login".to_string(),
            icon: InputFieldKind::Misc,
            fields: vec![
                InputField::required(InputFieldKind::Email, "email", "Email"),
                InputField::required(InputFieldKind::Password, "password", "Password"),
            ],
        },
    ]
}
