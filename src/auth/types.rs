//! Auth types
//!
//! Users and the login form definitions shown by the host.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key of the session token in [`User::extras`]
pub const SESSION_EXTRA: &str = "session";

/// A logged-in account
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    /// Account id (the email for freshly registered accounts)
    pub id: String,
    /// Display name
    pub name: String,
    /// Opaque values the host stores and hands back on `set_login_user`
    #[serde(default)]
    pub extras: HashMap<String, String>,
}

impl User {
    /// Create a user carrying a session token
    pub fn with_session(id: impl Into<String>, name: impl Into<String>, session: impl Into<String>) -> Self {
        let mut extras = HashMap::new();
        extras.insert(SESSION_EXTRA.to_string(), session.into());
        Self {
            id: id.into(),
            name: name.into(),
            extras,
        }
    }

    /// The session token, if this user carries one
    pub fn session(&self) -> Option<&str> {
        self.extras.get(SESSION_EXTRA).map(String::as_str)
    }
}

/// Kind of a login input, used by the host to pick a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFieldKind {
    Username,
    Email,
    Password,
    Misc,
}

/// One input of a login form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputField {
    pub kind: InputFieldKind,
    /// Key of the value in the data passed to `on_login`
    pub key: String,
    pub label: String,
    pub is_required: bool,
}

impl InputField {
    /// A required input
    pub fn required(kind: InputFieldKind, key: &str, label: &str) -> Self {
        Self {
            kind,
            key: key.to_string(),
            label: label.to_string(),
            is_required: true,
        }
    }
}

/// A login form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub key: String,
    pub label: String,
    pub icon: InputFieldKind,
    pub fields: Vec<InputField>,
}

impl LoginForm {
    /// Keys of the required inputs
    pub fn required_keys(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.is_required)
            .map(|f| f.key.as_str())
    }
}
