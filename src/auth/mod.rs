//! Authentication module
//!
//! Session handling for the catalog API: the session cookie is captured from
//! the `Set-Cookie` header of a login or register response and replayed as
//! the `Cookie` header on authenticated calls.
//!
//! The [`SessionStore`] holds the active session for an extension instance;
//! [`login_forms`] describes the inputs a host collects before logging in.

mod forms;
mod session;
mod types;

pub use forms::{login_forms, LOGIN_FORM, REGISTER_FORM};
pub use session::{extract_session, SessionStore, SESSION_COOKIE_PREFIX};
pub use types::{InputField, InputFieldKind, LoginForm, User, SESSION_EXTRA};
