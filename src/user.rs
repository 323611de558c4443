//! User account records gathered by the editor.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Result, UserEditorError};
use crate::types::{LoginShell, PasswordStrength};

/// Longest username `useradd` accepts
pub const USERNAME_MAX_LEN: usize = 32;

static USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z_][a-z0-9_-]*\$?$").expect("username pattern is a valid regex")
});

/// Check a username against the pattern and length bound
pub fn is_valid_username(username: &str) -> bool {
    username.len() <= USERNAME_MAX_LEN && USERNAME_RE.is_match(username)
}

/// Like [`is_valid_username`], but returns a descriptive error
pub fn validate_username(username: &str) -> Result<()> {
    if username.len() > USERNAME_MAX_LEN {
        return Err(UserEditorError::validation(format!(
            "username '{}' is longer than {} characters",
            username, USERNAME_MAX_LEN
        )));
    }
    if !USERNAME_RE.is_match(username) {
        return Err(UserEditorError::validation(format!(
            "username '{}' must start with a lowercase letter or underscore and contain only \
             lowercase letters, digits, '_' or '-' (optionally ending in '$')",
            username
        )));
    }
    Ok(())
}

/// A password held in memory only as long as needed.
///
/// The clear text is never part of `Debug` output and this buffer is wiped on
/// drop. Strings handed through a [`crate::prompt::Prompter`] are not.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct Password {
    plaintext: String,
}

impl Password {
    /// Fixed-width mask shown instead of the password
    pub const MASK: &'static str = "********";

    pub fn new(plaintext: impl Into<String>) -> Self {
        Self {
            plaintext: plaintext.into(),
        }
    }

    /// Masked form for display. Empty passwords render as an empty string.
    pub fn hidden(&self) -> &'static str {
        if self.plaintext.is_empty() {
            ""
        } else {
            Self::MASK
        }
    }

    /// Clear text, for handing to the installer
    pub fn expose(&self) -> &str {
        &self.plaintext
    }

    pub fn is_empty(&self) -> bool {
        self.plaintext.is_empty()
    }

    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::strength(&self.plaintext)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&self.hidden()).finish()
    }
}

fn default_shell() -> String {
    LoginShell::default().path().to_string()
}

/// A system account to be created by the installer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: Password,
    pub sudo: bool,
    #[serde(default = "default_shell")]
    pub shell: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl User {
    /// Create a user with the default login shell and no full name
    pub fn new(username: impl Into<String>, password: Password, sudo: bool) -> Self {
        Self {
            username: username.into(),
            password,
            sudo,
            shell: default_shell(),
            full_name: None,
        }
    }

    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    pub fn with_full_name(mut self, full_name: Option<String>) -> Self {
        self.full_name = full_name;
        self
    }
}
