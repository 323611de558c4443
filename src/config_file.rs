//! Users file handling for loading and saving the edited user list.
//!
//! The file is JSON with a single `users` array. Passwords are stored in
//! clear text so the installer can hand them to `chpasswd`; treat the file
//! as a credentials file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::user::{User, validate_username};

/// Users that the installer should create
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersFile {
    #[serde(default)]
    pub users: Vec<User>,
}

impl UsersFile {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Save the users to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self.to_json()?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write users to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize users to JSON")
    }

    /// Load users from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read users from {:?}", path.as_ref()))?;

        let file: Self = serde_json::from_str(&content).context("Failed to parse users JSON")?;

        Ok(file)
    }

    /// Validate every user and the uniqueness of usernames
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for user in &self.users {
            validate_username(&user.username)?;

            if !seen.insert(user.username.as_str()) {
                anyhow::bail!("Duplicate username '{}'", user.username);
            }

            if !user.shell.starts_with('/') {
                anyhow::bail!(
                    "Shell for '{}' must be an absolute path, got '{}'",
                    user.username,
                    user.shell
                );
            }
        }

        Ok(())
    }
}
