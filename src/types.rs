//! Type-safe enums for the user editor
//!
//! Menu actions, login shells and password strength are closed enums rather
//! than strings, so logic matches on variants and display text is resolved
//! separately through the translator.

use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Login shell offered when creating a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[derive(Display, EnumString, EnumIter, IntoStaticStr)]
pub enum LoginShell {
    #[default]
    #[strum(serialize = "/bin/bash")]
    Bash,
    #[strum(serialize = "/bin/zsh")]
    Zsh,
    #[strum(serialize = "/bin/fish")]
    Fish,
}

impl LoginShell {
    /// Filesystem path of the shell binary
    pub fn path(&self) -> &'static str {
        self.into()
    }

    /// All candidate shell paths, in declaration order
    pub fn candidates() -> Vec<String> {
        Self::iter().map(|s| s.path().to_string()).collect()
    }
}

/// Actions offered by the user editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum UserAction {
    Add,
    ChangePassword,
    PromoteDemote,
    Delete,
}

impl UserAction {
    /// Message id used to look up the menu label
    pub fn msgid(&self) -> &'static str {
        match self {
            Self::Add => "Add a user",
            Self::ChangePassword => "Change password",
            Self::PromoteDemote => "Promote/Demote user",
            Self::Delete => "Delete User",
        }
    }

    /// Whether the action operates on a selected entry
    pub fn requires_entry(&self) -> bool {
        !matches!(self, Self::Add)
    }

    /// Actions shown in the root menu
    pub fn base_actions() -> Vec<UserAction> {
        Self::iter().filter(|a| !a.requires_entry()).collect()
    }

    /// Actions shown after selecting an entry
    pub fn entry_actions() -> Vec<UserAction> {
        Self::iter().filter(|a| a.requires_entry()).collect()
    }
}

/// Rough password strength classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PasswordStrength {
    #[strum(serialize = "very weak")]
    VeryWeak,
    Weak,
    Moderate,
    Strong,
}

impl PasswordStrength {
    /// Classify a password by the character classes it uses and its length
    pub fn strength(password: &str) -> Self {
        let digit = password.chars().any(|c| c.is_ascii_digit());
        let upper = password.chars().any(|c| c.is_uppercase());
        let lower = password.chars().any(|c| c.is_lowercase());
        let symbol = password.chars().any(|c| !c.is_alphanumeric());

        Self::check(digit, upper, lower, symbol, password.chars().count())
    }

    fn check(digit: bool, upper: bool, lower: bool, symbol: bool, length: usize) -> Self {
        // (strong, moderate, weak) minimum lengths per character class combination
        let thresholds = if digit && upper && lower && symbol {
            Some((16, 12, 7))
        } else if digit && upper && lower {
            Some((18, 14, 9))
        } else if upper && lower {
            Some((22, 16, 10))
        } else if lower && digit {
            Some((20, 15, 9))
        } else if lower {
            Some((22, 18, 12))
        } else {
            None
        };

        match thresholds {
            Some((strong, _, _)) if length >= strong => Self::Strong,
            Some((_, moderate, _)) if length >= moderate => Self::Moderate,
            Some((_, _, weak)) if length >= weak => Self::Weak,
            _ => Self::VeryWeak,
        }
    }
}
