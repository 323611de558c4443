//! ArchTUI user account editor
//!
//! Interactive sub-flow of the installer that builds the list of user
//! accounts to create: add users, change passwords, toggle sudo, delete.

pub mod cli;
pub mod config_file;
pub mod editor;
pub mod error;
pub mod input;
pub mod list_manager;
pub mod prompt;
pub mod scrolling;
pub mod theme;
pub mod translation;
pub mod types;
pub mod ui;
pub mod user;

// Re-export main types for convenience
pub use config_file::UsersFile;
pub use editor::{UserList, ask_for_additional_users};
pub use error::{Result, UserEditorError};
pub use list_manager::{ListChoice, ListHandler, ListManager};
pub use prompt::{
    ConfirmRequest, InputRequest, PromptResult, Prompter, ScriptedPrompter, ScriptedResponse,
    SelectRequest, TerminalPrompter, TerminalSession,
};
pub use translation::Translator;
pub use types::{LoginShell, PasswordStrength, UserAction};
pub use user::{Password, USERNAME_MAX_LEN, User, is_valid_username, validate_username};
