//! Interactive editor for the installer's list of user accounts.
//!
//! Offers Add, Change password, Promote/Demote and Delete on top of the
//! [`ListManager`] loop. Usernames stay unique: adding a user whose name is
//! already taken replaces the existing entry.

use tracing::{debug, info, warn};

use crate::error::{Result, UserEditorError};
use crate::list_manager::{ListHandler, ListManager};
use crate::prompt::{
    ConfirmRequest, InputRequest, MenuItem, MenuItemGroup, PromptResult, Prompter, get_password,
    input_validated,
};
use crate::translation::Translator;
use crate::types::{LoginShell, UserAction};
use crate::user::{User, is_valid_username};

/// [`ListHandler`] for [`User`] records
pub struct UserList<'a> {
    translator: &'a Translator,
}

impl<'a> UserList<'a> {
    pub fn new(translator: &'a Translator) -> Self {
        Self { translator }
    }

    /// Validation message for a rejected username, `None` when acceptable.
    ///
    /// Empty input is accepted here; the add flow treats it as "skip".
    pub fn check_for_correct_username(&self, username: &str) -> Option<String> {
        if username.is_empty() || is_valid_username(username) {
            None
        } else {
            Some(self.translator.tr("The username you entered is invalid"))
        }
    }

    /// Gather every field of a new user. `None` when the user backs out,
    /// including a cancel at any step.
    pub fn add_user(&self, prompter: &mut dyn Prompter) -> Result<Option<User>> {
        let tr = self.translator;

        let request = InputRequest::new(tr.tr("Enter a username")).allow_skip(true);
        let username =
            match input_validated(prompter, request, |v| self.check_for_correct_username(v))? {
                PromptResult::Selection(username) if !username.is_empty() => username,
                PromptResult::Selection(_) | PromptResult::Skip | PromptResult::Cancel => {
                    debug!("add user abandoned at username");
                    return Ok(None);
                }
            };

        let mut header = format!("{}: {}\n", tr.tr("Username"), username);
        let prompt = format!("{}\n{}", header, tr.tr("Enter a password"));

        let Some(password) = get_password(prompter, tr, &prompt, true)? else {
            debug!(%username, "add user abandoned at password");
            return Ok(None);
        };

        header += &format!("{}: {}\n", tr.tr("Password"), password.hidden());
        let prompt = format!(
            "{}\n{}",
            header,
            tr.tr_fmt("Should \"{}\" be a superuser (sudo)?", &username)
        );
        let request = ConfirmRequest::new(prompt, true).labels(tr.tr("Yes"), tr.tr("No"));

        let sudo = match prompter.confirm(&request)? {
            PromptResult::Selection(sudo) => sudo,
            PromptResult::Cancel => {
                debug!(%username, "add user abandoned at sudo confirmation");
                return Ok(None);
            }
            PromptResult::Skip => {
                return Err(UserEditorError::unhandled_result(
                    "sudo confirmation returned Skip",
                ));
            }
        };

        header += &format!("{}: {}\n", tr.tr("Sudo"), sudo);
        let prompt = format!(
            "{}\n{}",
            header,
            tr.tr("Enter full name for this user (optional)")
        );

        let full_name = match prompter.input(&InputRequest::new(prompt).allow_skip(true))? {
            PromptResult::Selection(name) if !name.trim().is_empty() => Some(name),
            _ => None,
        };

        header += &format!(
            "{}: {}\n",
            tr.tr("Full name"),
            full_name.as_deref().unwrap_or("")
        );
        let prompt = format!("{}\n{}", header, tr.tr("Select a shell for this user"));

        let default_shell = LoginShell::default().path().to_string();
        let items = LoginShell::candidates()
            .into_iter()
            .map(|path| MenuItem::new(path.clone(), path))
            .collect();
        let mut shells = MenuItemGroup::new(items, true);
        shells.set_default_by_value(&default_shell);

        let shell = match prompter.select(&shells.to_request(prompt, false))? {
            PromptResult::Selection(index) => shells
                .value_at(index)
                .cloned()
                .unwrap_or_else(|| default_shell.clone()),
            _ => default_shell,
        };

        Ok(Some(
            User::new(username, password, sudo)
                .with_shell(shell)
                .with_full_name(full_name),
        ))
    }
}

impl ListHandler for UserList<'_> {
    type Item = User;
    type Action = UserAction;

    fn base_actions(&self) -> Vec<UserAction> {
        UserAction::base_actions()
    }

    fn entry_actions(&self) -> Vec<UserAction> {
        UserAction::entry_actions()
    }

    fn action_label(&self, action: UserAction) -> String {
        self.translator.tr(action.msgid())
    }

    fn selected_action_display(&self, user: &User) -> String {
        user.username.clone()
    }

    fn handle_action(
        &mut self,
        prompter: &mut dyn Prompter,
        action: UserAction,
        entry: Option<&User>,
        mut data: Vec<User>,
    ) -> Result<Vec<User>> {
        match (action, entry) {
            (UserAction::Add, _) => {
                if let Some(new_user) = self.add_user(prompter)? {
                    let before = data.len();
                    data.retain(|u| u.username != new_user.username);
                    if data.len() < before {
                        info!(username = %new_user.username, "replacing existing user");
                    }
                    info!(username = %new_user.username, sudo = new_user.sudo, shell = %new_user.shell, "user added");
                    data.push(new_user);
                }
            }
            (UserAction::ChangePassword, Some(entry)) => {
                let header = format!(
                    "{}: {}\n{}",
                    self.translator.tr("User"),
                    entry.username,
                    self.translator.tr("Enter new password")
                );
                if let Some(password) = get_password(prompter, self.translator, &header, true)? {
                    if let Some(user) = data.iter_mut().find(|u| **u == *entry) {
                        user.password = password;
                        info!(username = %user.username, "password changed");
                    }
                }
            }
            (UserAction::PromoteDemote, Some(entry)) => {
                if let Some(user) = data.iter_mut().find(|u| **u == *entry) {
                    user.sudo = !user.sudo;
                    info!(username = %user.username, sudo = user.sudo, "sudo toggled");
                }
            }
            (UserAction::Delete, Some(entry)) => {
                data.retain(|u| u != entry);
                info!(username = %entry.username, "user deleted");
            }
            (action, None) => debug!(?action, "no entry selected, nothing to do"),
        }

        Ok(data)
    }
}

/// Drop earlier duplicates so every username appears once, keeping the last
fn dedup_by_username(users: &[User]) -> Vec<User> {
    let mut unique: Vec<User> = Vec::with_capacity(users.len());
    for user in users {
        if let Some(pos) = unique.iter().position(|u| u.username == user.username) {
            warn!(username = %user.username, "duplicate username in initial list, keeping the later entry");
            unique.remove(pos);
        }
        unique.push(user.clone());
    }
    unique
}

/// Run the user editor and return the final list of users.
///
/// `defined_users` is copied, never modified; the returned list is always new.
pub fn ask_for_additional_users(
    prompter: &mut dyn Prompter,
    translator: &Translator,
    prompt: &str,
    defined_users: &[User],
) -> Result<Vec<User>> {
    let initial = dedup_by_username(defined_users);
    info!(users = initial.len(), "starting user editor");
    ListManager::new(UserList::new(translator), translator, prompt, initial).run(prompter)
}
