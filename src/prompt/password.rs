//! Masked password capture with confirmation.

use tracing::debug;
use zeroize::Zeroizing;

use super::{ConfirmRequest, InputRequest, PromptResult, Prompter};
use crate::error::{Result, UserEditorError};
use crate::translation::Translator;
use crate::types::PasswordStrength;
use crate::user::Password;

/// Ask for a password twice and return it once both entries match.
///
/// Cancelling at any step returns `None`. With `allow_skip`, skipping or
/// submitting an empty password also returns `None`. Without it, an empty
/// password is rejected in place and a skip is an unhandled result. Very weak
/// passwords must be acknowledged before the confirmation prompt.
pub fn get_password<P: Prompter + ?Sized>(
    prompter: &mut P,
    translator: &Translator,
    header: &str,
    allow_skip: bool,
) -> Result<Option<Password>> {
    let mut failure: Option<String> = None;

    loop {
        let request = InputRequest::new(header)
            .allow_skip(allow_skip)
            .masked(true)
            .error(failure.take());

        let password = match prompter.input(&request)? {
            PromptResult::Selection(text) if text.is_empty() => {
                if allow_skip {
                    return Ok(None);
                }
                failure = Some(translator.tr("The password cannot be empty"));
                continue;
            }
            PromptResult::Selection(text) => Password::new(text),
            PromptResult::Skip if !allow_skip => {
                return Err(UserEditorError::unhandled_result("password prompt returned Skip"));
            }
            other => {
                debug!(result = other.kind(), "password prompt abandoned");
                return Ok(None);
            }
        };

        if password.strength() == PasswordStrength::VeryWeak {
            let warning = ConfirmRequest::new(
                format!(
                    "{}\n\n{}",
                    header.trim_end(),
                    translator.tr(
                        "The password you are using seems to be weak, are you sure you want to use it?"
                    )
                ),
                false,
            )
            .labels(translator.tr("Yes"), translator.tr("No"));

            match prompter.confirm(&warning)? {
                PromptResult::Selection(true) => debug!("weak password accepted"),
                PromptResult::Selection(false) => continue,
                PromptResult::Cancel => {
                    debug!("weak password confirmation cancelled");
                    return Ok(None);
                }
                PromptResult::Skip => {
                    return Err(UserEditorError::unhandled_result(
                        "weak password confirmation returned Skip",
                    ));
                }
            }
        }

        let confirmation_header = format!(
            "{}\n{}: {}\n\n{}",
            header.trim_end(),
            translator.tr("Password"),
            password.hidden(),
            translator.tr("Confirm password")
        );
        let confirmation = InputRequest::new(confirmation_header).masked(true);

        match prompter.input(&confirmation)? {
            PromptResult::Selection(text) => {
                let text = Zeroizing::new(text);
                if text.as_str() == password.expose() {
                    return Ok(Some(password));
                }
                failure = Some(translator.tr("The confirmation password did not match, please try again"));
            }
            PromptResult::Cancel => {
                debug!("password confirmation cancelled");
                return Ok(None);
            }
            PromptResult::Skip => {
                return Err(UserEditorError::unhandled_result(
                    "password confirmation returned Skip",
                ));
            }
        }
    }
}
