//! Prompt facility used by the editor.
//!
//! The editor never talks to the terminal directly. Every question goes
//! through the [`Prompter`] trait, which reports how the user answered via
//! [`PromptResult`]. Two implementations ship with the crate:
//! - [`terminal::TerminalPrompter`] renders full-screen dialogs with ratatui
//! - [`scripted::ScriptedPrompter`] replays a fixed queue of answers

pub mod menu;
pub mod password;
pub mod scripted;
pub mod terminal;

use crate::error::Result;

pub use menu::{MenuItem, MenuItemGroup};
pub use password::get_password;
pub use scripted::{ScriptedPrompter, ScriptedResponse};
pub use terminal::{CrosstermKeys, KeySource, TerminalPrompter, TerminalSession};

/// How the user responded to a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult<T> {
    /// The user submitted a value
    Selection(T),
    /// The user skipped a skippable prompt
    Skip,
    /// The user abandoned the prompt (Ctrl+C)
    Cancel,
}

impl<T> PromptResult<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PromptResult<U> {
        match self {
            Self::Selection(value) => PromptResult::Selection(f(value)),
            Self::Skip => PromptResult::Skip,
            Self::Cancel => PromptResult::Cancel,
        }
    }

    /// Short name of the result kind, for error messages and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Selection(_) => "Selection",
            Self::Skip => "Skip",
            Self::Cancel => "Cancel",
        }
    }
}

/// Free-text question
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputRequest {
    /// Context shown above the input box; may span several lines
    pub header: String,
    pub allow_skip: bool,
    /// Render typed characters as `*`
    pub masked: bool,
    /// Message from a failed validation of the previous answer
    pub error: Option<String>,
}

impl InputRequest {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Default::default()
        }
    }

    pub fn allow_skip(mut self, allow_skip: bool) -> Self {
        self.allow_skip = allow_skip;
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }
}

/// Pick one of several options
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectRequest {
    pub header: String,
    pub options: Vec<String>,
    /// Option highlighted when the prompt opens
    pub default_index: Option<usize>,
    pub allow_skip: bool,
}

impl SelectRequest {
    pub fn new(header: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            header: header.into(),
            options,
            ..Default::default()
        }
    }

    pub fn default_index(mut self, index: Option<usize>) -> Self {
        self.default_index = index;
        self
    }

    pub fn allow_skip(mut self, allow_skip: bool) -> Self {
        self.allow_skip = allow_skip;
        self
    }
}

/// Yes/no question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub header: String,
    /// Answer highlighted when the prompt opens
    pub preset: bool,
    pub allow_skip: bool,
    pub yes_label: String,
    pub no_label: String,
}

impl ConfirmRequest {
    pub fn new(header: impl Into<String>, preset: bool) -> Self {
        Self {
            header: header.into(),
            preset,
            allow_skip: false,
            yes_label: "Yes".to_string(),
            no_label: "No".to_string(),
        }
    }

    pub fn allow_skip(mut self, allow_skip: bool) -> Self {
        self.allow_skip = allow_skip;
        self
    }

    pub fn labels(mut self, yes: impl Into<String>, no: impl Into<String>) -> Self {
        self.yes_label = yes.into();
        self.no_label = no.into();
        self
    }

    /// The equivalent two-option selection (yes first)
    pub fn to_select(&self) -> SelectRequest {
        SelectRequest::new(
            self.header.clone(),
            vec![self.yes_label.clone(), self.no_label.clone()],
        )
        .default_index(Some(if self.preset { 0 } else { 1 }))
        .allow_skip(self.allow_skip)
    }
}

/// A terminal prompt/menu facility
pub trait Prompter {
    /// Ask for free text
    fn input(&mut self, request: &InputRequest) -> Result<PromptResult<String>>;

    /// Ask for one option; the selection is the option's index
    fn select(&mut self, request: &SelectRequest) -> Result<PromptResult<usize>>;

    /// Ask a yes/no question
    fn confirm(&mut self, request: &ConfirmRequest) -> Result<PromptResult<bool>> {
        Ok(self.select(&request.to_select())?.map(|index| index == 0))
    }
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn input(&mut self, request: &InputRequest) -> Result<PromptResult<String>> {
        (**self).input(request)
    }

    fn select(&mut self, request: &SelectRequest) -> Result<PromptResult<usize>> {
        (**self).select(request)
    }

    fn confirm(&mut self, request: &ConfirmRequest) -> Result<PromptResult<bool>> {
        (**self).confirm(request)
    }
}

/// Ask for text until `validator` accepts it.
///
/// The validator returns an error message for rejected input; the prompt is
/// then shown again with that message. Skip and cancel are passed through.
pub fn input_validated<P, F>(
    prompter: &mut P,
    mut request: InputRequest,
    validator: F,
) -> Result<PromptResult<String>>
where
    P: Prompter + ?Sized,
    F: Fn(&str) -> Option<String>,
{
    loop {
        match prompter.input(&request)? {
            PromptResult::Selection(value) => match validator(&value) {
                Some(message) => request.error = Some(message),
                None => return Ok(PromptResult::Selection(value)),
            },
            other => return Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_result_map() {
        let r: PromptResult<usize> = PromptResult::Selection(0);
        assert_eq!(r.map(|i| i == 0), PromptResult::Selection(true));
        let r: PromptResult<usize> = PromptResult::Skip;
        assert_eq!(r.map(|i| i == 0), PromptResult::Skip);
        assert_eq!(PromptResult::<()>::Cancel.kind(), "Cancel");
    }

    #[test]
    fn test_confirm_to_select_preset() {
        let yes = ConfirmRequest::new("Sure?", true).to_select();
        assert_eq!(yes.options, vec!["Yes".to_string(), "No".to_string()]);
        assert_eq!(yes.default_index, Some(0));

        let no = ConfirmRequest::new("Sure?", false).labels("Ja", "Nein").to_select();
        assert_eq!(no.options, vec!["Ja".to_string(), "Nein".to_string()]);
        assert_eq!(no.default_index, Some(1));
        assert!(!no.allow_skip);
    }

    #[test]
    fn test_input_validated_reprompts_with_error() {
        let mut prompter = ScriptedPrompter::new([
            ScriptedResponse::text("Bad"),
            ScriptedResponse::text("good"),
        ]);
        let result = input_validated(&mut prompter, InputRequest::new("Name"), |v| {
            v.chars()
                .any(|c| c.is_uppercase())
                .then(|| "lowercase only".to_string())
        })
        .expect("Should succeed");

        assert_eq!(result, PromptResult::Selection("good".to_string()));
        assert_eq!(prompter.errors_shown(), vec![None, Some("lowercase only".to_string())]);
    }

    #[test]
    fn test_input_validated_passes_skip_through() {
        let mut prompter = ScriptedPrompter::new([ScriptedResponse::Skip]);
        let result = input_validated(
            &mut prompter,
            InputRequest::new("Name").allow_skip(true),
            |_| Some("never valid".to_string()),
        )
        .expect("Should succeed");
        assert_eq!(result, PromptResult::Skip);
    }
}
