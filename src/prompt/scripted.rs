//! Prompter that replays a fixed queue of answers.
//!
//! Used for headless runs and tests. Every prompt it is shown is recorded so
//! callers can inspect headers, validation messages and offered options.
//! Responses are delivered as given: a `Skip` is returned even when the
//! prompt does not allow skipping, which is how a misbehaving prompt facility
//! is simulated.

use std::collections::VecDeque;

use super::{ConfirmRequest, InputRequest, PromptResult, Prompter, SelectRequest};
use crate::error::{Result, UserEditorError};

/// One queued answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedResponse {
    /// Submit text to an input prompt
    Text(String),
    /// Pick an option by index
    Select(usize),
    /// Pick an option by its label
    Choose(String),
    Yes,
    No,
    /// Press Enter without changing anything
    Default,
    Skip,
    Cancel,
}

impl ScriptedResponse {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn choose(label: impl Into<String>) -> Self {
        Self::Choose(label.into())
    }
}

/// Kind of prompt that was shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Input,
    Select,
    Confirm,
}

/// Record of a prompt shown to the scripted user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownPrompt {
    pub kind: PromptKind,
    pub header: String,
    pub error: Option<String>,
    pub masked: bool,
    pub allow_skip: bool,
    pub options: Vec<String>,
    pub default_index: Option<usize>,
}

/// Replays queued responses in order
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    responses: VecDeque<ScriptedResponse>,
    shown: Vec<ShownPrompt>,
}

impl ScriptedPrompter {
    pub fn new(responses: impl IntoIterator<Item = ScriptedResponse>) -> Self {
        Self {
            responses: responses.into_iter().collect(),
            shown: Vec::new(),
        }
    }

    /// Queue more responses behind the existing ones
    pub fn push(&mut self, response: ScriptedResponse) {
        self.responses.push_back(response);
    }

    pub fn is_exhausted(&self) -> bool {
        self.responses.is_empty()
    }

    /// Every prompt shown so far, oldest first
    pub fn shown(&self) -> &[ShownPrompt] {
        &self.shown
    }

    /// Headers of every prompt shown so far
    pub fn headers(&self) -> Vec<&str> {
        self.shown.iter().map(|p| p.header.as_str()).collect()
    }

    /// Validation messages attached to input prompts, in order
    pub fn errors_shown(&self) -> Vec<Option<String>> {
        self.shown
            .iter()
            .filter(|p| p.kind == PromptKind::Input)
            .map(|p| p.error.clone())
            .collect()
    }

    fn next_response(&mut self) -> Result<ScriptedResponse> {
        let header = self
            .shown
            .last()
            .map(|p| p.header.clone())
            .unwrap_or_default();
        self.responses.pop_front().ok_or_else(|| {
            UserEditorError::script(format!("no scripted response left for prompt: {}", header))
        })
    }

    fn mismatch(kind: PromptKind, response: &ScriptedResponse) -> UserEditorError {
        UserEditorError::script(format!("{:?} cannot answer a {:?} prompt", response, kind))
    }

    fn resolve_option(request: &SelectRequest, response: ScriptedResponse) -> Result<PromptResult<usize>> {
        match response {
            ScriptedResponse::Select(index) if index < request.options.len() => {
                Ok(PromptResult::Selection(index))
            }
            ScriptedResponse::Select(index) => Err(UserEditorError::script(format!(
                "option {} out of range ({} options)",
                index,
                request.options.len()
            ))),
            ScriptedResponse::Choose(label) => request
                .options
                .iter()
                .position(|o| *o == label)
                .map(PromptResult::Selection)
                .ok_or_else(|| UserEditorError::script(format!("no option labelled '{}'", label))),
            ScriptedResponse::Default if !request.options.is_empty() => {
                Ok(PromptResult::Selection(request.default_index.unwrap_or(0)))
            }
            ScriptedResponse::Skip => Ok(PromptResult::Skip),
            ScriptedResponse::Cancel => Ok(PromptResult::Cancel),
            other => Err(Self::mismatch(PromptKind::Select, &other)),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, request: &InputRequest) -> Result<PromptResult<String>> {
        self.shown.push(ShownPrompt {
            kind: PromptKind::Input,
            header: request.header.clone(),
            error: request.error.clone(),
            masked: request.masked,
            allow_skip: request.allow_skip,
            options: Vec::new(),
            default_index: None,
        });

        match self.next_response()? {
            ScriptedResponse::Text(value) => Ok(PromptResult::Selection(value)),
            ScriptedResponse::Default => Ok(PromptResult::Selection(String::new())),
            ScriptedResponse::Skip => Ok(PromptResult::Skip),
            ScriptedResponse::Cancel => Ok(PromptResult::Cancel),
            other => Err(Self::mismatch(PromptKind::Input, &other)),
        }
    }

    fn select(&mut self, request: &SelectRequest) -> Result<PromptResult<usize>> {
        self.shown.push(ShownPrompt {
            kind: PromptKind::Select,
            header: request.header.clone(),
            error: None,
            masked: false,
            allow_skip: request.allow_skip,
            options: request.options.clone(),
            default_index: request.default_index,
        });

        let response = self.next_response()?;
        Self::resolve_option(request, response)
    }

    fn confirm(&mut self, request: &ConfirmRequest) -> Result<PromptResult<bool>> {
        let select = request.to_select();
        self.shown.push(ShownPrompt {
            kind: PromptKind::Confirm,
            header: request.header.clone(),
            error: None,
            masked: false,
            allow_skip: request.allow_skip,
            options: select.options.clone(),
            default_index: select.default_index,
        });

        match self.next_response()? {
            ScriptedResponse::Yes => Ok(PromptResult::Selection(true)),
            ScriptedResponse::No => Ok(PromptResult::Selection(false)),
            ScriptedResponse::Default => Ok(PromptResult::Selection(request.preset)),
            other => Ok(Self::resolve_option(&select, other)?.map(|index| index == 0)),
        }
    }
}
