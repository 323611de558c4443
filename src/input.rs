//! Input handling module
//!
//! Holds the state of the dialog currently on screen and turns key presses
//! into edits, cursor moves, or a final answer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use zeroize::Zeroizing;

use crate::scrolling::ScrollState;

/// Number of list rows a selection dialog shows before scrolling
pub const DEFAULT_VISIBLE_OPTIONS: usize = 10;

/// Types of input dialogs
#[derive(Debug, Clone, PartialEq)]
pub enum InputType {
    /// Free-text input (usernames, full names)
    TextInput {
        current_value: String,
        placeholder: String,
    },
    /// Password input with obscuring; the buffer is wiped when dropped
    PasswordInput {
        current_value: Zeroizing<String>,
        placeholder: String,
    },
    /// Selection from predefined options
    Selection {
        options: Vec<String>,
        scroll_state: ScrollState,
    },
}

/// Input dialog state
#[derive(Debug, Clone)]
pub struct InputDialog {
    /// Type of input dialog
    pub input_type: InputType,
    /// Context lines shown above the input
    pub header: String,
    /// Validation message from the previous attempt
    pub error: Option<String>,
    /// Whether Esc skips the prompt
    pub allow_skip: bool,
}

/// Result of input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// User submitted text
    Confirm(String),
    /// User picked the option at this index
    Select(usize),
    /// User skipped (Esc on a skippable prompt)
    Skip,
    /// User cancelled (Ctrl+C)
    Cancel,
    /// Continue processing input
    Continue,
}

impl InputDialog {
    /// Create a text or password dialog
    pub fn text(header: impl Into<String>, masked: bool, allow_skip: bool) -> Self {
        let input_type = if masked {
            InputType::PasswordInput {
                current_value: Zeroizing::new(String::new()),
                placeholder: "Enter password...".to_string(),
            }
        } else {
            InputType::TextInput {
                current_value: String::new(),
                placeholder: "Enter value...".to_string(),
            }
        };
        Self {
            input_type,
            header: header.into(),
            error: None,
            allow_skip,
        }
    }

    /// Create a selection dialog with an optional preselected option
    pub fn selection(
        header: impl Into<String>,
        options: Vec<String>,
        default_index: Option<usize>,
        allow_skip: bool,
    ) -> Self {
        let mut scroll_state = ScrollState::new(options.len(), DEFAULT_VISIBLE_OPTIONS);
        if let Some(index) = default_index {
            scroll_state.select(index);
        }
        Self {
            input_type: InputType::Selection {
                options,
                scroll_state,
            },
            header: header.into(),
            error: None,
            allow_skip,
        }
    }

    pub fn with_error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    /// Handle keyboard input for the dialog
    pub fn handle_input(&mut self, key_event: KeyEvent) -> InputResult {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key_event.code, KeyCode::Char('c'))
        {
            return InputResult::Cancel;
        }

        if key_event.code == KeyCode::Esc {
            return if self.allow_skip {
                InputResult::Skip
            } else {
                InputResult::Continue
            };
        }

        match &mut self.input_type {
            InputType::TextInput { current_value, .. } => match key_event.code {
                KeyCode::Enter => return InputResult::Confirm(current_value.clone()),
                KeyCode::Backspace => {
                    current_value.pop();
                }
                KeyCode::Char(c) => current_value.push(c),
                _ => {}
            },
            // Submitting moves the text out so no second copy stays behind
            InputType::PasswordInput { current_value, .. } => match key_event.code {
                KeyCode::Enter => {
                    return InputResult::Confirm(std::mem::take(&mut **current_value));
                }
                KeyCode::Backspace => {
                    current_value.pop();
                }
                KeyCode::Char(c) => current_value.push(c),
                _ => {}
            },
            InputType::Selection {
                scroll_state,
                options,
            } => match key_event.code {
                KeyCode::Up => scroll_state.move_up(),
                KeyCode::Down => scroll_state.move_down(),
                KeyCode::PageUp => scroll_state.page_up(),
                KeyCode::PageDown => scroll_state.page_down(),
                KeyCode::Home => scroll_state.home(),
                KeyCode::End => scroll_state.end(),
                KeyCode::Enter if !options.is_empty() => {
                    return InputResult::Select(scroll_state.selected_index);
                }
                _ => {}
            },
        }

        InputResult::Continue
    }

    /// Text shown in the input box; passwords are obscured
    pub fn get_display_value(&self) -> String {
        match &self.input_type {
            InputType::TextInput {
                current_value,
                placeholder,
            } => {
                if current_value.is_empty() {
                    placeholder.clone()
                } else {
                    current_value.clone()
                }
            }
            InputType::PasswordInput {
                current_value,
                placeholder,
            } => {
                if current_value.is_empty() {
                    placeholder.clone()
                } else {
                    "*".repeat(current_value.chars().count())
                }
            }
            InputType::Selection { .. } => String::new(),
        }
    }

    /// Footer hint listing the keys that do something in this dialog
    pub fn key_hints(&self) -> &'static str {
        match (&self.input_type, self.allow_skip) {
            (InputType::Selection { .. }, true) => "↑↓: Navigate | Enter: Select | Esc: Skip",
            (InputType::Selection { .. }, false) => "↑↓: Navigate | Enter: Select",
            (_, true) => "Enter: Confirm | Esc: Skip",
            (_, false) => "Enter: Confirm",
        }
    }
}

impl InputType {
    /// Get the selected index for input types that support selection
    pub fn get_selected_index(&self) -> usize {
        match self {
            InputType::Selection { scroll_state, .. } => scroll_state.selected_index,
            _ => 0,
        }
    }
}
