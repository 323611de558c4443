//! Full-screen terminal prompter built on ratatui and crossterm.
//!
//! Each prompt draws one dialog and blocks on key presses until the user
//! submits, skips or cancels. Keys come from a [`KeySource`] so the same
//! loop runs against the real terminal and against queued keys in tests.

use std::collections::VecDeque;
use std::io::{Stdout, stdout};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use tracing::{debug, warn};

use super::{InputRequest, PromptResult, Prompter, SelectRequest};
use crate::error::{Result, UserEditorError};
use crate::input::{InputDialog, InputResult, InputType};
use crate::ui::dialogs::{dialog_rect, header_rows, list_rows, render_input_dialog};

/// Source of key presses
pub trait KeySource {
    /// Next key press. `None` means the screen should be redrawn (e.g. resize).
    fn next_key(&mut self) -> Result<Option<KeyEvent>>;
}

/// Reads key presses from the controlling terminal
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            // Resizes, releases, mouse and focus events only trigger a redraw
            _ => Ok(None),
        }
    }
}

impl KeySource for VecDeque<KeyEvent> {
    fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        self.pop_front()
            .map(Some)
            .ok_or_else(|| UserEditorError::terminal("key source exhausted"))
    }
}

/// Raw mode plus alternate screen for the lifetime of the value
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()
            .map_err(|e| UserEditorError::terminal(format!("Failed to enable raw mode: {}", e)))?;
        if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(UserEditorError::terminal(format!(
                "Failed to enter alternate screen: {}",
                e
            )));
        }
        debug!("terminal session started");
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Always attempt cleanup, even if the editor failed
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to disable raw mode: {}", e);
        }
        if let Err(e) = execute!(stdout(), LeaveAlternateScreen) {
            warn!("Failed to leave alternate screen: {}", e);
        }
        debug!("terminal session ended");
    }
}

/// Prompter that draws dialogs on a ratatui terminal
pub struct TerminalPrompter<B: Backend, K: KeySource> {
    terminal: Terminal<B>,
    keys: K,
    title: String,
}

impl TerminalPrompter<CrosstermBackend<Stdout>, CrosstermKeys> {
    /// Prompter on stdout. Call inside a [`TerminalSession`].
    pub fn stdout(title: impl Into<String>) -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))
            .map_err(|e| UserEditorError::terminal(format!("Failed to create terminal: {}", e)))?;
        Ok(Self::new(terminal, CrosstermKeys, title))
    }
}

impl<B: Backend, K: KeySource> TerminalPrompter<B, K> {
    pub fn new(terminal: Terminal<B>, keys: K, title: impl Into<String>) -> Self {
        Self {
            terminal,
            keys,
            title: title.into(),
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Draw `dialog` until a key press produces an answer
    fn run_dialog(&mut self, mut dialog: InputDialog) -> Result<InputResult> {
        loop {
            let size = self.terminal.size()?;
            if let InputType::Selection { scroll_state, .. } = &mut dialog.input_type {
                let rect = dialog_rect(Rect::new(0, 0, size.width, size.height));
                scroll_state.set_visible_items(list_rows(rect.height, header_rows(&dialog.header)));
            }

            self.terminal
                .draw(|f| render_input_dialog(f, &dialog, &self.title))?;

            let Some(key) = self.keys.next_key()? else {
                continue;
            };
            match dialog.handle_input(key) {
                InputResult::Continue => {}
                result => return Ok(result),
            }
        }
    }
}

impl<B: Backend, K: KeySource> Prompter for TerminalPrompter<B, K> {
    fn input(&mut self, request: &InputRequest) -> Result<PromptResult<String>> {
        debug!(masked = request.masked, allow_skip = request.allow_skip, "text prompt");
        let dialog = InputDialog::text(request.header.clone(), request.masked, request.allow_skip)
            .with_error(request.error.clone());

        match self.run_dialog(dialog)? {
            InputResult::Confirm(value) => Ok(PromptResult::Selection(value)),
            InputResult::Skip => Ok(PromptResult::Skip),
            InputResult::Cancel => Ok(PromptResult::Cancel),
            other => Err(UserEditorError::terminal(format!(
                "text dialog produced {:?}",
                other
            ))),
        }
    }

    fn select(&mut self, request: &SelectRequest) -> Result<PromptResult<usize>> {
        debug!(options = request.options.len(), allow_skip = request.allow_skip, "selection prompt");
        let dialog = InputDialog::selection(
            request.header.clone(),
            request.options.clone(),
            request.default_index,
            request.allow_skip,
        );

        match self.run_dialog(dialog)? {
            InputResult::Select(index) => Ok(PromptResult::Selection(index)),
            InputResult::Skip => Ok(PromptResult::Skip),
            InputResult::Cancel => Ok(PromptResult::Cancel),
            other => Err(UserEditorError::terminal(format!(
                "selection dialog produced {:?}",
                other
            ))),
        }
    }
}
