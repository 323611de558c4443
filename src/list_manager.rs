//! Menu loop for editing a list of records.
//!
//! The root menu offers every entry, the base actions, "Confirm and exit" and
//! "Cancel". Picking an entry opens a second menu with the entry actions.
//! What the actions do is up to the [`ListHandler`].

use tracing::{debug, info};

use crate::error::{Result, UserEditorError};
use crate::prompt::{PromptResult, Prompter, SelectRequest};
use crate::translation::Translator;

/// Domain side of a list editor
pub trait ListHandler {
    type Item: Clone + PartialEq;
    type Action: Copy + PartialEq + std::fmt::Debug;

    /// Actions offered in the root menu; they receive no entry
    fn base_actions(&self) -> Vec<Self::Action>;

    /// Actions offered after picking an entry
    fn entry_actions(&self) -> Vec<Self::Action>;

    /// Menu label for an action
    fn action_label(&self, action: Self::Action) -> String;

    /// Menu label for an entry
    fn selected_action_display(&self, item: &Self::Item) -> String;

    /// Apply `action` and return the new list
    fn handle_action(
        &mut self,
        prompter: &mut dyn Prompter,
        action: Self::Action,
        entry: Option<&Self::Item>,
        data: Vec<Self::Item>,
    ) -> Result<Vec<Self::Item>>;
}

/// One option of the root menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChoice<A> {
    /// The entry at this index
    Entry(usize),
    Action(A),
    ConfirmAndExit,
    Cancel,
}

/// Runs the menu loop for a [`ListHandler`]
pub struct ListManager<'a, H: ListHandler> {
    handler: H,
    translator: &'a Translator,
    prompt: String,
    original: Vec<H::Item>,
    data: Vec<H::Item>,
}

impl<'a, H: ListHandler> ListManager<'a, H> {
    pub fn new(
        handler: H,
        translator: &'a Translator,
        prompt: impl Into<String>,
        data: Vec<H::Item>,
    ) -> Self {
        Self {
            handler,
            translator,
            prompt: prompt.into(),
            original: data.clone(),
            data,
        }
    }

    /// Root menu options, in display order
    pub fn root_choices(&self) -> Vec<ListChoice<H::Action>> {
        let mut choices: Vec<_> = (0..self.data.len()).map(ListChoice::Entry).collect();
        choices.extend(self.handler.base_actions().into_iter().map(ListChoice::Action));
        choices.push(ListChoice::ConfirmAndExit);
        choices.push(ListChoice::Cancel);
        choices
    }

    fn choice_label(&self, choice: &ListChoice<H::Action>) -> String {
        match choice {
            ListChoice::Entry(index) => self.handler.selected_action_display(&self.data[*index]),
            ListChoice::Action(action) => self.handler.action_label(*action),
            ListChoice::ConfirmAndExit => self.translator.tr("Confirm and exit"),
            ListChoice::Cancel => self.translator.tr("Cancel"),
        }
    }

    /// Run until the user confirms or cancels.
    ///
    /// Confirming returns the edited list; cancelling returns the list the
    /// manager was created with.
    pub fn run(mut self, prompter: &mut dyn Prompter) -> Result<Vec<H::Item>> {
        loop {
            let choices = self.root_choices();
            let labels = choices.iter().map(|c| self.choice_label(c)).collect();
            let default_index = choices.iter().position(|c| matches!(c, ListChoice::Action(_)));
            let request = SelectRequest::new(self.prompt.clone(), labels).default_index(default_index);

            let choice = match prompter.select(&request)? {
                PromptResult::Selection(index) => *choices.get(index).ok_or_else(|| {
                    UserEditorError::unhandled_result(format!(
                        "menu selection {} out of range ({} options)",
                        index,
                        choices.len()
                    ))
                })?,
                PromptResult::Cancel => ListChoice::Cancel,
                PromptResult::Skip => {
                    return Err(UserEditorError::unhandled_result("list menu returned Skip"));
                }
            };

            match choice {
                ListChoice::Entry(index) => self.run_entry_actions(prompter, index)?,
                ListChoice::Action(action) => {
                    debug!(?action, "running base action");
                    let data = std::mem::take(&mut self.data);
                    self.data = self.handler.handle_action(prompter, action, None, data)?;
                }
                ListChoice::ConfirmAndExit => {
                    info!(entries = self.data.len(), "list confirmed");
                    return Ok(self.data);
                }
                ListChoice::Cancel => {
                    info!("list editing cancelled, keeping original entries");
                    return Ok(self.original);
                }
            }
        }
    }

    fn run_entry_actions(&mut self, prompter: &mut dyn Prompter, index: usize) -> Result<()> {
        let entry = self.data[index].clone();
        let actions = self.handler.entry_actions();

        let mut labels: Vec<String> = actions.iter().map(|a| self.handler.action_label(*a)).collect();
        labels.push(self.translator.tr("Cancel"));

        let header = self.handler.selected_action_display(&entry);
        let request = SelectRequest::new(header, labels).allow_skip(true);

        let action = match prompter.select(&request)? {
            PromptResult::Selection(i) => match actions.get(i) {
                Some(action) => *action,
                // The trailing "Cancel" option
                None => return Ok(()),
            },
            PromptResult::Skip | PromptResult::Cancel => return Ok(()),
        };

        debug!(?action, "running entry action");
        let data = std::mem::take(&mut self.data);
        self.data = self.handler.handle_action(prompter, action, Some(&entry), data)?;
        Ok(())
    }
}
