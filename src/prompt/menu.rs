//! Labelled menu items for selection prompts.

use super::SelectRequest;

/// An option with a display label and the value it stands for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem<T> {
    pub label: String,
    pub value: T,
}

impl<T> MenuItem<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// An ordered group of menu items with an optional default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemGroup<T> {
    items: Vec<MenuItem<T>>,
    default_index: Option<usize>,
}

impl<T> MenuItemGroup<T> {
    /// Build a group, optionally sorting the items by label
    pub fn new(mut items: Vec<MenuItem<T>>, sort_items: bool) -> Self {
        if sort_items {
            items.sort_by(|a, b| a.label.cmp(&b.label));
        }
        Self {
            items,
            default_index: None,
        }
    }

    pub fn items(&self) -> &[MenuItem<T>] {
        &self.items
    }

    pub fn labels(&self) -> Vec<String> {
        self.items.iter().map(|i| i.label.clone()).collect()
    }

    pub fn default_index(&self) -> Option<usize> {
        self.default_index
    }

    pub fn default_value(&self) -> Option<&T> {
        self.default_index.and_then(|i| self.value_at(i))
    }

    pub fn value_at(&self, index: usize) -> Option<&T> {
        self.items.get(index).map(|i| &i.value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Selection prompt offering this group's labels
    pub fn to_request(&self, header: impl Into<String>, allow_skip: bool) -> SelectRequest {
        SelectRequest::new(header, self.labels())
            .default_index(self.default_index)
            .allow_skip(allow_skip)
    }
}

impl<T: PartialEq> MenuItemGroup<T> {
    /// Mark the first item holding `value` as the default.
    /// Returns false (and leaves the default untouched) when no item matches.
    pub fn set_default_by_value(&mut self, value: &T) -> bool {
        match self.items.iter().position(|i| i.value == *value) {
            Some(index) => {
                self.default_index = Some(index);
                true
            }
            None => false,
        }
    }
}
