//! Dialog rendering module
//!
//! Renders the single prompt dialog the editor shows at a time: a title,
//! the accumulated header, an optional validation message, and either an
//! input box or an option list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::input::{InputDialog, InputType};
use crate::theme::Styles;

/// Largest dialog drawn, in cells
const MAX_DIALOG_WIDTH: u16 = 80;
const MAX_DIALOG_HEIGHT: u16 = 30;

/// Rows used by everything except the header text and the option rows:
/// header borders, validation line, key hints, list borders
const CHROME_ROWS: u16 = 2 + 1 + 1 + 2;

/// Center a dialog inside `area`, shrinking it on small terminals
pub fn dialog_rect(area: Rect) -> Rect {
    let width = area.width.min(MAX_DIALOG_WIDTH);
    let height = area.height.min(MAX_DIALOG_HEIGHT);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Rows available for list options in a dialog of `dialog_height` with `header_rows`
pub fn list_rows(dialog_height: u16, header_rows: u16) -> usize {
    dialog_height
        .saturating_sub(CHROME_ROWS + header_rows)
        .max(1) as usize
}

/// Number of terminal rows the header occupies
pub fn header_rows(header: &str) -> u16 {
    header.lines().count().max(1) as u16
}

/// Render input dialog overlay
pub fn render_input_dialog(f: &mut Frame, dialog: &InputDialog, title: &str) {
    let area = f.area();

    // Fill entire screen with the panel background
    f.render_widget(Block::default().style(Styles::panel_bg()), area);

    let dialog_area = dialog_rect(area);
    let header_height = header_rows(&dialog.header);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height + 2), // Header
            Constraint::Length(1),                 // Validation message
            Constraint::Min(3),                    // Content
            Constraint::Length(1),                 // Key hints
        ])
        .split(dialog_area);

    let header = Paragraph::new(dialog.header.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_active())
                .title(Line::styled(format!(" {} ", title), Styles::title())),
        )
        .style(Styles::text())
        .wrap(Wrap { trim: false });
    f.render_widget(header, chunks[0]);

    if let Some(ref error) = dialog.error {
        f.render_widget(
            Paragraph::new(error.clone()).style(Styles::error()),
            chunks[1],
        );
    }

    match &dialog.input_type {
        InputType::TextInput { current_value, .. } => {
            render_input_box(f, dialog, current_value.is_empty(), "Input", chunks[2]);
        }
        InputType::PasswordInput { current_value, .. } => {
            render_input_box(f, dialog, current_value.is_empty(), "Password", chunks[2]);
        }
        InputType::Selection {
            options,
            scroll_state,
        } => {
            let (start, end) = scroll_state.visible_range();
            let items: Vec<ListItem> = options
                .iter()
                .enumerate()
                .skip(start)
                .take(end - start)
                .map(|(index, option)| {
                    if index == scroll_state.selected_index {
                        ListItem::new(format!("> {}", option)).style(Styles::selected())
                    } else {
                        ListItem::new(format!("  {}", option)).style(Styles::unselected())
                    }
                })
                .collect();

            let list = List::new(items).block(Block::default().borders(Borders::ALL));
            f.render_widget(list, chunks[2]);
        }
    }

    let hints = Paragraph::new(dialog.key_hints())
        .alignment(Alignment::Center)
        .style(Styles::nav_hint());
    f.render_widget(hints, chunks[3]);
}

fn render_input_box(f: &mut Frame, dialog: &InputDialog, empty: bool, label: &str, area: Rect) {
    let style = if empty {
        Styles::placeholder()
    } else {
        Styles::input()
    };
    let input_widget = Paragraph::new(dialog.get_display_value())
        .block(Block::default().borders(Borders::ALL).title(label))
        .style(style);
    f.render_widget(input_widget, area);
}
