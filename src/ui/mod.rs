//! User interface rendering module
//!
//! - `dialogs` - prompt dialog rendering (text, password, selection)

pub mod dialogs;

pub use dialogs::render_input_dialog;
