//! Numbered-menu front-end over stdin/stdout.

mod app;
mod forms;
mod helpers;
mod terminal;

pub use app::{App, MenuChoice};
pub use terminal::{run_app, Console};
