//! Binary entry point: resolve where the library lives, load it, and run the
//! menu loop on stdin/stdout until the user exits.
use std::io;

use anyhow::Context;
use crossterm::tty::IsTty;
use personal_library_manager::{run_app, App, Console, LibraryStore, StorePaths};

/// Returning a `Result` bubbles up fatal problems (no home directory, or the
/// final save failing) to the terminal instead of exiting silently.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let paths = StorePaths::resolve().context("failed to resolve library location")?;
    log::info!("Using library file {}", paths.primary.display());

    let store = LibraryStore::new(paths);
    let books = store.load();

    let styled = io::stdout().is_tty();
    let console = Console::new(io::stdin().lock(), io::stdout().lock()).with_styling(styled);
    let mut app = App::new(store, books, console);
    run_app(&mut app)
}
