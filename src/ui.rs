//! Ratatui front-end for CatWorld. The page is one screen of cards driven by
//! single-key shortcuts; `app` holds the input modes and drawing code,
//! `terminal` owns raw mode and the event loop.

mod app;
mod forms;
mod helpers;
mod terminal;

pub use app::App;
pub use terminal::run_app;
