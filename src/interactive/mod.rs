//! Interactive TUI mode
//!
//! Terminal UI with the guess grid, an on-screen keyboard and an
//! end-of-game notice.

mod app;
mod rendering;

pub use app::{App, NoticeView, key_from_code, run_tui};
