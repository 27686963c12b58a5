//! TUI application state and logic

use crate::game::{
    EndOfGameNotice, GameConfig, GameState, GameStatus, InputController, Key, NoticeAction,
    Statistics, Transition,
};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// End-of-game notice on screen, with the highlighted action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeView {
    pub notice: EndOfGameNotice,
    pub selected: usize,
}

impl NoticeView {
    #[must_use]
    pub const fn new(notice: EndOfGameNotice) -> Self {
        // Highlight the follow-up action, not "Cancel"
        Self {
            notice,
            selected: 1,
        }
    }

    #[must_use]
    pub fn selected_action(&self) -> NoticeAction {
        self.notice.actions[self.selected % self.notice.actions.len()]
    }

    pub fn toggle(&mut self) {
        self.selected = (self.selected + 1) % self.notice.actions.len();
    }
}

/// Application state
pub struct App<W: WordSource> {
    pub game: GameState,
    pub input: InputController,
    pub stats: Statistics,
    pub notice: Option<NoticeView>,
    pub message: Option<String>,
    pub should_quit: bool,
    words: W,
    config: GameConfig,
}

impl<W: WordSource> App<W> {
    #[must_use]
    pub fn new(mut words: W, config: GameConfig) -> Self {
        let game = GameState::new(words.pick_word(), config.max_tries);
        tracing::info!(letters = game.word_len(), "new game");

        Self {
            game,
            input: InputController::new(),
            stats: Statistics::new(config.max_tries),
            notice: None,
            message: None,
            should_quit: false,
            words,
            config,
        }
    }

    /// Discard the current game and start over with a fresh word
    pub fn new_game(&mut self) {
        self.game = GameState::new(self.words.pick_word(), self.config.max_tries);
        self.notice = None;
        self.message = None;
        tracing::info!(letters = self.game.word_len(), "new game");
    }

    /// Feed one game key through the input controller
    pub fn press(&mut self, key: Key) {
        if let Transition::Finished(notice) = self.input.press(&mut self.game, key) {
            self.stats.record(&notice.outcome);
            self.notice = Some(NoticeView::new(notice));
        }
    }

    /// Apply the player's choice from the end-of-game notice
    pub fn choose(&mut self, action: NoticeAction) {
        tracing::debug!(?action, "notice action");
        if action.starts_new_game() {
            self.new_game();
        } else {
            self.notice = None;
            self.message = Some("Press 'n' for a new word or 'q' to quit".to_string());
        }
    }

    /// Handle one terminal key press
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(view) = self.notice.as_mut() {
            match key.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => view.toggle(),
                KeyCode::Enter => {
                    let action = view.selected_action();
                    self.choose(action);
                }
                KeyCode::Esc => self.choose(NoticeAction::Dismiss),
                _ => {}
            }
            return;
        }

        if self.game.status() != GameStatus::Playing {
            match key.code {
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            }
            return;
        }

        // Ctrl/Alt chords are shortcuts, never typing
        let chorded = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        if key.code == KeyCode::Esc {
            self.should_quit = true;
        } else if let Some(key) = key_from_code(key.code).filter(|_| !chorded) {
            self.press(key);
        }
    }
}

/// Map a terminal key onto a game key
#[must_use]
pub fn key_from_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Backspace | KeyCode::Delete => Some(Key::Clear),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Char(c) => Key::letter(c),
        _ => None,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource>(app: App<W>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(%err, "tui loop failed");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, W: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<W>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
