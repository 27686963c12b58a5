//! TUI rendering with ratatui
//!
//! Draws the grid, the on-screen keyboard and the end-of-game notice from a
//! read-only game snapshot.

use super::app::{App, NoticeView};
use crate::core::LetterClass;
use crate::game::{CLEAR_KEY, ENTER_KEY, GameOutcome, GameStatus, Snapshot};
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

const GREEN: Color = Color::Rgb(83, 141, 78);
const YELLOW: Color = Color::Rgb(181, 159, 59);
const DARK_GREY: Color = Color::Rgb(58, 58, 60);
const LIGHT_GREY: Color = Color::Rgb(215, 218, 220);
const GREY: Color = Color::Rgb(129, 131, 132);
const BLACK: Color = Color::Rgb(18, 18, 19);

const CELL_WIDTH: u16 = 5;
const CELL_HEIGHT: u16 = 3;
const KEY_WIDTH: u16 = 5;
const WIDE_KEY_WIDTH: u16 = 9;
const KEY_HEIGHT: u16 = 3;

/// On-screen keyboard rows
const KEYBOARD_ROWS: [&[&str]; 3] = [
    &["q", "w", "e", "r", "t", "y", "u", "i", "o", "p"],
    &["a", "s", "d", "f", "g", "h", "j", "k", "l"],
    &[ENTER_KEY, "z", "x", "c", "v", "b", "n", "m", CLEAR_KEY],
];

/// Main UI rendering function
pub fn ui<W: WordSource>(f: &mut Frame, app: &App<W>) {
    let snapshot = app.game.snapshot();
    let keyboard_height = KEY_HEIGHT * 3 + 1;
    let room = f.area().height.saturating_sub(3 + keyboard_height + 1);
    let grid_height = u16::try_from(snapshot.max_tries())
        .unwrap_or(u16::MAX)
        .saturating_mul(CELL_HEIGHT)
        .min(room);

    f.render_widget(Block::default().style(Style::default().bg(BLACK)), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                  // Title
            Constraint::Min(grid_height),           // Grid
            Constraint::Length(keyboard_height),    // Keyboard
            Constraint::Length(1),                  // Status bar
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    render_grid(f, &snapshot, chunks[1]);
    render_keyboard(f, &snapshot, chunks[2]);
    render_status(f, app, chunks[3]);

    if let Some(view) = &app.notice {
        render_notice(f, view, f.area());
    }
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(LIGHT_GREY)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .style(Style::default().fg(DARK_GREY)),
        );
    f.render_widget(title, area);
}

/// Background colour for a classified cell or key
const fn class_color(class: LetterClass) -> Color {
    match class {
        LetterClass::Exact => GREEN,
        LetterClass::Present => YELLOW,
        LetterClass::Absent => DARK_GREY,
    }
}

/// First grid row to draw so that `cursor_row` fits in `visible` rows
const fn first_visible_row(cursor_row: usize, visible: usize) -> usize {
    (cursor_row + 1).saturating_sub(visible)
}

fn render_grid(f: &mut Frame, snapshot: &Snapshot<'_>, area: Rect) {
    let widths = vec![CELL_WIDTH; snapshot.word_len()];
    let visible = usize::from(area.height / CELL_HEIGHT);
    let first = first_visible_row(snapshot.cursor().row, visible);

    let rows = snapshot.grid().rows().enumerate().skip(first).take(visible);
    for (offset, (row, cells)) in rows.enumerate() {
        let y = area.y + offset as u16 * CELL_HEIGHT;

        let rects = centered_row(area, y, &widths, CELL_HEIGHT);
        for (col, rect) in rects.into_iter().enumerate() {
            let letter = cells.get(col).copied().flatten();
            let border = if snapshot.is_cell_active(row, col) {
                LIGHT_GREY
            } else {
                DARK_GREY
            };
            let mut style = Style::default()
                .fg(LIGHT_GREY)
                .add_modifier(Modifier::BOLD);
            if let Some(class) = snapshot.cell_class(row, col) {
                style = style.bg(class_color(class));
            }

            let text = letter
                .map(|c| c.to_ascii_uppercase().to_string())
                .unwrap_or_default();
            let cell = Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(border)),
                );
            f.render_widget(cell, rect);
        }
    }
}

fn render_keyboard(f: &mut Frame, snapshot: &Snapshot<'_>, area: Rect) {
    for (i, keys) in KEYBOARD_ROWS.iter().enumerate() {
        let y = area.y + i as u16 * KEY_HEIGHT;
        if y + KEY_HEIGHT > area.bottom() {
            break;
        }

        let widths: Vec<u16> = keys
            .iter()
            .map(|key| if key.len() > 1 { WIDE_KEY_WIDTH } else { KEY_WIDTH })
            .collect();

        for (key, rect) in keys.iter().zip(centered_row(area, y, &widths, KEY_HEIGHT)) {
            let class = key
                .chars()
                .next()
                .filter(|_| key.len() == 1)
                .and_then(|c| snapshot.keyboard().get(c));
            let bg = class.map_or(GREY, class_color);

            let label = if key.len() == 1 {
                key.to_uppercase()
            } else {
                (*key).to_string()
            };
            let cap = Paragraph::new(label)
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(LIGHT_GREY)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                )
                .block(
                    Block::default()
                        .borders(Borders::TOP | Borders::BOTTOM)
                        .border_style(Style::default().fg(BLACK).bg(BLACK)),
                );
            f.render_widget(cap, rect);
        }
    }
}

fn render_status<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let stats = &app.stats;
    let hint = match (&app.message, app.game.status()) {
        (Some(message), _) => message.clone(),
        (None, GameStatus::Playing) => {
            "Type letters | Backspace: clear | Enter: submit | Esc: quit".to_string()
        }
        (None, _) => "n: New word | q: Quit".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(
            format!(
                " Played: {} | Win rate: {:.0}% | Streak: {} ",
                stats.games_played,
                stats.win_rate(),
                stats.current_streak
            ),
            Style::default().fg(LIGHT_GREY),
        ),
        Span::styled(format!("  {hint}"), Style::default().fg(GREY)),
    ]);

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_notice(f: &mut Frame, view: &NoticeView, area: Rect) {
    let popup = centered_rect(area, 50, 9);
    let (title_color, border_color) = match view.notice.outcome {
        GameOutcome::Won { .. } => (GREEN, GREEN),
        GameOutcome::Lost { .. } => (YELLOW, DARK_GREY),
    };

    let buttons: Vec<Span> = view
        .notice
        .actions
        .iter()
        .enumerate()
        .flat_map(|(i, action)| {
            let style = if i == view.selected {
                Style::default()
                    .fg(BLACK)
                    .bg(LIGHT_GREY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(LIGHT_GREY)
            };
            [
                Span::styled(format!(" {} ", action.label()), style),
                Span::raw("   "),
            ]
        })
        .collect();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            view.notice.title(),
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(view.notice.message()),
        Line::from(""),
        Line::from(buttons),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(LIGHT_GREY).bg(BLACK))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(border_color)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

/// Lay out boxes of the given widths side by side, centered in `area`
///
/// Boxes that would fall outside `area` are clipped to it.
fn centered_row(area: Rect, y: u16, widths: &[u16], height: u16) -> Vec<Rect> {
    let gap = 1;
    let total: u16 = widths.iter().sum::<u16>() + gap * widths.len().saturating_sub(1) as u16;
    let mut x = area.x + area.width.saturating_sub(total) / 2;

    widths
        .iter()
        .map(|&width| {
            let rect = Rect::new(x, y, width, height).intersection(area);
            x = x.saturating_add(width + gap);
            rect
        })
        .collect()
}

/// A `width` x `height` rectangle centered in `area`
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Key};
    use crate::wordlists::FixedWords;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App<FixedWords> {
        let words = FixedWords::new(words_from_slice(&["crane"])).unwrap();
        App::new(words, GameConfig::default())
    }

    fn screen_text(app: &App<FixedWords>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn submit(app: &mut App<FixedWords>, word: &str) {
        for c in word.chars() {
            app.press(Key::Letter(c));
        }
        app.press(Key::Enter);
    }

    #[test]
    fn renders_title_and_keyboard() {
        let text = screen_text(&app());
        assert!(text.contains("W O R D L E"));
        assert!(text.contains("ENTER"));
        assert!(text.contains("CLEAR"));
    }

    #[test]
    fn renders_typed_letters_uppercase() {
        let mut app = app();
        let count_z = |app: &App<FixedWords>| screen_text(app).matches('Z').count();
        let before = count_z(&app);

        app.press(Key::Letter('z'));
        assert_eq!(count_z(&app), before + 1);
    }

    #[test]
    fn renders_notice_with_both_actions() {
        let mut app = app();
        submit(&mut app, "crane");
        let text = screen_text(&app);
        assert!(text.contains("Hooray"));
        assert!(text.contains("Cancel"));
        assert!(text.contains("New word"));
    }

    #[test]
    fn small_terminal_does_not_panic() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
    }

    #[test]
    fn tall_grid_scrolls_to_the_active_row() {
        let words = FixedWords::new(words_from_slice(&["crane"])).unwrap();
        let mut app = App::new(words, GameConfig::new(12, None));
        for _ in 0..11 {
            submit(&mut app, "slate");
        }
        assert_eq!(app.game.cursor().row, 11);

        let count_z = |app: &App<FixedWords>| screen_text(app).matches('Z').count();
        let before = count_z(&app);
        app.press(Key::Letter('z'));
        assert_eq!(count_z(&app), before + 1);
    }

    #[test]
    fn huge_try_count_does_not_panic() {
        let words = FixedWords::new(words_from_slice(&["crane"])).unwrap();
        let app = App::new(words, GameConfig::new(21_846, None));
        let text = screen_text(&app);
        assert!(text.contains("W O R D L E"));
        assert!(text.contains("ENTER"));
    }

    #[test]
    fn first_visible_row_follows_cursor() {
        assert_eq!(first_visible_row(0, 8), 0);
        assert_eq!(first_visible_row(7, 8), 0);
        assert_eq!(first_visible_row(11, 8), 4);
        assert_eq!(first_visible_row(3, 0), 4);
    }

    #[test]
    fn centered_row_is_centered_and_clipped() {
        let area = Rect::new(0, 0, 20, 3);
        let rects = centered_row(area, 0, &[5, 5], 3);
        assert_eq!(rects[0].x, 4);
        assert_eq!(rects[1].x, 10);

        let narrow = centered_row(Rect::new(0, 0, 6, 3), 0, &[5, 5], 3);
        assert_eq!(narrow[1].width, 0);
    }
}
