mod games;
mod input;
mod rng;
mod scores;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use games::{create_game, AppState};
use input::{is_narrow_layout, pixel_x_to_col, pixel_y_to_row, ArrowKey, ClickState, InputEvent};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::{Frame, Terminal};
use ratzilla::{DomBackend, WebRenderer};
use scores::{ScoreBoard, ALL_GAMES};
use time::{GameTime, TICKS_PER_SEC};
use widgets::ClickableList;

// ── Container action IDs ─────────────────────────────────────
/// Leave the mounted game without recording a score.
pub const BACK_TO_MENU: u16 = 900;
/// Menu cards, +index into [`ALL_GAMES`].
pub const MENU_GAME_BASE: u16 = 100;

/// Query the grid container's bounding rect and convert pixel coordinates
/// to a terminal cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let click_x = mouse_x as f64 - rect.left();
    let click_y = mouse_y as f64 - rect.top();

    let col = pixel_x_to_col(click_x, rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(click_y, rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

/// Route one normalized event to the menu or the mounted game.
///
/// A game that reports a result is recorded and unmounted; an event the
/// game did not consume can still back out to the menu, dropping the
/// session (and all its timers) without recording anything.
fn dispatch(app: &mut AppState, scores: &mut ScoreBoard, event: InputEvent, now_ms: f64) {
    match app {
        AppState::Menu => {
            let picked = match event {
                InputEvent::Key(c @ '1'..='5') => Some(c as usize - '1' as usize),
                InputEvent::Click(id)
                    if (MENU_GAME_BASE..MENU_GAME_BASE + ALL_GAMES.len() as u16)
                        .contains(&id) =>
                {
                    Some((id - MENU_GAME_BASE) as usize)
                }
                _ => None,
            };
            if let Some(i) = picked {
                let id = ALL_GAMES[i];
                *app = AppState::Playing {
                    id,
                    game: create_game(id),
                };
            }
        }
        AppState::Playing { id, game } => {
            let consumed = game.handle_input(&event);
            if let Some(result) = game.take_result() {
                scores.record(*id, result, now_ms);
                *app = AppState::Menu;
                return;
            }
            let back = matches!(event, InputEvent::Click(BACK_TO_MENU))
                || (!consumed && matches!(event, InputEvent::Key('q')));
            if back {
                *app = AppState::Menu;
            }
        }
    }
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let app = Rc::new(RefCell::new(AppState::Menu));
    let scores = Rc::new(RefCell::new(ScoreBoard::restore()));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let game_time = Rc::new(RefCell::new(GameTime::new(TICKS_PER_SEC)));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let app = app.clone();
        let scores = scores.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }

            let action = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs)
                .and_then(|(col, row)| cs.hit_test(col, row));
            drop(cs);

            if let Some(id) = action {
                dispatch(
                    &mut app.borrow_mut(),
                    &mut scores.borrow_mut(),
                    InputEvent::Click(id),
                    js_sys::Date::now(),
                );
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let app = app.clone();
        let scores = scores.clone();
        move |key_event| {
            let event = match key_event.code {
                KeyCode::Char(c) => Some(InputEvent::Key(c.to_ascii_lowercase())),
                KeyCode::Up => Some(InputEvent::Arrow(ArrowKey::Up)),
                KeyCode::Down => Some(InputEvent::Arrow(ArrowKey::Down)),
                KeyCode::Left => Some(InputEvent::Arrow(ArrowKey::Left)),
                KeyCode::Right => Some(InputEvent::Arrow(ArrowKey::Right)),
                KeyCode::Esc => Some(InputEvent::Key('q')),
                _ => None,
            };
            if let Some(event) = event {
                dispatch(
                    &mut app.borrow_mut(),
                    &mut scores.borrow_mut(),
                    event,
                    js_sys::Date::now(),
                );
            }
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let now = web_sys::window()
                .and_then(|w| w.performance())
                .map(|p| p.now())
                .unwrap_or(0.0);
            let ticks = game_time.borrow_mut().update(now);

            let mut app_ref = app.borrow_mut();
            if let AppState::Playing { id, game } = &mut *app_ref {
                if ticks > 0 {
                    game.tick(ticks);
                }
                // A tick can end a session too (e.g. a countdown running out).
                if let Some(result) = game.take_result() {
                    scores.borrow_mut().record(*id, result, js_sys::Date::now());
                    *app_ref = AppState::Menu;
                }
            }

            let size = f.area();

            // Update terminal dimensions and clear click targets
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            // Main layout: title, content, help
            let main_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(10),
                    Constraint::Length(3),
                ])
                .split(size);

            render_title(f, &app_ref, main_chunks[0]);

            match &*app_ref {
                AppState::Menu => {
                    render_menu(f, &scores.borrow(), main_chunks[1], &click_state);
                }
                AppState::Playing { game, .. } => {
                    game.render(f, main_chunks[1], &click_state);
                }
            }

            render_help(f, &app_ref, main_chunks[2], &click_state);
        }
    });

    Ok(())
}

fn render_title(f: &mut Frame, app: &AppState, area: Rect) {
    let title = match app {
        AppState::Menu => "🎮 Games Zone".to_string(),
        AppState::Playing { id, .. } => format!("🎮 Games Zone - {}", id.name()),
    };
    let title_block = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(title_block, area);
}

fn star_rating(stars: u8) -> String {
    let filled = stars.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn render_menu(f: &mut Frame, scores: &ScoreBoard, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let narrow = is_narrow_layout(area.width);
    let mut cl = ClickableList::new();

    for (i, &game) in ALL_GAMES.iter().enumerate() {
        let stars = scores.average_stars(game);
        let rating = if stars == 0 {
            Span::styled("未プレイ", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(star_rating(stars), Style::default().fg(Color::Yellow))
        };

        cl.push_clickable(
            Line::from(vec![
                Span::styled(
                    format!(" [{}] ", i + 1),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{} {:<12}", game.icon(), game.name()),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                rating,
            ]),
            MENU_GAME_BASE + i as u16,
        );

        if !narrow {
            let mut detail = format!("      {}", game.tagline());
            if let Some(best) = scores.best_score(game) {
                detail.push_str(&format!("  (ベスト {} / {}回)", best, scores.plays(game)));
            }
            cl.push(Line::from(Span::styled(
                detail,
                Style::default().fg(Color::Gray),
            )));
            cl.push(Line::from(""));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" ▶ ゲームを選択（タップで開始） ");

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1, 0);
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
}

fn render_help(f: &mut Frame, app: &AppState, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let help_text = match app {
        AppState::Menu => "[1-5] ゲームを選択",
        AppState::Playing { .. } => "[Q] メニューに戻る（スコアは記録されない）",
    };
    let help = Paragraph::new(Line::from(Span::styled(
        help_text,
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(help, area);

    // The whole help bar backs out of a game
    if matches!(app, AppState::Playing { .. }) {
        let mut cs = click_state.borrow_mut();
        cs.add_click_target(area, BACK_TO_MENU);
    }
}
