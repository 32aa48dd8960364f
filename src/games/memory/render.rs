//! Memory Match rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;
use crate::widgets::ClickableList;

use super::logic::current_score;
use super::state::{MemoryState, Phase, TOTAL_PAIRS};
use super::{CARD_BASE, CARD_KEYS, FINISH, START_GAME};

pub fn render(state: &MemoryState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(6), // Card grid
            Constraint::Min(4),    // Controls
        ])
        .split(area);

    render_header(state, f, chunks[0]);
    if state.phase != Phase::Ready {
        render_cards(state, f, chunks[1], click_state);
    } else {
        render_rules(f, chunks[1]);
    }
    render_controls(state, f, chunks[2], click_state);
}

fn render_header(state: &MemoryState, f: &mut Frame, area: Rect) {
    let mins = state.elapsed_secs() / 60;
    let secs = state.elapsed_secs() % 60;
    let line = Line::from(vec![
        Span::styled(" 手数: ", Style::default().fg(Color::Gray)),
        Span::styled(format!("{}", state.moves), Style::default().fg(Color::White)),
        Span::styled("  ペア: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}/{}", state.matches, TOTAL_PAIRS),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  時間: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}:{:02}", mins, secs),
            Style::default().fg(Color::Cyan),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" 🧠 Memory Match ");
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_rules(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  同じ絵柄のカードを2枚ずつめくって",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "  すべてのペアを見つけよう",
            Style::default().fg(Color::Gray),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_cards(state: &MemoryState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    // 4x4 grid, each card 4 columns wide with a 1-column gap.
    let grid_w: u16 = 4 * 4 + 3;
    let x0 = area.x + area.width.saturating_sub(grid_w) / 2;
    let y0 = area.y + 1;

    let mut lines: Vec<Line> = Vec::new();
    for row in 0..4usize {
        let mut spans: Vec<Span> = Vec::new();
        for col in 0..4usize {
            if col > 0 {
                spans.push(Span::raw(" "));
            }
            let idx = row * 4 + col;
            let card = &state.cards[idx];
            let span = if card.matched {
                Span::styled(format!(" {} ", card.value), Style::default().fg(Color::DarkGray))
            } else if card.face_up {
                Span::styled(
                    format!(" {} ", card.value),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    format!("░{}░ ", CARD_KEYS[idx]),
                    Style::default().fg(Color::Blue),
                )
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    let grid_area = Rect::new(x0, y0, grid_w.min(area.width), 4.min(area.height));
    f.render_widget(Paragraph::new(lines), grid_area);

    let mut cs = click_state.borrow_mut();
    for row in 0..4u16 {
        for col in 0..4u16 {
            let idx = row * 4 + col;
            cs.add_click_target(Rect::new(x0 + col * 5, y0 + row, 4, 1), CARD_BASE + idx);
        }
    }
}

fn render_controls(
    state: &MemoryState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();

    match state.phase {
        Phase::Ready => {
            cl.push_clickable(
                Line::from(Span::styled(
                    " [R] ゲームスタート",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                START_GAME,
            );
        }
        Phase::Playing => {
            cl.push(Line::from(Span::styled(
                " カードをタップ（キーは各カードに表示）",
                Style::default().fg(Color::Gray),
            )));
        }
        Phase::Complete => {
            cl.push(Line::from(Span::styled(
                " 🎉 コンプリート！",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            cl.push(Line::from(Span::styled(
                format!(
                    " {}手 / {}秒  スコア: {}",
                    state.moves,
                    state.elapsed_secs(),
                    current_score(state)
                ),
                Style::default().fg(Color::White),
            )));
            cl.push_clickable(
                Line::from(Span::styled(
                    " [R] もう一度プレイ",
                    Style::default().fg(Color::Yellow),
                )),
                START_GAME,
            );
        }
    }

    cl.push_clickable(
        Line::from(Span::styled(
            " [F] 記録して終了",
            Style::default().fg(Color::Cyan),
        )),
        FINISH,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1, 0);
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
}
