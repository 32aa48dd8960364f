//! Snake rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction as LayoutDir, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;
use crate::widgets::ClickableList;

use super::state::{Phase, Pos, SnakeState, GRID_SIZE};
use super::{FINISH, PAUSE_RUN, START_RUN};

pub fn render(state: &SnakeState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let chunks = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(3),                // Header
            Constraint::Length(GRID_SIZE as u16 + 2), // Grid + border
            Constraint::Min(4),                   // Controls
        ])
        .split(area);

    render_header(state, f, chunks[0]);
    render_grid(state, f, chunks[1]);
    render_controls(state, f, chunks[2], click_state);
}

fn render_header(state: &SnakeState, f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" スコア: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}", state.score),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ハイスコア: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}", state.high_score),
            Style::default().fg(Color::Cyan),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(" 🐍 Snake ");
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_grid(state: &SnakeState, f: &mut Frame, area: Rect) {
    // Each grid cell is 2 columns wide so the board reads roughly square.
    let head = state.snake.first().copied();

    let mut lines: Vec<Line> = Vec::with_capacity(GRID_SIZE as usize);
    for y in 0..GRID_SIZE {
        let mut spans: Vec<Span> = Vec::with_capacity(GRID_SIZE as usize);
        for x in 0..GRID_SIZE {
            let pos = Pos::new(x, y);
            let span = if pos == state.food {
                Span::styled("██", Style::default().fg(Color::Red))
            } else if head == Some(pos) {
                Span::styled(
                    "██",
                    Style::default()
                        .fg(Color::LightGreen)
                        .add_modifier(Modifier::BOLD),
                )
            } else if state.snake.contains(&pos) {
                Span::styled("██", Style::default().fg(Color::Green))
            } else {
                Span::styled("· ", Style::default().fg(Color::DarkGray))
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    let grid_w = (GRID_SIZE as u16) * 2 + 2;
    let x0 = area.x + area.width.saturating_sub(grid_w) / 2;
    let grid_area = Rect::new(x0, area.y, grid_w.min(area.width), area.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(lines).block(block), grid_area);
}

fn render_controls(
    state: &SnakeState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();

    match state.phase {
        Phase::Ready => {
            cl.push(Line::from(Span::styled(
                " 矢印キー / WASD で操作",
                Style::default().fg(Color::Gray),
            )));
            cl.push_clickable(
                Line::from(Span::styled(
                    " [R] スタート",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                START_RUN,
            );
        }
        Phase::Running => {
            cl.push(Line::from(Span::styled(
                " 矢印キー / WASD で操作",
                Style::default().fg(Color::Gray),
            )));
            cl.push_clickable(
                Line::from(Span::styled(" [P] 一時停止", Style::default().fg(Color::Cyan))),
                PAUSE_RUN,
            );
        }
        Phase::GameOver => {
            let banner = if state.score > state.high_score {
                Span::styled(
                    " 🎉 ハイスコア更新！",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(" 💀 ゲームオーバー", Style::default().fg(Color::Red))
            };
            cl.push(Line::from(banner));
            cl.push_clickable(
                Line::from(Span::styled(
                    " [R] もう一度プレイ",
                    Style::default().fg(Color::Yellow),
                )),
                START_RUN,
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
