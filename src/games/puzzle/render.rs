//! Sliding puzzle rendering (read-only from state).

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
use super::state::{Phase, PuzzleState, GRID_SIZE, WINNING};
use super::{FINISH, START, TILE_BASE};

pub fn render(state: &PuzzleState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(7), // Board
            Constraint::Min(4),    // Controls
        ])
        .split(area);

    render_header(state, f, chunks[0]);
    if state.phase == Phase::Ready {
        render_rules(f, chunks[1]);
    } else {
        render_board(state, f, chunks[1], click_state);
    }
    render_controls(state, f, chunks[2], click_state);
}

fn render_header(state: &PuzzleState, f: &mut Frame, area: Rect) {
    let mins = state.elapsed_secs() / 60;
    let secs = state.elapsed_secs() % 60;
    let line = Line::from(vec![
        Span::styled(" 手数: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}", state.moves),
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
        .border_style(Style::default().fg(Color::Blue))
        .title(" 🧩 Puzzle ");
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_rules(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  タイルをスライドして 1〜8 を順番に並べよう",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "  空きマスの隣のタイルだけ動かせる",
            Style::default().fg(Color::Gray),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_board(state: &PuzzleState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    // Each tile is 4 columns wide with a 1-column gap, rows 2 high.
    let grid_w: u16 = 4 * GRID_SIZE as u16 + (GRID_SIZE as u16 - 1);
    let x0 = area.x + area.width.saturating_sub(grid_w) / 2;
    let y0 = area.y + 1;

    let mut lines: Vec<Line> = Vec::new();
    for row in 0..GRID_SIZE {
        let mut spans: Vec<Span> = Vec::new();
        for col in 0..GRID_SIZE {
            if col > 0 {
                spans.push(Span::raw(" "));
            }
            let idx = row * GRID_SIZE + col;
            let span = match state.tiles[idx] {
                Some(n) => {
                    let in_place = WINNING[idx] == Some(n);
                    let style = if in_place {
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    Span::styled(format!(" {}  ", n), style)
                }
                None => Span::styled("░░░░", Style::default().fg(Color::DarkGray)),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
        if row < GRID_SIZE - 1 {
            lines.push(Line::from(""));
        }
    }

    let grid_area = Rect::new(x0, y0, grid_w.min(area.width), 5.min(area.height));
    f.render_widget(Paragraph::new(lines), grid_area);

    let mut cs = click_state.borrow_mut();
    for row in 0..GRID_SIZE as u16 {
        for col in 0..GRID_SIZE as u16 {
            let idx = row * GRID_SIZE as u16 + col;
            cs.add_click_target(Rect::new(x0 + col * 5, y0 + row * 2, 4, 1), TILE_BASE + idx);
        }
    }
}

fn render_controls(
    state: &PuzzleState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();

    match state.phase {
        Phase::Ready => {
            cl.push_clickable(
                Line::from(Span::styled(
                    " [R] パズルスタート",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                START,
            );
        }
        Phase::Playing => {
            cl.push(Line::from(Span::styled(
                " タイルをタップ（キー: 1-9、マス目の位置）",
                Style::default().fg(Color::Gray),
            )));
        }
        Phase::Solved => {
            cl.push(Line::from(Span::styled(
                " 🎉 パズル完成！",
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
                    " [R] 新しいパズル",
                    Style::default().fg(Color::Yellow),
                )),
                START,
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
