//! Tic Tac Toe rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;
use crate::widgets::ClickableList;

use super::state::{Mark, Outcome, TttState};
use super::{CELL_BASE, FINISH, RESET_ROUND};

pub fn render(state: &TttState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(7), // Board
            Constraint::Min(5),    // Status + buttons
        ])
        .split(area);

    render_header(state, f, chunks[0]);
    render_board(state, f, chunks[1], click_state);
    render_controls(state, f, chunks[2], click_state);
}

fn render_header(state: &TttState, f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            " あなたは X。3つ並べたら勝ち！",
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled(" 対戦数: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", state.games_played),
                Style::default().fg(Color::White),
            ),
            Span::styled("  勝利: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", state.wins),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  勝率: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}%", state.win_rate()),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" × Tic Tac Toe ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn cell_span(state: &TttState, idx: usize) -> Span<'static> {
    match state.board[idx] {
        Some(Mark::X) => Span::styled(
            " X ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Some(Mark::O) => Span::styled(
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        // Dim digit hint matching the 1-9 keys
        None => Span::styled(format!(" {} ", idx + 1), Style::default().fg(Color::DarkGray)),
    }
}

fn render_board(state: &TttState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    // 3 cells of width 3 plus 2 separators = 11 columns, centered.
    let board_w: u16 = 11;
    let x0 = area.x + area.width.saturating_sub(board_w) / 2;
    let y0 = area.y + 1;

    let sep = Span::styled("│", Style::default().fg(Color::DarkGray));
    let rule = Line::from(Span::styled("───┼───┼───", Style::default().fg(Color::DarkGray)));

    let mut lines: Vec<Line> = Vec::new();
    for row in 0..3 {
        if row > 0 {
            lines.push(rule.clone());
        }
        lines.push(Line::from(vec![
            cell_span(state, row * 3),
            sep.clone(),
            cell_span(state, row * 3 + 1),
            sep.clone(),
            cell_span(state, row * 3 + 2),
        ]));
    }

    let board_area = Rect::new(x0, y0, board_w.min(area.width), 5.min(area.height));
    f.render_widget(Paragraph::new(lines), board_area);

    let mut cs = click_state.borrow_mut();
    for row in 0..3u16 {
        for col in 0..3u16 {
            let idx = (row * 3 + col) as u16;
            cs.add_click_target(Rect::new(x0 + col * 4, y0 + row * 2, 3, 1), CELL_BASE + idx);
        }
    }
}

fn render_controls(
    state: &TttState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();

    match state.outcome {
        Some(Outcome::Win(Mark::X)) => cl.push(Line::from(Span::styled(
            " 🎉 あなたの勝ち！",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))),
        Some(Outcome::Win(Mark::O)) => cl.push(Line::from(Span::styled(
            " 😔 AIの勝ち…",
            Style::default().fg(Color::Red),
        ))),
        Some(Outcome::Tie) => cl.push(Line::from(Span::styled(
            " 🤝 引き分け",
            Style::default().fg(Color::Gray),
        ))),
        None => {
            let status = if state.turn == Mark::X {
                Span::styled(" あなたの番です", Style::default().fg(Color::Green))
            } else {
                Span::styled(" AIが考え中...", Style::default().fg(Color::Red))
            };
            cl.push(Line::from(status));
        }
    }

    cl.push(Line::from(""));
    if state.outcome.is_some() {
        cl.push_clickable(
            Line::from(Span::styled(
                " [R] もう一度プレイ",
                Style::default().fg(Color::Yellow),
            )),
            RESET_ROUND,
        );
    }
    cl.push_clickable(
        Line::from(Span::styled(
            " [F] 成績を記録して終了",
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
