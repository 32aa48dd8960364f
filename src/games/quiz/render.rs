//! Quiz rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;
use crate::widgets::ClickableList;

use super::logic::percentage;
use super::questions::QUESTIONS;
use super::state::{Phase, QuizState};
use super::{FINISH, NEXT, OPTION_BASE, START};

pub fn render(state: &QuizState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Question / result body
        ])
        .split(area);

    render_header(state, f, chunks[0]);
    match state.phase {
        Phase::Ready => render_rules(f, chunks[1], click_state),
        Phase::Playing => render_question(state, f, chunks[1], click_state),
        Phase::Result => render_result(state, f, chunks[1], click_state),
    }
}

fn time_color(seconds: u32) -> Color {
    if seconds <= 5 {
        Color::Red
    } else if seconds <= 10 {
        Color::Yellow
    } else {
        Color::Green
    }
}

fn render_header(state: &QuizState, f: &mut Frame, area: Rect) {
    let line = if state.phase == Phase::Playing {
        Line::from(vec![
            Span::styled(
                format!(" 問題 {}/{}", state.current + 1, state.total_questions()),
                Style::default().fg(Color::White),
            ),
            Span::styled("  正解: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", state.score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  残り: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}秒", state.seconds_left()),
                Style::default()
                    .fg(time_color(state.seconds_left()))
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(Span::styled(
            format!(" 全{}問 / 各30秒", state.total_questions()),
            Style::default().fg(Color::Gray),
        ))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" ❓ Quiz ");
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_rules(f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        " Web・プログラミング・CSの4択クイズ",
        Style::default().fg(Color::Gray),
    )));
    cl.push(Line::from(Span::styled(
        " 1問30秒、時間切れは不正解扱い",
        Style::default().fg(Color::Gray),
    )));
    cl.push(Line::from(""));
    cl.push_clickable(
        Line::from(Span::styled(
            " [R] クイズスタート",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        START,
    );
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

fn render_question(state: &QuizState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let q = &QUESTIONS[state.current];
    let mut cl = ClickableList::new();

    cl.push(Line::from(Span::styled(
        format!(" {}", q.category),
        Style::default().fg(Color::Magenta),
    )));
    cl.push(Line::from(Span::styled(
        format!(" {}", q.question),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(""));

    for (i, option) in q.options.iter().enumerate() {
        let picked = state.selected == Some(i);
        let marker = if picked { "▶" } else { " " };
        let style = if picked {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        cl.push_clickable(
            Line::from(Span::styled(
                format!(" {}{}. {}", marker, i + 1, option),
                style,
            )),
            OPTION_BASE + i as u16,
        );
    }

    cl.push(Line::from(""));
    if state.selected.is_some() {
        let label = if state.current + 1 == state.total_questions() {
            " [N] 結果を見る"
        } else {
            " [N] 次の問題へ"
        };
        cl.push_clickable(
            Line::from(Span::styled(
                label,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            NEXT,
        );
    } else {
        cl.push(Line::from(Span::styled(
            " 1-4 で答えを選択",
            Style::default().fg(Color::DarkGray),
        )));
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

fn render_result(state: &QuizState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let pct = percentage(state);
    let emoji = if pct >= 80 {
        "🎉"
    } else if pct >= 60 {
        "👏"
    } else {
        "📚"
    };

    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        format!(" {} クイズ終了！", emoji),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(Span::styled(
        format!(
            " {}/{} 正解 ({}%)",
            state.score,
            state.total_questions(),
            pct
        ),
        Style::default().fg(Color::White),
    )));

    // Review the misses only.
    let missed: Vec<usize> = (0..QUESTIONS.len())
        .filter(|&i| state.answers.get(i).copied().flatten() != Some(QUESTIONS[i].correct))
        .collect();
    if !missed.is_empty() {
        cl.push(Line::from(""));
        cl.push(Line::from(Span::styled(
            " 復習:",
            Style::default().fg(Color::Gray),
        )));
        for i in missed {
            let q = &QUESTIONS[i];
            cl.push(Line::from(Span::styled(
                format!(" ✗ {}", q.question),
                Style::default().fg(Color::Red),
            )));
            cl.push(Line::from(Span::styled(
                format!("   正解: {}", q.options[q.correct]),
                Style::default().fg(Color::Green),
            )));
            if let Some(given) = state.answers.get(i).copied().flatten() {
                cl.push(Line::from(Span::styled(
                    format!("   回答: {}", q.options[given]),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
    }

    cl.push(Line::from(""));
    cl.push_clickable(
        Line::from(Span::styled(
            " [R] もう一度挑戦",
            Style::default().fg(Color::Yellow),
        )),
        START,
    );
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
