use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Outcome;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_title(frame, chunks[0]);
    render_question(frame, chunks[1], app.game().current_question());
    render_options(frame, chunks[2], app);
    render_feedback(frame, chunks[3], app);
    render_controls(frame, chunks[4]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("NEW ZEALAND TRIVIA")
        .alignment(Alignment::Center)
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(widget, area);
}

fn render_question(frame: &mut Frame, area: Rect, question: &str) {
    let widget = Paragraph::new(question)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold()
        .block(Block::default().borders(Borders::BOTTOM).border_style(Color::DarkGray));
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App) {
    let options = app.answer_options();
    let highlighted = app.highlighted_option();
    let selected = app.game().selected_answer();

    let lines: Vec<Line> = options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let is_highlighted = index == highlighted;
            let style = if is_highlighted {
                Style::default().fg(Color::Cyan).bold()
            } else if option.value == selected {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_highlighted { ">" } else { " " };

            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(option.label.as_str(), style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, app: &App) {
    let Some(feedback) = app.game().feedback() else {
        return;
    };

    let color = match app.game().result() {
        Some(Outcome::Win) => Color::Green,
        Some(Outcome::Lose) => Color::Red,
        None => Color::Gray,
    };

    let widget = Paragraph::new(feedback).fg(color).bold();
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("n new question  ·  j/k navigate  ·  enter select  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
