use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::{Theme, ViewState};
use crate::app::QuizController;

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    app: &QuizController,
    view: &ViewState,
    theme: &Theme,
) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7), // Score
        Constraint::Fill(1),   // Breakdown
        Constraint::Length(3), // Start again
        Constraint::Length(1), // Key hints
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], app.final_score_percentage(), theme);
    render_question_breakdown(frame, chunks[2], app, view.result_scroll(), theme);
    render_restart(frame, chunks[3], theme);
    render_controls(frame, chunks[4], theme);
}

fn render_score_summary(frame: &mut Frame, area: Rect, percentage: u32, theme: &Theme) {
    let content = vec![
        Line::from(Span::styled("Keep Learning!", Style::default().fg(theme.muted))),
        Line::from(""),
        Line::from(Span::styled(
            "Your Final Score is",
            Style::default().fg(theme.title).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}%", percentage),
            Style::default().fg(theme.score).bold(),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(
    frame: &mut Frame,
    area: Rect,
    app: &QuizController,
    scroll: usize,
    theme: &Theme,
) {
    let [list_area, more_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

    let lines: Vec<Line> = app
        .answers()
        .iter()
        .zip(app.questions().iter())
        .enumerate()
        .map(|(index, (answer, question))| {
            let is_correct = answer
                .as_deref()
                .is_some_and(|choice| question.is_correct(choice));
            let (symbol, color) = if is_correct {
                ("+", theme.correct)
            } else {
                ("-", theme.incorrect)
            };

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(theme.muted),
                ),
                Span::styled(
                    truncate_question(&question.prompt),
                    Style::default().fg(theme.option),
                ),
            ])
        })
        .collect();

    let hidden = lines
        .len()
        .saturating_sub(scroll + list_area.height as usize);

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(widget, list_area);

    if hidden > 0 {
        let more = Paragraph::new(format!("↓ {} more", hidden))
            .alignment(Alignment::Right)
            .fg(theme.muted);
        frame.render_widget(more, more_area);
    }
}

fn render_restart(frame: &mut Frame, area: Rect, theme: &Theme) {
    let widget = Paragraph::new(Span::styled(
        "Start Again",
        Style::default().fg(theme.control).bold(),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.control)),
    );

    let [button] = Layout::horizontal([Constraint::Length(19)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(widget, button);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect, theme: &Theme) {
    let widget = Paragraph::new("j/k scroll  ·  enter/r start again  ·  q quit")
        .alignment(Alignment::Center)
        .fg(theme.muted);
    frame.render_widget(widget, area);
}
