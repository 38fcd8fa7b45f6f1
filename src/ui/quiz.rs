use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use super::Theme;
use crate::app::QuizController;

const OPTION_KEYS: [char; 9] = ['1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub fn render(frame: &mut Frame, area: Rect, app: &QuizController, theme: &Theme) {
    let question = app.current_question();

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Length(1), // Progress
        Constraint::Length(1),
        Constraint::Length(3), // Prompt
        Constraint::Fill(1),   // Options
        Constraint::Length(3), // Navigation
        Constraint::Length(1), // Key hints
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], theme);
    render_progress(frame, chunks[1], app, theme);
    render_prompt(
        frame,
        chunks[3],
        app.current_question_number(),
        &question.prompt,
        theme,
    );
    render_options(
        frame,
        chunks[4],
        &question.options,
        app.current_selection(),
        theme,
    );
    render_navigation(frame, chunks[5], app, theme);
    render_controls(frame, chunks[6], question.options.len(), theme);
}

fn render_header(frame: &mut Frame, area: Rect, theme: &Theme) {
    let content = vec![
        Line::from(Span::styled(
            "Test Your Knowledge",
            Style::default().fg(theme.title).bold(),
        )),
        Line::from(Span::styled(
            "Answer all questions to see your results",
            Style::default().fg(theme.muted),
        )),
    ];

    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &QuizController, theme: &Theme) {
    let label = format!(
        "{}/{}",
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Gauge::default()
        .ratio(app.progress_ratio())
        .label(Span::styled(label, Style::default().fg(theme.text)))
        .gauge_style(Style::default().fg(theme.gauge_filled).bg(theme.gauge_empty));

    frame.render_widget(widget, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, number: usize, prompt: &str, theme: &Theme) {
    let widget = Paragraph::new(format!("{}. {}", number, prompt))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .fg(theme.text)
        .bold();

    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[String],
    selected: Option<&str>,
    theme: &Theme,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = selected == Some(option.as_str());
        let style = if is_selected {
            Style::default()
                .fg(theme.option_selected_fg)
                .bg(theme.option_selected_bg)
                .bold()
        } else {
            Style::default().fg(theme.option)
        };
        let marker = if is_selected { ">" } else { " " };
        let key = OPTION_KEYS.get(index).copied().unwrap_or(' ');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", key), style),
            Span::styled(format!("{} ", option), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_navigation(frame: &mut Frame, area: Rect, app: &QuizController, theme: &Theme) {
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    frame.render_widget(
        nav_button("←", app.can_retreat(), Alignment::Left, theme),
        halves[0],
    );
    frame.render_widget(
        nav_button("→", app.can_advance(), Alignment::Right, theme),
        halves[1],
    );
}

fn nav_button<'a>(
    arrow: &'a str,
    enabled: bool,
    alignment: Alignment,
    theme: &Theme,
) -> Paragraph<'a> {
    let color = if enabled {
        theme.control
    } else {
        theme.control_disabled
    };
    let mut style = Style::default().fg(color);
    style = if enabled {
        style.bold()
    } else {
        style.add_modifier(Modifier::DIM)
    };

    Paragraph::new(Line::from(Span::styled(format!("  {}  ", arrow), style)))
        .alignment(alignment)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
}

fn controls_hint(num_options: usize) -> String {
    format!(
        "1-{} choose  ·  j/k move  ·  ←/→ back/next  ·  r restart  ·  q quit",
        num_options.min(OPTION_KEYS.len())
    )
}

fn render_controls(frame: &mut Frame, area: Rect, num_options: usize, theme: &Theme) {
    let widget = Paragraph::new(controls_hint(num_options))
        .alignment(Alignment::Center)
        .fg(theme.muted);
    frame.render_widget(widget, area);
}
