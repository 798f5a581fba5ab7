//! TUI rendering with ratatui
//!
//! Board, hints, messages and statistics for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Classification, Feedback};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Hints, messages, stats
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 GUESS THE WORD")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(classification: Classification) -> Style {
    let bg = match classification {
        Classification::Correct => Color::Green,
        Classification::Present => Color::Yellow,
        Classification::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn feedback_line(feedback: &Feedback) -> Line<'static> {
    let mut spans = Vec::with_capacity(feedback.len() * 2);
    for lf in feedback {
        spans.push(Span::styled(
            format!(" {} ", lf.letter.to_ascii_uppercase()),
            tile_style(lf.classification),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    if app.history.is_empty() {
        lines.push(Line::from(Span::styled(
            "No guesses yet",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (i, entry) in app.history.iter().enumerate() {
        let mut line = feedback_line(&entry.feedback);
        line.spans.insert(
            0,
            Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::DarkGray)),
        );
        lines.push(line);
        lines.push(Line::from(""));
    }

    // Keep the latest guesses visible
    let visible = area.height.saturating_sub(2) as usize;
    if lines.len() > visible {
        lines.drain(..lines.len() - visible);
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Hint
            Constraint::Length(3), // Hint gauge
            Constraint::Min(4),    // Messages
            Constraint::Length(4), // Stats
        ])
        .split(area);

    render_hint(f, app, chunks[0]);
    render_hint_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_stats(f, app, chunks[3]);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            app.view.hint_display.to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{} letters", app.view.word_length)),
    ];

    let hint = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Hint ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(hint, area);
}

fn render_hint_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.view.word_length.max(1);
    let used = app.view.hints_used.min(total);
    let percent = (used * 100 / total) as u16;

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{total} letters revealed"));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let distribution = (1..=6)
        .map(|n| format!("{n}:{}", stats.guess_distribution[n]))
        .collect::<Vec<_>>()
        .join(" ");

    let content = vec![
        Line::from(format!(
            "Rounds: {} | Won: {} | Win rate: {:.0}% | Hints: {}",
            stats.rounds_played,
            stats.rounds_won,
            stats.win_rate(),
            stats.hints_used
        )),
        Line::from(distribution),
    ];

    let paragraph =
        Paragraph::new(content).block(Block::default().title(" Stats ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CORRECT! 🎉 | Enter: next word | q: quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => (
            format!(" Your Guess ({} letters) ", app.view.word_length),
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::WinCelebration => "Enter/n: Next Word | q/Esc: Quit",
        InputMode::Guessing => "Enter: Submit | TAB: Hint | Ctrl+R: New Word | Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
