//! TUI rendering with ratatui
//!
//! Board, clock and messages for a timed round.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{format_clock, mask_word, spaced_letters};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Clock and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let puzzle = app.session.puzzle();
    let title = if puzzle.mode.is_daily() {
        format!("🧵 WORD WEAVER - Daily Challenge ({})", puzzle.difficulty)
    } else {
        format!("🧵 WORD WEAVER - {} Round", puzzle.difficulty)
    };

    let header = Paragraph::new(title)
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Letters
            Constraint::Min(3),    // Words
        ])
        .split(area);

    render_letters(f, app, chunks[0]);
    render_words(f, app, chunks[1]);
}

fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let letters = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            spaced_letters(app.session.display_letters()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(letters, area);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let round_over = app.input_mode == InputMode::RoundOver;
    let items: Vec<ListItem> = app
        .session
        .puzzle()
        .words
        .iter()
        .map(|word| {
            if app.session.is_found(word) {
                ListItem::new(format!("✓ {}", spaced_letters(word.as_bytes())))
                    .style(Style::default().fg(Color::Green))
            } else if round_over {
                // Reveal what was missed
                ListItem::new(format!("✗ {}", spaced_letters(word.as_bytes())))
                    .style(Style::default().fg(Color::Red))
            } else {
                ListItem::new(format!(
                    "  {}  ({})",
                    mask_word(word, app.session.hints_for(word)),
                    word.len()
                ))
            }
        })
        .collect();

    let title = format!(
        " Words {}/{} ",
        app.session.found().len(),
        app.session.puzzle().words.len()
    );
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Clock
            Constraint::Length(6), // Score
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_clock(f, app, chunks[0]);
    render_score(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_clock(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.config().round_duration;
    let remaining = app.session.remaining();
    let ratio = if total.is_zero() {
        0.0
    } else {
        (remaining.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
    };
    let color = match ratio {
        r if r > 0.5 => Color::Green,
        r if r > 0.2 => Color::Yellow,
        _ => Color::Red,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format_clock(remaining));
    f.render_widget(gauge, area);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let mut content = vec![
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                app.session.score().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Hints left: {}", app.session.hints_remaining())),
    ];

    if let Some(summary) = app.last_summary {
        content.push(Line::from(format!(
            "+{} time, -{} hints",
            summary.time_bonus, summary.hint_penalty
        )));
        content.push(Line::from(Span::styled(
            format!("Final: {}", summary.final_score),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " Round over | Press 'n' for the next round or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Playing => (
            " Type a word | Enter to submit ",
            app.input_buffer.as_str(),
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
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let adaptive = if app.adaptive.is_some() {
        "adaptive"
    } else {
        "fixed"
    };
    let mode = Paragraph::new(format!(
        "{} ({adaptive})",
        app.session.puzzle().difficulty
    ))
    .alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Rounds: {} | Best: {} | Avg: {:.0}",
        app.stats.rounds_played,
        app.stats.best_score,
        app.stats.average_score()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::RoundOver => "n: Next Round | q: Quit",
        InputMode::Playing => "Enter: Submit | TAB/?: Hint | Space/!: Shuffle | Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
