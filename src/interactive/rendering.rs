//! TUI rendering with ratatui
//!
//! Board, palette and progress panels for both game modes.

use super::app::{App, MessageStyle, Phase};
use crate::core::{Code, Color as PegColor, Feedback};
use crate::game::Mode;
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
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn peg_style(color: PegColor) -> Style {
    let (r, g, b) = color.rgb();
    Style::default().fg(Color::Rgb(r, g, b))
}

fn code_spans(colors: &[PegColor]) -> Vec<Span<'static>> {
    colors
        .iter()
        .map(|&c| Span::styled("● ", peg_style(c)))
        .collect()
}

fn feedback_span(feedback: Feedback, length: usize) -> Span<'static> {
    Span::styled(
        feedback.to_pegs(length),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🎯 MASTERMIND - {}", app.mode))
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
    let length = app.config.length();

    let mut lines = vec![match app.visible_secret() {
        Some(secret) => secret_line(secret),
        None => Line::from(vec![
            Span::raw("Secret: "),
            Span::styled(
                "? ".repeat(length),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    }];
    lines.push(Line::from(""));

    for (i, entry) in app.history.iter().enumerate() {
        let mut spans = vec![Span::raw(format!("{:>3}: ", i + 1))];
        spans.extend(code_spans(entry.guess.colors()));
        spans.push(Span::raw("  "));
        spans.push(feedback_span(entry.feedback, length));
        if let Some((before, after)) = entry.candidates {
            spans.push(Span::styled(
                format!("  {before} → {after}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }

    // Keep the newest guesses in view
    let visible = area.height.saturating_sub(2) as usize;
    let skip = lines.len().saturating_sub(visible);

    let board = Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>())
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(board, area);
}

fn secret_line(secret: &Code) -> Line<'static> {
    let mut spans = vec![Span::raw("Secret: ")];
    spans.extend(code_spans(secret.colors()));
    spans.push(Span::styled(
        secret.names(),
        Style::default().fg(Color::Yellow),
    ));
    Line::from(spans)
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Palette
            Constraint::Length(3),      // Search space gauge
            Constraint::Min(3),         // Messages
        ])
        .split(area);

    render_palette(f, app, chunks[0]);
    render_search_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_palette(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .config
        .palette()
        .iter()
        .enumerate()
        .map(|(i, &color)| {
            Line::from(vec![
                Span::raw(format!(" {}/{}  ", i + 1, color.letter())),
                Span::styled("● ", peg_style(color)),
                Span::raw(color.name()),
            ])
        })
        .collect();

    let palette = Paragraph::new(lines).block(
        Block::default()
            .title(" Colors ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(palette, area);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.config.code_space();
    let remaining = app.candidates_remaining();

    let (percent, label) = match remaining {
        Some(count) => {
            let eliminated = total.saturating_sub(count);
            (
                (eliminated as f64 / total as f64 * 100.0).min(100.0) as u16,
                format!("{count} of {total} candidates remain"),
            )
        }
        None => (0, format!("{total} possible codes")),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Search Space ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(label);

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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.phase {
        Phase::Won => (
            " 🎉 ROUND OVER! 🎉 | Press 'n' for a new round or 'q' to quit ",
            Color::Green,
        ),
        Phase::PlayerGuessing => (
            " Pick your guess (1-9 or color letter) | Backspace to undo ",
            Color::Yellow,
        ),
        Phase::EnteringSecret => (
            " Pick your secret code (1-9 or color letter) | Backspace to undo ",
            Color::Magenta,
        ),
        Phase::ComputerGuessing => (" Computer is thinking... ", Color::Cyan),
    };

    let mut spans = code_spans(app.builder.picks());
    if matches!(app.phase, Phase::PlayerGuessing | Phase::EnteringSecret) {
        spans.push(Span::styled(
            "_ ".repeat(app.builder.remaining()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let input = Paragraph::new(Line::from(spans))
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
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.mode {
        Mode::PlayerVsComputer => "Mode: You guess",
        Mode::ComputerVsPlayer => "Mode: Computer guesses",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "You: {} wins (avg {:.1})",
        app.stats.player_wins,
        average(app.stats.player_guesses, app.stats.player_wins)
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let computer_text = format!(
        "Computer: {} wins (avg {:.1})",
        app.stats.computer_wins,
        average(app.stats.computer_guesses, app.stats.computer_wins)
    );
    let computer = Paragraph::new(computer_text).alignment(Alignment::Center);
    f.render_widget(computer, chunks[2]);

    let help = Paragraph::new("q: Quit | n: New | TAB: Mode")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

fn average(total: usize, rounds: usize) -> f64 {
    if rounds == 0 {
        0.0
    } else {
        total as f64 / rounds as f64
    }
}
