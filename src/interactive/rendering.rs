//! TUI rendering with ratatui
//!
//! Gallows, masked word and alphabet panels for the hangman interface.

use super::app::{App, Message, MessageStyle, Screen};
use crate::core::{Round, alphabet};
use crate::output::formatters::{gallows, reveal_line, wrong_letters_line};
use crate::output::help_text;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(12),    // Main content
            Constraint::Length(7),  // Messages
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match app.screen {
        Screen::Help => render_help(f, chunks[1]),
        Screen::Menu => render_menu(f, app, chunks[1]),
        Screen::AddWord => render_add_word(f, app, chunks[1]),
        _ => render_game(f, app, chunks[1]),
    }

    render_messages(f, &app.messages, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("H A N G M A N")
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

fn render_menu(f: &mut Frame, app: &App, area: Rect) {
    let word_count = app.session.words().len();

    let mut lines = vec![
        Line::from(""),
        Line::from(format!(
            "There are currently {word_count} different words available."
        )),
        Line::from(""),
    ];

    if word_count > 0 {
        lines.push(Line::from("  [F2]  New game"));
        lines.push(Line::from("  [F4]  New computer game"));
    } else {
        lines.push(Line::from(Span::styled(
            "  Add words with [F3] or the -f/-w options to start playing.",
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from("  [F3]  Add a new word"));
    lines.push(Line::from("  [F1]  Help"));
    lines.push(Line::from("  [F5]  Exit program"));

    let menu = Paragraph::new(lines).block(
        Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(help_text())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Help - [Enter] Close ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(help, area);
}

fn render_add_word(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(format!(
            "The collection currently holds {} words.",
            app.session.words().len()
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("New word: "),
            Span::styled(
                app.input.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from("Letters only (A-Z plus Ä, Ö, Ü and ß)."),
        Line::from("[Enter] adds the word and keeps the prompt open, [Esc] returns to the menu."),
    ];

    let prompt = Paragraph::new(lines).block(
        Block::default()
            .title(" Add words ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(prompt, area);
}

fn render_game(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),  // Gallows
            Constraint::Min(30),     // Word and alphabet
        ])
        .split(area);

    render_gallows(f, app.session.round(), chunks[0]);
    render_word_panel(f, app, chunks[1]);
}

fn render_gallows(f: &mut Frame, round: &Round, area: Rect) {
    let art = gallows(
        round.wrong_letters().len(),
        round.difficulty().max_wrong_guesses(),
    );

    let paragraph = Paragraph::new(art).block(
        Block::default()
            .title(" Gallows ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_word_panel(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Difficulty level: "),
            Span::styled(
                app.session.difficulty().to_string(),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw("   Wrong guesses left: "),
            Span::styled(
                round.wrong_guesses_left().to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Word: "),
            Span::styled(
                reveal_line(round.slots()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    // Alphabet in two rows, colored by guess state
    lines.push(alphabet_row(round, &alphabet::LETTERS[..15]));
    lines.push(alphabet_row(round, &alphabet::LETTERS[15..]));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Wrong letters: "),
        Span::styled(
            wrong_letters_line(round.wrong_letters()),
            Style::default().fg(Color::Red),
        ),
    ]));

    if let Screen::RoundOver { won, target, .. } = &app.screen {
        lines.push(Line::from(""));
        if *won {
            lines.push(Line::from(Span::styled(
                "-> You guessed the word! Press [Enter] to continue.",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!("-> GAME OVER! The word was {target}. Press [Enter]."),
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )));
        }
    }

    if app.screen == Screen::AiSetup {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Difficulty level for the computer [1 - 6]?",
            Style::default().fg(Color::Cyan),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Game ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn alphabet_row(round: &Round, letters: &[char]) -> Line<'static> {
    let mut spans = Vec::with_capacity(letters.len() * 2);

    for &letter in letters {
        let style = if round.is_letter_wrong(letter) {
            Style::default().fg(Color::Red)
        } else if round.is_letter_revealed(letter) {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };

        spans.push(Span::styled(letter.to_string(), style));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

fn render_messages(f: &mut Frame, messages: &[Message], area: Rect) {
    let items: Vec<ListItem> = messages
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

    let list =
        List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats_text = format!(
        "Rounds: {} | Won: {}",
        app.stats.rounds_played, app.stats.rounds_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let streak_text = format!(
        "Streak: {} | Difficulty: {}",
        app.session.streak(),
        app.session.difficulty()
    );
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[1]);

    let keys_text = match app.screen {
        Screen::Menu => "F1: Help | F2: New game | F3: Add word | F4: Computer game | F5: Exit",
        Screen::AddWord => "Type a word | Enter: Add | Esc: Back",
        Screen::HumanRound => "Type letters to guess | F2: Restart | Esc: Abandon",
        Screen::AiSetup => "1-6: Choose difficulty | Esc: Back",
        Screen::AiRound => "Enter: Next guess | Space: Skip to end | Esc: Abandon",
        Screen::RoundOver { .. } => "Enter: Continue",
        Screen::Help => "Enter: Close help",
    };
    let keys = Paragraph::new(keys_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(keys, chunks[2]);
}
