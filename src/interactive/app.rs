//! TUI application state and logic

use crate::core::{Code, Color, Feedback, GameConfig};
use crate::game::{CodeBuilder, ComputerRound, Mode, PlayerRound, RandomSecret};
use crate::solver::SolverState;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How often the event loop wakes up to advance the computer's turns
const TICK: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    pub config: GameConfig,
    pub mode: Mode,
    pub phase: Phase,
    pub builder: CodeBuilder,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub delay: Duration,
    round: Round,
    source: RandomSecret,
    last_step: Instant,
}

/// What the board is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Player picks colors for the next guess
    PlayerGuessing,
    /// Player picks colors for the secret the computer will crack
    EnteringSecret,
    /// Computer plays one guess per delay
    ComputerGuessing,
    /// Round over, waiting for a new round
    Won,
}

enum Round {
    Idle,
    Player(PlayerRound),
    Computer(ComputerRound),
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Code,
    pub feedback: Feedback,
    /// Candidate counts before and after, for computer guesses
    pub candidates: Option<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub player_wins: usize,
    pub player_guesses: usize,
    pub computer_wins: usize,
    pub computer_guesses: usize,
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig, mode: Mode, source: RandomSecret, delay: Duration) -> Self {
        let builder = CodeBuilder::new(config.length());
        let mut app = Self {
            config,
            mode,
            phase: Phase::PlayerGuessing,
            builder,
            history: Vec::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            delay,
            round: Round::Idle,
            source,
            last_step: Instant::now(),
        };
        app.new_round();
        app
    }

    /// Start a fresh round in the current mode
    pub fn new_round(&mut self) {
        self.builder.clear();
        self.history.clear();
        self.round = Round::Idle;

        match self.mode {
            Mode::PlayerVsComputer => {
                match PlayerRound::new(self.config.clone(), &mut self.source) {
                    Ok(round) => {
                        self.round = Round::Player(round);
                        self.phase = Phase::PlayerGuessing;
                        self.add_message(
                            "Round reset! Pick colors to make your guess.",
                            MessageStyle::Info,
                        );
                    }
                    Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
                }
            }
            Mode::ComputerVsPlayer => {
                self.phase = Phase::EnteringSecret;
                self.add_message(
                    &format!(
                        "Enter your secret code by picking {} colors.",
                        self.config.length()
                    ),
                    MessageStyle::Info,
                );
            }
        }
    }

    /// Switch between the two modes; starts a new round
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.add_message(&format!("Mode: {}", self.mode), MessageStyle::Info);
        self.new_round();
    }

    /// Pick the palette color at `index`
    pub fn pick_index(&mut self, index: usize) {
        if let Some(&color) = self.config.palette().get(index) {
            self.pick_color(color);
        }
    }

    /// Pick a color by its letter, ignoring colors outside the palette
    pub fn pick_letter(&mut self, letter: char) {
        if let Some(color) = Color::from_letter(letter)
            && self.config.palette().contains(&color)
        {
            self.pick_color(color);
        }
    }

    fn pick_color(&mut self, color: Color) {
        if !matches!(self.phase, Phase::PlayerGuessing | Phase::EnteringSecret) {
            return;
        }

        if let Some(code) = self.builder.push(color) {
            match self.phase {
                Phase::PlayerGuessing => self.submit_guess(&code),
                Phase::EnteringSecret => self.set_secret(code),
                Phase::ComputerGuessing | Phase::Won => {}
            }
        }
    }

    /// Remove the last picked color
    pub fn undo_pick(&mut self) {
        if self.builder.pop().is_none() {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    fn submit_guess(&mut self, guess: &Code) {
        let Round::Player(round) = &mut self.round else {
            return;
        };

        match round.guess(guess) {
            Ok(feedback) => {
                let won = round.is_won();
                let turns = round.round().turns();
                self.history.push(HistoryEntry {
                    guess: guess.clone(),
                    feedback,
                    candidates: None,
                });

                if won {
                    self.stats.player_wins += 1;
                    self.stats.player_guesses += turns;
                    self.phase = Phase::Won;
                    self.add_message(
                        &format!("🎉 Congratulations! You guessed the code in {turns}!"),
                        MessageStyle::Success,
                    );
                    self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
                } else {
                    self.add_message(&format!("Feedback: {feedback}"), MessageStyle::Info);
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn set_secret(&mut self, secret: Code) {
        match ComputerRound::new(self.config.clone(), secret) {
            Ok(round) => {
                self.round = Round::Computer(round);
                self.phase = Phase::ComputerGuessing;
                self.last_step = Instant::now();
                self.add_message(
                    "Secret code set! Computer is guessing...",
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Advance the computer by one guess once `delay` has passed since the last one
    pub fn tick(&mut self, now: Instant) {
        if self.phase == Phase::ComputerGuessing
            && now.saturating_duration_since(self.last_step) >= self.delay
        {
            self.last_step = now;
            self.computer_step();
        }
    }

    fn computer_step(&mut self) {
        let Round::Computer(round) = &mut self.round else {
            return;
        };

        match round.step() {
            Ok(turn) => {
                let turns = round.round().turns();
                self.history.push(HistoryEntry {
                    guess: turn.guess.clone(),
                    feedback: turn.feedback,
                    candidates: Some((turn.candidates_before, turn.candidates_after)),
                });

                if turn.state == SolverState::Won {
                    self.stats.computer_wins += 1;
                    self.stats.computer_guesses += turns;
                    self.phase = Phase::Won;
                    self.add_message(
                        &format!("🤖 Computer guessed the code: {}", turn.guess.names()),
                        MessageStyle::Success,
                    );
                    self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
                }
            }
            Err(e) => {
                self.phase = Phase::Won;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Remaining candidates while the computer is guessing
    #[must_use]
    pub fn candidates_remaining(&self) -> Option<usize> {
        match &self.round {
            Round::Computer(round) => Some(round.solver().candidate_count()),
            Round::Idle | Round::Player(_) => None,
        }
    }

    /// The secret, once it may be shown
    #[must_use]
    pub fn visible_secret(&self) -> Option<&Code> {
        match &self.round {
            Round::Computer(round) => Some(round.round().secret()),
            Round::Player(round) if self.phase == Phase::Won => Some(round.reveal()),
            Round::Player(_) | Round::Idle => None,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('n') => app.new_round(),
                KeyCode::Enter if app.phase == Phase::Won => app.new_round(),
                KeyCode::Tab => app.toggle_mode(),
                KeyCode::Backspace => app.undo_pick(),
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if let Some(index) = c.to_digit(10).and_then(|d| (d as usize).checked_sub(1)) {
                        app.pick_index(index);
                    }
                }
                KeyCode::Char(c) => app.pick_letter(c),
                _ => {}
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
