//! TUI application state and logic

use crate::adaptive::AdaptiveDifficulty;
use crate::core::DifficultyTier;
use crate::dictionary::DictionaryOracle;
use crate::generator::{GeneratorConfig, Puzzle, PuzzleOrigin, generate_puzzle_or_fallback};
use crate::scoring::{Outcome, RoundSummary, ScoringParams};
use crate::session::{GameSession, SessionConfig};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How often the clock is redrawn while waiting for keys
const TICK: Duration = Duration::from_millis(200);

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub oracle: &'a dyn DictionaryOracle,
    pub generator: GeneratorConfig,
    pub params: ScoringParams,
    pub adaptive: Option<AdaptiveDifficulty>,
    pub session: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub last_summary: Option<RoundSummary>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_cleared: usize,
    pub total_score: u64,
    pub best_score: u32,
}

impl Statistics {
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.total_score as f64 / self.rounds_played as f64
        }
    }
}

impl<'a> App<'a> {
    /// Start the app on `puzzle`; later rounds are generated from `generator`
    #[must_use]
    pub fn new(
        oracle: &'a dyn DictionaryOracle,
        generator: GeneratorConfig,
        params: ScoringParams,
        puzzle: Puzzle,
    ) -> Self {
        let config = SessionConfig::for_puzzle(&puzzle);
        let mut app = Self {
            oracle,
            generator,
            params,
            adaptive: Some(AdaptiveDifficulty::default()),
            session: GameSession::new(puzzle, params, config),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            last_summary: None,
            should_quit: false,
            input_mode: InputMode::Playing,
        };
        app.announce_round();
        app
    }

    /// Keep the difficulty fixed between rounds
    #[must_use]
    pub const fn without_adaptive(mut self) -> Self {
        self.adaptive = None;
        self
    }

    fn announce_round(&mut self) {
        let puzzle = self.session.puzzle();
        let text = format!(
            "{} {} round: find {} words",
            puzzle.difficulty,
            if puzzle.mode.is_daily() {
                "daily"
            } else {
                "regular"
            },
            puzzle.words.len()
        );
        let fallback = matches!(puzzle.origin, PuzzleOrigin::Fallback);
        let stepped_down = (!puzzle.mode.is_daily()
            && puzzle.difficulty != self.generator.difficulty)
            .then(|| format!("No {} puzzle found this time", self.generator.difficulty));
        self.add_message(&text, MessageStyle::Info);
        if let Some(note) = stepped_down {
            self.add_message(&note, MessageStyle::Info);
        }
        if fallback {
            self.add_message(
                "Couldn't build a fresh puzzle, playing the default one",
                MessageStyle::Error,
            );
        }
    }

    pub fn submit_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);
        if guess.is_empty() {
            return;
        }

        match self.session.submit(&guess) {
            Outcome::Correct { score } => {
                self.add_message(
                    &format!("✓ {} +{score}", guess.to_ascii_uppercase()),
                    MessageStyle::Success,
                );
                if self.session.is_complete() {
                    self.end_round();
                }
            }
            Outcome::AlreadyGuessed => self.add_message(
                &format!("{} already found", guess.to_ascii_uppercase()),
                MessageStyle::Info,
            ),
            Outcome::Invalid => self.add_message(
                &format!("✗ {} is not one of the words", guess.to_ascii_uppercase()),
                MessageStyle::Error,
            ),
        }
    }

    pub fn request_hint(&mut self) {
        match self.session.request_hint(&mut rand::rng()) {
            Ok(given) => {
                let text = format!("💡 {}", given.hint.text);
                self.add_message(&text, MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn shuffle(&mut self) {
        self.session.shuffle_letters(&mut rand::rng());
    }

    /// End the round once the clock runs out
    pub fn tick(&mut self) {
        if self.input_mode == InputMode::Playing && self.session.is_over() {
            self.end_round();
        }
    }

    /// Settle the current round and record it
    pub fn end_round(&mut self) {
        if self.input_mode == InputMode::RoundOver {
            return;
        }

        let summary = self.session.finish();
        self.stats.rounds_played += 1;
        if self.session.is_complete() {
            self.stats.rounds_cleared += 1;
        }
        self.stats.total_score += u64::from(summary.final_score);
        self.stats.best_score = self.stats.best_score.max(summary.final_score);
        self.last_summary = Some(summary);
        self.input_mode = InputMode::RoundOver;
        self.input_buffer.clear();

        info!(
            "Round over: {} words, final score {}",
            self.session.found().len(),
            summary.final_score
        );

        let headline = if self.session.is_complete() {
            "🎉 All words found!"
        } else {
            "⏰ Time's up!"
        };
        self.add_message(headline, MessageStyle::Success);
        self.add_message(
            &format!("Final score {} | 'n' for next round", summary.final_score),
            MessageStyle::Info,
        );
    }

    /// Difficulty of the next round
    ///
    /// Counted from the tier the generator is set to, which can be harder than
    /// the current puzzle when generation had to step down.
    #[must_use]
    pub fn next_difficulty(&self) -> DifficultyTier {
        let current = self.generator.difficulty;
        self.adaptive.as_ref().map_or(current, |adaptive| {
            self.session.performance().recommend(adaptive, current)
        })
    }

    pub fn new_round(&mut self) {
        let previous = self.generator.difficulty;
        let tier = self.next_difficulty();
        if tier != previous {
            self.generator = GeneratorConfig {
                difficulty: tier,
                target_count: tier.default_target_count(),
                ..self.generator
            };
        }

        let puzzle = generate_puzzle_or_fallback(&self.generator, self.oracle, &mut rand::rng());
        let config = SessionConfig::for_puzzle(&puzzle);
        self.session = GameSession::new(puzzle, self.params, config);
        self.input_buffer.clear();
        self.last_summary = None;
        self.messages.clear();
        self.input_mode = InputMode::Playing;

        if tier > previous {
            self.add_message(&format!("Stepping up to {tier}"), MessageStyle::Success);
        } else if tier < previous {
            self.add_message(&format!("Easing down to {tier}"), MessageStyle::Info);
        }
        self.announce_round();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_round(),
                _ => {}
            },
            InputMode::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter => self.submit_guess(),
                KeyCode::Tab | KeyCode::Char('?') => self.request_hint(),
                KeyCode::Char(' ' | '!') => self.shuffle(),
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < self.session.puzzle().letters.len() {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                _ => {}
            },
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
