//! TUI application state and logic

use crate::catalog::{resolve, suggest, SUGGESTION_LIMIT};
use crate::core::{Entity, Verdict};
use crate::game::{GameError, GameSession, HintGrant, HintLevel, PickerType, Status};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// One scored guess, newest first in the table
pub struct GuessRow<'a> {
    pub entity: &'a Entity,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a guess into the input box
    Typing,
    /// Hint menu open
    HintMenu,
    /// Session ended; waiting for new game or quit
    GameOver,
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

/// Application state
pub struct App<'a> {
    pool: &'a [Entity],
    pub session: GameSession<'a>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub suggestions: Vec<&'a Entity>,
    pub selected: usize,
    pub rows: Vec<GuessRow<'a>>,
    pub messages: Vec<Message>,
    pub image_hint: Option<String>,
    pub synopsis_hint: Option<String>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create the app with a fresh session
    ///
    /// # Errors
    /// Returns `EmptyPool` if the pool holds no candidates.
    pub fn new(
        pool: &'a [Entity],
        picker: PickerType,
        budget: Option<u32>,
    ) -> Result<Self, GameError> {
        let session = GameSession::new(pool, picker, budget)?;

        Ok(Self {
            pool,
            session,
            input_mode: InputMode::Typing,
            input_buffer: String::new(),
            suggestions: Vec::new(),
            selected: 0,
            rows: Vec::new(),
            messages: vec![
                Message {
                    text: "歡迎來到 Anidle！輸入動漫名稱開始猜測。".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "ESC 開啟提示選單，TAB 採用建議，Enter 送出。".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            image_hint: None,
            synopsis_hint: None,
            should_quit: false,
        })
    }

    /// Recompute prefix suggestions for the current input
    pub fn update_suggestions(&mut self) {
        let guessed: Vec<u32> = self.session.history().iter().map(|e| e.id()).collect();
        self.suggestions = suggest(self.pool, &self.input_buffer, &guessed, SUGGESTION_LIMIT);
        self.selected = 0;
    }

    pub fn select_next_suggestion(&mut self) {
        if !self.suggestions.is_empty() {
            self.selected = (self.selected + 1) % self.suggestions.len();
        }
    }

    pub fn select_prev_suggestion(&mut self) {
        if !self.suggestions.is_empty() {
            self.selected = self.selected.checked_sub(1).unwrap_or(self.suggestions.len() - 1);
        }
    }

    /// Copy the highlighted suggestion into the input box
    pub fn take_selected_suggestion(&mut self) {
        if let Some(entity) = self.suggestions.get(self.selected) {
            self.input_buffer = entity.title().to_string();
            self.suggestions.clear();
        }
    }

    /// Resolve and submit the typed guess
    pub fn submit_input(&mut self) {
        let input = self.input_buffer.trim().to_string();
        if input.is_empty() {
            return;
        }

        let Some(entity) = resolve(self.pool, &input) else {
            self.add_message(&format!("找不到動漫: {input}"), MessageStyle::Error);
            return;
        };

        match self.session.submit(entity) {
            Ok(verdict) => {
                self.rows.insert(0, GuessRow { entity, verdict });
                self.input_buffer.clear();
                self.suggestions.clear();

                match self.session.status() {
                    Status::Won => {
                        self.input_mode = InputMode::GameOver;
                        self.add_message(
                            &format!("🎉 恭喜答對！總次數 {}。", self.session.score()),
                            MessageStyle::Success,
                        );
                        self.add_message("按 'n' 開新的一局，'q' 離開。", MessageStyle::Info);
                    }
                    Status::Lost => {
                        self.input_mode = InputMode::GameOver;
                        self.add_message(
                            &format!("💀 次數用盡，正確答案是 {}。", self.session.target().title()),
                            MessageStyle::Error,
                        );
                        self.add_message("按 'n' 再試一次，'q' 離開。", MessageStyle::Info);
                    }
                    Status::InProgress => {}
                }
            }
            Err(GameError::DuplicateGuess) => {
                self.add_message(&format!("已經猜過 {} 了！", entity.title()), MessageStyle::Error);
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Purchase a hint and surface the granted information
    pub fn buy_hint(&mut self, level: HintLevel) {
        match self.session.buy_hint(level) {
            Ok(HintGrant::Tag { tag, .. }) => {
                self.add_message(&format!("💡 目標類型包含 [{tag}]"), MessageStyle::Success);
            }
            Ok(HintGrant::Image { url }) => {
                self.image_hint = Some(url);
                self.add_message("💡 封面已解鎖，見提示面板。", MessageStyle::Success);
            }
            Ok(HintGrant::Synopsis { text }) => {
                self.synopsis_hint = Some(text);
                self.add_message("💡 劇情簡介已解鎖，見提示面板。", MessageStyle::Success);
            }
            Err(GameError::HintUnavailable) => {
                self.add_message("這個等級目前沒有可用的提示。", MessageStyle::Error);
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Restart the session and clear all per-game view state
    pub fn new_game(&mut self) {
        self.session.restart();
        self.rows.clear();
        self.input_buffer.clear();
        self.suggestions.clear();
        self.selected = 0;
        self.image_hint = None;
        self.synopsis_hint = None;
        self.input_mode = InputMode::Typing;
        self.add_message("🔄 新的一局開始了！", MessageStyle::Info);
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
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                match app.input_mode {
                    InputMode::Typing => match key.code {
                        KeyCode::Esc => {
                            app.input_mode = InputMode::HintMenu;
                        }
                        KeyCode::Tab => {
                            app.take_selected_suggestion();
                        }
                        KeyCode::Down => {
                            app.select_next_suggestion();
                        }
                        KeyCode::Up => {
                            app.select_prev_suggestion();
                        }
                        KeyCode::Enter => {
                            app.submit_input();
                        }
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                            app.update_suggestions();
                        }
                        KeyCode::Char(c) => {
                            app.input_buffer.push(c);
                            app.update_suggestions();
                        }
                        _ => {}
                    },
                    InputMode::HintMenu => match key.code {
                        KeyCode::Char('1') => app.buy_hint(HintLevel::Tag),
                        KeyCode::Char('2') => app.buy_hint(HintLevel::Image),
                        KeyCode::Char('3') => app.buy_hint(HintLevel::Synopsis),
                        KeyCode::Esc | KeyCode::Char('q') => {
                            app.input_mode = InputMode::Typing;
                        }
                        _ => {}
                    },
                    InputMode::GameOver => match key.code {
                        KeyCode::Char('q') => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('n') => {
                            app.new_game();
                        }
                        _ => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
