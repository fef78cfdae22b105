use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tokio::runtime::{Builder, Runtime};
use tracing::error;

use crate::session::{SessionCollaborator, UserSession};
use crate::storage::FileStore;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{HomeState, LoginState, draw_home, draw_login};
use super::widgets::{StatusBarContext, draw_status_bar};

/// The two screens; which one shows depends only on whether a session exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Sign in or create an account.
    Login,
    /// Signed-in landing screen.
    Home,
}

/// Top-level application state.
pub struct App {
    runtime: Runtime,
    session: UserSession<FileStore>,
    login: LoginState,
    home: HomeState,
    status_error: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates an `App`, restoring any saved session from `store`.
    pub fn new(store: FileStore) -> Result<Self, AppError> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let session = runtime.block_on(UserSession::restore(store));
        Ok(Self {
            runtime,
            session,
            login: LoginState::new(),
            home: HomeState,
            status_error: None,
            should_quit: false,
        })
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen() {
            Screen::Login => draw_login(&self.login, frame, main_area),
            Screen::Home => draw_home(self.session.current_session(), frame, main_area),
        }

        let ctx = StatusBarContext::new(
            self.session.current_session(),
            self.status_error.as_deref(),
        );
        draw_status_bar(&ctx, frame, status_area);
    }

    /// Handles a key event: Ctrl+C first, then the current screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let action = match self.screen() {
            Screen::Login => self.login.handle_key(key),
            Screen::Home => self.home.handle_key(key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::Submit => {
                let result = self
                    .runtime
                    .block_on(self.login.controller().submit(&mut self.session));
                self.record(result, "saving session failed");
                // The form belongs to the login screen and is discarded with it.
                if self.session.is_authenticated() {
                    self.login = LoginState::new();
                }
            }
            Action::Logout => {
                let result = self.runtime.block_on(self.session.clear());
                self.record(result, "clearing session failed");
            }
        }
    }

    fn record<E: std::fmt::Display>(&mut self, result: Result<(), E>, context: &str) {
        match result {
            Ok(()) => self.status_error = None,
            Err(e) => {
                error!(error = %e, "{context}");
                self.status_error = Some(e.to_string());
            }
        }
    }

    /// Returns the screen for the current session state.
    pub fn screen(&self) -> Screen {
        if self.session.is_authenticated() {
            Screen::Home
        } else {
            Screen::Login
        }
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the session backing the app.
    pub fn session(&self) -> &UserSession<FileStore> {
        &self.session
    }

    /// Returns the login screen state.
    pub fn login(&self) -> &LoginState {
        &self.login
    }

    /// Returns the error from the last failed storage operation, if any.
    pub fn status_error(&self) -> Option<&str> {
        self.status_error.as_deref()
    }
}
