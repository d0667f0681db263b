use crate::clipboard::{copy_output, Clipboard};
use crate::config::Theme;
use crate::generator::{GenerationWorker, Generator};
use crate::models::{Expertise, Focus, Screen, Setting, Style};
use crate::session::PromptSession;
use crate::settings::{Catalog, SettingsState};
use crate::utils::strings;
use std::sync::Arc;
use std::time::{Duration, Instant};

const STATUS_TTL: Duration = Duration::from_secs(4);

pub const SHOW_WORD_COUNT: &str = "showWordCount";
pub const SHOW_HOTKEYS: &str = "showHotkeys";

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub at: Instant,
}

pub struct App {
    pub should_quit: bool,
    pub screen: Screen,
    pub focus: Focus,
    pub theme: Theme,

    pub catalog: Catalog,
    pub settings: SettingsState,
    pub settings_cursor: usize,

    pub session: PromptSession,
    pub status: Option<StatusMessage>,

    worker: GenerationWorker,
    clipboard: Option<Box<dyn Clipboard>>,
}

impl App {
    pub fn new(
        session: PromptSession,
        catalog: Catalog,
        theme: Theme,
        generator: Arc<dyn Generator + Send + Sync>,
        clipboard: Option<Box<dyn Clipboard>>,
    ) -> Self {
        let settings = catalog.initialize();
        Self {
            should_quit: false,
            screen: Screen::Compose,
            focus: Focus::Input,
            theme,
            catalog,
            settings,
            settings_cursor: 0,
            session,
            status: None,
            worker: GenerationWorker::new(generator),
            clipboard,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn show_word_count(&self) -> bool {
        self.settings.is_enabled(SHOW_WORD_COUNT)
    }

    pub fn show_hotkeys(&self) -> bool {
        self.settings.is_enabled(SHOW_HOTKEYS)
    }

    /// Called once per frame.
    pub fn tick(&mut self) {
        if self.worker.is_busy() {
            self.check_generation();
        }
        if let Some(status) = &self.status {
            if status.at.elapsed() >= STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub fn toggle_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Compose => Screen::Settings,
            Screen::Settings => Screen::Compose,
        };
    }

    pub fn next_focus(&mut self) {
        if self.screen == Screen::Compose {
            self.focus = self.focus.next();
        }
    }

    pub fn prev_focus(&mut self) {
        if self.screen == Screen::Compose {
            self.focus = self.focus.prev();
        }
    }

    pub fn on_key(&mut self, c: char) {
        match self.screen {
            Screen::Settings => {
                if c == ' ' {
                    self.toggle_selected_setting();
                }
            }
            Screen::Compose => match self.focus {
                Focus::Input => {
                    let mut text = self.session.input().to_string();
                    text.push(c);
                    self.edit_input(text);
                }
                Focus::Output if c == 'c' => self.copy(),
                _ => {}
            },
        }
    }

    pub fn on_enter(&mut self) {
        match self.screen {
            Screen::Settings => self.toggle_selected_setting(),
            Screen::Compose => match self.focus {
                Focus::Input => self.on_key('\n'),
                Focus::Output => self.copy(),
                Focus::Style | Focus::Expertise => {}
            },
        }
    }

    pub fn on_backspace(&mut self) {
        if self.screen != Screen::Compose || self.focus != Focus::Input {
            return;
        }
        let text = strings::pop_char(self.session.input()).to_string();
        self.edit_input(text);
    }

    pub fn on_up(&mut self) {
        self.step(-1);
    }

    pub fn on_down(&mut self) {
        self.step(1);
    }

    fn step(&mut self, delta: isize) {
        match self.screen {
            Screen::Settings => {
                self.settings_cursor = wrap_index(self.settings_cursor, delta, self.catalog.len());
            }
            Screen::Compose => match self.focus {
                Focus::Style => {
                    let idx = Style::ALL
                        .iter()
                        .position(|s| *s == self.session.style())
                        .unwrap_or(0);
                    let next = Style::ALL[wrap_index(idx, delta, Style::ALL.len())];
                    self.session.select_style(next);
                }
                Focus::Expertise => {
                    let idx = Expertise::ALL
                        .iter()
                        .position(|e| *e == self.session.expertise())
                        .unwrap_or(0);
                    let next = Expertise::ALL[wrap_index(idx, delta, Expertise::ALL.len())];
                    self.session.select_expertise(next);
                }
                Focus::Input | Focus::Output => {}
            },
        }
    }

    fn edit_input(&mut self, text: String) {
        if let Err(err) = self.session.set_input(text) {
            self.notify_error(err.to_string());
        }
    }

    pub fn generate(&mut self) {
        match self.session.begin_generate() {
            Ok(Some(request)) => {
                if let Err(err) = self.worker.spawn(request) {
                    if let Err(err) = self.session.finish_generate(Err(err)) {
                        self.notify_error(err.to_string());
                    }
                }
            }
            // blank input, the generate control is disabled
            Ok(None) => {}
            Err(err) => self.notify_error(err.to_string()),
        }
    }

    fn check_generation(&mut self) {
        let Some(result) = self.worker.poll() else {
            return;
        };
        match self.session.finish_generate(result) {
            Ok(()) => self.notify("Prompt generated"),
            Err(err) => self.notify_error(err.to_string()),
        }
    }

    pub fn copy(&mut self) {
        if self.session.output().is_empty() {
            return;
        }
        let Some(clipboard) = self.clipboard.as_deref_mut() else {
            tracing::warn!("copy requested but no clipboard is available");
            self.notify_error("Clipboard unavailable");
            return;
        };

        match copy_output(self.session.output(), clipboard) {
            Ok(true) => self.notify("Copied to clipboard"),
            Ok(false) => {}
            Err(err) => {
                tracing::warn!(error = %err, "clipboard write failed");
                self.notify_error(err.to_string());
            }
        }
    }

    /// Settings in the order the settings screen lists them.
    pub fn settings_in_display_order(&self) -> Vec<&Setting> {
        self.catalog.by_category().into_values().flatten().collect()
    }

    pub fn toggle_selected_setting(&mut self) {
        let Some(id) = self
            .settings_in_display_order()
            .get(self.settings_cursor)
            .map(|s| s.id.clone())
        else {
            return;
        };
        if let Err(err) = self.settings.toggle(&id) {
            self.notify_error(err.to_string());
        }
    }

    fn notify(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
            at: Instant::now(),
        });
    }

    fn notify_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: true,
            at: Instant::now(),
        });
    }
}

fn wrap_index(idx: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (idx as isize + delta).rem_euclid(len as isize) as usize
}
