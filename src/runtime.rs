use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{
    controller::FormController,
    form::{FormConfig, FormSession, Outcome},
    ui::{self, UiContext},
};

const HELP_TEXT: &str =
    "Tab/Shift+Tab move • type digits • Ctrl+R show/hide number • Enter pay • Ctrl+Q cancel";

#[derive(Debug, Clone)]
pub struct UiOptions {
    /// Cadence of animation ticks while no input arrives.
    pub tick_rate: Duration,
    pub show_help: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(80),
            show_help: true,
        }
    }
}

/// Entry point: takes over the terminal and runs the form against the
/// caller's controller until it is submitted or cancelled.
#[derive(Debug, Default)]
pub struct CheckoutForm {
    config: FormConfig,
    options: UiOptions,
}

impl CheckoutForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(self, controller: &mut dyn FormController) -> Result<Outcome> {
        let mut terminal = TerminalGuard::new()?;
        let mut session = FormSession::new(self.config);
        let help = self.options.show_help.then_some(HELP_TEXT);

        loop {
            session.sync(controller);
            terminal.draw(|frame| {
                let ctx = UiContext {
                    config: session.config(),
                    defs: session.defs(),
                    values: controller.values(),
                    validation: controller.validation(),
                    focused: controller.focused(),
                    amount: controller.amount(),
                    disclaimer: controller.disclaimer(),
                    reveal: session.reveal(),
                    banner: session.banner(),
                    help,
                };
                ui::draw(frame, ctx);
            })?;

            if event::poll(self.options.tick_rate).context("failed to poll terminal events")? {
                match event::read().context("failed to read terminal event")? {
                    Event::Key(key) => {
                        if let Some(outcome) = session.handle_key(&key, controller) {
                            return Ok(outcome);
                        }
                    }
                    Event::Resize(_, _) => {}
                    Event::Mouse(_) => {}
                    Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
                }
            } else {
                session.tick();
            }
        }
    }
}

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("failed to initialize terminal")?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

impl Deref for TerminalGuard {
    type Target = Terminal<CrosstermBackend<Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}
