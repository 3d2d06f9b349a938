//! Terminal setup and the event loop.
//!
//! [`Program`] wires the [`App`] to a real terminal: it forwards crossterm
//! events and periodic-caller ticks into `App::update`, executes the
//! returned [`Effect`]s, reconciles the caller task, and redraws on a frame
//! interval. All state mutation happens sequentially on this one loop, so a
//! manual press and a pending timer tick can never interleave mid-update.

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, EventStream, MouseButton, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use crossterm::{cursor, execute};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io::{self, stdout, Stdout, Write};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::app::{key_to_msg, App, Effect, Msg};
use crate::caller::PeriodicCaller;
use crate::event::Event;
use crate::speech::Announcer;
use crate::ui::{self, ScreenLayout};

/// Errors from terminal setup, rendering, or teardown.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Runtime configuration.
pub struct ProgramOptions {
    /// Target frames per second (clamped to 1..=120).
    pub fps: u32,
    /// Terminal window title.
    pub title: Option<String>,
    /// Append debug output to this file.
    pub log_file: Option<std::path::PathBuf>,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            title: Some("housie".into()),
            log_file: None,
        }
    }
}

/// The program runtime. Owns the terminal, the model, the announcer, and
/// the periodic caller for the duration of the run.
pub struct Program {
    app: App,
    announcer: Announcer,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    caller: PeriodicCaller,
    options: ProgramOptions,
    needs_redraw: bool,
    should_quit: bool,
    log_file: Option<std::fs::File>,
}

impl Program {
    pub fn new(app: App, announcer: Announcer, options: ProgramOptions) -> Result<Self, RuntimeError> {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();

        let log_file = match &options.log_file {
            Some(path) => Some(
                std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)?,
            ),
            None => None,
        };

        let terminal = init_terminal(&options)?;

        Ok(Self {
            app,
            announcer,
            terminal,
            msg_tx,
            msg_rx,
            caller: PeriodicCaller::new(),
            options,
            needs_redraw: true,
            should_quit: false,
            log_file,
        })
    }

    /// Run until quit. Returns the final model so the caller can report on
    /// the finished game.
    pub async fn run(mut self) -> Result<App, RuntimeError> {
        // Input runs as its own task; the EventStream is created inside it
        // so the crossterm reader is only touched from one place.
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();
        let input_task = tokio::spawn(async move {
            let mut stream = EventStream::new();
            while let Some(result) = stream.next().await {
                let Ok(raw) = result else { continue };
                if let Some(event) = Event::from_crossterm(raw) {
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            }
        });

        self.render()?;

        let fps = self.options.fps.clamp(1, 120);
        let mut frame_interval =
            tokio::time::interval(Duration::from_secs_f64(1.0 / fps as f64));
        frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;

                _ = tokio::signal::ctrl_c() => {
                    self.debug_log("received ctrl+c");
                    break;
                }

                Some(event) = event_rx.recv() => {
                    self.process_event(event);
                    if self.should_quit {
                        break;
                    }
                }

                Some(msg) = self.msg_rx.recv() => {
                    self.process_message(msg);
                    if self.should_quit {
                        break;
                    }
                }

                _ = frame_interval.tick() => {
                    if self.needs_redraw {
                        self.render()?;
                        self.needs_redraw = false;
                    }
                }
            }
        }

        self.debug_log("shutting down");
        input_task.abort();
        self.caller.shutdown();
        self.announcer.stop();
        restore_terminal()?;

        Ok(self.app)
    }

    fn process_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                if let Some(msg) = key_to_msg(key) {
                    self.process_message(msg);
                }
            }
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    if let Ok(size) = self.terminal.size() {
                        let layout =
                            ScreenLayout::new(Rect::new(0, 0, size.width, size.height));
                        if let Some(press) = layout.hit_test(mouse.column, mouse.row) {
                            self.process_message(Msg::Press(press));
                        }
                    }
                }
            }
            Event::Resize(..) => {
                self.needs_redraw = true;
            }
        }
    }

    fn process_message(&mut self, msg: Msg) {
        let effect = self.app.update(msg);
        self.apply_effect(effect);
        self.caller
            .reconcile(self.app.game().auto_calling(), &self.msg_tx);
        self.needs_redraw = true;
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Speak(number) => {
                self.debug_log(&format!("announcing {number}"));
                self.announcer.speak(number);
            }
            Effect::SilenceSpeech => {
                self.announcer.stop();
            }
            Effect::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn render(&mut self) -> Result<(), RuntimeError> {
        self.terminal.draw(|frame| ui::view(&self.app, frame))?;
        Ok(())
    }

    /// Write a debug message to the log file, if configured. A TUI cannot
    /// log to stdout.
    fn debug_log(&mut self, msg: &str) {
        if let Some(ref mut f) = self.log_file {
            let _ = writeln!(f, "{msg}");
        }
    }
}

fn init_terminal(
    options: &ProgramOptions,
) -> Result<Terminal<CrosstermBackend<Stdout>>, RuntimeError> {
    // Restore the terminal on panic (installed once so hooks don't stack).
    {
        use std::sync::Once;
        static HOOK_INSTALLED: Once = Once::new();
        HOOK_INSTALLED.call_once(|| {
            let original_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                let _ = restore_terminal();
                original_hook(info);
            }));
        });
    }

    enable_raw_mode()?;
    let mut writer = stdout();
    execute!(writer, EnterAlternateScreen)?;
    execute!(writer, EnableMouseCapture)?;
    if let Some(ref title) = options.title {
        execute!(writer, SetTitle(title))?;
    }
    execute!(writer, cursor::Hide)?;

    let backend = CrosstermBackend::new(writer);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal() -> Result<(), io::Error> {
    // Best-effort cleanup: keep going even if individual steps fail.
    let raw = disable_raw_mode();
    let mut writer = stdout();
    execute!(writer, DisableMouseCapture).ok();
    execute!(writer, cursor::Show).ok();
    execute!(writer, LeaveAlternateScreen).ok();
    raw
}
