//! The event loop.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use ratatui::layout::Size;
use terminal_flow_art::{ArtLibrary, Direction};
use terminal_flow_core::{AnimationState, ArtGrid, ColorDepth};
use terminal_flow_render::{ScreenBuffer, compose};

/// Where the loop is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Running,
    /// The terminal changed size; the next frame is a full repaint.
    Resized,
    Terminating,
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PreviousFile,
    NextFile,
    CyclePalette,
    CycleMode,
    Quit,
}

impl Action {
    /// Map a key press to an action.
    pub fn from_key(key: KeyEvent) -> Option<Action> {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => {
                Some(Action::Quit)
            }
            (_, KeyCode::Left) => Some(Action::PreviousFile),
            (_, KeyCode::Right) => Some(Action::NextFile),
            (_, KeyCode::Char('c') | KeyCode::Char('C')) => Some(Action::CyclePalette),
            (_, KeyCode::Char('m') | KeyCode::Char('M')) => Some(Action::CycleMode),
            _ => None,
        }
    }
}

/// The application: all mutable state of a run, owned by the loop.
#[derive(Debug)]
pub struct App {
    /// Mode, palette, speed and the animation clock.
    state: AnimationState,
    /// Art files and which one is showing.
    library: ArtLibrary,
    /// The art currently showing.
    grid: ArtGrid,
    /// What is on the terminal right now.
    screen: ScreenBuffer,
    /// Colors the terminal can show.
    depth: ColorDepth,
    run_state: RunState,
    /// Start of the previous tick, for wall-clock deltas.
    last_tick: Instant,
    /// When the showing file was last changed, for cycling.
    last_file_change: Instant,
    /// Set from signal handlers.
    shutdown: Arc<AtomicBool>,
}

impl App {
    /// Construct a new instance of [`App`] showing `grid`.
    pub fn new(
        state: AnimationState,
        library: ArtLibrary,
        grid: ArtGrid,
        depth: ColorDepth,
        shutdown: Arc<AtomicBool>,
    ) -> Self {
        let now = Instant::now();
        Self {
            state,
            library,
            grid,
            screen: ScreenBuffer::new(),
            depth,
            run_state: RunState::Running,
            last_tick: now,
            last_file_change: now,
            shutdown,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        terminal.hide_cursor()?;
        let now = Instant::now();
        self.last_tick = now;
        self.last_file_change = now;
        tracing::info!(
            file = %self.library.current_path().display(),
            mode = %self.state.mode,
            palette = %self.state.palette,
            fps = %self.state.fps(),
            depth = %self.depth,
            "animation started"
        );

        while self.run_state != RunState::Terminating {
            let frame_start = Instant::now();
            self.tick(&mut terminal, frame_start)?;

            // No catch-up after an overrun.
            if let Some(rest) = self.state.frame_interval().checked_sub(frame_start.elapsed()) {
                thread::sleep(rest);
            }
        }

        tracing::info!("animation stopped");
        Ok(())
    }

    /// One pass of the loop: input, file cycling, clock, then output.
    fn tick(&mut self, terminal: &mut DefaultTerminal, now: Instant) -> color_eyre::Result<()> {
        if self.check_shutdown() {
            return Ok(());
        }

        self.handle_crossterm_events(now)?;
        if self.run_state == RunState::Terminating {
            return Ok(());
        }

        self.check_file_cycle(now);
        self.advance_clock(now);

        let viewport = terminal.size()?;
        self.render(terminal.backend_mut(), viewport)?;
        Ok(())
    }

    /// Start terminating once a signal has raised the shutdown flag.
    fn check_shutdown(&mut self) -> bool {
        if self.shutdown.load(Ordering::Relaxed) {
            tracing::info!("termination signal received");
            self.quit();
        }
        self.run_state == RunState::Terminating
    }

    /// Drain every pending event without blocking.
    fn handle_crossterm_events(&mut self, now: Instant) -> color_eyre::Result<()> {
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            self.handle_event(&event, now);
        }
        Ok(())
    }

    /// Update state for one terminal event.
    fn handle_event(&mut self, event: &Event, now: Instant) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = Action::from_key(*key) {
                    self.apply(action, now);
                }
            }
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
                if self.run_state == RunState::Running {
                    self.run_state = RunState::Resized;
                }
            }
            _ => {}
        }
    }

    fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::PreviousFile => self.change_file(Direction::Previous, now),
            Action::NextFile => self.change_file(Direction::Next, now),
            Action::CyclePalette => {
                self.state.cycle_palette();
                tracing::debug!(palette = %self.state.palette, "palette changed");
            }
            Action::CycleMode => {
                self.state.cycle_mode();
                tracing::debug!(mode = %self.state.mode, "mode changed");
            }
            Action::Quit => self.quit(),
        }
    }

    /// Show the neighbouring file and restart the clock and cycle timer.
    fn change_file(&mut self, direction: Direction, now: Instant) {
        match self.library.step(direction) {
            Ok(grid) => {
                self.grid = grid;
                self.state.reset_clock();
                tracing::debug!(file = %self.library.current_path().display(), "file changed");
            }
            // Keep showing the current art and its animation.
            Err(err) => tracing::warn!(%err, "no readable art file to switch to"),
        }
        // A failed switch is retried after a full interval, not every tick.
        self.last_file_change = now;
    }

    /// Move to the next file once the cycle interval has passed.
    fn check_file_cycle(&mut self, now: Instant) {
        let Some(interval) = self.state.cycle_interval() else {
            return;
        };
        if self.library.len() > 1 && now.duration_since(self.last_file_change) >= interval {
            self.change_file(Direction::Next, now);
        }
    }

    /// Advance the animation clock by the real time since the last tick.
    fn advance_clock(&mut self, now: Instant) {
        self.state.advance(now.saturating_duration_since(self.last_tick));
        self.last_tick = now;
    }

    /// Compose the current frame and write the changed cells to `out`.
    fn render<W: Write>(&mut self, out: &mut W, viewport: Size) -> io::Result<usize> {
        if self.run_state == RunState::Resized {
            self.screen.invalidate();
            self.run_state = RunState::Running;
        }
        let frame = compose(&self.grid, &self.state, self.depth);
        self.screen.present(out, &frame, viewport)
    }

    fn quit(&mut self) {
        self.run_state = RunState::Terminating;
    }
}
