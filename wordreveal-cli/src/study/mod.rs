//! Interactive study screen
//!
//! [`StudyScreen`] holds the session and all input state and turns terminal
//! events into engine operations. It never touches the terminal itself:
//! [`run`] owns the terminal, feeds events in and draws frames out.

pub mod terminal;
pub mod view;

use crate::config::InputConfig;
use crate::input::{KeyBinding, Swipe, SwipeTracker};
use anyhow::{Context, Result};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use view::{Chrome, Frame};
use wordreveal_core::{
    elapsed_ms, format_elapsed, now_millis, progress_percent, remaining_units, HoldRepeat,
    Release, Session, Settings, Store,
};

/// Longest wait for input before the loop checks its timers again
const IDLE_POLL: Duration = Duration::from_millis(500);

/// On-screen buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Back,
    Next,
}

/// Something the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Reveal this many steps
    Advance(usize),
    /// Hide this many steps
    Retract(usize),
    Reset,
    Shuffle,
    ToggleHighlight(String),
    Quit,
}

/// State of the study screen between events
pub struct StudyScreen<'a, S: Store> {
    store: &'a S,
    session: Session,
    settings: Settings,
    next_key: KeyBinding,
    prev_key: KeyBinding,
    back_hold: HoldRepeat,
    next_hold: HoldRepeat,
    held: Option<Button>,
    swipe: SwipeTracker,
    /// Chunk under the pointer when the body was pressed
    pressed_chunk: Option<usize>,
    frame: Frame,
    shown_second: Option<u64>,
    dirty: bool,
    /// Session changed since the last auto-save
    unsaved: bool,
    quit: bool,
}

impl<'a, S: Store> StudyScreen<'a, S> {
    /// Create the screen; fails when a stored key name cannot be bound
    pub fn new(store: &'a S, session: Session, settings: Settings, input: &InputConfig) -> Result<Self> {
        let next_key = KeyBinding::parse(&settings.key_next).context("Bad key for next")?;
        let prev_key = KeyBinding::parse(&settings.key_prev).context("Bad key for previous")?;
        Ok(Self {
            store,
            session,
            settings,
            next_key,
            prev_key,
            back_hold: input.hold_repeat(),
            next_hold: input.hold_repeat(),
            held: None,
            swipe: SwipeTracker::new(input.swipe_min_columns, input.swipe_max_rows),
            pressed_chunk: None,
            frame: Frame::default(),
            shown_second: None,
            dirty: true,
            unsaved: false,
            quit: false,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Which button is currently pressed
    pub fn held_button(&self) -> Option<Button> {
        self.held
    }

    /// Apply an action
    ///
    /// With auto-save on, a changed session is written later by
    /// [`save_if_idle`](Self::save_if_idle), never on the step itself.
    pub fn apply(&mut self, action: Action) {
        let step = self.settings.words_per_step;
        let next = match action {
            Action::Advance(steps) => wordreveal_core::advance(&self.session, steps * step),
            Action::Retract(steps) => wordreveal_core::retract(&self.session, steps * step),
            Action::Reset => wordreveal_core::reset(&self.session),
            Action::Shuffle => wordreveal_core::shuffle(&self.session),
            Action::ToggleHighlight(id) => wordreveal_core::toggle_highlight(&self.session, &id),
            Action::Quit => {
                self.cancel_holds();
                self.quit = true;
                return;
            }
        };

        if next == self.session {
            return;
        }
        self.session = next;
        self.dirty = true;
        self.unsaved = self.settings.auto_save;
    }

    /// Whether an auto-save is waiting
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Auto-save unless a button is still held
    ///
    /// Called when no input arrived within the poll timeout.
    pub fn save_if_idle(&mut self) {
        if self.held.is_none() {
            self.save();
        }
    }

    /// Write any waiting auto-save; a failed write is logged and dropped
    pub fn save(&mut self) {
        if !self.unsaved {
            return;
        }
        self.unsaved = false;
        if let Err(e) = self.store.save_session(&self.session) {
            log::warn!("Failed to save session: {e}");
        }
    }

    /// Map a key press to an action
    pub fn key_action(&self, key: &KeyEvent) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }
        // Bindings win over the fixed keys
        if self.next_key.matches(key) {
            return Some(Action::Advance(1));
        }
        if self.prev_key.matches(key) {
            return Some(Action::Retract(1));
        }
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Reset),
            KeyCode::Char('s') => Some(Action::Shuffle),
            _ => None,
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) {
        if let Some(action) = self.key_action(key) {
            self.apply(action);
        }
    }

    /// Handle a mouse event at `now`
    pub fn handle_mouse(&mut self, mouse: &MouseEvent, now: Instant) {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.frame.back_button.contains(column, row) {
                    self.press(Button::Back, now);
                } else if self.frame.next_button.contains(column, row) {
                    self.press(Button::Next, now);
                } else if self.frame.in_body(row) {
                    self.swipe.begin(column, row);
                    self.pressed_chunk = self.frame.chunk_at(column, row);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(button) = self.held {
                    if !self.button_rect(button).contains(column, row) {
                        // Leaving the button drops the press
                        self.cancel_holds();
                    }
                } else {
                    match self.swipe.update(column, row) {
                        Some(Swipe::Left) => self.apply(Action::Advance(1)),
                        Some(Swipe::Right) => self.apply(Action::Retract(1)),
                        None => {}
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(button) = self.held.take() {
                    if self.hold_mut(button).release() == Release::Tap {
                        self.step(button, 1);
                    }
                } else if self.swipe.is_tracking() {
                    let swiped = self.swipe.end();
                    let pressed = self.pressed_chunk.take();
                    if !swiped && self.settings.highlight_mode {
                        self.click_chunk(pressed, self.frame.chunk_at(column, row));
                    }
                }
            }
            _ => {}
        }
    }

    fn click_chunk(&mut self, pressed: Option<usize>, released: Option<usize>) {
        let Some(index) = pressed.filter(|&index| Some(index) == released) else {
            return;
        };
        if let Some(chunk) = self.session.chunks().get(index) {
            if !chunk.is_blank() {
                let id = chunk.id.clone();
                self.apply(Action::ToggleHighlight(id));
            }
        }
    }

    fn press(&mut self, button: Button, now: Instant) {
        self.cancel_holds();
        self.held = Some(button);
        self.hold_mut(button).press(now);
    }

    fn button_rect(&self, button: Button) -> view::Rect {
        match button {
            Button::Back => self.frame.back_button,
            Button::Next => self.frame.next_button,
        }
    }

    fn hold_mut(&mut self, button: Button) -> &mut HoldRepeat {
        match button {
            Button::Back => &mut self.back_hold,
            Button::Next => &mut self.next_hold,
        }
    }

    fn step(&mut self, button: Button, steps: usize) {
        match button {
            Button::Back => self.apply(Action::Retract(steps)),
            Button::Next => self.apply(Action::Advance(steps)),
        }
    }

    /// Drop any button press without stepping
    pub fn cancel_holds(&mut self) {
        self.back_hold.cancel();
        self.next_hold.cancel();
        self.held = None;
    }

    /// Advance timers: repeated steps of a held button and the elapsed clock
    pub fn tick(&mut self, now: Instant) {
        if let Some(button) = self.held {
            let due = self.hold_mut(button).poll(now) as usize;
            if due > 0 {
                self.step(button, due);
            }
        }

        if self.session.start_time().is_some() && !self.session.is_complete() {
            let second = elapsed_ms(&self.session, now_millis()) / 1000;
            if self.shown_second != Some(second) {
                self.shown_second = Some(second);
                self.dirty = true;
            }
        }
    }

    /// How long the event loop may wait for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let hold_deadline = self.held.and_then(|button| match button {
            Button::Back => self.back_hold.deadline(),
            Button::Next => self.next_hold.deadline(),
        });
        match hold_deadline {
            Some(deadline) => deadline.saturating_duration_since(now).min(IDLE_POLL),
            None => IDLE_POLL,
        }
    }

    /// Lay the screen out for a terminal of `width` x `height`
    pub fn layout(&mut self, width: u16, height: u16) {
        self.frame = Frame::compute(&self.session, &self.notes(), width, height);
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Instruction card shown until the first reveal
    fn notes(&self) -> Vec<String> {
        if self.session.start_time().is_some() || self.session.current_index() > 0 {
            return Vec::new();
        }
        vec![
            format!(
                "Press {} or click {} to reveal, {} or {} to hide.",
                self.next_key.name(),
                view::NEXT_LABEL,
                self.prev_key.name(),
                view::BACK_LABEL
            ),
            "Hold a button to keep stepping. Swipe left to reveal, right to hide.".to_string(),
        ]
    }

    fn chrome(&self) -> Chrome {
        let mut hints = format!(
            "{}/{} step ({} {}) | r reset | s shuffle | q quit",
            self.next_key.name(),
            self.prev_key.name(),
            self.settings.words_per_step,
            self.settings.reveal_mode.unit_label().to_lowercase()
        );
        if self.settings.highlight_mode {
            hints.push_str(" | click to highlight");
        }
        Chrome {
            percent: progress_percent(&self.session),
            elapsed: format_elapsed(elapsed_ms(&self.session, now_millis())),
            mode: self.session.mode(),
            remaining: remaining_units(&self.session),
            streak: self.session.streak(),
            complete: self.session.is_complete(),
            theme: self.settings.theme,
            hints,
        }
    }

    /// Lay out and draw the current state
    pub fn draw<W: Write>(&mut self, out: &mut W, width: u16, height: u16) -> Result<()> {
        self.layout(width, height);
        view::draw(out, &self.frame, &self.chrome())?;
        self.dirty = false;
        Ok(())
    }

    /// Force a redraw, e.g. after a resize
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }
}

/// Run the study screen until the user quits; returns the final session
pub fn run<S: Store>(
    store: &S,
    session: Session,
    settings: Settings,
    input: &InputConfig,
) -> Result<Session> {
    let mut screen = StudyScreen::new(store, session, settings, input)?;

    terminal::install_panic_hook();
    let guard = terminal::TerminalGuard::enter()?;
    log::info!("Study screen opened");

    let result = event_loop(&mut screen);
    screen.cancel_holds();
    screen.save();
    guard.restore()?;
    result?;

    log::info!("Study screen closed");
    Ok(screen.into_session())
}

fn event_loop<S: Store>(screen: &mut StudyScreen<'_, S>) -> Result<()> {
    let mut out = io::stdout();
    while !screen.should_quit() {
        if screen.needs_redraw() {
            let (width, height) = crossterm::terminal::size().context("Failed to read terminal size")?;
            screen.draw(&mut out, width, height)?;
        }

        if event::poll(screen.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) => screen.handle_key(&key),
                Event::Mouse(mouse) => screen.handle_mouse(&mouse, Instant::now()),
                Event::Resize(..) => screen.invalidate(),
                Event::FocusLost => screen.cancel_holds(),
                _ => {}
            }
        } else {
            screen.save_if_idle();
        }
        screen.tick(Instant::now());
    }
    Ok(())
}
