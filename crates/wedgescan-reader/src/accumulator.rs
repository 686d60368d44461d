//! Frame accumulation and timing disambiguation.
//!
//! This module provides the stateful core of the wedge reader: a state
//! machine that accumulates printable characters and decides frame
//! boundaries from two independent signals — an explicit terminator key
//! (Enter/Tab) and the idle timeout elapsing.
//!
//! The accumulator is deliberately synchronous. It never arms a timer
//! itself; it reports the deadline at which an idle flush is due
//! ([`FrameAccumulator::idle_deadline`]) and lets the owning task schedule
//! it. This keeps the disambiguation rules independently testable with
//! explicit clock values, the same way the byte-stream frame parsers in
//! this codebase keep their state machines separate from socket I/O.
//!
//! # State Machine
//!
//! ```text
//!            char                      char, gap < timeout
//! ┌──────┐ ───────► ┌──────────────┐ ─────────────────────┐
//! │ Idle │          │ Accumulating │ ◄────────────────────┘
//! └──────┘ ◄─────── └──────────────┘
//!    ▲      flush      │        │
//!    │                 │        │ char, gap >= timeout
//!    │   terminator or │        │ (buffer silently reset,
//!    │   idle deadline │        │  new frame starts)
//!    └─────────────────┘        ▼
//!                        ┌──────────────┐
//!                        │ Accumulating │ (fresh frame)
//!                        └──────────────┘
//!
//! Transitions:
//! - Idle → Accumulating: printable character arrives
//! - Accumulating → Accumulating: character within the idle window appends;
//!   character past the window resets the buffer first (the stale fragment
//!   is dropped, not reported — rejections never carry values, so the
//!   fragment cannot leak anywhere)
//! - Accumulating → Idle: terminator key flushes immediately, or the idle
//!   deadline passes and `flush_idle` drains the buffer
//! ```
//!
//! A given accumulated buffer is flushed exactly once: the owning task
//! serves terminator events and the idle timer from one `select!` loop, and
//! every flush clears `last_char_at`, which disarms the deadline.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use tokio::time::Instant;
//! use wedgescan_input::RawKeyEvent;
//! use wedgescan_reader::{FrameAccumulator, FrameConfig, KeyOutcome};
//!
//! let mut acc = FrameAccumulator::new(FrameConfig::default());
//! let t0 = Instant::now();
//!
//! acc.handle_key(&RawKeyEvent::char('1'), t0);
//! acc.handle_key(&RawKeyEvent::char('2'), t0 + Duration::from_millis(5));
//! acc.handle_key(&RawKeyEvent::char('3'), t0 + Duration::from_millis(10));
//! acc.handle_key(&RawKeyEvent::char('4'), t0 + Duration::from_millis(15));
//!
//! match acc.handle_key(&RawKeyEvent::enter(), t0 + Duration::from_millis(20)) {
//!     KeyOutcome::Flushed(frame) => assert_eq!(frame, "1234"),
//!     other => panic!("expected flush, got {:?}", other),
//! }
//! ```

use crate::config::FrameConfig;
use tokio::time::Instant;
use wedgescan_core::constants::MAX_BUFFER_CHARS;
use wedgescan_input::{KeyInput, RawKeyEvent};

/// Accumulation phase of the reader state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderPhase {
    /// No frame in progress; waiting for the first character.
    Idle,

    /// Characters buffered; the idle deadline is armed.
    Accumulating,
}

/// Result of feeding one key event into the accumulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The event was not scan data (modifier chord, editable target,
    /// non-printable key, or terminator on an empty buffer).
    Ignored,

    /// The character was appended; the idle deadline moved forward.
    Buffered,

    /// A terminator flushed the buffer. The frame is raw: not yet
    /// validated or normalized.
    Flushed(String),
}

/// Stateful frame accumulator for one reader instance.
///
/// Owns the buffer exclusively; never shared across readers. All mutation
/// happens through [`handle_key`](Self::handle_key) and
/// [`flush_idle`](Self::flush_idle), called from the single task that owns
/// this instance.
#[derive(Debug)]
pub struct FrameAccumulator {
    /// Framing parameters, fixed for the accumulator's lifetime.
    config: FrameConfig,

    /// Characters accumulated toward the current frame.
    buffer: String,

    /// Arrival time of the most recent buffered character. `None` whenever
    /// no idle flush is pending.
    last_char_at: Option<Instant>,
}

impl FrameAccumulator {
    /// Create an empty accumulator with the given configuration.
    #[must_use]
    pub fn new(config: FrameConfig) -> Self {
        Self {
            config,
            buffer: String::new(),
            last_char_at: None,
        }
    }

    /// Current phase of the state machine.
    #[must_use]
    pub fn phase(&self) -> ReaderPhase {
        if self.last_char_at.is_some() {
            ReaderPhase::Accumulating
        } else {
            ReaderPhase::Idle
        }
    }

    /// Number of characters currently buffered.
    #[must_use]
    pub fn buffered_chars(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Returns `true` if no characters are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Deadline at which the pending idle flush is due, if one is armed.
    #[must_use]
    pub fn idle_deadline(&self) -> Option<Instant> {
        self.last_char_at
            .map(|at| at + self.config.idle_timeout())
    }

    /// Feed one key event, observed at `now`.
    ///
    /// See the module documentation for the transition rules. `now` must
    /// not go backwards between calls; the owning task reads it once per
    /// event.
    pub fn handle_key(&mut self, event: &RawKeyEvent, now: Instant) -> KeyOutcome {
        if event.modifiers.any() {
            return KeyOutcome::Ignored;
        }

        if event.editable_target && !self.config.capture_editable_targets() {
            return KeyOutcome::Ignored;
        }

        match &event.input {
            KeyInput::Char(c) => {
                if let Some(last) = self.last_char_at
                    && now.duration_since(last) >= self.config.idle_timeout()
                {
                    // Stale fragment from a slower (human) cadence. Start a
                    // fresh frame; the fragment is dropped without an event.
                    self.buffer.clear();
                }

                if self.buffer.chars().count() >= MAX_BUFFER_CHARS {
                    // Runaway source without frame boundaries; reset rather
                    // than grow without bound.
                    self.buffer.clear();
                }

                self.buffer.push(*c);
                self.last_char_at = Some(now);
                KeyOutcome::Buffered
            }
            KeyInput::Enter | KeyInput::Tab => {
                if self.buffer.is_empty() {
                    self.last_char_at = None;
                    KeyOutcome::Ignored
                } else {
                    KeyOutcome::Flushed(self.take_frame())
                }
            }
            KeyInput::Other(_) => KeyOutcome::Ignored,
            _ => KeyOutcome::Ignored,
        }
    }

    /// Flush the buffer if the idle deadline has passed.
    ///
    /// Called by the owning task when its idle timer fires. Returns `None`
    /// if no flush is due (deadline disarmed by an intervening terminator,
    /// or not yet reached).
    pub fn flush_idle(&mut self, now: Instant) -> Option<String> {
        let deadline = self.idle_deadline()?;
        if now >= deadline && !self.buffer.is_empty() {
            Some(self.take_frame())
        } else {
            None
        }
    }

    /// Discard any buffered characters and disarm the idle deadline.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.last_char_at = None;
    }

    /// Drain the current frame, applying the auto-clear policy.
    fn take_frame(&mut self) -> String {
        self.last_char_at = None;
        if self.config.auto_clear_on_emit() {
            std::mem::take(&mut self.buffer)
        } else {
            // Caller opted out of clearing: the emitted frame is a snapshot
            // and subsequent characters keep appending.
            self.buffer.clone()
        }
    }
}
