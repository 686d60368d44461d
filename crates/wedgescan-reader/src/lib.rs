//! Keyboard-wedge frame reader: timing disambiguation, validation, and
//! reader lifecycle.
//!
//! A wedge scanner delivers its captured value as ordinary key events. The
//! only signal separating a scan from a human typing is inter-arrival
//! timing: scanner bursts arrive faster than the configured idle timeout,
//! human keystrokes do not. This crate turns that signal into discrete,
//! validated scan values:
//!
//! ```text
//! ┌────────────┐    ┌──────────────────┐    ┌───────────┐    ┌──────────┐
//! │ Key events │───►│ FrameAccumulator │───►│ Validator │───►│ ScanEvent│
//! │ (source)   │    │ (timing state    │    │ (pure)    │    │ channel  │
//! └────────────┘    │  machine)        │    └───────────┘    └──────────┘
//!                   └──────────────────┘
//! ```
//!
//! The accumulator is a synchronous state machine, independently testable
//! without timers. [`ScanReader::attach`] wraps it in a task that serves
//! key events and the idle-flush timer from a single `select!` loop, so all
//! reader state is mutated from one logical thread and a flush always
//! happens-before the next accumulation.
//!
//! # Example
//!
//! ```
//! use wedgescan_input::MockKeyboard;
//! use wedgescan_reader::{FrameConfig, ScanEvent, ScanReader};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (keyboard, handle) = MockKeyboard::new();
//!     let mut reader = ScanReader::attach(FrameConfig::default(), keyboard.into());
//!
//!     tokio::spawn(async move {
//!         handle.type_str("04ABCDEF").await.unwrap();
//!         handle.press_enter().await.unwrap();
//!     });
//!
//!     match reader.recv().await {
//!         Some(ScanEvent::Scan(result)) => assert_eq!(result.value, "04ABCDEF"),
//!         other => panic!("expected scan, got {:?}", other),
//!     }
//!
//!     reader.destroy();
//! }
//! ```

pub mod accumulator;
pub mod config;
pub mod manual;
pub mod reader;
pub mod validator;

pub use accumulator::{FrameAccumulator, KeyOutcome, ReaderPhase};
pub use config::{FrameConfig, FrameConfigBuilder};
pub use manual::submit_manual;
pub use reader::{ReaderHandle, ScanEvent, ScanReader};
pub use validator::validate_frame;
