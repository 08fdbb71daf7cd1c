//! Aurelius Platform Integration
//!
//! Adapters between the host window's notifications and Aurelius state.
//!
//! # Example
//!
//! ```rust
//! use aurelius_core::InsetsEvent;
//! use aurelius_platform::{Keyboard, KeyboardListener};
//!
//! let mut listener = KeyboardListener::new(3.0, |keyboard: &Keyboard| {
//!     println!("keyboard: {keyboard:?}");
//! });
//!
//! let keyboard = listener.on_apply_window_insets(&InsetsEvent::ime(900.0, true));
//! assert_eq!(keyboard, Some(&Keyboard::Open { height: 300.0 }));
//! ```

pub mod keyboard;

pub use keyboard::{Keyboard, KeyboardCallback, KeyboardListener};
