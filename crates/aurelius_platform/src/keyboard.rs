//! On-screen keyboard visibility
//!
//! The platform reports the keyboard through window-insets notifications. A
//! [`KeyboardListener`] turns every IME notification into a [`Keyboard`] state and
//! hands it to a callback right away: there is no debouncing, and repeated
//! identical notifications are all delivered.

use aurelius_core::{InsetsEvent, InsetsKind};
use std::fmt;
use std::sync::Arc;

/// The one closed-keyboard value every listener hands out
static CLOSED: Keyboard = Keyboard::Closed;

/// On-screen keyboard state
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Keyboard {
    /// Shown, covering `height` logical pixels at the bottom of the window
    Open { height: f32 },
    Closed,
}

impl Keyboard {
    /// The shared closed state
    ///
    /// Every closed notification yields this same reference.
    pub fn closed() -> &'static Keyboard {
        &CLOSED
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Keyboard::Open { .. })
    }

    /// Covered height, 0 when closed
    pub fn height(&self) -> f32 {
        match self {
            Keyboard::Open { height } => *height,
            Keyboard::Closed => 0.0,
        }
    }
}

/// Called with the new state on every keyboard notification
pub type KeyboardCallback = Arc<dyn Fn(&Keyboard) + Send + Sync>;

/// Converts IME insets notifications into [`Keyboard`] states
pub struct KeyboardListener {
    /// Physical pixels per logical pixel
    density: f32,
    callback: KeyboardCallback,
    /// Latest open state
    open: Keyboard,
    is_open: bool,
}

impl KeyboardListener {
    /// Listener for a window with the given pixel `density`
    ///
    /// A density that is not a finite positive number is replaced by 1.
    pub fn new<F>(density: f32, callback: F) -> Self
    where
        F: Fn(&Keyboard) + Send + Sync + 'static,
    {
        Self {
            density: sanitize_density(density),
            callback: Arc::new(callback),
            open: Keyboard::Open { height: 0.0 },
            is_open: false,
        }
    }

    /// Update the density after the window moves to another display
    pub fn set_density(&mut self, density: f32) {
        self.density = sanitize_density(density);
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    /// State computed from the latest notification (closed before any)
    pub fn current(&self) -> &Keyboard {
        if self.is_open {
            &self.open
        } else {
            Keyboard::closed()
        }
    }

    /// Handle a window-insets notification
    ///
    /// Returns the new state for IME notifications after invoking the callback, and
    /// `None` for every other inset kind.
    pub fn on_apply_window_insets(&mut self, event: &InsetsEvent) -> Option<&Keyboard> {
        if event.kind != InsetsKind::Ime {
            return None;
        }

        self.is_open = event.is_visible;
        if event.is_visible {
            self.open = Keyboard::Open {
                height: event.bottom_inset / self.density,
            };
        }

        let keyboard = if self.is_open {
            &self.open
        } else {
            Keyboard::closed()
        };
        tracing::trace!("keyboard changed: {:?}", keyboard);
        (self.callback)(keyboard);
        Some(keyboard)
    }
}

impl fmt::Debug for KeyboardListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardListener")
            .field("density", &self.density)
            .field("current", self.current())
            .finish()
    }
}

fn sanitize_density(density: f32) -> f32 {
    if density.is_finite() && density > 0.0 {
        density
    } else {
        tracing::warn!("invalid display density {}, using 1.0", density);
        1.0
    }
}
