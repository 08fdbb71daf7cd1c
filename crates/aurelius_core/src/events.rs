//! Inbound input notifications
//!
//! The host toolkit translates its platform events into these plain values before
//! handing them to Aurelius state holders, so that state machines stay testable
//! without simulating real touch or window events.

use smallvec::SmallVec;

/// Window inset categories reported by the platform
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InsetsKind {
    /// On-screen keyboard (input method editor)
    Ime,
    StatusBars,
    NavigationBars,
}

/// A window-insets change notification
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InsetsEvent {
    pub kind: InsetsKind,
    /// Bottom inset in physical pixels
    pub bottom_inset: f32,
    /// Whether an element of `kind` is currently shown
    pub is_visible: bool,
}

impl InsetsEvent {
    pub const fn new(kind: InsetsKind, bottom_inset: f32, is_visible: bool) -> Self {
        Self {
            kind,
            bottom_inset,
            is_visible,
        }
    }

    /// Keyboard insets notification
    pub const fn ime(bottom_inset: f32, is_visible: bool) -> Self {
        Self::new(InsetsKind::Ime, bottom_inset, is_visible)
    }
}

/// One-dimensional drag gesture input
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    /// Pointer moved by `delta` logical pixels along the drag axis since the last event
    Delta(f32),
    /// Pointer lifted while moving at `velocity` logical pixels per second
    Release { velocity: f32 },
}

/// Window over which release velocity is estimated
const VELOCITY_WINDOW_MS: u64 = 100;

/// Estimates release velocity from timestamped pointer positions
///
/// Hosts that only report positions feed every move here and read
/// [`velocity`](Self::velocity) when the pointer lifts.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    /// (timestamp in ms, position) samples, oldest first
    samples: SmallVec<[(u64, f32); 8]>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pointer position at `timestamp_ms`
    pub fn add(&mut self, timestamp_ms: u64, position: f32) {
        let cutoff = timestamp_ms.saturating_sub(VELOCITY_WINDOW_MS);
        self.samples.retain(|(t, _)| *t >= cutoff);
        self.samples.push((timestamp_ms, position));
    }

    /// Velocity in units per second over the recent window (0 with fewer than two samples)
    pub fn velocity(&self) -> f32 {
        match (self.samples.first(), self.samples.last()) {
            (Some(&(t0, p0)), Some(&(t1, p1))) if t1 > t0 => {
                (p1 - p0) / ((t1 - t0) as f32 / 1000.0)
            }
            _ => 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }
}
