// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Non-blocking transitions driven by the host frame clock.
//!
//! Nothing here owns a timer. The host calls `advance` with the elapsed frame time and reads
//! the current value. Retargeting a running transition supersedes it: the new run starts from
//! the value currently on screen, so rapid changes never queue or stack.
//!
//! - [`ColorTransition`]: fixed-duration tween between two colors.
//! - [`PressPulse`]: the selection pulse, a short shrink followed by a spring back to rest.

use core::time::Duration;

use crate::color::Color;

/// Duration of a background color change.
pub const COLOR_TRANSITION: Duration = Duration::from_millis(200);

/// A color tween that always exposes its target synchronously.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorTransition {
    from: Color,
    to: Color,
    duration: Duration,
    elapsed: Duration,
}

impl ColorTransition {
    /// A settled transition showing `color`, using [`COLOR_TRANSITION`].
    pub fn new(color: Color) -> Self {
        Self::with_duration(color, COLOR_TRANSITION)
    }

    /// A settled transition showing `color` with a custom duration.
    pub fn with_duration(color: Color, duration: Duration) -> Self {
        Self {
            from: color,
            to: color,
            duration,
            elapsed: duration,
        }
    }

    /// Move toward `target`. Returns `true` if a new run started.
    ///
    /// A target equal to the current one is ignored; any other target restarts the run from
    /// the current on-screen value.
    pub fn retarget(&mut self, target: Color) -> bool {
        if target == self.to {
            return false;
        }
        self.from = self.value();
        self.to = target;
        self.elapsed = Duration::ZERO;
        true
    }

    /// Jump to `color` without animating.
    pub fn snap(&mut self, color: Color) {
        self.from = color;
        self.to = color;
        self.elapsed = self.duration;
    }

    /// Advance the run by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    /// The value to draw this frame.
    pub fn value(&self) -> Color {
        if self.duration.is_zero() || self.elapsed >= self.duration {
            return self.to;
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from.lerp(self.to, t)
    }

    /// The value the run ends on.
    pub fn target(&self) -> Color {
        self.to
    }

    /// True while the displayed value differs from the target.
    pub fn is_running(&self) -> bool {
        self.elapsed < self.duration && self.from != self.to
    }
}

/// Scale the pulse shrinks to.
pub const PULSE_SCALE: f64 = 0.95;
/// Duration of the shrink phase.
pub const PULSE_SHRINK: Duration = Duration::from_millis(50);

// Low stiffness with a low-bouncy damping ratio of 0.75, unit mass.
const SPRING_STIFFNESS: f64 = 200.0;
// 2 * ratio * sqrt(stiffness)
const SPRING_DAMPING: f64 = 2.0 * 0.75 * 14.142_135_623_730_951;
const SPRING_STEP: f64 = 0.004;
const REST_DISTANCE: f64 = 1.0e-3;
const REST_VELOCITY: f64 = 1.0e-2;

#[derive(Copy, Clone, Debug, PartialEq)]
enum PulsePhase {
    Idle,
    Shrink { start: f64, elapsed: Duration },
    Spring { value: f64, velocity: f64 },
}

/// The selection pulse: shrink to [`PULSE_SCALE`] over [`PULSE_SHRINK`], then spring to `1.0`.
///
/// [`trigger`](Self::trigger) cancels any running pulse and restarts from the current scale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PressPulse {
    phase: PulsePhase,
    triggered: u32,
}

impl Default for PressPulse {
    fn default() -> Self {
        Self::new()
    }
}

impl PressPulse {
    /// An idle pulse at scale `1.0`.
    pub const fn new() -> Self {
        Self {
            phase: PulsePhase::Idle,
            triggered: 0,
        }
    }

    /// Start (or restart) the pulse.
    pub fn trigger(&mut self) {
        let start = self.scale();
        self.phase = PulsePhase::Shrink {
            start,
            elapsed: Duration::ZERO,
        };
        self.triggered = self.triggered.saturating_add(1);
    }

    /// Number of times the pulse has been triggered.
    pub fn trigger_count(&self) -> u32 {
        self.triggered
    }

    /// True while the pulse is animating.
    pub fn is_running(&self) -> bool {
        !matches!(self.phase, PulsePhase::Idle)
    }

    /// Current scale factor.
    pub fn scale(&self) -> f64 {
        match self.phase {
            PulsePhase::Idle => 1.0,
            PulsePhase::Shrink { start, elapsed } => {
                let t = elapsed.as_secs_f64() / PULSE_SHRINK.as_secs_f64();
                start + (PULSE_SCALE - start) * t.min(1.0)
            }
            PulsePhase::Spring { value, .. } => value,
        }
    }

    /// Advance the pulse by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        let mut remaining = dt.as_secs_f64();
        if let PulsePhase::Shrink { start, elapsed } = self.phase {
            let left = PULSE_SHRINK.saturating_sub(elapsed);
            if dt < left {
                self.phase = PulsePhase::Shrink {
                    start,
                    elapsed: elapsed + dt,
                };
                return;
            }
            remaining -= left.as_secs_f64();
            self.phase = PulsePhase::Spring {
                value: PULSE_SCALE,
                velocity: 0.0,
            };
        }
        if let PulsePhase::Spring {
            mut value,
            mut velocity,
        } = self.phase
        {
            // Stop stepping once at rest; the remaining time is dropped.
            let mut settled = false;
            while remaining > 0.0 && !settled {
                let h = remaining.min(SPRING_STEP);
                let accel = -SPRING_STIFFNESS * (value - 1.0) - SPRING_DAMPING * velocity;
                velocity += accel * h;
                value += velocity * h;
                remaining -= h;
                settled = (value - 1.0).abs() < REST_DISTANCE && velocity.abs() < REST_VELOCITY;
            }
            self.phase = if settled {
                PulsePhase::Idle
            } else {
                PulsePhase::Spring { value, velocity }
            };
        }
    }
}
