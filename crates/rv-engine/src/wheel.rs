//! Wheel of fortune selector
//!
//! A plain state object driven by an external tick loop:
//!
//! ```text
//!   reset(items)        spin()            tick() ... tick()
//! ───────────────▶ Idle ──────▶ Spinning ────────────────────▶ Resolved
//!                   ▲                      velocity ≤ threshold    │
//!                   └──────── reset(items) ◀───────────────────────┤
//!                              spin() ─────────────────────────────┘
//! ```
//!
//! Items sit on equal slices laid out clockwise from the top (90°). The
//! wheel turns by its cumulative rotation and a fixed pointer at 90° picks
//! the winner.

use serde::{Deserialize, Serialize};

use crate::config::WheelConfig;
use crate::error::{GenError, GenResult};
use crate::source::UniformSource;

/// Angle of the fixed pointer, in degrees
pub const POINTER_ANGLE: f64 = 90.0;

/// Wheel lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WheelPhase {
    Idle,
    Spinning,
    Resolved,
}

impl WheelPhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Spinning => "spinning",
            Self::Resolved => "resolved",
        }
    }
}

/// Result of a single tick
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Still turning
    Spinning { rotation: f64, velocity: f64 },
    /// Came to rest on `index`
    Resolved { index: usize, label: String },
}

impl TickOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
}

/// Angular width of one slice on an `n`-item wheel
pub fn slice_width(n: usize) -> f64 {
    360.0 / n.max(1) as f64
}

/// Start angle of slice `index` after turning by `rotation` degrees
pub fn slice_start(n: usize, rotation: f64, index: usize) -> f64 {
    POINTER_ANGLE - rotation - index as f64 * slice_width(n)
}

/// Pointer offset from the first slice's start, wrapped to `[0, 360]`.
///
/// Slice 0 starts at `POINTER_ANGLE - rotation`, so the offset is the
/// wrapped rotation itself. Non-finite rotations read as 0.
fn pointer_offset(rotation: f64) -> f64 {
    if rotation.is_finite() {
        rotation.rem_euclid(360.0)
    } else {
        0.0
    }
}

/// Winning slice, closed form: `floor((rotation mod 360) / width) mod n`
pub fn winning_index(n: usize, rotation: f64) -> usize {
    let n = n.max(1);
    let slots = pointer_offset(rotation) / slice_width(n);
    slots.floor() as usize % n
}

/// Winning slice, derived from the slice layout.
///
/// Walks the slices clockwise from the first one and returns the first
/// whose trailing edge lies past the pointer. Offsets are measured in
/// slice widths, so the edges fall on exact integers and every offset
/// lands in exactly one slice.
pub fn winning_index_geometric(n: usize, rotation: f64) -> usize {
    let n = n.max(1);
    let mut slots = pointer_offset(rotation) / slice_width(n);
    // A full turn lands back on the first slice.
    if slots >= n as f64 {
        slots -= n as f64;
    }

    // The last slice closes the circle.
    (0..n - 1)
        .find(|&i| slots - (i as f64) < 1.0)
        .unwrap_or(n - 1)
}

/// Per-session wheel state
#[derive(Debug, Clone)]
pub struct WheelState {
    config: WheelConfig,
    items: Vec<String>,
    /// Cumulative rotation in degrees, wrapped to `[0, 360)`
    rotation: f64,
    /// Degrees per tick
    velocity: f64,
    phase: WheelPhase,
    winner: Option<usize>,
    ticks: u64,
}

impl Default for WheelState {
    fn default() -> Self {
        Self::new(WheelConfig::default())
    }
}

impl WheelState {
    /// Empty idle wheel; `reset` must supply items before spinning
    pub fn new(config: WheelConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
            rotation: 0.0,
            velocity: 0.0,
            phase: WheelPhase::Idle,
            winner: None,
            ticks: 0,
        }
    }

    /// Idle wheel holding `items`
    pub fn with_items<I, T>(config: WheelConfig, items: I) -> GenResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut wheel = Self::new(config);
        wheel.reset(items)?;
        Ok(wheel)
    }

    /// Replace the items and return to `Idle` at rotation 0.
    ///
    /// An invalid config or fewer than `min_items` is rejected and leaves
    /// the wheel untouched. Items past `max_items` are dropped.
    pub fn reset<I, T>(&mut self, items: I) -> GenResult<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.config.validate()?;
        let mut items: Vec<String> = items.into_iter().map(Into::into).collect();
        if items.len() < self.config.min_items {
            return Err(GenError::InvalidWheelConfiguration {
                min: self.config.min_items,
                got: items.len(),
            });
        }
        if items.len() > self.config.max_items {
            log::debug!(
                "Dropping {} wheel items past the limit of {}",
                items.len() - self.config.max_items,
                self.config.max_items
            );
            items.truncate(self.config.max_items);
        }

        self.items = items;
        self.rotation = 0.0;
        self.velocity = 0.0;
        self.phase = WheelPhase::Idle;
        self.winner = None;
        self.ticks = 0;
        Ok(())
    }

    /// Start spinning with a velocity drawn from the configured range
    pub fn spin<S: UniformSource + ?Sized>(&mut self, source: &mut S) -> GenResult<f64> {
        if self.phase == WheelPhase::Spinning {
            return Err(self.invalid_state("spin"));
        }
        self.config.validate()?;
        if self.items.len() < self.config.min_items {
            return Err(GenError::InvalidWheelConfiguration {
                min: self.config.min_items,
                got: self.items.len(),
            });
        }

        self.velocity = source.float_between(self.config.min_velocity, self.config.max_velocity);
        self.phase = WheelPhase::Spinning;
        self.winner = None;
        self.ticks = 0;
        log::debug!(
            "Wheel spin: {} items, velocity {:.3}°/tick from {:.3}°",
            self.items.len(),
            self.velocity,
            self.rotation
        );
        Ok(self.velocity)
    }

    /// Advance one step: rotate, apply friction, stop once slow enough
    pub fn tick(&mut self) -> GenResult<TickOutcome> {
        if self.phase != WheelPhase::Spinning {
            return Err(self.invalid_state("tick"));
        }

        self.rotation = (self.rotation + self.velocity).rem_euclid(360.0);
        self.velocity *= self.config.friction;
        self.ticks += 1;

        if self.velocity > self.config.stop_threshold {
            log::trace!(
                "tick {}: rotation {:.3}, velocity {:.3}",
                self.ticks,
                self.rotation,
                self.velocity
            );
            return Ok(TickOutcome::Spinning {
                rotation: self.rotation,
                velocity: self.velocity,
            });
        }

        self.velocity = 0.0;
        let index = winning_index(self.items.len(), self.rotation);
        self.winner = Some(index);
        self.phase = WheelPhase::Resolved;
        log::info!(
            "Wheel stopped at {:.3}° after {} ticks: '{}'",
            self.rotation,
            self.ticks,
            self.items[index]
        );
        Ok(TickOutcome::Resolved {
            index,
            label: self.items[index].clone(),
        })
    }

    /// Tick until resolved or `max_ticks` elapse; returns the last outcome
    pub fn run_to_completion(&mut self, max_ticks: u64) -> GenResult<TickOutcome> {
        let mut outcome = self.tick()?;
        let mut remaining = max_ticks.saturating_sub(1);
        while !outcome.is_resolved() && remaining > 0 {
            outcome = self.tick()?;
            remaining -= 1;
        }
        Ok(outcome)
    }

    fn invalid_state(&self, action: &'static str) -> GenError {
        GenError::InvalidSpinState {
            action,
            phase: self.phase.name(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn phase(&self) -> WheelPhase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == WheelPhase::Spinning
    }

    /// Ticks since the last spin
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Index resolved by the last completed spin
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    pub fn winner_label(&self) -> Option<&str> {
        self.winner.map(|i| self.items[i].as_str())
    }

    /// Item currently under the pointer
    pub fn index_under_pointer(&self) -> Option<usize> {
        (!self.items.is_empty()).then(|| winning_index(self.items.len(), self.rotation))
    }

    /// Current start angle of slice `index`, for renderers
    pub fn slice_start_angle(&self, index: usize) -> f64 {
        slice_start(self.items.len(), self.rotation, index)
    }
}
