// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multiplicative zoom stepping.
//!
//! Zoom steps multiply or divide by a factor rather than adding, so each click
//! changes the scale by the same ratio at every level. Every result is clamped
//! into `[min, max]`.

/// Zoom limits, step factor and reset value for one view.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomConfig {
    /// Smallest allowed zoom.
    pub min: f64,
    /// Largest allowed zoom.
    pub max: f64,
    /// Factor applied by one step; values at or below `1.0` disable stepping.
    pub step: f64,
    /// Value restored by a reset.
    pub default: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min: 0.25,
            max: 4.0,
            step: 1.25,
            default: 1.0,
        }
    }
}

impl ZoomConfig {
    fn bounds(&self) -> (f64, f64) {
        if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        }
    }

    /// Clamps `value` into the configured range.
    ///
    /// `NaN` clamps to the default value.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        let (min, max) = self.bounds();
        if value.is_nan() {
            return self.default.clamp(min, max);
        }
        value.clamp(min, max)
    }

    /// One step in from `current`.
    #[must_use]
    pub fn zoom_in(&self, current: f64) -> f64 {
        if self.step <= 1.0 {
            return self.clamp(current);
        }
        self.clamp(current * self.step)
    }

    /// One step out from `current`.
    #[must_use]
    pub fn zoom_out(&self, current: f64) -> f64 {
        if self.step <= 1.0 {
            return self.clamp(current);
        }
        self.clamp(current / self.step)
    }

    /// The clamped reset value.
    #[must_use]
    pub fn reset(&self) -> f64 {
        self.clamp(self.default)
    }

    /// Returns `true` if a step in would change `current`.
    #[must_use]
    pub fn can_zoom_in(&self, current: f64) -> bool {
        self.zoom_in(current) > self.clamp(current)
    }

    /// Returns `true` if a step out would change `current`.
    #[must_use]
    pub fn can_zoom_out(&self, current: f64) -> bool {
        self.zoom_out(current) < self.clamp(current)
    }
}

/// A zoom value paired with its configuration, for owners that store zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomState {
    config: ZoomConfig,
    value: f64,
}

impl ZoomState {
    /// Creates a state at the configured default.
    #[must_use]
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            value: config.reset(),
            config,
        }
    }

    /// Current zoom, always within the configured limits.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Sets the zoom, clamping into range. Returns `true` if it changed.
    pub fn set(&mut self, value: f64) -> bool {
        let clamped = self.config.clamp(value);
        if (self.value - clamped).abs() < f64::EPSILON {
            return false;
        }
        self.value = clamped;
        true
    }

    /// Steps in. Returns `true` if the zoom changed.
    pub fn zoom_in(&mut self) -> bool {
        self.set(self.config.zoom_in(self.value))
    }

    /// Steps out. Returns `true` if the zoom changed.
    pub fn zoom_out(&mut self) -> bool {
        self.set(self.config.zoom_out(self.value))
    }

    /// Restores the default. Returns `true` if the zoom changed.
    pub fn reset(&mut self) -> bool {
        self.set(self.config.default)
    }

    /// Replaces the limits; the current zoom is clamped into them.
    ///
    /// The provided range is normalized so that `min <= max`.
    pub fn set_limits(&mut self, min: f64, max: f64) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.config.min = min;
        self.config.max = max;
        self.value = self.config.clamp(self.value);
    }
}
