//! Persisted marker settings and the single entry point that changes them.

use crate::constraint::ScreenMarkConstraint;
use eframe::egui::Vec2;
use serde::{Deserialize, Serialize};

/// Bumped whenever the stored layout changes incompatibly.
pub const CONFIG_VERSION: u32 = 1;

/// Smallest inset allowed on any side of the display area.
pub const SCREEN_MARK_CONSTRAINT_MIN: f32 = 2.0;

pub const SCREEN_MARK_SIZE_BOUND: ValueBound = ValueBound::new(0.1, 10.0);

/// Label size relative to the marker size.
pub const SCREEN_MARK_TEXT_REL_SIZE_BOUND: ValueBound = ValueBound::new(0.5, 2.0);

/// Inclusive range a setting must stay within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueBound {
    pub min: f32,
    pub max: f32,
}

impl ValueBound {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }

    pub fn range(&self) -> std::ops::RangeInclusive<f32> {
        self.min..=self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub version: u32,
    pub enabled: bool,
    pub show_screen_mark: bool,
    pub screen_mark_size_scale: f32,
    pub screen_mark_text_rel_size_scale: f32,
    /// Left, down, right, up insets of the marker display area.
    pub screen_mark_constraint: ScreenMarkConstraint,
    pub show_detail_window: bool,
    pub notify_toast: bool,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            enabled: true,
            show_screen_mark: true,
            screen_mark_size_scale: 1.0,
            screen_mark_text_rel_size_scale: 1.0,
            screen_mark_constraint: ScreenMarkConstraint::default(),
            show_detail_window: false,
            notify_toast: false,
        }
    }
}

impl MarkerConfig {
    /// Pulls every out-of-range value back to its nearest bound.
    pub fn check_value_validity(&mut self, screen_size: Vec2) {
        self.screen_mark_size_scale = SCREEN_MARK_SIZE_BOUND.clamp(self.screen_mark_size_scale);
        self.screen_mark_text_rel_size_scale =
            SCREEN_MARK_TEXT_REL_SIZE_BOUND.clamp(self.screen_mark_text_rel_size_scale);
        self.screen_mark_constraint = self
            .screen_mark_constraint
            .validated(screen_size, SCREEN_MARK_CONSTRAINT_MIN);
    }

    /// Copies `stored` over `self` if both share a version.
    ///
    /// Returns `false` and leaves `self` untouched otherwise.
    pub fn load(&mut self, stored: &MarkerConfig) -> bool {
        if self.version != stored.version {
            return false;
        }
        *self = *stored;
        true
    }
}

/// A configuration value as read at the start of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigSnapshot {
    pub revision: u64,
    pub config: MarkerConfig,
}

/// Owns the live configuration. Every change goes through [`ConfigStore::update`],
/// which validates it and bumps the revision.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config: MarkerConfig,
    revision: u64,
}

impl ConfigStore {
    pub fn new(config: MarkerConfig) -> Self {
        Self {
            config,
            revision: 0,
        }
    }

    pub fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            revision: self.revision,
            config: self.config,
        }
    }

    pub fn config(&self) -> &MarkerConfig {
        &self.config
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies `edit`, validates against `screen_size` and stores the result.
    ///
    /// Returns whether anything changed.
    pub fn update(&mut self, screen_size: Vec2, edit: impl FnOnce(&mut MarkerConfig)) -> bool {
        let mut next = self.config;
        edit(&mut next);
        next.check_value_validity(screen_size);

        if next == self.config {
            return false;
        }

        self.config = next;
        self.revision += 1;
        log::debug!("Marker config updated to revision {}", self.revision);
        true
    }
}
