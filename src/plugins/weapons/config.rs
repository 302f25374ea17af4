//! Weapon configuration.
//!
//! A weapon needs three parameters before it may fire: interval, speed and direction.
//! They are collected by [`FiringConfigBuilder`] and checked once in `build()`, so a
//! [`FiringConfig`] always holds a complete set and the per-frame path never re-checks.

use std::time::Duration;

use bevy::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FiringConfigError {
    #[error("{0} isn't defined")]
    Missing(&'static str),
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
}

/// Finalized firing parameters.
///
/// Only obtainable through [`FiringConfigBuilder::build`]; the setters re-check finiteness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiringConfig {
    /// Minimum wall-clock time between two shots.
    fire_interval: Duration,
    /// Launch speed in pixels per second.
    fire_speed: f32,
    /// Launch direction in degrees, counter-clockwise from +X.
    fire_direction: f32,
}

fn finite(name: &'static str, v: f32) -> Result<f32, FiringConfigError> {
    if v.is_finite() { Ok(v) } else { Err(FiringConfigError::NotFinite(name)) }
}

impl FiringConfig {
    pub fn builder() -> FiringConfigBuilder {
        FiringConfigBuilder::default()
    }

    #[inline]
    pub fn fire_interval(&self) -> Duration {
        self.fire_interval
    }

    #[inline]
    pub fn fire_speed(&self) -> f32 {
        self.fire_speed
    }

    #[inline]
    pub fn fire_direction(&self) -> f32 {
        self.fire_direction
    }

    pub fn set_fire_interval(&mut self, interval: Duration) {
        self.fire_interval = interval;
    }

    /// Rejected values leave the config untouched.
    pub fn set_fire_speed(&mut self, px_per_sec: f32) -> Result<(), FiringConfigError> {
        self.fire_speed = finite("fire_speed", px_per_sec)?;
        Ok(())
    }

    pub fn set_fire_direction(&mut self, degrees: f32) -> Result<(), FiringConfigError> {
        self.fire_direction = finite("fire_direction", degrees)?;
        Ok(())
    }

    /// `(1, 0)` scaled to `fire_speed`, then rotated by `fire_direction` degrees.
    pub fn launch_velocity(&self) -> Vec2 {
        Vec2::from_angle(self.fire_direction.to_radians()).rotate(Vec2::X * self.fire_speed)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FiringConfigBuilder {
    fire_interval: Option<Duration>,
    fire_speed: Option<f32>,
    fire_direction: Option<f32>,
}

impl FiringConfigBuilder {
    pub fn fire_interval(mut self, interval: Duration) -> Self {
        self.fire_interval = Some(interval);
        self
    }

    pub fn fire_interval_ms(self, millis: u64) -> Self {
        self.fire_interval(Duration::from_millis(millis))
    }

    pub fn fire_speed(mut self, px_per_sec: f32) -> Self {
        self.fire_speed = Some(px_per_sec);
        self
    }

    pub fn fire_direction(mut self, degrees: f32) -> Self {
        self.fire_direction = Some(degrees);
        self
    }

    pub fn build(self) -> Result<FiringConfig, FiringConfigError> {
        let fire_interval = self
            .fire_interval
            .ok_or(FiringConfigError::Missing("fire_interval"))?;
        let fire_speed = self.fire_speed.ok_or(FiringConfigError::Missing("fire_speed"))?;
        let fire_direction = self
            .fire_direction
            .ok_or(FiringConfigError::Missing("fire_direction"))?;

        Ok(FiringConfig {
            fire_interval,
            fire_speed: finite("fire_speed", fire_speed)?,
            fire_direction: finite("fire_direction", fire_direction)?,
        })
    }
}
