//! Particle regeneration task.
//!
//! A mounted [`ParticleLoop`] publishes a fresh [`ParticleField`] every
//! [`REGENERATION_INTERVAL`] through a watch channel. The first field is
//! available as soon as `mount` returns. Dropping the loop aborts the task,
//! which closes the channel for every subscriber.

use super::EffectGate;
use super::particles::{ParticleField, ParticleGenerator};
use crate::config::FallingStyle;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

pub const REGENERATION_INTERVAL: std::time::Duration = std::time::Duration::from_secs(15);

pub struct ParticleLoop {
    style: FallingStyle,
    field: watch::Receiver<Arc<ParticleField>>,
    task: JoinHandle<()>,
}

impl ParticleLoop {
    /// Start the loop when the falling-elements capability is active.
    ///
    /// Must be called inside a tokio runtime.
    pub fn mount(gate: &EffectGate) -> Option<Self> {
        let style = gate.particle_style()?;
        Some(Self::start(ParticleGenerator::new(style)))
    }

    /// Start a loop around an existing generator.
    pub fn start(mut generator: ParticleGenerator) -> Self {
        let style = generator.style();
        let (tx, field) = watch::channel(Arc::new(generator.regenerate()));
        let task = tokio::spawn(async move {
            let mut ticks = interval_at(
                Instant::now() + REGENERATION_INTERVAL,
                REGENERATION_INTERVAL,
            );
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                let next = generator.regenerate();
                tracing::trace!(
                    style = style.as_str(),
                    generation = next.generation,
                    "particle field regenerated"
                );
                if tx.send(Arc::new(next)).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(style = style.as_str(), "particle loop started");
        Self { style, field, task }
    }

    /// Apply a possibly changed config. The loop keeps running when the
    /// style is unchanged; otherwise it is torn down and, if particles are
    /// still active, replaced.
    pub fn remount(self, gate: &EffectGate) -> Option<Self> {
        let style = gate.particle_style()?;
        if style == self.style {
            return Some(self);
        }
        drop(self);
        Self::mount(gate)
    }

    pub fn style(&self) -> FallingStyle {
        self.style
    }

    pub fn current(&self) -> Arc<ParticleField> {
        self.field.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<ParticleField>> {
        self.field.clone()
    }
}

impl Drop for ParticleLoop {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!(style = self.style.as_str(), "particle loop stopped");
    }
}
