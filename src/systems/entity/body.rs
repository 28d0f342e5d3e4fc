use crate::domain::BodyOptions;
use crate::systems::vector::Vec2;

pub type BodyId = u32;

/// Circular body simulated by the sandbox
#[derive(Clone, Debug)]
pub struct Entity {
    // === Identity ===
    pub id: BodyId,
    /// Dead bodies stay in storage but take no part in physics or queries.
    pub alive: bool,
    /// Update steps processed.
    pub ticks: u32,

    // === Shape & behavior ===
    pub pos: Vec2,
    pub options: BodyOptions,

    /// Ids of bodies roped to this one. Weak: entries may point at dead
    /// bodies until the next prune.
    pub connected: Vec<BodyId>,

    // === Motion state ===
    /// Where the current unconstrained fall began; `None` mid-bounce.
    pub fall_start: Option<Vec2>,
    /// Downward speed bonus accumulated by gravity.
    pub fall_momentum: f32,
    /// Upward rebound speed.
    pub bounce_velocity: f32,
}

impl Entity {
    pub fn new(id: BodyId, x: f32, y: f32, options: BodyOptions) -> Self {
        let pos = Vec2::new(x, y);
        Self {
            id,
            alive: true,
            ticks: 0,
            pos,
            options,
            connected: Vec::new(),
            fall_start: Some(pos),
            fall_momentum: 0.0,
            bounce_velocity: 0.0,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn set_position(&mut self, pos: Vec2) {
        self.pos.set_position(pos);
    }

    /// Shift the body by `delta`.
    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.pos = self.pos + delta;
    }

    pub fn radius(&self) -> f32 {
        self.options.radius
    }

    pub fn set_radius(&mut self, radius: f32) -> &mut Self {
        self.options.radius = radius;
        self
    }

    pub fn color(&self) -> &str {
        &self.options.color
    }

    pub fn set_color(&mut self, color: &str) -> &mut Self {
        self.options.color = color.to_string();
        self
    }

    /// Point used for every rope and collision distance: the position offset
    /// by half the radius on both axes.
    ///
    /// NOTE: this is not the drawn circle's center (the renderer draws at
    /// `pos`). Kept as-is, the gameplay is tuned around it.
    #[inline]
    pub fn middle(&self) -> Vec2 {
        let half = self.options.radius / 2.0;
        self.pos.add((half, half))
    }

    /// Circles overlap when the middles are closer than the mean radius.
    pub fn collides(&self, other: &Entity) -> bool {
        self.middle().distance(other.middle()) < (self.radius() + other.radius()) / 2.0
    }

    pub fn is_connected_to(&self, id: BodyId) -> bool {
        self.connected.contains(&id)
    }

    /// Reduce fall momentum, never below zero.
    #[inline]
    pub fn decay_momentum(&mut self, amount: f32) {
        self.fall_momentum = (self.fall_momentum - amount).max(0.0);
    }
}
