/// Which step ended a body's update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Body was dead or unknown; nothing ran.
    Skipped,
    /// Body touched a killer and died.
    Killed,
    HardRope,
    SoftRope,
    Collision,
    /// No constraint fired; bounce decay or gravity ran.
    Integrated,
}

/// Event counts gathered over one tick (feeds the perf snapshot).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepCounters {
    pub bodies_updated: u32,
    pub hard_rope_pulls: u32,
    pub rope_pulls: u32,
    pub collisions_resolved: u32,
    pub bounces: u32,
    pub kills: u32,
    pub clamps: u32,
}

impl StepCounters {
    pub fn record(&mut self, outcome: UpdateOutcome) {
        match outcome {
            UpdateOutcome::Skipped => return,
            UpdateOutcome::HardRope => self.hard_rope_pulls += 1,
            UpdateOutcome::SoftRope => self.rope_pulls += 1,
            UpdateOutcome::Collision => self.collisions_resolved += 1,
            UpdateOutcome::Killed | UpdateOutcome::Integrated => {}
        }
        self.bodies_updated += 1;
    }
}
