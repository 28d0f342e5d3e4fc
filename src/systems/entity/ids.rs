use super::BodyId;

/// Source of body ids. Ids must never repeat within one world.
pub trait IdGenerator {
    fn next_id(&mut self) -> BodyId;

    /// Called when bodies with pre-existing ids are loaded, so later ids
    /// do not collide with them.
    fn observe(&mut self, _id: BodyId) {}
}

/// Counter starting at 0, advancing by one per body. Never rewinds.
#[derive(Clone, Debug, Default)]
pub struct MonotonicIds {
    next: BodyId,
}

impl MonotonicIds {
    pub fn new() -> Self {
        Self { next: 0 }
    }
}

impl IdGenerator for MonotonicIds {
    fn next_id(&mut self) -> BodyId {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }

    fn observe(&mut self, id: BodyId) {
        if id >= self.next {
            self.next = id.saturating_add(1);
        }
    }
}
