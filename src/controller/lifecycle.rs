use std::cell::Cell;
use std::rc::Rc;

/// Shared flag owned by a mounted component. Async work holds a clone and checks it
/// before touching component state; the component releases it on unmount.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn release(&self) {
        self.0.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_is_seen_by_clones() {
        let owner = Liveness::new();
        let task = owner.clone();
        assert!(task.is_alive());
        owner.release();
        assert!(!task.is_alive());
    }
}
