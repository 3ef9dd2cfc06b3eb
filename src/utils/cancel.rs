use std::cell::Cell;
use std::rc::Rc;

/// Shared flag tying an in-flight request to the lifetime of the component
/// that started it. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let token = CancellationToken::new();
        let task = token.clone();
        assert!(!task.is_cancelled());

        token.cancel();
        assert!(task.is_cancelled());
        assert!(token.is_cancelled());
    }
}
