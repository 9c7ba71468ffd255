/// Handles of timers that have been scheduled and may still fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTimers<H> {
    handles: Vec<H>,
}

impl<H> Default for PendingTimers<H> {
    fn default() -> Self {
        Self {
            handles: Vec::new(),
        }
    }
}

impl<H> PendingTimers<H> {
    pub fn push(&mut self, handle: H) {
        self.handles.push(handle);
    }

    /// Empties the list, handing back every handle for the caller to clear.
    pub fn drain(&mut self) -> Vec<H> {
        std::mem::take(&mut self.handles)
    }

    /// Makes `handle` the only pending timer and returns the ones it displaces.
    pub fn replace(&mut self, handle: H) -> Vec<H> {
        let displaced = self.drain();
        self.handles.push(handle);
        displaced
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_hands_back_everything() {
        let mut pending = PendingTimers::default();
        pending.push(1);
        pending.push(2);
        assert_eq!(pending.drain(), vec![1, 2]);
        assert!(pending.is_empty());
        assert!(pending.drain().is_empty());
    }

    #[test]
    fn test_retrigger_keeps_single_pending_timer() {
        let mut pending = PendingTimers::default();
        assert!(pending.replace(10).is_empty());
        // entering the code again while the first spin runs
        assert_eq!(pending.replace(11), vec![10]);
        assert_eq!(pending.replace(12), vec![11]);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending.drain(), vec![12]);
    }
}
