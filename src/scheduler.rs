// "Call me on the next frame" abstraction. In the browser this is
// requestAnimationFrame; ManualScheduler lets frames be driven by hand.

use crate::error::Result;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

pub trait FrameScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    pending: Option<FrameHandle>,
    requested: usize,
    cancelled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    // Hands out the pending request as if the display just refreshed
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    pub fn requested(&self) -> usize {
        self.requested
    }

    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle> {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        self.requested += 1;
        Ok(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_only_matches_the_pending_handle() {
        let mut scheduler = ManualScheduler::new();
        let first = scheduler.request_frame().unwrap();
        let second = scheduler.request_frame().unwrap();
        assert_ne!(first, second);

        scheduler.cancel_frame(first);
        assert_eq!(scheduler.pending(), Some(second));
        scheduler.cancel_frame(second);
        assert!(!scheduler.has_pending());
        assert_eq!(scheduler.cancelled(), 1);
    }

    #[test]
    fn fire_consumes_the_request() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.request_frame().unwrap();
        assert_eq!(scheduler.fire(), Some(handle));
        assert_eq!(scheduler.fire(), None);
        assert_eq!(scheduler.requested(), 1);
    }
}
