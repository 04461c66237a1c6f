/// Collapses bursts of events into at most one pending frame request.
///
/// `H` is whatever handle the scheduler hands back; for the browser that is a
/// `gloo_render::AnimationFrame`, which cancels itself on drop.
#[derive(Debug)]
pub struct FrameGate<H> {
    pending: Option<H>,
    closed: bool,
}

impl<H> Default for FrameGate<H> {
    fn default() -> Self {
        Self {
            pending: None,
            closed: false,
        }
    }
}

impl<H> FrameGate<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls `request` only when no frame is pending and the gate is open.
    /// Returns whether a new frame was scheduled.
    pub fn schedule_with(&mut self, request: impl FnOnce() -> H) -> bool {
        if self.closed || self.pending.is_some() {
            return false;
        }
        self.pending = Some(request());
        true
    }

    /// Called at the top of the frame callback. Clears the pending slot and
    /// tells the caller whether it may still write.
    pub fn begin_frame(&mut self) -> bool {
        self.pending.take();
        !self.closed
    }

    /// Closes the gate for good and hands back the pending request, if any.
    pub fn close(&mut self) -> Option<H> {
        self.closed = true;
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[cfg(test)]
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn burst_of_notifications_schedules_once() {
        let mut gate = FrameGate::new();
        let requests = Cell::new(0);
        let mut scheduled = 0;

        for _ in 0..25 {
            if gate.schedule_with(|| {
                requests.set(requests.get() + 1);
                requests.get()
            }) {
                scheduled += 1;
            }
        }

        assert_eq!(scheduled, 1);
        assert_eq!(requests.get(), 1);
        assert!(gate.is_pending());
    }

    #[test]
    fn next_frame_can_be_scheduled_after_the_previous_ran() {
        let mut gate = FrameGate::new();
        assert!(gate.schedule_with(|| 1));
        assert!(gate.begin_frame());
        assert!(!gate.is_pending());
        assert!(gate.schedule_with(|| 2));
        assert!(!gate.schedule_with(|| 3));
    }

    #[test]
    fn close_returns_pending_handle_for_cancellation() {
        let mut gate = FrameGate::new();
        gate.schedule_with(|| "frame-1");
        assert_eq!(gate.close(), Some("frame-1"));
        assert!(gate.is_closed());
        assert!(!gate.is_pending());
        assert_eq!(gate.close(), None);
    }

    #[test]
    fn frame_firing_after_close_must_not_write() {
        let mut gate = FrameGate::new();
        gate.schedule_with(|| ());
        let _ = gate.close();
        assert!(!gate.begin_frame());
    }

    #[test]
    fn closed_gate_refuses_new_requests() {
        let mut gate: FrameGate<u32> = FrameGate::new();
        let _ = gate.close();
        let mut called = false;
        assert!(!gate.schedule_with(|| {
            called = true;
            7
        }));
        assert!(!called);
    }
}
