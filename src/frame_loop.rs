// Bookkeeping for a requestAnimationFrame loop: which frame is pending and
// whether the loop has been stopped. Kept free of browser calls so teardown
// ordering can be checked natively.

#[derive(Debug, Default)]
pub struct FrameLoop {
    pending: Option<i32>,
    stopped: bool,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        FrameLoop::default()
    }

    /// Requests the next frame unless one is already pending or the loop stopped.
    pub fn schedule<F, E>(&mut self, request: F) -> Result<(), E>
    where
        F: FnOnce() -> Result<i32, E>,
    {
        if self.stopped || self.pending.is_some() {
            return Ok(());
        }
        self.pending = Some(request()?);
        Ok(())
    }

    /// Called at the top of the frame callback. `false` means stop: don't
    /// draw, don't reschedule.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        if self.stopped {
            return false;
        }
        self.frames += 1;
        true
    }

    pub fn stop<F: FnOnce(i32)>(&mut self, cancel: F) {
        self.stopped = true;
        if let Some(handle) = self.pending.take() {
            cancel(handle);
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::FrameLoop;
    use std::cell::Cell;

    #[test]
    fn schedules_once_per_frame() {
        let mut frames = FrameLoop::new();
        let requests = Cell::new(0);
        let request = || -> Result<i32, ()> {
            requests.set(requests.get() + 1);
            Ok(requests.get())
        };

        frames.schedule(request).unwrap();
        frames.schedule(request).unwrap();
        assert_eq!(requests.get(), 1);
        assert!(frames.is_scheduled());

        assert!(frames.begin_frame());
        frames.schedule(request).unwrap();
        assert_eq!(requests.get(), 2);
        assert_eq!(frames.frames(), 1);
    }

    #[test]
    fn stop_cancels_pending_frame() {
        let mut frames = FrameLoop::new();
        frames.schedule(|| Ok::<_, ()>(42)).unwrap();

        assert!(!frames.is_stopped());

        let mut cancelled = Vec::new();
        frames.stop(|handle| cancelled.push(handle));
        assert_eq!(cancelled, vec![42]);
        assert!(frames.is_stopped());
        assert!(!frames.is_scheduled());

        // a second teardown has nothing left to cancel
        frames.stop(|handle| cancelled.push(handle));
        assert_eq!(cancelled, vec![42]);
    }

    #[test]
    fn no_frames_after_stop() {
        let mut frames = FrameLoop::new();
        frames.schedule(|| Ok::<_, ()>(1)).unwrap();
        frames.stop(|_| {});

        // a callback already queued by the browser must bail out
        assert!(!frames.begin_frame());
        assert_eq!(frames.frames(), 0);

        let mut requested = false;
        frames
            .schedule(|| {
                requested = true;
                Ok::<_, ()>(2)
            })
            .unwrap();
        assert!(!requested);
        assert!(!frames.is_scheduled());
    }

    #[test]
    fn request_errors_propagate() {
        let mut frames = FrameLoop::new();
        assert_eq!(frames.schedule(|| Err::<i32, _>("no window")), Err("no window"));
        assert!(!frames.is_scheduled());
    }
}
