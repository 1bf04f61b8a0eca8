//! Scoped release of everything a mounted button holds.
//!
//! Listeners, the speed-sampling timer and the pending frame request are
//! registered on one [`Teardown`] as they are acquired and released
//! together, either explicitly or when the scope is dropped on an early
//! return during setup.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Shared stop flag checked at the top of every frame callback.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn cancel(&self) {
        self.0.set(true);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Bookkeeping for a self-rescheduling frame loop: whether the next tick may
/// run, and which frame request is still outstanding.
///
/// Clones share state, so the frame callback and the teardown each hold one.
#[derive(Clone, Debug, Default)]
pub struct FrameGate {
    token: CancelToken,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called at the top of a frame callback. The request that fired is no
    /// longer pending; returns whether the frame should run and reschedule.
    pub fn begin_tick(&self) -> bool {
        self.pending.set(None);
        !self.token.is_cancelled()
    }

    /// Records a request id; ignored once cancelled.
    pub fn scheduled(&self, id: i32) {
        if !self.token.is_cancelled() {
            self.pending.set(Some(id));
        }
    }

    /// Stops the loop and hands back the outstanding request, if any, so it
    /// can be cancelled exactly once.
    pub fn cancel(&self) -> Option<i32> {
        self.token.cancel();
        self.pending.take()
    }

    #[inline]
    pub fn pending(&self) -> Option<i32> {
        self.pending.get()
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

type Release = Box<dyn FnOnce()>;

#[derive(Default)]
pub struct Teardown {
    held: Vec<(&'static str, Release)>,
}

impl Teardown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the release action for a resource that was just acquired.
    pub fn defer(&mut self, label: &'static str, release: impl FnOnce() + 'static) {
        self.held.push((label, Box::new(release)));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.held.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Runs every pending release, newest first. Safe to call repeatedly;
    /// returns how many resources were released by this call.
    pub fn release(&mut self) -> usize {
        let held = std::mem::take(&mut self.held);
        let count = held.len();
        for (label, release) in held.into_iter().rev() {
            log::debug!("[teardown] releasing {}", label);
            release();
        }
        count
    }
}

impl fmt::Debug for Teardown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.held.iter().map(|(label, _)| *label).collect();
        f.debug_struct("Teardown").field("held", &labels).finish()
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        self.release();
    }
}
