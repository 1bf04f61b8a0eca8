// Host-side tests for scoped teardown and frame cancellation.

use liquid_core::{CancelToken, FrameGate, Teardown};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Stand-in for the browser: counts live listeners and timers, records
/// cancelled frame requests.
#[derive(Default)]
struct FakeHost {
    listeners: Cell<u32>,
    timers: Cell<u32>,
    cancelled_frames: RefCell<Vec<i32>>,
}

fn acquire_all(host: &Rc<FakeHost>, gate: &FrameGate, teardown: &mut Teardown) {
    for event in ["mousemove", "touchstart", "touchmove", "touchend", "touchcancel"] {
        host.listeners.set(host.listeners.get() + 1);
        let h = host.clone();
        teardown.defer(event, move || h.listeners.set(h.listeners.get() - 1));
    }
    host.timers.set(host.timers.get() + 1);
    let h = host.clone();
    teardown.defer("speed-sampler", move || h.timers.set(h.timers.get() - 1));

    let h = host.clone();
    let g = gate.clone();
    teardown.defer("animation-frame", move || {
        if let Some(id) = g.cancel() {
            h.cancelled_frames.borrow_mut().push(id);
        }
    });
    gate.scheduled(41);
}

#[test]
fn dispose_twice_leaves_nothing_running() {
    let host = Rc::new(FakeHost::default());
    let gate = FrameGate::new();
    let mut teardown = Teardown::new();
    acquire_all(&host, &gate, &mut teardown);
    assert_eq!(teardown.len(), 7);
    assert_eq!(gate.pending(), Some(41));

    assert_eq!(teardown.release(), 7);
    assert_eq!(teardown.release(), 0);
    assert!(teardown.is_empty());
    assert_eq!(host.listeners.get(), 0);
    assert_eq!(host.timers.get(), 0);
    assert_eq!(*host.cancelled_frames.borrow(), vec![41]);
    assert_eq!(gate.pending(), None);
    assert!(gate.is_cancelled());
}

#[test]
fn releases_run_newest_first() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut teardown = Teardown::new();
    for label in ["dom", "listener", "timer", "frame"] {
        let order = order.clone();
        teardown.defer(label, move || order.borrow_mut().push(label));
    }
    teardown.release();
    assert_eq!(*order.borrow(), vec!["frame", "timer", "listener", "dom"]);
}

#[test]
fn dropping_a_partial_setup_releases_what_was_acquired() {
    fn failing_setup(host: &Rc<FakeHost>, gate: &FrameGate) -> Result<Teardown, &'static str> {
        let mut teardown = Teardown::new();
        acquire_all(host, gate, &mut teardown);
        Err("context unavailable")
    }

    let host = Rc::new(FakeHost::default());
    let gate = FrameGate::new();
    assert!(failing_setup(&host, &gate).is_err());
    assert_eq!(host.listeners.get(), 0);
    assert_eq!(host.timers.get(), 0);
    assert_eq!(*host.cancelled_frames.borrow(), vec![41]);
    assert_eq!(gate.pending(), None);
}

#[test]
fn cancel_token_is_shared_between_clones() {
    let token = CancelToken::new();
    let in_loop = token.clone();
    assert!(!in_loop.is_cancelled());
    token.cancel();
    assert!(in_loop.is_cancelled());
    token.cancel();
    assert!(in_loop.is_cancelled());
}

#[test]
fn cancel_returns_the_pending_request_once() {
    let gate = FrameGate::new();
    gate.scheduled(3);
    assert_eq!(gate.cancel(), Some(3));
    assert_eq!(gate.cancel(), None);
    assert!(gate.is_cancelled());
}

#[test]
fn cancel_without_a_request_has_nothing_to_cancel() {
    let gate = FrameGate::new();
    assert_eq!(gate.cancel(), None);
    assert!(!gate.begin_tick());
}

#[test]
fn tick_clears_the_fired_request_and_tracks_the_next() {
    let gate = FrameGate::new();
    gate.scheduled(1);
    assert!(gate.begin_tick());
    assert_eq!(gate.pending(), None);
    gate.scheduled(2);
    assert_eq!(gate.pending(), Some(2));
    assert_eq!(gate.cancel(), Some(2));
}

#[test]
fn tick_after_cancel_does_not_reschedule() {
    let gate = FrameGate::new();
    let in_loop = gate.clone();
    gate.scheduled(10);

    // A frame already queued by the browser still fires once after cancel.
    assert_eq!(gate.cancel(), Some(10));
    assert!(!in_loop.begin_tick());
    in_loop.scheduled(11);
    assert_eq!(gate.pending(), None);
    assert_eq!(gate.cancel(), None);
}

#[test]
fn frame_loop_stops_after_teardown() {
    let gate = FrameGate::new();
    let mut teardown = Teardown::new();
    let g = gate.clone();
    let cancelled = Rc::new(Cell::new(0));
    let c = cancelled.clone();
    teardown.defer("animation-frame", move || {
        if g.cancel().is_some() {
            c.set(c.get() + 1);
        }
    });

    let mut next_id = 0;
    let mut drawn = 0;
    gate.scheduled(next_id);
    for _ in 0..3 {
        if gate.begin_tick() {
            drawn += 1;
            next_id += 1;
            gate.scheduled(next_id);
        }
    }
    drop(teardown);
    assert!(!gate.begin_tick());

    assert_eq!(drawn, 3);
    assert_eq!(cancelled.get(), 1);
    assert_eq!(gate.pending(), None);
}
