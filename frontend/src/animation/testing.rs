//! In-memory stand-ins for the browser capabilities.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::reveal::RevealTarget;
use super::trigger::VisibilityEntry;
use super::viewport::{
    FrameCallback, FrameScheduler, ObserverSubscription, VisibilityCallback, VisibilityObserver,
};
use super::AnimationError;

#[derive(Clone, Default)]
pub struct FakeElement {
    marks: Rc<Cell<u32>>,
}

impl FakeElement {
    pub fn is_visible(&self) -> bool {
        self.marks.get() > 0
    }

    pub fn times_marked(&self) -> u32 {
        self.marks.get()
    }
}

impl RevealTarget for FakeElement {
    fn mark_visible(&self) {
        self.marks.set(self.marks.get() + 1);
    }
}

type SharedCallback = Rc<RefCell<Option<VisibilityCallback>>>;

struct Registration {
    threshold: f64,
    active: Rc<Cell<bool>>,
    callback: SharedCallback,
}

#[derive(Default)]
pub struct FakeViewport {
    registrations: RefCell<Vec<Registration>>,
    refuse: Cell<bool>,
}

impl FakeViewport {
    pub fn refusing() -> Self {
        let viewport = Self::default();
        viewport.refuse.set(true);
        viewport
    }

    /// Delivers the same observation to every live registration.
    pub fn emit(&self, is_intersecting: bool, ratio: f64) {
        let live: Vec<SharedCallback> = self
            .registrations
            .borrow()
            .iter()
            .filter(|registration| registration.active.get())
            .map(|registration| Rc::clone(&registration.callback))
            .collect();
        for slot in live {
            let taken = slot.borrow_mut().take();
            if let Some(mut callback) = taken {
                callback(VisibilityEntry::new(is_intersecting, ratio));
                *slot.borrow_mut() = Some(callback);
            }
        }
    }

    pub fn observing(&self) -> usize {
        self.registrations
            .borrow()
            .iter()
            .filter(|registration| registration.active.get())
            .count()
    }

    pub fn thresholds(&self) -> Vec<f64> {
        self.registrations
            .borrow()
            .iter()
            .map(|registration| registration.threshold)
            .collect()
    }
}

pub struct FakeSubscription {
    active: Rc<Cell<bool>>,
}

impl ObserverSubscription for FakeSubscription {
    fn unobserve(&self) {
        self.active.set(false);
    }
}

impl Drop for FakeSubscription {
    fn drop(&mut self) {
        self.active.set(false);
    }
}

impl VisibilityObserver for FakeViewport {
    type Element = FakeElement;
    type Subscription = FakeSubscription;

    fn observe(
        &self,
        _element: &FakeElement,
        threshold: f64,
        callback: VisibilityCallback,
    ) -> Result<FakeSubscription, AnimationError> {
        if self.refuse.get() {
            return Err(AnimationError::Host("observer refused".to_string()));
        }
        let active = Rc::new(Cell::new(true));
        self.registrations.borrow_mut().push(Registration {
            threshold,
            active: Rc::clone(&active),
            callback: Rc::new(RefCell::new(Some(callback))),
        });
        Ok(FakeSubscription { active })
    }
}

#[derive(Default)]
pub struct FakeFrames {
    queue: RefCell<Vec<(u32, FrameCallback)>>,
    next_id: Cell<u32>,
    scheduled: Cell<u32>,
    cancelled: RefCell<Vec<u32>>,
}

impl FakeFrames {
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn scheduled(&self) -> u32 {
        self.scheduled.get()
    }

    pub fn cancelled(&self) -> Vec<u32> {
        self.cancelled.borrow().clone()
    }

    /// Runs every frame queued before this call. Returns how many ran.
    pub fn run(&self, timestamp: f64) -> usize {
        let due: Vec<(u32, FrameCallback)> = self.queue.borrow_mut().drain(..).collect();
        let count = due.len();
        for (_, callback) in due {
            callback(timestamp);
        }
        count
    }
}

impl FrameScheduler for FakeFrames {
    type Handle = u32;

    fn schedule_frame(&self, callback: FrameCallback) -> Result<u32, AnimationError> {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.scheduled.set(self.scheduled.get() + 1);
        self.queue.borrow_mut().push((id, callback));
        Ok(id)
    }

    fn cancel(&self, handle: u32) {
        let mut queue = self.queue.borrow_mut();
        if let Some(position) = queue.iter().position(|(id, _)| *id == handle) {
            drop(queue.remove(position));
            self.cancelled.borrow_mut().push(handle);
        }
    }
}
