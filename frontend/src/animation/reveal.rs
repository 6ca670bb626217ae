use std::cell::RefCell;
use std::rc::Rc;

use super::trigger::{OneShotTrigger, TriggerState, VisibilityEntry};
use super::viewport::{ObserverSubscription, VisibilityObserver};
use crate::config;

/// Something that can switch into its revealed appearance.
pub trait RevealTarget {
    /// Marks the element and its `reveal` descendants as visible.
    fn mark_visible(&self);
}

struct RevealState<E, S> {
    trigger: OneShotTrigger,
    target: E,
    subscription: Option<S>,
}

impl<E: RevealTarget, S: ObserverSubscription> RevealState<E, S> {
    fn on_visibility(&mut self, entry: VisibilityEntry) {
        let Some(subscription) = self.subscription.as_ref() else {
            return;
        };
        if self.trigger.offer(entry) {
            self.target.mark_visible();
            subscription.unobserve();
            log::debug!("section revealed at {:.0}% visibility", entry.ratio * 100.0);
        }
    }
}

/// Reveals a container the first time enough of it scrolls into view.
///
/// The observer is released once the reveal fires, and on [`detach`] or drop
/// whether or not it ever fired.
///
/// [`detach`]: RevealController::detach
pub struct RevealController<O: VisibilityObserver> {
    shared: Rc<RefCell<RevealState<O::Element, O::Subscription>>>,
}

impl<O> RevealController<O>
where
    O: VisibilityObserver,
    O::Element: RevealTarget + Clone + 'static,
    O::Subscription: 'static,
{
    pub fn attach(observer: &O, element: O::Element) -> Self {
        Self::attach_with_threshold(observer, element, config::REVEAL_THRESHOLD)
    }

    pub fn attach_with_threshold(observer: &O, element: O::Element, threshold: f64) -> Self {
        let shared = Rc::new(RefCell::new(RevealState {
            trigger: OneShotTrigger::new(threshold),
            target: element.clone(),
            subscription: None,
        }));

        let weak = Rc::downgrade(&shared);
        let callback = Box::new(move |entry: VisibilityEntry| {
            if let Some(shared) = weak.upgrade() {
                shared.borrow_mut().on_visibility(entry);
            }
        });

        match observer.observe(&element, threshold, callback) {
            Ok(subscription) => {
                let mut state = shared.borrow_mut();
                state.subscription = Some(subscription);
                state.trigger.arm();
            }
            Err(err) => log::debug!("reveal not attached: {err}"),
        }

        Self { shared }
    }
}

impl<O: VisibilityObserver> RevealController<O> {
    pub fn state(&self) -> TriggerState {
        self.shared.borrow().trigger.state()
    }

    pub fn is_visible(&self) -> bool {
        self.shared.borrow().trigger.has_fired()
    }

    pub fn is_observing(&self) -> bool {
        let state = self.shared.borrow();
        state.subscription.is_some() && !state.trigger.has_fired()
    }

    /// Releases the observer. Later observations are ignored.
    pub fn detach(&mut self) {
        let subscription = self.shared.borrow_mut().subscription.take();
        if let Some(subscription) = subscription {
            subscription.unobserve();
        }
    }
}

impl<O: VisibilityObserver> Drop for RevealController<O> {
    fn drop(&mut self) {
        self.detach();
    }
}
