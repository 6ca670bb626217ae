use super::trigger::VisibilityEntry;
use super::AnimationError;

pub type VisibilityCallback = Box<dyn FnMut(VisibilityEntry)>;

/// Receives the frame timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Reports how much of an element is inside the viewport.
///
/// Observations are delivered asynchronously, never from inside `observe`.
pub trait VisibilityObserver {
    type Element;
    type Subscription: ObserverSubscription;

    fn observe(
        &self,
        element: &Self::Element,
        threshold: f64,
        callback: VisibilityCallback,
    ) -> Result<Self::Subscription, AnimationError>;
}

/// A live observation. Dropping it releases everything the host allocated.
pub trait ObserverSubscription {
    /// Stops further observations. Safe to call more than once, including
    /// from inside the observation callback.
    fn unobserve(&self);
}

/// Schedules work for the next repaint.
pub trait FrameScheduler {
    type Handle;

    fn schedule_frame(&self, callback: FrameCallback) -> Result<Self::Handle, AnimationError>;

    fn cancel(&self, handle: Self::Handle);
}
