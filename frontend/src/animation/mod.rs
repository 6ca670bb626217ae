//! Scroll-driven animations: sections that reveal once they scroll into view
//! and numbers that count up the first time they are seen.
//!
//! The controllers only depend on the [`viewport`] traits. [`browser`] plugs
//! them into `IntersectionObserver` and `requestAnimationFrame`.

pub mod browser;
pub mod count_up;
pub mod reveal;
pub mod trigger;
pub mod viewport;

#[cfg(test)]
pub(crate) mod testing;

pub use count_up::{CountUpAnimator, CountUpConfig, CountUpDisplay};
pub use reveal::{RevealController, RevealTarget};
pub use trigger::{OneShotTrigger, TriggerState, VisibilityEntry};
pub use viewport::{FrameScheduler, ObserverSubscription, VisibilityObserver};

#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("host rejected the request: {0}")]
    Host(String),
}
