use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::trigger::{OneShotTrigger, VisibilityEntry};
use super::viewport::{FrameScheduler, ObserverSubscription, VisibilityObserver};
use crate::config;

/// `1 - (1 - t)^3`: fast start, slow finish.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountUpConfig {
    pub end: f64,
    pub suffix: String,
    pub decimals: usize,
    pub duration_ms: f64,
}

impl Default for CountUpConfig {
    fn default() -> Self {
        Self {
            end: 0.0,
            suffix: String::new(),
            decimals: 0,
            duration_ms: f64::from(config::DEFAULT_COUNT_UP_DURATION_MS),
        }
    }
}

impl CountUpConfig {
    pub fn new(end: f64) -> Self {
        Self {
            end,
            ..Self::default()
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Zero, negative and NaN durations finish immediately.
    pub fn snaps(&self) -> bool {
        !(self.duration_ms > 0.0)
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.snaps() {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        ease_out_cubic(self.progress(elapsed_ms)) * self.end
    }

    /// Whole numbers are floored; otherwise fixed to `decimals` places.
    pub fn render(&self, value: f64) -> String {
        // -0.0 + 0.0 == +0.0, so a negative target still starts at "0".
        let value = value + 0.0;
        if self.decimals == 0 {
            format!("{}{}", value.floor() as i64, self.suffix)
        } else {
            format!("{}{}", to_fixed(value, self.decimals), self.suffix)
        }
    }
}

/// Fixed-point text where exact halfway values round away from zero,
/// matching `Number.prototype.toFixed`.
fn to_fixed(value: f64, decimals: usize) -> String {
    let mut magnitude = value.abs();
    if is_halfway(magnitude, decimals) {
        // The next double up lies strictly above the tie, so exact
        // formatting rounds it up.
        magnitude = f64::from_bits(magnitude.to_bits() + 1);
    }
    let digits = format!("{:.*}", decimals, magnitude);
    if value < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// True when `magnitude * 10^decimals` is exactly an odd multiple of one half.
fn is_halfway(magnitude: f64, decimals: usize) -> bool {
    const MANTISSA_BITS: u64 = (1 << 52) - 1;
    if !magnitude.is_finite() || magnitude == 0.0 {
        return false;
    }
    let bits = magnitude.to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i64;
    let (mantissa, exponent) = if biased_exponent == 0 {
        (bits & MANTISSA_BITS, -1074)
    } else {
        ((bits & MANTISSA_BITS) | (1 << 52), biased_exponent - 1075)
    };
    // magnitude * 10^d * 2 == mantissa * 5^d * 2^shift, and 5^d is odd.
    let shift = exponent + decimals as i64 + 1;
    shift <= 0 && i64::from(mantissa.trailing_zeros()) == -shift
}

/// Receives the rendered text every time the number changes.
pub trait CountUpDisplay {
    fn show(&self, text: &str);
}

impl<F: Fn(&str)> CountUpDisplay for F {
    fn show(&self, text: &str) {
        self(text)
    }
}

struct CountUpState<S, H> {
    config: CountUpConfig,
    trigger: OneShotTrigger,
    subscription: Option<S>,
    frame: Option<H>,
    started_at: Option<f64>,
    displayed: f64,
    finished: bool,
    detached: bool,
    display: Rc<dyn CountUpDisplay>,
}

impl<S, H> CountUpState<S, H> {
    fn text(&self) -> String {
        self.config.render(self.displayed)
    }

    fn snap_to_end(&mut self) {
        self.displayed = self.config.end;
        self.finished = true;
        self.frame = None;
    }
}

type Shared<S, H> = Rc<RefCell<CountUpState<S, H>>>;

/// Animates a number from zero to its target once it scrolls into view.
///
/// The animation starts at most once. Dropping the animator releases the
/// observer and cancels any pending frame.
pub struct CountUpAnimator<O: VisibilityObserver, F: FrameScheduler> {
    shared: Shared<O::Subscription, F::Handle>,
    frames: Rc<F>,
}

impl<O, F> CountUpAnimator<O, F>
where
    O: VisibilityObserver,
    O::Subscription: 'static,
    F: FrameScheduler + 'static,
    F::Handle: 'static,
{
    /// Displays `config.render(0.0)` until the first frame; callers are
    /// expected to render that text themselves before attaching.
    pub fn attach(
        observer: &O,
        element: &O::Element,
        frames: Rc<F>,
        config: CountUpConfig,
        display: impl CountUpDisplay + 'static,
    ) -> Self {
        let animator = Self::detached(frames, config, display);

        let weak = Rc::downgrade(&animator.shared);
        let frames = Rc::clone(&animator.frames);
        let callback = Box::new(move |entry: VisibilityEntry| {
            if let Some(shared) = weak.upgrade() {
                let crossed = {
                    let mut state = shared.borrow_mut();
                    !state.detached && state.trigger.offer(entry)
                };
                if crossed {
                    begin(&shared, &frames);
                }
            }
        });

        match observer.observe(element, config::COUNT_UP_THRESHOLD, callback) {
            Ok(subscription) => {
                let mut state = animator.shared.borrow_mut();
                state.subscription = Some(subscription);
                state.trigger.arm();
            }
            Err(err) => log::debug!("count-up not attached: {err}"),
        }

        animator
    }

    /// An animator with no observer; it only runs after [`start`](Self::start).
    pub fn detached(frames: Rc<F>, config: CountUpConfig, display: impl CountUpDisplay + 'static) -> Self {
        let shared = Rc::new(RefCell::new(CountUpState {
            config,
            trigger: OneShotTrigger::new(config::COUNT_UP_THRESHOLD),
            subscription: None,
            frame: None,
            started_at: None,
            displayed: 0.0,
            finished: false,
            detached: false,
            display: Rc::new(display),
        }));
        Self { shared, frames }
    }

    /// Starts the animation now. Returns false if it had already started.
    pub fn start(&self) -> bool {
        let fired = {
            let mut state = self.shared.borrow_mut();
            !state.detached && state.trigger.fire()
        };
        if fired {
            begin(&self.shared, &self.frames);
        }
        fired
    }
}

impl<O: VisibilityObserver, F: FrameScheduler> CountUpAnimator<O, F> {
    pub fn is_started(&self) -> bool {
        self.shared.borrow().trigger.has_fired()
    }

    pub fn is_finished(&self) -> bool {
        self.shared.borrow().finished
    }

    pub fn displayed(&self) -> f64 {
        self.shared.borrow().displayed
    }

    pub fn text(&self) -> String {
        self.shared.borrow().text()
    }

    /// Releases the observer and cancels the pending frame, if any.
    pub fn detach(&mut self) {
        let (subscription, frame) = {
            let mut state = self.shared.borrow_mut();
            state.detached = true;
            (state.subscription.take(), state.frame.take())
        };
        if let Some(subscription) = subscription {
            subscription.unobserve();
        }
        if let Some(frame) = frame {
            self.frames.cancel(frame);
        }
    }
}

impl<O: VisibilityObserver, F: FrameScheduler> Drop for CountUpAnimator<O, F> {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Runs right after the trigger fired.
fn begin<S, F>(shared: &Shared<S, F::Handle>, frames: &Rc<F>)
where
    S: ObserverSubscription,
    F: FrameScheduler + 'static,
    F::Handle: 'static,
    S: 'static,
{
    let snapped = {
        let mut state = shared.borrow_mut();
        if let Some(subscription) = state.subscription.as_ref() {
            subscription.unobserve();
        }
        log::debug!("count-up to {} started", state.config.end);
        if state.config.snaps() {
            state.snap_to_end();
            Some((Rc::clone(&state.display), state.text()))
        } else {
            schedule_next(&mut *state, Rc::downgrade(shared), frames);
            state.finished.then(|| (Rc::clone(&state.display), state.text()))
        }
    };
    if let Some((display, text)) = snapped {
        display.show(&text);
    }
}

fn schedule_next<S, F>(
    state: &mut CountUpState<S, F::Handle>,
    weak: Weak<RefCell<CountUpState<S, F::Handle>>>,
    frames: &Rc<F>,
) where
    F: FrameScheduler + 'static,
    F::Handle: 'static,
    S: 'static,
{
    let next = Rc::clone(frames);
    let scheduled = frames.schedule_frame(Box::new(move |timestamp: f64| {
        on_frame(&weak, &next, timestamp);
    }));
    match scheduled {
        Ok(handle) => state.frame = Some(handle),
        Err(err) => {
            log::debug!("count-up cannot schedule frames, jumping to the end: {err}");
            state.snap_to_end();
        }
    }
}

fn on_frame<S, F>(weak: &Weak<RefCell<CountUpState<S, F::Handle>>>, frames: &Rc<F>, timestamp: f64)
where
    F: FrameScheduler + 'static,
    F::Handle: 'static,
    S: 'static,
{
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let (display, text) = {
        let mut state = shared.borrow_mut();
        if state.detached || state.finished {
            return;
        }
        let started_at = *state.started_at.get_or_insert(timestamp);
        let elapsed = timestamp - started_at;
        let progress = state.config.progress(elapsed);
        state.displayed = state.config.value_at(elapsed);

        if progress < 1.0 {
            schedule_next(&mut *state, Rc::downgrade(&shared), frames);
        } else {
            state.frame = None;
            state.finished = true;
            log::debug!("count-up to {} finished", state.config.end);
        }
        (Rc::clone(&state.display), state.text())
    };
    display.show(&text);
}
