use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::reveal::RevealTarget;
use super::trigger::VisibilityEntry;
use super::viewport::{
    FrameCallback, FrameScheduler, ObserverSubscription, VisibilityCallback, VisibilityObserver,
};
use super::AnimationError;

const VISIBLE_CLASS: &str = "visible";
const REVEAL_SELECTOR: &str = ".reveal";

fn host_error(value: JsValue) -> AnimationError {
    AnimationError::Host(format!("{value:?}"))
}

/// `IntersectionObserver`, one per observed element.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntersectionViewport;

pub struct IntersectionSubscription {
    observer: IntersectionObserver,
    element: Element,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ObserverSubscription for IntersectionSubscription {
    fn unobserve(&self) {
        self.observer.unobserve(&self.element);
    }
}

impl Drop for IntersectionSubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl VisibilityObserver for IntersectionViewport {
    type Element = Element;
    type Subscription = IntersectionSubscription;

    fn observe(
        &self,
        element: &Element,
        threshold: f64,
        mut callback: VisibilityCallback,
    ) -> Result<IntersectionSubscription, AnimationError> {
        let closure = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        callback(VisibilityEntry::new(
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                        ));
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
                .map_err(host_error)?;
        observer.observe(element);

        Ok(IntersectionSubscription {
            observer,
            element: element.clone(),
            _callback: closure,
        })
    }
}

impl RevealTarget for Element {
    fn mark_visible(&self) {
        if let Err(err) = self.class_list().add_1(VISIBLE_CLASS) {
            log::warn!("could not mark section visible: {err:?}");
        }
        let Ok(children) = self.query_selector_all(REVEAL_SELECTOR) else {
            return;
        };
        for index in 0..children.length() {
            if let Some(child) = children.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
                let _ = child.class_list().add_1(VISIBLE_CLASS);
            }
        }
    }
}

/// `requestAnimationFrame` on the global window.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserFrames;

/// A requested frame. The closure lives as long as the handle does.
pub struct AnimationFrame {
    id: i32,
    _callback: Closure<dyn FnMut(f64)>,
}

impl FrameScheduler for BrowserFrames {
    type Handle = AnimationFrame;

    fn schedule_frame(&self, callback: FrameCallback) -> Result<AnimationFrame, AnimationError> {
        let window = web_sys::window().ok_or(AnimationError::NoWindow)?;
        let mut callback = Some(callback);
        let closure = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            if let Some(callback) = callback.take() {
                callback(timestamp);
            }
        });
        let id = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(host_error)?;
        Ok(AnimationFrame {
            id,
            _callback: closure,
        })
    }

    fn cancel(&self, frame: AnimationFrame) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(frame.id);
        }
    }
}
