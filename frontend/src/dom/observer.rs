use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// At least the configured fraction is on screen.
    Visible,
    /// Completely off screen.
    Hidden,
    /// Partly visible, below the threshold.
    Unchanged,
}

impl Visibility {
    pub fn classify(is_intersecting: bool, ratio: f64, threshold: f64) -> Self {
        if !is_intersecting {
            Visibility::Hidden
        } else if ratio + 0.001 >= threshold {
            // browsers report ratios a hair under the crossed threshold
            Visibility::Visible
        } else {
            Visibility::Unchanged
        }
    }
}

/// IntersectionObserver that disconnects when dropped.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn new<F>(threshold: f64, root_margin: &str, mut on_change: F) -> Option<Self>
    where
        F: FnMut(Element, Visibility, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let visibility = Visibility::classify(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    threshold,
                );
                if visibility != Visibility::Unchanged {
                    on_change(entry.target(), visibility, &observer);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        // fire on full exit as well as on crossing the threshold
        let thresholds = Array::of2(&JsValue::from_f64(0.0), &JsValue::from_f64(threshold));
        let options = IntersectionObserverInit::new();
        options.set_threshold(&thresholds);
        options.set_root_margin(root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| log::warn!("IntersectionObserver unavailable: {:?}", e))
            .ok()?;

        Some(VisibilityObserver {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }

    pub fn unobserve(&self, target: &Element) {
        self.observer.unobserve(target);
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_needs_threshold_fraction() {
        assert_eq!(Visibility::classify(true, 0.45, 0.4), Visibility::Visible);
        assert_eq!(Visibility::classify(true, 0.3999, 0.4), Visibility::Visible);
        assert_eq!(Visibility::classify(true, 0.2, 0.4), Visibility::Unchanged);
        assert_eq!(Visibility::classify(false, 0.0, 0.4), Visibility::Hidden);
        assert_eq!(Visibility::classify(true, 0.0, 0.0), Visibility::Visible);
    }
}
