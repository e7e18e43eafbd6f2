use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::Element;

/// Counts from 0 up to `target` in equal steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u64,
    total_steps: u32,
    step: u32,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32, step_ms: u32) -> Self {
        let total_steps = (duration_ms / step_ms.max(1)).max(1);
        Self {
            target,
            total_steps,
            step: 0,
        }
    }

    pub fn value(&self) -> u64 {
        if self.step >= self.total_steps {
            return self.target;
        }
        (u128::from(self.target) * u128::from(self.step) / u128::from(self.total_steps)) as u64
    }

    pub fn is_done(&self) -> bool {
        self.step >= self.total_steps
    }

    /// Advances one step and returns the value to display.
    pub fn tick(&mut self) -> u64 {
        if !self.is_done() {
            self.step += 1;
        }
        self.value()
    }
}

/// Reads `data-target` (and optional `data-suffix`) from a stat element.
pub fn read_target(element: &Element) -> Option<(u64, String)> {
    let target = element.get_attribute("data-target")?.trim().parse().ok()?;
    let suffix = element.get_attribute("data-suffix").unwrap_or_default();
    Some((target, suffix))
}

/// Runs the animation on `element`'s text until it reaches the target, then
/// clears the timer.
pub fn animate(element: Element, mut animation: CounterAnimation, suffix: String, step_ms: u32) {
    let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let handle = slot.clone();
    let interval = Interval::new(step_ms, move || {
        if animation.is_done() {
            return;
        }
        let value = animation.tick();
        element.set_text_content(Some(&format!("{}{}", value, suffix)));
        if animation.is_done() {
            // Dropping the interval inside its own callback would free the
            // running closure, so the clear happens on the next turn.
            if let Some(interval) = handle.borrow_mut().take() {
                Timeout::new(0, move || drop(interval)).forget();
            }
        }
    });
    *slot.borrow_mut() = Some(interval);
}
