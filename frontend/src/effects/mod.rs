//! Scroll and pointer driven decoration for the landing page. Every effect
//! is independent; one failing to start is logged and the rest carry on.

pub mod counter;
pub mod header;
pub mod listener;
pub mod particles;
pub mod ripple;
pub mod smooth_scroll;
pub mod tilt;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use self::counter::CounterAnimation;
use self::header::HeaderTracker;
use self::listener::{Listener, OnceObserver};
use self::particles::ParticleSpec;
use self::ripple::RippleGeometry;
use crate::config::EffectsConfig;
use crate::error::DomError;

/// Keeps the page's listeners and observers alive. Dropping it detaches
/// them all.
#[derive(Default)]
pub struct Effects {
    listeners: Vec<Listener>,
    observers: Vec<OnceObserver>,
}

impl Effects {
    pub fn install(config: &EffectsConfig) -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        let mut effects = Effects::default();

        effects.run("smooth scroll", |fx| fx.smooth_scroll(&document));
        effects.run("reveal", |fx| fx.reveal(&document, config));
        effects.run("counters", |fx| fx.counters(&document, config));
        effects.run("tilt", |fx| fx.tilt(&document, config));
        effects.run("header", |fx| fx.header(&window, &document, config));
        effects.run("particles", |_| spawn_particles(&document, config.particle_count));
        effects.run("ripple", |fx| fx.ripples(&document, config));

        debug!(
            "Effects ready: {} listeners, {} observers",
            effects.listeners.len(),
            effects.observers.len()
        );
        Ok(effects)
    }

    fn run(&mut self, name: &str, start: impl FnOnce(&mut Self) -> Result<(), DomError>) {
        if let Err(e) = start(self) {
            warn!("Could not start {} effect: {}", name, e);
        }
    }

    fn smooth_scroll(&mut self, document: &Document) -> Result<(), DomError> {
        for link in select_all(document, "a[href^=\"#\"]")? {
            let document = document.clone();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = smooth_scroll::fragment_target(&href).map(str::to_string) else {
                continue;
            };
            self.listeners.push(Listener::new(&link, "click", move |event: Event| {
                event.prevent_default();
                match document.query_selector(&target) {
                    Ok(Some(section)) => {
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        options.set_block(ScrollLogicalPosition::Start);
                        section.scroll_into_view_with_scroll_into_view_options(&options);
                    }
                    Ok(None) => debug!("No section for {}", target),
                    Err(e) => warn!("{}", DomError::selector(&target, e)),
                }
            })?);
        }
        Ok(())
    }

    fn reveal(&mut self, document: &Document, config: &EffectsConfig) -> Result<(), DomError> {
        let class = config.reveal_class;
        let observer = OnceObserver::new(move |element: Element| {
            if let Err(e) = element.class_list().add_1(class) {
                warn!("{}", DomError::js("classList.add", e));
            }
        })?;
        for element in select_all(document, ".reveal")? {
            observer.observe(&element);
        }
        self.observers.push(observer);
        Ok(())
    }

    fn counters(&mut self, document: &Document, config: &EffectsConfig) -> Result<(), DomError> {
        let (duration, step) = (config.counter_duration_ms, config.counter_step_ms);
        let observer = OnceObserver::new(move |element: Element| match counter::read_target(&element) {
            Some((target, suffix)) => {
                counter::animate(element, CounterAnimation::new(target, duration, step), suffix, step)
            }
            None => debug!("Counter without a numeric data-target"),
        })?;
        for element in select_all(document, ".stat-number")? {
            observer.observe(&element);
        }
        self.observers.push(observer);
        Ok(())
    }

    fn tilt(&mut self, document: &Document, config: &EffectsConfig) -> Result<(), DomError> {
        let max = config.tilt_max_degrees;
        for card in select_all(document, ".service-card")? {
            let Ok(card) = card.dyn_into::<HtmlElement>() else {
                continue;
            };
            let moving = card.clone();
            self.listeners.push(Listener::new(&card, "mousemove", move |event: Event| {
                let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let rect = moving.get_bounding_client_rect();
                let (rotate_x, rotate_y) = tilt::tilt_angles(
                    f64::from(mouse.client_x()) - rect.left(),
                    f64::from(mouse.client_y()) - rect.top(),
                    rect.width(),
                    rect.height(),
                    max,
                );
                if let Err(e) = moving
                    .style()
                    .set_property("transform", &tilt::transform(rotate_x, rotate_y))
                {
                    warn!("{}", DomError::js("style.transform", e));
                }
            })?);
            let leaving = card.clone();
            self.listeners.push(Listener::new(&card, "mouseleave", move |_: Event| {
                if let Err(e) = leaving.style().set_property("transform", tilt::RESET) {
                    warn!("{}", DomError::js("style.transform", e));
                }
            })?);
        }
        Ok(())
    }

    fn header(&mut self, window: &Window, document: &Document, config: &EffectsConfig) -> Result<(), DomError> {
        let Some(header) = document
            .query_selector(".site-header")
            .map_err(|e| DomError::selector(".site-header", e))?
        else {
            return Ok(());
        };
        let mut tracker = HeaderTracker::new(config.header_scrolled_threshold, config.header_hide_threshold);
        let scrolled = window.clone();
        self.listeners.push(Listener::new(window, "scroll", move |_: Event| {
            let y = scrolled.scroll_y().unwrap_or_default();
            let classes = header.class_list();
            let marked = if tracker.is_scrolled(y) {
                classes.add_1("scrolled")
            } else {
                classes.remove_1("scrolled")
            };
            if let Err(e) = marked {
                warn!("{}", DomError::js("classList.scrolled", e));
            }
            if let Some(hidden) = tracker.update(y) {
                if let Err(e) = classes.toggle_with_force("header-hidden", hidden) {
                    warn!("{}", DomError::js("classList.toggle", e));
                }
            }
        })?);
        Ok(())
    }

    fn ripples(&mut self, document: &Document, config: &EffectsConfig) -> Result<(), DomError> {
        let lifetime = config.ripple_lifetime_ms;
        for button in select_all(document, ".btn")? {
            let document = document.clone();
            let target = button.clone();
            self.listeners.push(Listener::new(&button, "click", move |event: Event| {
                let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                if let Err(e) = spawn_ripple(&document, &target, mouse, lifetime) {
                    warn!("Ripple failed: {}", e);
                }
            })?);
        }
        Ok(())
    }
}

fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| DomError::selector(selector, e))?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn spawn_ripple(document: &Document, button: &Element, mouse: &MouseEvent, lifetime_ms: u32) -> Result<(), DomError> {
    let rect = button.get_bounding_client_rect();
    let geometry = RippleGeometry::from_click(
        f64::from(mouse.client_x()),
        f64::from(mouse.client_y()),
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
    );
    let ripple = document
        .create_element("span")
        .map_err(|e| DomError::js("createElement", e))?;
    ripple.set_class_name("ripple");
    ripple
        .set_attribute("style", &geometry.style())
        .map_err(|e| DomError::js("setAttribute", e))?;
    button
        .append_child(&ripple)
        .map_err(|e| DomError::js("appendChild", e))?;
    Timeout::new(lifetime_ms, move || ripple.remove()).forget();
    Ok(())
}

/// Fills every `.particles` container once with randomly timed particles.
fn spawn_particles(document: &Document, count: usize) -> Result<(), DomError> {
    let mut random = web_sys::js_sys::Math::random;
    for container in select_all(document, ".particles")? {
        for _ in 0..count {
            let spec = ParticleSpec::sample(&mut random);
            let particle = document
                .create_element("div")
                .map_err(|e| DomError::js("createElement", e))?;
            particle.set_class_name("particle");
            particle
                .set_attribute("style", &spec.style())
                .map_err(|e| DomError::js("setAttribute", e))?;
            container
                .append_child(&particle)
                .map_err(|e| DomError::js("appendChild", e))?;
        }
    }
    Ok(())
}
