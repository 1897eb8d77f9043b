use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use gloo_timers::callback::Timeout;

/// The block must already be 100px inside the viewport before it reveals,
/// so the animation is visible instead of starting off-screen.
const REVEAL_MARGIN: &str = "-100px";

/// One-shot reveal state for a single content block. `Unrevealed` is the
/// initial state, `Revealed` is terminal; the transition fires on the first
/// intersection and never again, no matter how often the block scrolls in
/// and out of view afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Unrevealed,
    Revealed,
}

impl RevealState {
    pub fn new() -> Self {
        RevealState::Unrevealed
    }

    /// Feed one visibility change. Returns true exactly when this event
    /// triggers the entrance animation.
    pub fn on_intersection(&mut self, intersecting: bool) -> bool {
        match (*self, intersecting) {
            (RevealState::Unrevealed, true) => {
                *self = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        *self == RevealState::Revealed
    }
}

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    /// Stagger offset between the intersection event and the start of the
    /// entrance transition.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps a content block and plays the entrance transition (fade + slight
/// upward shift) the first time it scrolls into view. If the observer can't
/// be set up the block renders revealed immediately, never hidden.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        let delay_ms = props.delay_ms;
        use_effect_with_deps(
            move |_| {
                let element = match node.cast::<Element>() {
                    Some(element) => element,
                    None => {
                        revealed.set(true);
                        return Box::new(|| ()) as Box<dyn FnOnce()>;
                    }
                };

                let fallback = revealed.clone();
                // Held here so unmounting during the stagger delay cancels
                // the pending timeout instead of leaking it.
                let pending = Rc::new(RefCell::new(None::<Timeout>));
                let mut state = RevealState::new();
                let callback = Closure::wrap(Box::new({
                    let pending = pending.clone();
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            if state.on_intersection(entry.is_intersecting()) {
                                // Terminal state reached, no further callbacks wanted.
                                observer.disconnect();
                                let revealed = revealed.clone();
                                if delay_ms == 0 {
                                    revealed.set(true);
                                } else {
                                    *pending.borrow_mut() =
                                        Some(Timeout::new(delay_ms, move || revealed.set(true)));
                                }
                            }
                        }
                    }
                })
                    as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                let options = IntersectionObserverInit::new();
                options.set_root_margin(REVEAL_MARGIN);

                match IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    Ok(observer) => {
                        observer.observe(&element);
                        Box::new(move || {
                            observer.disconnect();
                            drop(callback);
                            // Dropping a still-scheduled Timeout clears it.
                            pending.borrow_mut().take();
                        }) as Box<dyn FnOnce()>
                    }
                    Err(_) => {
                        // No observation capability: show the block in its
                        // final state rather than leaving it invisible.
                        fallback.set(true);
                        Box::new(|| ()) as Box<dyn FnOnce()>
                    }
                }
            },
            (),
        );
    }

    let class = classes!(
        "fade-in",
        (*revealed).then(|| "revealed"),
        props.class.clone()
    );

    html! {
        <div ref={node} {class}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_on_first_intersection() {
        let mut state = RevealState::new();
        assert!(!state.is_revealed());
        assert!(state.on_intersection(true));
        assert!(state.is_revealed());
    }

    #[test]
    fn does_not_fire_while_out_of_view() {
        let mut state = RevealState::new();
        assert!(!state.on_intersection(false));
        assert!(!state.on_intersection(false));
        assert!(!state.is_revealed());
    }

    #[test]
    fn fires_at_most_once() {
        let mut state = RevealState::new();
        assert!(!state.on_intersection(false));
        assert!(state.on_intersection(true));
        // Scrolling out and back in must not replay the animation.
        assert!(!state.on_intersection(false));
        assert!(!state.on_intersection(true));
        assert!(!state.on_intersection(true));
        assert!(state.is_revealed());
    }

    #[test]
    fn revealed_state_is_terminal() {
        let mut state = RevealState::new();
        state.on_intersection(true);
        for _ in 0..10 {
            state.on_intersection(false);
            state.on_intersection(true);
        }
        assert!(state.is_revealed());
    }
}
