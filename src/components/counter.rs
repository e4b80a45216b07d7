use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::warn;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::controller::counter::CounterAnimation;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub end: u32,
    #[prop_or_default]
    pub suffix: &'static str,
}

/// Counts up once, the first time at least half of it scrolls into view.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node_ref = use_node_ref();
    let started = use_state_eq(|| false);
    let value = use_state_eq(|| 0u32);

    {
        let node_ref = node_ref.clone();
        let started = started.clone();
        use_effect_with_deps(
            move |_| {
                let mut observer: Option<IntersectionObserver> = None;
                let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                    move |entries: Array, observer: IntersectionObserver| {
                        let visible = entries.iter().any(|entry| {
                            entry
                                .dyn_into::<IntersectionObserverEntry>()
                                .map(|entry| entry.is_intersecting())
                                .unwrap_or(false)
                        });
                        if visible {
                            started.set(true);
                            observer.disconnect();
                        }
                    },
                );

                if let Some(element) = node_ref.cast::<Element>() {
                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(0.5));
                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                        Ok(created) => {
                            created.observe(&element);
                            observer = Some(created);
                        }
                        Err(e) => warn!("IntersectionObserver unavailable: {:?}", e),
                    }
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    let animation = CounterAnimation::new(props.end);
    let interval_handle: Rc<RefCell<Option<Interval>>> = use_mut_ref(|| None);

    {
        let value = value.clone();
        let interval_handle = interval_handle.clone();
        use_effect_with_deps(
            move |started: &bool| {
                if *started {
                    let mut elapsed = 0u32;
                    let interval = Interval::new(config::COUNTER_FRAME_MS, move || {
                        elapsed = elapsed.saturating_add(config::COUNTER_FRAME_MS);
                        value.set(animation.value_at(elapsed));
                    });
                    *interval_handle.borrow_mut() = Some(interval);
                }
                move || {
                    interval_handle.borrow_mut().take();
                }
            },
            *started,
        );
    }

    // Stop ticking once the last frame has been rendered
    use_effect_with_deps(
        move |&(started, reached): &(bool, bool)| {
            if started && reached {
                interval_handle.borrow_mut().take();
            }
            || ()
        },
        (*started, animation.reached(*value)),
    );

    html! {
        <span ref={node_ref}>{*value}{props.suffix}</span>
    }
}
