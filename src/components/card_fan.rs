use log::{debug, warn};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::content::Category;
use crate::controller::fan::{self, FanGeometry, ScrollCalibration};
use crate::controller::view::NavRequest;
use crate::Navigate;

const LISTENED_EVENTS: [&str; 2] = ["scroll", "resize"];

#[derive(Properties, PartialEq)]
pub struct CardFanProps {
    pub categories: &'static [Category],
    pub navigate: Navigate,
}

#[function_component(CardFan)]
pub fn card_fan(props: &CardFanProps) -> Html {
    let section_ref = use_node_ref();
    let progress = use_state_eq(|| 0.0f64);
    let header_visible = use_state_eq(|| false);

    // Track the section against the viewport; listeners go away with the view
    {
        let section_ref = section_ref.clone();
        let progress = progress.clone();
        let header_visible = header_visible.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let calibration = ScrollCalibration::default();
                    let update = {
                        let window = window.clone();
                        move || {
                            let Some(section) = section_ref.cast::<Element>() else {
                                return;
                            };
                            let top = section.get_bounding_client_rect().top();
                            let viewport_height = window
                                .inner_height()
                                .ok()
                                .and_then(|height| height.as_f64())
                                .unwrap_or(0.0);
                            progress.set(calibration.progress(top, viewport_height));
                            header_visible.set(fan::header_revealed(top, viewport_height));
                        }
                    };

                    // Initial position, before any scroll happens
                    update();

                    let callback = Closure::<dyn Fn()>::new(update);
                    for event in LISTENED_EVENTS {
                        if let Err(e) = window
                            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                        {
                            warn!("Could not listen for {}: {:?}", event, e);
                        }
                    }
                    debug!("Card fan listeners attached");

                    Box::new(move || {
                        for event in LISTENED_EVENTS {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                        debug!("Card fan listeners detached");
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let geometry = FanGeometry::default();
    let count = props.categories.len();

    html! {
        <section ref={section_ref} class="card-fan-section">
            <style>
                {r#"
                .card-fan-section {
                    position: relative;
                    padding: 4rem 1.5rem 6rem;
                    overflow: hidden;
                }
                .fan-header {
                    text-align: center;
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 1s ease-out, transform 1s ease-out;
                }
                .fan-header.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .fan-header h2 {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    margin: 0.75rem 0 2rem;
                }
                .fan-deck {
                    position: relative;
                    height: 62vh;
                    max-width: 80rem;
                    margin: 0 auto;
                    perspective: 1500px;
                }
                .fan-card {
                    position: absolute;
                    top: 0;
                    left: 50%;
                    width: 18rem;
                    height: 26rem;
                    margin-left: -9rem;
                    transform-origin: center bottom;
                    will-change: transform;
                    border-radius: 1rem;
                    overflow: hidden;
                    background: #ffffff;
                    box-shadow: 0 8px 30px rgba(0, 0, 0, 0.12);
                    text-align: left;
                    padding: 0;
                }
                .fan-card:hover {
                    box-shadow: 0 20px 50px rgba(0, 0, 0, 0.25);
                }
                .fan-card img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }
                .fan-card:hover img {
                    transform: scale(1.05);
                }
                .fan-card-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 1.5rem;
                    color: #ffffff;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.65), rgba(0, 0, 0, 0.1));
                }
                .fan-card-number {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: rgba(255, 255, 255, 0.25);
                }
                .fan-card-subtitle {
                    font-size: 0.7rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: rgba(255, 255, 255, 0.6);
                }
                .fan-card-title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    letter-spacing: -0.02em;
                }
                @media (max-width: 768px) {
                    .fan-card {
                        width: 12rem;
                        height: 18rem;
                        margin-left: -6rem;
                    }
                }
                "#}
            </style>
            <div class={classes!("fan-header", (*header_visible).then(|| "visible"))}>
                <p class="eyebrow">{"OUR EXPERTISE"}</p>
                <h2>{"Explore Our Work"}</h2>
            </div>
            <div class="fan-deck">
                {
                    props.categories.iter().enumerate().map(|(idx, category)| {
                        let transform = geometry.card(idx, count, *progress);
                        let navigate = props.navigate.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            navigate.emit(NavRequest::category(category));
                        });
                        html! {
                            <button key={category.id} class="fan-card" style={transform.to_style()} {onclick}>
                                {
                                    if let Some(src) = category.fan_src() {
                                        html! { <img src={src} alt={category.title} loading="lazy" /> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <div class="fan-card-overlay">
                                    <span class="fan-card-number">{format!("{:02}", idx + 1)}</span>
                                    <span class="fan-card-subtitle">{category.subtitle}</span>
                                    <span class="fan-card-title">{category.title}</span>
                                </div>
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
