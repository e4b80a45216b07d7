use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::config;
use crate::content::Category;
use crate::controller::carousel::{CarouselAction, HeroCarousel};
use crate::controller::view::{NavRequest, ViewKind};
use crate::Navigate;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub categories: &'static [Category],
    pub navigate: Navigate,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let categories = props.categories;
    let carousel = use_reducer(|| HeroCarousel::new(categories.len()));

    // Autoplay timer, only alive while autoplay is on and there is something to show
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |schedule: &bool| {
                let interval = schedule.then(|| {
                    debug!("Hero autoplay started");
                    Interval::new(config::HERO_INTERVAL_MS, move || {
                        dispatcher.dispatch(CarouselAction::Tick);
                    })
                });
                move || {
                    if interval.is_some() {
                        debug!("Hero autoplay stopped");
                    }
                    drop(interval);
                }
            },
            carousel.should_schedule(),
        );
    }

    let onmouseenter = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::PointerEnter))
    };
    let onmouseleave = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::PointerLeave))
    };
    let start_project = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(NavRequest::to(ViewKind::Contact)))
    };

    html! {
        <section class="hero" {onmouseenter} {onmouseleave}>
            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    width: 100%;
                    overflow: hidden;
                    background: #1a1a1a;
                }
                .hero-slide {
                    position: absolute;
                    inset: 0;
                    opacity: 0;
                    z-index: 0;
                    transition: opacity 1s ease-in-out;
                }
                .hero-slide.active {
                    opacity: 1;
                    z-index: 10;
                }
                .hero-slide img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero-slide::after {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.3), transparent, rgba(0, 0, 0, 0.6));
                }
                .hero-content {
                    position: absolute;
                    inset: 0;
                    z-index: 20;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 0 3rem 8rem;
                    color: #ffffff;
                }
                .hero-content h1 {
                    font-size: clamp(3rem, 9vw, 8rem);
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    margin: 0 0 1.5rem;
                }
                .hero-content .lead {
                    font-size: 1.25rem;
                    max-width: 36rem;
                    color: rgba(255, 255, 255, 0.8);
                    margin: 0 0 2rem;
                }
                .hero-content .pill-button:hover {
                    background: #ffffff;
                    color: #000000;
                }
                .hero-indicators {
                    position: absolute;
                    bottom: 3rem;
                    right: 3rem;
                    z-index: 20;
                    display: flex;
                    gap: 0.5rem;
                }
                .hero-indicator {
                    width: 3rem;
                    height: 4px;
                    background: rgba(255, 255, 255, 0.3);
                    transition: background 0.3s ease;
                }
                .hero-indicator.active,
                .hero-indicator:hover {
                    background: #ffffff;
                }
                .hero-placeholder {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, #1a1a1a, #3a3a3a);
                }
                "#}
            </style>
            {
                if carousel.is_empty() {
                    html! { <div class="hero-placeholder"></div> }
                } else {
                    categories.iter().enumerate().map(|(idx, category)| {
                        html! {
                            <div key={category.id} class={classes!("hero-slide", (idx == carousel.index()).then(|| "active"))}>
                                {
                                    if let Some(src) = category.header_src() {
                                        html! {
                                            <img
                                                src={src}
                                                alt={category.title}
                                                loading={if idx == 0 { "eager" } else { "lazy" }}
                                            />
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        }
                    }).collect::<Html>()
                }
            }

            <div class="hero-content">
                <p class="eyebrow">{"YOUR STRATEGIC CONTENT PARTNER"}</p>
                <h1>{"Visuals With Purpose."}</h1>
                <p class="lead">{"Your offer is world-class. Your content should be too."}</p>
                <div>
                    <button class="pill-button" onclick={start_project}>
                        {"START PROJECT →"}
                    </button>
                </div>
            </div>

            <div class="hero-indicators">
                {
                    categories.iter().enumerate().map(|(idx, category)| {
                        let dispatcher = carousel.dispatcher();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            dispatcher.dispatch(CarouselAction::Select(idx));
                        });
                        html! {
                            <button
                                key={idx}
                                class={classes!("hero-indicator", (idx == carousel.index()).then(|| "active"))}
                                aria-label={format!("Go to slide {}: {}", idx + 1, category.title)}
                                {onclick}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
