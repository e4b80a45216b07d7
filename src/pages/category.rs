use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::Category;
use crate::controller::view::{NavRequest, ViewKind};
use crate::Navigate;

#[derive(Properties, PartialEq)]
pub struct CategoryDetailProps {
    pub category: &'static Category,
    pub navigate: Navigate,
}

#[function_component(CategoryDetail)]
pub fn category_detail(props: &CategoryDetailProps) -> Html {
    let category = props.category;
    let zoomed = use_state(|| None::<usize>);

    {
        let zoomed = zoomed.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                zoomed.set(None);
            }
        });
    }

    let go = |kind: ViewKind| {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(NavRequest::to(kind)))
    };
    let close_zoom = {
        let zoomed = zoomed.clone();
        Callback::from(move |_: MouseEvent| zoomed.set(None))
    };

    let lightbox = match *zoomed {
        Some(idx) => match category.gallery.get(idx) {
            Some(image) => html! {
                <div class="lightbox" onclick={close_zoom}>
                    <img
                        src={category.gallery_src(image)}
                        alt={format!("{} {}", category.title, idx + 1)}
                    />
                </div>
            },
            None => html! {},
        },
        None => html! {},
    };

    html! {
        <div class="category-page">
            <style>
                {r#"
                .category-page {
                    padding-top: 8rem;
                    min-height: 100vh;
                }
                .category-header {
                    padding: 0 3rem;
                    margin-bottom: 3rem;
                }
                .back-link {
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    opacity: 0.6;
                    margin-bottom: 2rem;
                }
                .back-link:hover {
                    opacity: 1;
                }
                .category-header h1 {
                    font-size: clamp(3.5rem, 9vw, 6rem);
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    margin: 0 0 1rem;
                }
                .category-subtitle {
                    font-size: 1.25rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    opacity: 0.5;
                }
                .category-banner {
                    position: relative;
                    width: 100%;
                    height: 60vh;
                    background: #d6d3d1;
                    margin-bottom: 5rem;
                    overflow: hidden;
                }
                .category-banner img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .category-split {
                    max-width: 80rem;
                    margin: 0 auto 8rem;
                    padding: 0 3rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 8rem;
                }
                .category-body {
                    font-size: 1.5rem;
                    font-weight: 300;
                    line-height: 1.6;
                }
                .category-hook {
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    border-left: 1px solid #e5e5e5;
                    padding-left: 4rem;
                }
                .category-hook blockquote {
                    font-family: Georgia, serif;
                    font-style: italic;
                    font-size: 2.25rem;
                    margin: 0 0 2rem;
                }
                .category-hook button {
                    align-self: flex-start;
                    font-size: 0.875rem;
                    border-bottom: 1px solid #000000;
                    padding-bottom: 0.25rem;
                }
                .gallery {
                    max-width: 80rem;
                    margin: 0 auto 8rem;
                    padding: 0 3rem;
                    display: grid;
                    grid-template-columns: repeat(4, minmax(0, 1fr));
                    gap: 0.75rem;
                }
                .gallery-item {
                    position: relative;
                    overflow: hidden;
                    border-radius: 0.5rem;
                    aspect-ratio: 4 / 5;
                    cursor: zoom-in;
                    padding: 0;
                }
                .gallery-item.wide {
                    grid-column: span 2;
                    aspect-ratio: 16 / 9;
                }
                .gallery-item img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .lightbox {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    background: rgba(245, 245, 247, 0.95);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    cursor: zoom-out;
                }
                .lightbox img {
                    max-width: 92vw;
                    max-height: 92vh;
                    object-fit: contain;
                }
                .category-footer {
                    text-align: center;
                    padding: 5rem 0;
                    background: #ffffff;
                    border-top: 1px solid #f3f4f6;
                }
                .category-footer button {
                    font-size: clamp(2.25rem, 6vw, 3.75rem);
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    transition: color 0.3s ease;
                }
                .category-footer button:hover {
                    color: #78716c;
                }
                @media (max-width: 768px) {
                    .category-header, .category-split, .gallery { padding: 0 1.5rem; }
                    .category-split { grid-template-columns: 1fr; gap: 4rem; }
                    .category-hook { padding-left: 2rem; }
                    .gallery { grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 0.5rem; }
                }
                "#}
            </style>

            <div class="category-header">
                <button class="back-link" onclick={go(ViewKind::Home)}>{"← Back to Overview"}</button>
                <h1>{category.title}</h1>
                <p class="category-subtitle">{category.subtitle}</p>
            </div>

            <div class="category-banner">
                {
                    if let Some(src) = category.header_src() {
                        html! { <img src={src} alt={category.title} /> }
                    } else {
                        html! {}
                    }
                }
            </div>

            <div class="category-split">
                <div>
                    <p class="eyebrow">{"The Approach"}</p>
                    <p class="category-body">{category.body}</p>
                </div>
                <div class="category-hook">
                    <blockquote>{format!("“{}”", category.hook)}</blockquote>
                    <button onclick={go(ViewKind::Contact)}>{format!("{} →", category.cta)}</button>
                </div>
            </div>

            <div class="gallery">
                {
                    category.gallery.iter().enumerate().map(|(idx, image)| {
                        let onclick = {
                            let zoomed = zoomed.clone();
                            Callback::from(move |_: MouseEvent| zoomed.set(Some(idx)))
                        };
                        html! {
                            <button
                                key={format!("{}-{}-{}", category.id, image.src, idx)}
                                class={classes!("gallery-item", image.is_wide.then(|| "wide"))}
                                {onclick}
                            >
                                <img
                                    src={category.gallery_src(image)}
                                    alt={format!("{} {}", category.title, idx + 1)}
                                    loading="lazy"
                                />
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>

            <div class="category-footer">
                <p class="eyebrow">{"READY TO START?"}</p>
                <button onclick={go(ViewKind::Contact)}>{"START PROJECT"}</button>
            </div>

            { lightbox }
        </div>
    }
}
