use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod relay;
mod controller {
    pub mod carousel;
    pub mod counter;
    pub mod fan;
    pub mod faq;
    pub mod lifecycle;
    pub mod submission;
    pub mod view;
}
mod components {
    pub mod card_fan;
    pub mod counter;
    pub mod faq;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod marquee;
    pub mod testimonials;
}
mod pages {
    pub mod about;
    pub mod category;
    pub mod contact;
    pub mod home;
}

use components::{footer::Footer, header::Header};
use controller::view::{NavAction, NavRequest, RouterState, View};
use pages::{about::About, category::CategoryDetail, contact::Contact, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services/:slug")]
    Service { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering home");
            html! { <Site initial={View::Home} /> }
        }
        Route::Service { slug } => match content::find_category(&slug) {
            Some(category) => {
                info!("Rendering service page {}", slug);
                html! { <Site initial={View::Category(category)} /> }
            }
            None => {
                log::warn!("Unknown service slug {}, rendering home", slug);
                html! { <Site initial={View::Home} /> }
            }
        },
        Route::NotFound => {
            info!("Unknown path, rendering home");
            html! { <Site initial={View::Home} /> }
        }
    }
}

/// Site-wide navigation callback handed to every view.
pub type Navigate = Callback<NavRequest>;

#[derive(Properties, PartialEq)]
pub struct SiteProps {
    pub initial: View,
}

/// Global rules. A freshly keyed `<main>` fades in on mount, `.fading` fades the old one out.
const SITE_STYLE: &str = r#"
    body {
        margin: 0;
        background: #F5F5F7;
        color: #111111;
        font-family: -apple-system, BlinkMacSystemFont, "Helvetica Neue", Helvetica, Arial, sans-serif;
        -webkit-font-smoothing: antialiased;
    }
    button {
        font: inherit;
        color: inherit;
        background: none;
        border: none;
        cursor: pointer;
    }
    .site-main {
        transition: opacity 150ms ease;
        opacity: 1;
        animation: site-fade-in 150ms ease;
    }
    .site-main.fading {
        opacity: 0;
    }
    @keyframes site-fade-in {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    .eyebrow {
        font-size: 0.75rem;
        letter-spacing: 0.3em;
        text-transform: uppercase;
        opacity: 0.6;
    }
    .pill-button {
        display: inline-flex;
        align-items: center;
        gap: 0.75rem;
        padding: 1rem 2.5rem;
        border-radius: 9999px;
        border: 1px solid currentColor;
        letter-spacing: 0.15em;
        font-size: 0.875rem;
        transition: background 0.3s ease, color 0.3s ease;
    }
    .pill-button:hover {
        background: #111111;
        color: #ffffff;
    }
"#;

#[function_component(Site)]
pub fn site(props: &SiteProps) -> Html {
    let initial = props.initial;
    let state = use_reducer(move || RouterState::new(initial));
    let next_seq = use_mut_ref(|| 0u64);
    let pending_fade: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    // Cancel a fade that is still pending when the site itself goes away
    {
        let pending_fade = pending_fade.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    pending_fade.borrow_mut().take();
                }
            },
            (),
        );
    }

    let navigate: Navigate = {
        let dispatcher = state.dispatcher();
        Callback::from(move |request: NavRequest| {
            let seq = {
                let mut next = next_seq.borrow_mut();
                *next += 1;
                *next
            };
            let target = request.target();
            info!("Navigating to {:?} (#{})", target.kind(), seq);
            dispatcher.dispatch(NavAction::Begin { seq });

            let dispatcher = dispatcher.clone();
            let fade = Timeout::new(config::NAV_FADE_MS, move || {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                dispatcher.dispatch(NavAction::Commit { seq, view: target });
            });
            // Replacing the handle drops, and so cancels, an older pending fade
            *pending_fade.borrow_mut() = Some(fade);
        })
    };

    let on_toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(NavAction::ToggleMenu))
    };
    let on_close_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(NavAction::CloseMenu))
    };

    let view = match (state.view, state.category()) {
        (_, Some(category)) => html! {
            <CategoryDetail category={category} navigate={navigate.clone()} />
        },
        (View::About, _) => html! { <About navigate={navigate.clone()} /> },
        (View::Contact, _) => html! { <Contact navigate={navigate.clone()} /> },
        _ => html! { <Home navigate={navigate.clone()} /> },
    };

    html! {
        <div class="site">
            <style>{SITE_STYLE}</style>
            <Header
                menu_open={state.menu_open}
                on_toggle_menu={on_toggle_menu}
                on_close_menu={on_close_menu}
                navigate={navigate.clone()}
            />
            <main
                key={state.transition_key}
                class={classes!("site-main", state.transitioning.then(|| "fading"))}
            >
                { view }
            </main>
            <Footer />
        </div>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting site");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule<'a>(style: &'a str, selector: &str) -> &'a str {
        let start = style.find(&format!("{} {{", selector)).unwrap_or_else(|| panic!("no rule for {}", selector));
        let body = &style[start..];
        &body[..body.find('}').unwrap() + 1]
    }

    #[test]
    fn remounted_main_fades_in() {
        let main_rule = rule(SITE_STYLE, ".site-main");
        assert!(main_rule.contains("animation: site-fade-in"));
        assert!(SITE_STYLE.contains("@keyframes site-fade-in"));
        let keyframes = &SITE_STYLE[SITE_STYLE.find("@keyframes site-fade-in").unwrap()..];
        assert!(keyframes.contains("from { opacity: 0; }"));
    }

    #[test]
    fn fading_main_is_hidden() {
        assert!(rule(SITE_STYLE, ".site-main.fading").contains("opacity: 0;"));
    }
}
