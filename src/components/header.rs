use yew::prelude::*;

use crate::config;
use crate::content::CATEGORIES;
use crate::controller::view::{NavRequest, ViewKind};
use crate::Navigate;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_close_menu: Callback<()>,
    pub navigate: Navigate,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { menu_open, on_toggle_menu, on_close_menu, navigate } = props;
    let menu_open = *menu_open;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let go = |kind: ViewKind| {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(NavRequest::to(kind)))
    };

    let main_links = [("Home", ViewKind::Home), ("About", ViewKind::About), ("Contact", ViewKind::Contact)];

    html! {
        <>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    box-sizing: border-box;
                    z-index: 50;
                    padding: 1rem 3rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: rgba(245, 245, 247, 0.9);
                    backdrop-filter: blur(4px);
                    border-bottom: 1px solid rgba(0, 0, 0, 0.06);
                    transition: background 0.3s ease;
                }
                .top-nav.menu-open {
                    background: #111111;
                    color: #ffffff;
                    border-bottom-color: rgba(255, 255, 255, 0.1);
                }
                .burger-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 6px;
                    width: 40px;
                    height: 40px;
                    justify-content: center;
                    align-items: center;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: currentColor;
                    transition: all 0.3s ease;
                }
                .menu-open .burger-menu span:nth-child(1) { transform: translateY(8px) rotate(45deg); }
                .menu-open .burger-menu span:nth-child(2) { opacity: 0; }
                .menu-open .burger-menu span:nth-child(3) { transform: translateY(-8px) rotate(-45deg); }
                .nav-logo {
                    position: absolute;
                    left: 50%;
                    transform: translateX(-50%);
                    transition: opacity 0.3s ease;
                }
                .nav-logo img { height: 2.5rem; width: auto; }
                .menu-open .nav-logo { opacity: 0; pointer-events: none; }
                .nav-cta {
                    font-size: 0.875rem;
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    border: 1px solid currentColor;
                    white-space: nowrap;
                }
                .menu-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                    background: #0a0a0a;
                    color: #ffffff;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.7s ease;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    padding: 5rem 6rem 2rem;
                    box-sizing: border-box;
                }
                .menu-overlay.open {
                    opacity: 1;
                    pointer-events: auto;
                }
                .menu-label {
                    color: rgba(201, 169, 98, 0.6);
                    font-size: 10px;
                    letter-spacing: 0.4em;
                    text-transform: uppercase;
                    margin-bottom: 1.5rem;
                }
                .menu-link {
                    display: flex;
                    align-items: baseline;
                    gap: 1.5rem;
                    padding: 0.5rem 0;
                    font-size: 4rem;
                    font-weight: 300;
                    text-align: left;
                    transition: color 0.3s ease;
                }
                .menu-link:hover { color: #C9A962; }
                .menu-link .menu-number {
                    font-size: 0.875rem;
                    font-family: monospace;
                    color: rgba(255, 255, 255, 0.2);
                }
                .menu-services {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 1rem 3rem;
                    margin-top: 3rem;
                }
                .menu-service {
                    text-align: left;
                    font-size: 1.25rem;
                    color: rgba(255, 255, 255, 0.4);
                    transition: color 0.3s ease;
                }
                .menu-service:hover { color: #ffffff; }
                .menu-footer {
                    margin-top: auto;
                    display: flex;
                    gap: 3rem;
                    font-size: 0.875rem;
                }
                .menu-footer a { color: rgba(255, 255, 255, 0.7); text-decoration: none; }
                .menu-footer a:hover { color: #C9A962; }
                @media (max-width: 768px) {
                    .top-nav { padding: 1rem 1.5rem; }
                    .menu-overlay { padding: 5rem 2rem 2rem; }
                    .menu-link { font-size: 3rem; }
                    .menu-services { grid-template-columns: repeat(2, minmax(0, 1fr)); }
                }
                "#}
            </style>
            <nav class={classes!("top-nav", menu_open.then(|| "menu-open"))}>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <button class="nav-logo" onclick={go(ViewKind::Home)}>
                    <img src="/logo.png" alt="ÆSTHETIX" />
                </button>
                <button class="nav-cta" onclick={go(ViewKind::Contact)}>
                    {"START PROJECT"}
                </button>
            </nav>

            <div class={classes!("menu-overlay", menu_open.then(|| "open"))}>
                <p class="menu-label">{"NAVIGATION"}</p>
                {
                    main_links.iter().enumerate().map(|(idx, (label, kind))| {
                        html! {
                            <button key={*label} class="menu-link" onclick={go(*kind)}>
                                <span class="menu-number">{format!("0{}", idx + 1)}</span>
                                <span>{*label}</span>
                            </button>
                        }
                    }).collect::<Html>()
                }

                <div class="menu-services">
                    <p class="menu-label" style="grid-column: 1 / -1; margin-bottom: 0;">{"SERVICES"}</p>
                    {
                        CATEGORIES.iter().map(|category| {
                            let navigate = navigate.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                navigate.emit(NavRequest::category(category));
                            });
                            html! {
                                <button key={category.id} class="menu-service" {onclick}>
                                    {category.title}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="menu-footer">
                    <div>
                        <p class="menu-label">{"EMAIL"}</p>
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                    </div>
                    <div>
                        <p class="menu-label">{"SOCIAL"}</p>
                        <a
                            href={config::INSTAGRAM_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                            onclick={
                                let on_close_menu = on_close_menu.clone();
                                Callback::from(move |_: MouseEvent| on_close_menu.emit(()))
                            }
                        >
                            {"Instagram"}
                        </a>
                    </div>
                </div>
            </div>
        </>
    }
}
