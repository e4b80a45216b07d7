use chrono::Datelike;
use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid #e5e5e5;
                    margin-top: 5rem;
                    padding: 5rem 3rem;
                }
                .footer-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    gap: 2.5rem;
                    flex-wrap: wrap;
                }
                .footer-content h3 {
                    font-size: 1.25rem;
                    letter-spacing: -0.05em;
                    margin: 0 0 1rem;
                }
                .footer-muted {
                    opacity: 0.6;
                    font-size: 0.875rem;
                }
                .footer-content a {
                    color: inherit;
                    text-decoration: none;
                }
                .footer-content a:hover {
                    opacity: 0.5;
                }
                .footer-legal {
                    text-align: right;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .footer-legal .links {
                    display: flex;
                    gap: 1rem;
                    justify-content: flex-end;
                    margin-top: 0.5rem;
                }
                "#}
            </style>
            <div class="footer-content">
                <div>
                    <h3>{config::CONTACT_EMAIL}</h3>
                    <p class="footer-muted">
                        {"Gröbenzeller Straße 41"}<br />
                        {"82178 Puchheim, Germany"}
                    </p>
                </div>
                <div>
                    <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">
                        {"INSTAGRAM"}
                    </a>
                </div>
                <div class="footer-legal">
                    <p class="footer-muted">
                        <a href={config::get_site_url()}>{format!("© {} ÆSTHETIX.", year)}</a>
                        {" All Rights Reserved."}
                    </p>
                    <div class="links footer-muted">
                        <a href="/impressum">{"Impressum"}</a>
                        <a href="/datenschutz">{"Datenschutz"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
