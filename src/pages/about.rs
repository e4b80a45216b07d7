use yew::prelude::*;

use crate::content::VALUES;
use crate::controller::view::{NavRequest, ViewKind};
use crate::Navigate;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub navigate: Navigate,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let start_project = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(NavRequest::to(ViewKind::Contact)))
    };

    html! {
        <div class="about-page">
            <style>
                {r#"
                .about-page {
                    padding: 8rem 0 5rem;
                    min-height: 100vh;
                }
                .about-hero {
                    padding: 0 6rem;
                    margin-bottom: 5rem;
                }
                .about-hero h1 {
                    font-size: clamp(3rem, 8vw, 6rem);
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    margin: 1rem 0 2rem;
                }
                .about-hero h1 span {
                    color: rgba(17, 17, 17, 0.3);
                }
                .about-hero p.lead {
                    max-width: 42rem;
                    font-size: 1.25rem;
                    line-height: 1.7;
                    color: rgba(17, 17, 17, 0.7);
                }
                .mission {
                    background: #111111;
                    color: #ffffff;
                    padding: 6rem;
                    margin-bottom: 5rem;
                }
                .mission-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                }
                .mission h2 {
                    font-size: 2.25rem;
                    letter-spacing: -0.025em;
                    margin: 1rem 0 0;
                }
                .mission-copy p {
                    color: rgba(255, 255, 255, 0.7);
                    line-height: 1.7;
                }
                .values {
                    padding: 0 6rem;
                    margin-bottom: 5rem;
                    text-align: center;
                }
                .values h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    margin: 1rem 0 4rem;
                }
                .values-grid {
                    max-width: 64rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 2rem;
                }
                .value-number {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: #111111;
                    color: #ffffff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin: 0 auto 1.5rem;
                    font-size: 1.25rem;
                    font-weight: 300;
                }
                .value-card p {
                    color: rgba(17, 17, 17, 0.6);
                }
                .about-cta {
                    text-align: center;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .about-cta h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                }
                .about-cta p {
                    color: rgba(17, 17, 17, 0.6);
                    margin-bottom: 2rem;
                }
                .about-cta .pill-button {
                    background: #111111;
                    color: #ffffff;
                }
                .about-cta .pill-button:hover {
                    background: #333333;
                }
                @media (max-width: 768px) {
                    .about-hero, .values { padding: 0 1.5rem; }
                    .mission { padding: 4rem 1.5rem; }
                    .mission-grid, .values-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>

            <div class="about-hero">
                <p class="eyebrow">{"ABOUT US"}</p>
                <h1>{"We Build Visual"}<br /><span>{"Legacies"}</span></h1>
                <p class="lead">
                    {"ÆSTHETIX is a premium visual content agency specializing in high-end photography, videography and brand identity for luxury brands, hotels and ambitious personal brands."}
                </p>
            </div>

            <div class="mission">
                <div class="mission-grid">
                    <div>
                        <p class="eyebrow">{"OUR MISSION"}</p>
                        <h2>{"Standard is the enemy of premium."}</h2>
                    </div>
                    <div class="mission-copy">
                        <p>
                            {"We don't just create content; we craft visual experiences that elevate brands above the noise. In a world saturated with mediocre imagery, we deliver work that commands attention and builds lasting impressions."}
                        </p>
                        <p>
                            {"Every frame we capture and every edit we make is guided by one principle: your brand deserves to look as exceptional as it truly is."}
                        </p>
                    </div>
                </div>
            </div>

            <div class="values">
                <p class="eyebrow">{"OUR VALUES"}</p>
                <h2>{"What Drives Us"}</h2>
                <div class="values-grid">
                    {
                        VALUES.iter().enumerate().map(|(idx, value)| html! {
                            <div key={value.title} class="value-card">
                                <div class="value-number">{idx + 1}</div>
                                <h3>{value.title}</h3>
                                <p>{value.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <div class="about-cta">
                <h2>{"Ready to elevate your brand?"}</h2>
                <p>{"Let's create something exceptional together."}</p>
                <button class="pill-button" onclick={start_project}>
                    {"START YOUR PROJECT →"}
                </button>
            </div>
        </div>
    }
}
