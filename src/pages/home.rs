use yew::prelude::*;

use crate::components::{
    card_fan::CardFan, counter::AnimatedCounter, faq::FaqSection, hero::Hero,
    marquee::LogoMarquee, testimonials::Testimonials,
};
use crate::content::{CATEGORIES, CLIENT_LOGOS, FAQS, STATS, TESTIMONIALS};
use crate::controller::view::{NavRequest, ViewKind};
use crate::Navigate;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub navigate: Navigate,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let start_project = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(NavRequest::to(ViewKind::Contact)))
    };

    html! {
        <div class="home-page">
            <style>
                {r#"
                .promise {
                    padding: 7rem 1.5rem;
                    text-align: center;
                }
                .promise h2 {
                    font-size: clamp(2rem, 5vw, 3.75rem);
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    margin: 1.5rem 0;
                }
                .promise h2 span {
                    color: rgba(17, 17, 17, 0.4);
                }
                .promise p.lead {
                    font-size: 1.25rem;
                    color: rgba(17, 17, 17, 0.6);
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .stats-band {
                    position: relative;
                    background: #111111;
                    color: #ffffff;
                    padding: 6rem 3rem;
                    overflow: hidden;
                }
                .stats-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, minmax(0, 1fr));
                    gap: 2rem;
                    text-align: center;
                }
                .stat-value {
                    font-size: clamp(3rem, 6vw, 4.5rem);
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    margin: 0 0 0.75rem;
                }
                .stat-accent {
                    width: 2rem;
                    height: 1px;
                    margin: 0 auto 0.75rem;
                    background: linear-gradient(to right, transparent, #C9A962, transparent);
                }
                .stat-label {
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: rgba(255, 255, 255, 0.4);
                }
                .philosophy {
                    position: relative;
                    min-height: 80vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    color: #ffffff;
                    padding: 8rem 3rem;
                    overflow: hidden;
                }
                .philosophy video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .philosophy-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                }
                .philosophy-content {
                    position: relative;
                    z-index: 10;
                }
                .philosophy h2 {
                    font-size: clamp(2.25rem, 7vw, 4.5rem);
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    max-width: 64rem;
                    margin: 2rem auto;
                }
                .philosophy .divider {
                    width: 4rem;
                    height: 1px;
                    background: rgba(255, 255, 255, 0.2);
                    margin: 3rem auto;
                }
                .philosophy p.lead {
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 1.125rem;
                    line-height: 1.7;
                }
                .philosophy .pill-button:hover {
                    background: #ffffff;
                    color: #000000;
                }
                @media (max-width: 768px) {
                    .stats-grid {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                        gap: 3rem;
                    }
                }
                "#}
            </style>

            <Hero categories={CATEGORIES} navigate={props.navigate.clone()} />

            <section class="promise">
                <p class="eyebrow">{"THE PROMISE"}</p>
                <h2>{"More bookings."}<br /><span>{"Less guesswork."}</span></h2>
                <p class="lead">
                    {"You already deliver unforgettable experiences. We make sure your content does the same, and actually drives demand."}
                </p>
            </section>

            <LogoMarquee logos={CLIENT_LOGOS} />

            <CardFan categories={CATEGORIES} navigate={props.navigate.clone()} />

            <Testimonials items={TESTIMONIALS} />

            <section class="stats-band">
                <div class="stats-grid">
                    {
                        STATS.iter().map(|stat| html! {
                            <div key={stat.label}>
                                <p class="stat-value">
                                    <AnimatedCounter end={stat.value} suffix={stat.suffix} />
                                </p>
                                <div class="stat-accent"></div>
                                <p class="stat-label">{stat.label}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="philosophy">
                <video autoplay={true} muted={true} loop={true} playsinline={true}>
                    <source src="/videos/philosophy.mp4" type="video/mp4" />
                </video>
                <div class="philosophy-overlay"></div>
                <div class="philosophy-content">
                    <p class="eyebrow">{"OUR PHILOSOPHY"}</p>
                    <h2>{"Standard is the enemy of premium."}</h2>
                    <div class="divider"></div>
                    <p class="lead">
                        {"We don't just create content; we build visual legacies. At ÆSTHETIX, we blend high-end aesthetics with strategic precision to turn scrollers into loyal advocates."}
                    </p>
                    <button class="pill-button" onclick={start_project}>
                        {"START YOUR PROJECT →"}
                    </button>
                </div>
            </section>

            <FaqSection items={FAQS} />
        </div>
    }
}
