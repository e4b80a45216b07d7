use yew::prelude::*;

use crate::content::ClientLogo;

#[derive(Properties, PartialEq)]
pub struct LogoMarqueeProps {
    pub logos: &'static [ClientLogo],
}

/// Endless logo strip. The list is rendered twice so the CSS loop has no seam.
#[function_component(LogoMarquee)]
pub fn logo_marquee(props: &LogoMarqueeProps) -> Html {
    html! {
        <section class="trusted-by">
            <style>
                {r#"
                .trusted-by {
                    padding: 4rem 0;
                    border-top: 1px solid #e5e5e5;
                    border-bottom: 1px solid #e5e5e5;
                    overflow: hidden;
                }
                .trusted-by .eyebrow {
                    text-align: center;
                    opacity: 0.4;
                    margin-bottom: 2rem;
                }
                .marquee-track {
                    display: flex;
                    align-items: center;
                    width: max-content;
                    animation: marquee 30s linear infinite;
                }
                .marquee-item {
                    flex-shrink: 0;
                    width: 140px;
                    margin: 0 3rem;
                }
                .marquee-item img {
                    width: 140px;
                    height: 40px;
                    object-fit: contain;
                }
                @keyframes marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                "#}
            </style>
            <p class="eyebrow">{"TRUSTED BY"}</p>
            <div class="marquee-track">
                {
                    props.logos.iter().chain(props.logos.iter()).enumerate().map(|(idx, logo)| {
                        html! {
                            <div key={idx} class="marquee-item">
                                <img src={logo.src} alt={logo.alt} />
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
