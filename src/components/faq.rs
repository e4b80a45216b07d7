use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::Faq;
use crate::controller::faq::FaqAccordion;

#[derive(Properties, PartialEq)]
pub struct FaqSectionProps {
    pub items: &'static [Faq],
}

#[function_component(FaqSection)]
pub fn faq_section(props: &FaqSectionProps) -> Html {
    let accordion = use_state(FaqAccordion::default);

    html! {
        <section class="faq-section">
            <style>
                {r#"
                .faq-section {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 8rem 1.5rem;
                }
                .faq-section h2 {
                    text-align: center;
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    margin: 0.5rem 0 4rem;
                }
                .faq-item {
                    border-bottom: 1px solid #e5e5e5;
                }
                .faq-question {
                    width: 100%;
                    padding: 2rem 0;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    text-align: left;
                    font-size: 1.2rem;
                    font-weight: 500;
                    transition: opacity 0.3s ease;
                }
                .faq-question:hover {
                    opacity: 0.7;
                }
                .toggle-icon {
                    flex-shrink: 0;
                    margin-left: 2rem;
                    transition: transform 0.3s ease;
                }
                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }
                .faq-answer {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: all 0.5s ease-in-out;
                }
                .faq-item.open .faq-answer {
                    max-height: 24rem;
                    opacity: 1;
                    margin-bottom: 2rem;
                }
                .faq-answer p {
                    color: #4b5563;
                    line-height: 1.7;
                    max-width: 42rem;
                    margin: 0;
                }
                "#}
            </style>
            <p class="eyebrow" style="text-align: center;">{"FAQ"}</p>
            <h2>{"Questions & Answers"}</h2>
            {
                props.items.iter().enumerate().map(|(idx, item)| {
                    let toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            accordion.set(accordion.toggled(idx));
                        })
                    };
                    html! {
                        <div key={idx} class={classes!("faq-item", accordion.is_open(idx).then(|| "open"))}>
                            <button class="faq-question" onclick={toggle}>
                                <span>{item.question}</span>
                                <span class="toggle-icon">{"⌄"}</span>
                            </button>
                            <div class="faq-answer">
                                <p>{item.answer}</p>
                            </div>
                        </div>
                    }
                }).collect::<Html>()
            }
        </section>
    }
}
