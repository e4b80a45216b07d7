use yew::prelude::*;

use crate::content::Testimonial;

const STAR_PATH: &str = "M10 15l-5.878 3.09 1.123-6.545L.489 6.91l6.572-.955L10 0l2.939 5.955 6.572.955-4.756 4.635 1.123 6.545z";

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub items: &'static [Testimonial],
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    html! {
        <section class="testimonials">
            <style>
                {r#"
                .testimonials {
                    padding: 8rem 3rem;
                }
                .testimonials h2 {
                    text-align: center;
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    margin: 0.5rem 0 4rem;
                }
                .testimonial-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                    gap: 1.5rem;
                }
                .testimonial-card {
                    background: #ffffff;
                    padding: 2rem;
                    border-radius: 1rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    display: flex;
                    flex-direction: column;
                    transition: box-shadow 0.3s ease;
                }
                .testimonial-card:hover {
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                }
                .testimonial-stars {
                    display: flex;
                    gap: 0.25rem;
                    margin-bottom: 1rem;
                }
                .testimonial-stars svg {
                    width: 1rem;
                    height: 1rem;
                    fill: #facc15;
                }
                .testimonial-quote {
                    flex-grow: 1;
                    line-height: 1.6;
                    color: rgba(17, 17, 17, 0.8);
                    margin: 0 0 1.5rem;
                }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding-top: 1rem;
                    border-top: 1px solid #f3f4f6;
                }
                .testimonial-avatar {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: rgba(17, 17, 17, 0.1);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.125rem;
                }
                .testimonial-author p {
                    margin: 0;
                }
                .testimonial-role {
                    font-size: 0.875rem;
                    opacity: 0.6;
                }
                "#}
            </style>
            <p class="eyebrow" style="text-align: center;">{"TESTIMONIALS"}</p>
            <h2>{"What Our Clients Say"}</h2>
            <div class="testimonial-grid">
                {
                    props.items.iter().enumerate().map(|(idx, testimonial)| {
                        html! {
                            <div key={idx} class="testimonial-card">
                                <div class="testimonial-stars">
                                    { for (0..5).map(|_| html! {
                                        <svg viewBox="0 0 20 20"><path d={STAR_PATH} /></svg>
                                    }) }
                                </div>
                                <p class="testimonial-quote">{format!("“{}”", testimonial.quote)}</p>
                                <div class="testimonial-author">
                                    <div class="testimonial-avatar">{testimonial.initial()}</div>
                                    <div>
                                        <p>{testimonial.name}</p>
                                        <p class="testimonial-role">{testimonial.role}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
