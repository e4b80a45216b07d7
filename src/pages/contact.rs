use gloo_console::log;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::content::{BUDGET_OPTIONS, CHANNEL_OPTIONS, GOAL_OPTIONS, SEGMENT_OPTIONS};
use crate::controller::lifecycle::Liveness;
use crate::controller::submission::{SubmissionStatus, SubmitAction, INCOMPLETE_HINT};
use crate::controller::view::{NavRequest, ViewKind};
use crate::relay::{self, ContactForm};
use crate::Navigate;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub navigate: Navigate,
}

fn text_input(
    form: &UseStateHandle<ContactForm>,
    field: fn(&mut ContactForm) -> &mut String,
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        *field(&mut next) = input.value();
        form.set(next);
    })
}

fn single_choice(
    title: &'static str,
    name: &'static str,
    options: &'static [&'static str],
    selected: Option<&str>,
    on_pick: Callback<&'static str>,
) -> Html {
    html! {
        <div class="form-block">
            <h3>{title}</h3>
            <div class="choice-grid">
                {
                    options.iter().copied().map(|option| {
                        let on_pick = on_pick.clone();
                        html! {
                            <label key={option} class={classes!("choice", (selected == Some(option)).then(|| "selected"))}>
                                <input
                                    type="radio"
                                    name={name}
                                    value={option}
                                    checked={selected == Some(option)}
                                    onchange={Callback::from(move |_: Event| on_pick.emit(option))}
                                />
                                <span>{option}</span>
                            </label>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let form = use_state(ContactForm::default);
    let status = use_reducer(SubmissionStatus::default);
    let hint = use_state(|| None::<&'static str>);
    let liveness = use_memo(|_| Liveness::new(), ());

    // A reply that lands after the view is gone must not touch its state
    {
        let liveness = liveness.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    liveness.release();
                }
            },
            (),
        );
    }

    let onsubmit = {
        let form = form.clone();
        let hint = hint.clone();
        let dispatcher = status.dispatcher();
        let can_submit = status.can_submit();
        let liveness = (*liveness).clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !can_submit {
                return;
            }
            let current = (*form).clone();
            if !current.is_complete() {
                hint.set(Some(INCOMPLETE_HINT));
                return;
            }
            hint.set(None);
            dispatcher.dispatch(SubmitAction::Start);

            let dispatcher = dispatcher.clone();
            let liveness = liveness.clone();
            spawn_local(async move {
                let result = relay::submit(&current).await;
                if liveness.is_alive() {
                    dispatcher.dispatch(SubmitAction::Resolve(result));
                } else {
                    log!("Contact view closed before the relay answered, dropping result");
                }
            });
        })
    };

    if *status == SubmissionStatus::Sent {
        let back_home = {
            let navigate = props.navigate.clone();
            Callback::from(move |_: MouseEvent| navigate.emit(NavRequest::to(ViewKind::Home)))
        };
        return html! {
            <div class="contact-sent">
                <style>
                    {r#"
                    .contact-sent {
                        min-height: 100vh;
                        padding: 10rem 1.5rem 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                    }
                    .sent-check {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 50%;
                        background: #000000;
                        color: #ffffff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2rem;
                        margin-bottom: 2rem;
                    }
                    .contact-sent h2 {
                        font-size: 2.25rem;
                        letter-spacing: -0.05em;
                        margin: 0 0 1rem;
                    }
                    .contact-sent p {
                        max-width: 28rem;
                        color: #4b5563;
                        margin-bottom: 2rem;
                    }
                    .contact-sent button {
                        font-size: 0.875rem;
                        border-bottom: 1px solid #000000;
                        padding-bottom: 0.25rem;
                    }
                    "#}
                </style>
                <div class="sent-check">{"✓"}</div>
                <h2>{"Application Received."}</h2>
                <p>{"Thank you. We will review your vision and get back to you within 48 hours if it's a match."}</p>
                <button onclick={back_home}>{"Back to Home"}</button>
            </div>
        };
    }

    let pick = |apply: fn(&mut ContactForm, &'static str)| {
        let form = form.clone();
        Callback::from(move |option: &'static str| {
            let mut next = (*form).clone();
            apply(&mut next, option);
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = input.value();
            form.set(next);
        })
    };

    let sending = status.is_sending();
    let error_message = status.notice(*hint);

    html! {
        <div class="contact-page">
            <style>
                {r#"
                .contact-page {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 8rem 1.5rem;
                    min-height: 100vh;
                }
                .contact-intro {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .contact-intro h1 {
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    margin: 0 0 1rem;
                }
                .contact-intro p {
                    color: #6b7280;
                }
                .form-block {
                    margin-bottom: 4rem;
                }
                .form-block h3 {
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    opacity: 0.6;
                    border-bottom: 1px solid #e5e5e5;
                    padding-bottom: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .identity-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                .contact-page input[type="text"],
                .contact-page input[type="email"],
                .contact-page textarea {
                    width: 100%;
                    box-sizing: border-box;
                    background: transparent;
                    border: none;
                    border-bottom: 1px solid #d1d5db;
                    padding: 0.75rem 0;
                    font: inherit;
                    transition: border-color 0.3s ease;
                }
                .contact-page input:focus,
                .contact-page textarea:focus {
                    outline: none;
                    border-bottom-color: #000000;
                }
                .choice-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .choice {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem;
                    border: 1px solid #e5e5e5;
                    border-radius: 0.5rem;
                    cursor: pointer;
                    transition: border-color 0.3s ease;
                }
                .choice:hover,
                .choice.selected {
                    border-color: #000000;
                }
                .form-error {
                    color: #dc2626;
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .submit-row {
                    text-align: center;
                }
                .submit-button {
                    background: #000000;
                    color: #ffffff;
                    padding: 1.25rem 4rem;
                    border-radius: 9999px;
                    letter-spacing: 0.15em;
                    font-size: 0.875rem;
                }
                .submit-button:disabled {
                    opacity: 0.5;
                    cursor: wait;
                }
                @media (max-width: 768px) {
                    .identity-grid, .choice-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>

            <div class="contact-intro">
                <h1>{"Let's build your visual legacy."}</h1>
                <p>{"Please take a moment to tell us about your project."}</p>
            </div>

            <form {onsubmit}>
                <div class="form-block">
                    <h3>{"01 Identity"}</h3>
                    <div class="identity-grid">
                        <input type="text" name="name" placeholder="Full Name" required={true}
                            value={form.name.clone()} oninput={text_input(&form, |f| &mut f.name)} />
                        <input type="text" name="company" placeholder="Company / Brand"
                            value={form.company.clone()} oninput={text_input(&form, |f| &mut f.company)} />
                        <input type="email" name="email" placeholder="Email" required={true}
                            value={form.email.clone()} oninput={text_input(&form, |f| &mut f.email)} />
                        <input type="text" name="website" placeholder="Website or IG Handle"
                            value={form.website.clone()} oninput={text_input(&form, |f| &mut f.website)} />
                    </div>
                </div>

                { single_choice(
                    "02 Which area should we elevate?",
                    "segment",
                    SEGMENT_OPTIONS,
                    form.segment.as_deref(),
                    pick(|f, option| f.segment = Some(option.to_string())),
                ) }

                { single_choice(
                    "03 Primary Goal",
                    "goal",
                    GOAL_OPTIONS,
                    form.goal.as_deref(),
                    pick(|f, option| f.goal = Some(option.to_string())),
                ) }

                <div class="form-block">
                    <h3>{"04 Where will assets live?"}</h3>
                    <div class="choice-grid">
                        {
                            CHANNEL_OPTIONS.iter().copied().map(|option| {
                                let checked = form.channels.iter().any(|c| c == option);
                                let onchange = {
                                    let form = form.clone();
                                    Callback::from(move |e: Event| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        let mut next = (*form).clone();
                                        next.toggle_channel(option, input.checked());
                                        form.set(next);
                                    })
                                };
                                html! {
                                    <label key={option} class={classes!("choice", checked.then(|| "selected"))}>
                                        <input type="checkbox" name="channels" value={option} {checked} {onchange} />
                                        <span>{option}</span>
                                    </label>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                { single_choice(
                    "05 Strategic Investment",
                    "budget",
                    BUDGET_OPTIONS,
                    form.budget.as_deref(),
                    pick(|f, option| f.budget = Some(option.to_string())),
                ) }

                <div class="form-block">
                    <h3>{"06 Final Note"}</h3>
                    <textarea
                        name="message"
                        rows="4"
                        placeholder="Anything else we should know? Briefly describe your vision."
                        value={form.message.clone()}
                        oninput={on_message}
                    />
                </div>

                {
                    if let Some(message) = error_message {
                        html! { <p class="form-error">{message}</p> }
                    } else {
                        html! {}
                    }
                }

                <div class="submit-row">
                    <button type="submit" class="submit-button" disabled={sending}>
                        { if sending { "SENDING..." } else { "SEND APPLICATION" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
