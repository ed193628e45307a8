use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew::TargetCast;

use super::flow::{AttemptId, SubmissionFlow, SubmissionPhase, SubmitAttempt};
use super::submitter::{millis, submit_before_deadline, SubmitError, SubmitterHandle};
use super::validation::{ContactField, ServiceInterest};
use crate::config;

pub enum Msg {
    Edit(ContactField, String),
    ToggleService(ServiceInterest),
    Submit,
    Resolved(AttemptId, Result<(), SubmitError>),
    AutoReset(AttemptId),
    Retry,
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_default]
    pub submitter: SubmitterHandle,
}

pub struct ContactForm {
    flow: SubmissionFlow,
    // dropping the handle cancels the pending reset
    reset_timer: Option<Timeout>,
}

impl Component for ContactForm {
    type Message = Msg;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            flow: SubmissionFlow::new(config::SUCCESS_RESET_DELAY),
            reset_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(field, value) => {
                self.flow.edit(field, value);
                true
            }
            Msg::ToggleService(service) => {
                self.flow.toggle_service(service);
                true
            }
            Msg::Submit => match self.flow.submit() {
                SubmitAttempt::Dispatched(dispatch) => {
                    let attempt = dispatch.attempt;
                    let submission = submit_before_deadline(
                        ctx.props().submitter.get(),
                        dispatch.request,
                        config::SUBMISSION_TIMEOUT,
                    );
                    ctx.link()
                        .send_future(async move { Msg::Resolved(attempt, submission.await) });
                    true
                }
                SubmitAttempt::Rejected => true,
                SubmitAttempt::Ignored(_) => false,
            },
            Msg::Resolved(attempt, outcome) => {
                if let Some(pending) = self.flow.resolve(attempt, outcome) {
                    let link = ctx.link().clone();
                    self.reset_timer = Some(Timeout::new(millis(pending.delay), move || {
                        link.send_message(Msg::AutoReset(pending.attempt));
                    }));
                }
                true
            }
            Msg::AutoReset(attempt) => {
                self.reset_timer = None;
                self.flow.auto_reset(attempt)
            }
            Msg::Retry => self.flow.retry(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section id="contact" class="section contact">
                <div class="container narrow">
                    <div class="section-heading">
                        <h2>{"Get in Touch"}</h2>
                        <p>{"Ready to grow your business? Fill out the form below and one of our experts will get back to you within 24 hours."}</p>
                    </div>
                    <div class="contact-card">
                        { contact_details() }
                        <div class="contact-body">
                            { match self.flow.phase() {
                                SubmissionPhase::Succeeded => success_panel(),
                                SubmissionPhase::Failed => self.failure_panel(ctx),
                                SubmissionPhase::Idle | SubmissionPhase::Submitting => self.form_view(ctx),
                            } }
                        </div>
                    </div>
                </div>
            </section>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if !self.flow.form().request().is_blank() {
            debug!("discarding unsent contact draft");
        }
        if let Some(timer) = self.reset_timer.take() {
            debug!("contact form torn down, cancelling pending reset");
            timer.cancel();
        }
    }
}

impl ContactForm {
    fn form_view(&self, ctx: &Context<Self>) -> Html {
        let form = self.flow.form();
        let submitting = self.flow.phase() == SubmissionPhase::Submitting;
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let oninput = ctx.link().batch_callback(field_edit);

        let text_input = |field: ContactField, label: &str, kind: &str, placeholder: &str, required: bool| {
            let error = form.errors().get(field);
            html! {
                <div class="field">
                    <label for={field.as_str()}>
                        { if required { format!("{} *", label) } else { label.to_string() } }
                    </label>
                    <input
                        type={kind.to_string()}
                        id={field.as_str()}
                        name={field.as_str()}
                        value={form.request().field(field).to_string()}
                        oninput={oninput.clone()}
                        class={classes!("input", error.is_some().then(|| "invalid"))}
                        placeholder={placeholder.to_string()}
                    />
                    if let Some(error) = error {
                        <p class="field-error">{error.to_string()}</p>
                    }
                </div>
            }
        };

        let message_error = form.errors().get(ContactField::Message);

        html! {
            <form {onsubmit} novalidate={true}>
                <div class="field-grid">
                    { text_input(ContactField::Name, "Your Name", "text", "John Doe", true) }
                    { text_input(ContactField::Email, "Email Address", "email", "john@example.com", true) }
                    { text_input(ContactField::Phone, "Phone Number", "tel", "(123) 456-7890", false) }
                    { text_input(ContactField::Company, "Company Name", "text", "Your Company", false) }
                </div>

                <div class="field">
                    <p class="field-label">{"Services You're Interested In"}</p>
                    <div class="service-options">
                        { for ServiceInterest::ALL.iter().map(|&service| {
                            let onchange = ctx.link().callback(move |_: Event| Msg::ToggleService(service));
                            let input_id = service.input_id();
                            html! {
                                <div class="service-option" key={service.id()}>
                                    <input
                                        type="checkbox"
                                        id={input_id.clone()}
                                        checked={form.request().services.contains(&service)}
                                        {onchange}
                                    />
                                    <label for={input_id}>{service.label()}</label>
                                </div>
                            }
                        }) }
                    </div>
                </div>

                <div class="field">
                    <label for="message">{"Message *"}</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="4"
                        value={form.request().message.clone()}
                        oninput={oninput.clone()}
                        class={classes!("input", message_error.is_some().then(|| "invalid"))}
                        placeholder="Tell us about your project or requirements..."
                    />
                    if let Some(error) = message_error {
                        <p class="field-error">{error.to_string()}</p>
                    }
                </div>

                <button type="submit" class="btn btn-primary btn-block" disabled={submitting}>
                    if submitting {
                        <>
                            <span class="spinner"></span>
                            {"Sending..."}
                        </>
                    } else {
                        {"Send Message \u{2192}"}
                    }
                </button>
            </form>
        }
    }

    fn failure_panel(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.link().callback(|_: MouseEvent| Msg::Retry);
        html! {
            <div class="result-panel">
                <div class="result-icon failure">{"\u{2715}"}</div>
                <h3>{"Oops!"}</h3>
                <p>{"Something went wrong. Please try again."}</p>
                <button class="btn btn-primary" {onclick}>{"Try Again"}</button>
            </div>
        }
    }
}

fn field_edit(e: InputEvent) -> Option<Msg> {
    let (name, value) = if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        (input.name(), input.value())
    } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
        (area.name(), area.value())
    } else {
        warn!("input event from an unexpected element");
        return None;
    };

    match ContactField::from_name(&name) {
        Some(field) => Some(Msg::Edit(field, value)),
        None => {
            warn!("ignoring edit for unknown field {:?}", name);
            None
        }
    }
}

fn success_panel() -> Html {
    html! {
        <div class="result-panel">
            <div class="result-icon success">{"\u{2713}"}</div>
            <h3>{"Thank You!"}</h3>
            <p>{"Your message has been sent successfully. We'll get back to you shortly."}</p>
        </div>
    }
}

fn contact_details() -> Html {
    html! {
        <aside class="contact-details">
            <h3>{"Contact Information"}</h3>
            <p class="muted">{"Fill out the form and our team will get back to you as soon as possible."}</p>
            <dl>
                <dt>{"Phone"}</dt>
                <dd>{"(123) 456-7890"}</dd>
                <dt>{"Email"}</dt>
                <dd>{"info@pixelpulse.com"}</dd>
                <dt>{"Office"}</dt>
                <dd>{"123 Marketing Street"}<br />{"San Francisco, CA 94103"}</dd>
            </dl>
            <h4>{"Connect with us"}</h4>
            <div class="social-row">
                <a href="#" aria-label="Facebook">{"Fb"}</a>
                <a href="#" aria-label="Instagram">{"Ig"}</a>
                <a href="#" aria-label="LinkedIn">{"In"}</a>
                <a href="#" aria-label="Twitter">{"X"}</a>
            </div>
        </aside>
    }
}
