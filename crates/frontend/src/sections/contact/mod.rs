//! Contact section: CTA, validated form and asynchronous submission.
//!
//! Fields validate on blur and re-validate live once marked invalid. A
//! filled honeypot fakes success without sending. While the endpoint is
//! the placeholder, submission falls back to a prefilled `mailto:` URL.

pub mod validate;

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::dom;
use crate::shared::i18n::{use_i18n, I18nContext};
use validate::ContactField;

const FORM_ENDPOINT: &str = "https://formspree.io/f/YOUR_FORM_ID";
const ENDPOINT_PLACEHOLDER: &str = "YOUR_FORM_ID";
// Not exposed in the markup; only used by the mailto fallback and the
// failure message.
const AUTHOR_EMAIL: &str = "hello@gscruz.dev";
// Compensates the fixed header when scrolling to the form.
const SCROLL_OFFSET: f64 = 80.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SubmitState {
    Idle,
    Loading,
    Sent,
}

impl SubmitState {
    fn as_str(self) -> &'static str {
        match self {
            SubmitState::Idle => "idle",
            SubmitState::Loading => "loading",
            SubmitState::Sent => "sent",
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            SubmitState::Idle => "contact.submit",
            SubmitState::Loading => "contact.submitting",
            SubmitState::Sent => "contact.submitted",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum StatusKind {
    Success,
    Error,
}

#[derive(Serialize)]
struct ContactPayload {
    name: String,
    email: String,
    subject: String,
    message: String,
}

/// Signals of one validated field.
#[derive(Clone, Copy)]
struct FieldSlot {
    field: ContactField,
    value: RwSignal<String>,
    error: RwSignal<Option<&'static str>>,
    touched: RwSignal<bool>,
}

impl FieldSlot {
    fn new(field: ContactField) -> Self {
        Self {
            field,
            value: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            touched: RwSignal::new(false),
        }
    }

    /// Run the field rule and update the error slot. True when valid.
    fn validate(self) -> bool {
        self.touched.set(true);
        match self.field.validate(&self.value.get_untracked()) {
            Ok(()) => {
                self.error.set(None);
                true
            }
            Err(key) => {
                self.error.set(Some(key));
                false
            }
        }
    }

    /// Re-run the rule only once the field is already marked invalid, so
    /// first-time typing is not interrupted.
    fn revalidate_if_invalid(self) {
        if self.error.get_untracked().is_some() {
            self.validate();
        }
    }

    fn reset(self) {
        self.value.set(String::new());
        self.error.set(None);
        self.touched.set(false);
    }

    fn input_id(self) -> String {
        format!("cf-{}", self.field.name())
    }

    fn trimmed_value(self) -> String {
        self.value.get_untracked().trim().to_string()
    }

    fn error_text(self, i18n: I18nContext) -> Signal<Option<String>> {
        Signal::derive(move || self.error.get().map(|key| i18n.t(key)))
    }

    fn is_valid(self) -> Signal<bool> {
        Signal::derive(move || self.touched.get() && self.error.get().is_none())
    }

    fn label(self, i18n: I18nContext) -> Signal<String> {
        Signal::derive(move || i18n.t(self.field.label_key()))
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let i18n = use_i18n();

    let name_slot = FieldSlot::new(ContactField::Name);
    let email_slot = FieldSlot::new(ContactField::Email);
    let subject_slot = FieldSlot::new(ContactField::Subject);
    let message_slot = FieldSlot::new(ContactField::Message);
    let fields = [name_slot, email_slot, subject_slot, message_slot];

    let honeypot = RwSignal::new(String::new());
    let submit_state = RwSignal::new(SubmitState::Idle);
    let status = RwSignal::new(Option::<(StatusKind, &'static str)>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        status.set(None);

        let mut all_valid = true;
        for slot in fields {
            if !slot.validate() {
                all_valid = false;
            }
        }
        if !all_valid {
            if let Some(slot) = fields
                .iter()
                .find(|slot| slot.error.get_untracked().is_some())
            {
                dom::focus_by_id(&slot.input_id());
            }
            return;
        }

        // A filled honeypot means a bot; pretend success without sending.
        if !honeypot.get_untracked().trim().is_empty() {
            status.set(Some((StatusKind::Success, "contact.status_sent")));
            for slot in fields {
                slot.reset();
            }
            honeypot.set(String::new());
            return;
        }

        let payload = ContactPayload {
            name: name_slot.trimmed_value(),
            email: email_slot.trimmed_value(),
            subject: subject_slot.trimmed_value(),
            message: message_slot.trimmed_value(),
        };

        submit_state.set(SubmitState::Loading);
        spawn_local(async move {
            if endpoint_is_placeholder() {
                // Development fallback: open the visitor's mail client.
                open_mailto(&payload);
                status.set(Some((StatusKind::Success, "contact.status_mailto")));
            } else {
                match send_message(&payload).await {
                    Ok(()) => status.set(Some((StatusKind::Success, "contact.status_sent"))),
                    Err(err) => {
                        log::error!("contact form submission failed: {err}");
                        status.set(Some((StatusKind::Error, "contact.status_error")));
                        // Release immediately so the visitor can retry.
                        submit_state.set(SubmitState::Idle);
                        return;
                    }
                }
            }

            submit_state.set(SubmitState::Sent);
            for slot in fields {
                slot.reset();
            }
            honeypot.set(String::new());

            // Back to idle after a pause, allowing another message.
            TimeoutFuture::new(4000).await;
            if submit_state.get_untracked() == SubmitState::Sent {
                submit_state.set(SubmitState::Idle);
            }
        });
    };

    let on_cta = Callback::new(move |_: leptos::ev::MouseEvent| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let form_area = window
            .document()
            .and_then(|d| d.get_element_by_id("contact-form-area"));
        let Some(form_area) = form_area else {
            return;
        };
        let top = form_area.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0)
            - SCROLL_OFFSET;
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);

        // Focus the first field once the scroll settles.
        spawn_local(async move {
            TimeoutFuture::new(500).await;
            dom::focus_by_id("cf-name");
        });
    });

    let status_class = move || match status.get() {
        None => "cf-status".to_string(),
        Some((StatusKind::Success, _)) => "cf-status cf-status--success".to_string(),
        Some((StatusKind::Error, _)) => "cf-status cf-status--error".to_string(),
    };
    let status_text = move || {
        status
            .get()
            .map(|(_, key)| i18n.t(key).replace("{email}", AUTHOR_EMAIL))
            .unwrap_or_default()
    };

    view! {
        <section id="contact" class="section contact" aria-labelledby="contact-title">
            <h2 id="contact-title" class="section__title">{move || i18n.t("contact.title")}</h2>
            <p class="contact__lead">{move || i18n.t("contact.lead")}</p>
            <Button class="contact__cta" on_click=on_cta>
                {move || i18n.t("contact.cta")}
            </Button>

            <div id="contact-form-area" class="contact__form-area">
                <form id="contact-form" class="cf" novalidate=true on:submit=on_submit>
                    <Input
                        label=name_slot.label(i18n)
                        id=name_slot.input_id()
                        name=ContactField::Name.name()
                        autocomplete="name"
                        value=name_slot.value
                        error=name_slot.error_text(i18n)
                        valid=name_slot.is_valid()
                        on_blur=Callback::new(move |_| {
                            name_slot.validate();
                        })
                        on_input=Callback::new(move |_| name_slot.revalidate_if_invalid())
                    />
                    <Input
                        label=email_slot.label(i18n)
                        id=email_slot.input_id()
                        name=ContactField::Email.name()
                        input_type="email"
                        autocomplete="email"
                        value=email_slot.value
                        error=email_slot.error_text(i18n)
                        valid=email_slot.is_valid()
                        on_blur=Callback::new(move |_| {
                            email_slot.validate();
                        })
                        on_input=Callback::new(move |_| email_slot.revalidate_if_invalid())
                    />
                    <Input
                        label=subject_slot.label(i18n)
                        id=subject_slot.input_id()
                        name=ContactField::Subject.name()
                        value=subject_slot.value
                        error=subject_slot.error_text(i18n)
                        valid=subject_slot.is_valid()
                        on_blur=Callback::new(move |_| {
                            subject_slot.validate();
                        })
                        on_input=Callback::new(move |_| subject_slot.revalidate_if_invalid())
                    />
                    <Textarea
                        label=message_slot.label(i18n)
                        id=message_slot.input_id()
                        name=ContactField::Message.name()
                        rows=8
                        value=message_slot.value
                        error=message_slot.error_text(i18n)
                        valid=message_slot.is_valid()
                        on_blur=Callback::new(move |_| {
                            message_slot.validate();
                        })
                        on_input=Callback::new(move |_| message_slot.revalidate_if_invalid())
                    />

                    // Honeypot: hidden from people, filled by bots.
                    <div class="cf-honeypot" aria-hidden="true">
                        <label for="cf-bot-field">"Leave this field empty"</label>
                        <input
                            id="cf-bot-field"
                            name="bot_field"
                            type="text"
                            tabindex="-1"
                            autocomplete="off"
                            prop:value=move || honeypot.get()
                            on:input=move |ev| honeypot.set(event_target_value(&ev))
                        />
                    </div>

                    <button
                        type="submit"
                        id="cf-submit"
                        class="btn btn--primary cf-submit"
                        data-state=move || submit_state.get().as_str()
                        prop:disabled=move || submit_state.get() != SubmitState::Idle
                    >
                        {move || i18n.t(submit_state.get().label_key())}
                    </button>

                    <div id="cf-status" class=status_class role="status">
                        {status_text}
                    </div>
                </form>
            </div>
        </section>
    }
}

fn endpoint_is_placeholder() -> bool {
    FORM_ENDPOINT.contains(ENDPOINT_PLACEHOLDER)
}

async fn send_message(payload: &ContactPayload) -> Result<(), gloo_net::Error> {
    let response = Request::post(FORM_ENDPOINT)
        .header("Accept", "application/json")
        .json(payload)?
        .send()
        .await?;
    if !response.ok() {
        return Err(gloo_net::Error::GlooError(format!(
            "server replied with status {}",
            response.status()
        )));
    }
    Ok(())
}

/// Open the visitor's mail client with the message prefilled.
fn open_mailto(payload: &ContactPayload) {
    let body = format!("{}\n\n— {} ({})", payload.message, payload.name, payload.email);
    let url = format!(
        "mailto:{AUTHOR_EMAIL}?subject={}&body={}",
        urlencoding::encode(&payload.subject),
        urlencoding::encode(&body),
    );
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(&url);
    }
}
