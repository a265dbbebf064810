use super::api::FetchEndpoint;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::components::SectionTitle;
use contracts::config::SiteConfig;
use contracts::content::Section;
use contracts::usecases::u101_contact_form::{
    send, ContactField, ContactSession, SubmissionState,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn submit_label(state: &SubmissionState) -> &'static str {
    if state.is_loading() {
        "Sending..."
    } else {
        "Send Message"
    }
}

/// Notice under the form: (css class, text). Nothing while idle or loading.
fn status_notice(state: &SubmissionState) -> Option<(&'static str, String)> {
    match state {
        SubmissionState::Success => Some((
            "contact__notice contact__notice--success",
            "✅ Message sent! I’ll reply soon.".to_string(),
        )),
        SubmissionState::Error(err) => Some((
            "contact__notice contact__notice--error",
            format!("❌ Couldn’t send. {}", err),
        )),
        SubmissionState::Idle | SubmissionState::Loading => None,
    }
}

fn field_value(session: RwSignal<ContactSession>, field: ContactField) -> Signal<String> {
    Signal::derive(move || session.with(|s| s.form().get(field).to_string()))
}

fn field_input(session: RwSignal<ContactSession>, field: ContactField) -> Callback<String> {
    Callback::new(move |value: String| session.update(|s| s.set_field(field, value)))
}

#[component]
fn ContactInput(session: RwSignal<ContactSession>, field: ContactField) -> impl IntoView {
    view! {
        <Input
            name=field.name()
            input_type=field.input_type()
            placeholder=field.placeholder()
            required=field.required()
            value=field_value(session, field)
            on_input=field_input(session, field)
        />
    }
}

/// "Get in Touch" section: contact form posting to the form endpoint
#[component]
pub fn ContactSection() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let session = RwSignal::new(ContactSession::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(form) = session.try_update(|s| s.begin()).flatten() else {
            return;
        };
        let endpoint = FetchEndpoint::new(config.form_endpoint.clone());

        spawn_local(async move {
            let outcome = send(&endpoint, &form).await;
            session.update(|s| s.complete(outcome));
        });
    };

    let message = ContactField::Message;

    view! {
        <section id=Section::Contact.anchor() class="section">
            <SectionTitle
                title=Section::Contact.title()
                subtitle="I'd love to hear from you — drop me a message anytime."
            />
            <form class="contact" on:submit=on_submit>
                <div class="contact__names">
                    <ContactInput session=session field=ContactField::FirstName />
                    <ContactInput session=session field=ContactField::LastName />
                </div>

                <ContactInput session=session field=ContactField::ReplyTo />

                <Textarea
                    name=message.name()
                    placeholder=message.placeholder()
                    required=message.required()
                    rows=6
                    value=field_value(session, message)
                    on_input=field_input(session, message)
                />

                <Button
                    button_type="submit"
                    class="contact__submit"
                    disabled=Signal::derive(move || session.with(ContactSession::submit_disabled))
                >
                    {move || session.with(|s| submit_label(s.state()))}
                </Button>

                {move || session.with(|s| status_notice(s.state())).map(|(class, text)| view! {
                    <p class=class>{text}</p>
                })}
            </form>
        </section>
    }
}
