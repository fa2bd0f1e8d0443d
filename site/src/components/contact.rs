use leptos::prelude::*;

use super::{ICON_MAIL, Icon};
use crate::contact::{ContactForm, Field, FieldError};
use crate::types::{ContactInfo, SectionId};

/// Contact section with a client-side validated form.
///
/// Submission goes to `ContactInfo::action()`; invalid input blocks the submit
/// and shows the error next to each field.
#[component]
pub fn Contact(contact: ContactInfo) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());

    let action = contact.action();
    let enctype = action.starts_with("mailto:").then_some("text/plain");
    let mailto = format!("mailto:{}", contact.email);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        let found = form.validate();
        if !found.is_empty() {
            ev.prevent_default();
        }
        errors.set(found);
    };

    view! {
        <section id=SectionId::Contact.anchor() class="section contact" aria-labelledby="contact-title">
            <div class="container">
                <h2 id="contact-title" class="section-title">"Get in touch"</h2>
                <p class="contact-intro">
                    "Have a project in mind or just want to say hello? Send a message or email "
                    <a href=mailto class="contact-email">
                        <Icon path=ICON_MAIL size="16" />
                        " "
                        {contact.email}
                    </a>
                    "."
                </p>
                {contact.location.map(|location| view! { <p class="contact-location">{location}</p> })}
                <form
                    class="contact-form"
                    action=action
                    method="post"
                    enctype=enctype
                    novalidate=true
                    on:submit=on_submit
                >
                    <div class="form-field">
                        <label for=Field::Name.input_id()>"Name"</label>
                        <input
                            id=Field::Name.input_id()
                            name="name"
                            type="text"
                            autocomplete="name"
                            required=true
                            aria-describedby=Field::Name.error_id()
                            bind:value=name
                        />
                        <FieldErrorText errors=errors field=Field::Name />
                    </div>
                    <div class="form-field">
                        <label for=Field::Email.input_id()>"Email"</label>
                        <input
                            id=Field::Email.input_id()
                            name="email"
                            type="email"
                            autocomplete="email"
                            required=true
                            aria-describedby=Field::Email.error_id()
                            bind:value=email
                        />
                        <FieldErrorText errors=errors field=Field::Email />
                    </div>
                    <div class="form-field">
                        <label for=Field::Message.input_id()>"Message"</label>
                        <textarea
                            id=Field::Message.input_id()
                            name="message"
                            required=true
                            aria-describedby=Field::Message.error_id()
                            bind:value=message
                        ></textarea>
                        <FieldErrorText errors=errors field=Field::Message />
                    </div>
                    <button type="submit" class="btn btn-primary form-submit">
                        "Send message"
                    </button>
                </form>
            </div>
        </section>
    }
}

/// Error text slot for one field. The element is always present so
/// `aria-describedby` resolves; it is empty while the field is valid.
#[component]
fn FieldErrorText(errors: RwSignal<Vec<FieldError>>, field: Field) -> impl IntoView {
    let text = move || {
        errors.with(|errs| {
            errs.iter()
                .find(|e| e.field() == field)
                .map(|e| e.message())
                .unwrap_or_default()
        })
    };

    view! {
        <p id=field.error_id() class="field-error" role="alert" aria-live="polite">
            {text}
        </p>
    }
}
