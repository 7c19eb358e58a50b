//! Contact form mock (`#contact`).
//!
//! Fields come from [`CONTACT_FIELDS`]. The form has no `action`, the button
//! is `type="button"` and nothing reads the inputs.

use leptos::prelude::*;

use crate::types::{ContactField, FieldKind, CONTACT_FIELDS};

/// Card with heading, the three labelled fields and an inert send button.
#[component]
pub fn Contact() -> impl IntoView {
    let last = CONTACT_FIELDS.len() - 1;

    view! {
        <div id="contact" class="container py-5">
            <div class="row justify-content-center">
                <div class="col-lg-6 col-md-8">
                    <div class="bg-white p-4 p-md-5 shadow-sm rounded-4 border">
                        <h2 class="fw-bold mb-2 text-center">"Get In Touch"</h2>
                        <p class="text-center text-muted mb-4">"Have a project in mind? Let's talk."</p>
                        <form>
                            {CONTACT_FIELDS
                                .into_iter()
                                .enumerate()
                                .map(|(idx, field)| {
                                    let is_last = idx == last;
                                    view! { <FormField field=field last=is_last /> }
                                })
                                .collect::<Vec<_>>()}
                            <button type="button" class="btn btn-primary w-100 py-2 fw-bold">
                                "Send Message"
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn FormField(field: ContactField, last: bool) -> impl IntoView {
    let group_class = if last { "mb-4" } else { "mb-3" };
    let control = match field.kind {
        FieldKind::TextArea { rows } => view! {
            <textarea class="form-control" rows=rows.to_string() placeholder=field.placeholder></textarea>
        }
        .into_any(),
        FieldKind::Text | FieldKind::Email => view! {
            <input class="form-control" type=field.kind.input_type() placeholder=field.placeholder />
        }
        .into_any(),
    };

    view! {
        <div class=group_class>
            <label class="form-label fw-semibold">{field.label}</label>
            {control}
        </div>
    }
}
