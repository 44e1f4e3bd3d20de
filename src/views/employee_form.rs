use dioxus::events::FormData;
use dioxus::prelude::*;
use crate::model::{ FormField, IntakeForm, SUBMIT_RESET_DELAY };
use crate::utils::sleep;

#[component]
fn FieldInput(
    field: FormField,
    value: String,
    error: Option<String>,
    on_edit: EventHandler<(FormField, String)>
) -> Element {
    let margin = if field == FormField::Salary { "mb-4" } else { "mb-3" };
    let input_class = if error.is_some() { "form-control is-invalid" } else { "form-control" };

    rsx! {
        div { class: margin,
            label {
                r#for: field.as_str(),
                class: "form-label",
                "{field.label()} "
                span { class: "text-danger", "*" }
            }
            input {
                r#type: field.input_type(),
                class: input_class,
                id: field.as_str(),
                name: field.as_str(),
                value: "{value}",
                placeholder: field.placeholder(),
                step: field.step(),
                oninput: move |evt: Event<FormData>| on_edit.call((field, evt.value())),
            }
            if let Some(message) = error {
                div { class: "invalid-feedback", "{message}" }
            }
        }
    }
}

#[component]
pub fn EmployeeForm() -> Element {
    let mut form = use_signal(IntakeForm::new);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let outcome = form.write().submit();
        match outcome {
            Ok(accepted) => {
                match serde_json::to_string(&accepted.submission) {
                    Ok(payload) => log::info!("Form submitted: {}", payload),
                    Err(e) => log::warn!("Form submitted but could not be serialized: {}", e),
                }

                let ticket = accepted.ticket;
                spawn(async move {
                    sleep(SUBMIT_RESET_DELAY).await;
                    if form.write().expire_submission(ticket) {
                        log::debug!("Cleared form after successful submission");
                    }
                });
            }
            Err(errors) => {
                log::debug!(
                    "Form has errors on: {}",
                    errors.iter().map(|(field, _)| field.as_str()).collect::<Vec<_>>().join(", ")
                );
            }
        }
    };

    let state = form();

    rsx! {
        div { class: "container mt-4",
            div { class: "row justify-content-center",
                div { class: "col-md-8 col-lg-6",
                    div { class: "card shadow",
                        div { class: "card-header bg-primary text-white",
                            h2 { class: "mb-0 text-center", "Employee Form" }
                        }
                        div { class: "card-body",
                            if state.is_submitted() {
                                div {
                                    class: "alert alert-success",
                                    role: "alert",
                                    "Employee details submitted successfully!"
                                }
                            }

                            form {
                                novalidate: true,
                                onsubmit: on_submit,
                                for field in FormField::ALL {
                                    FieldInput {
                                        key: "{field}",
                                        field,
                                        value: state.value(field).to_string(),
                                        error: state.error(field).map(str::to_string),
                                        on_edit: move |(field, value): (FormField, String)| {
                                            form.write().edit(field, value);
                                        },
                                    }
                                }

                                div { class: "form-actions",
                                    button {
                                        r#type: "button",
                                        class: "btn btn-secondary",
                                        onclick: move |_| form.write().reset(),
                                        "Reset"
                                    }
                                    button {
                                        r#type: "submit",
                                        class: "btn btn-primary",
                                        "Submit"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
