use dioxus::prelude::*;
use crate::configs::directory_endpoint;
use crate::model::{ load_directory, DirectoryState, HttpRecordSource };

#[component]
fn LoadingPanel() -> Element {
    rsx! {
        div { class: "container mt-5",
            div { class: "text-center",
                div {
                    class: "spinner",
                    role: "status",
                    span { class: "visually-hidden", "Loading..." }
                }
                p { class: "mt-3", "Loading employee data..." }
            }
        }
    }
}

#[component]
fn ErrorPanel(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "container mt-5",
            div {
                class: "alert alert-danger",
                role: "alert",
                h4 { class: "alert-heading", "Error!" }
                p { "{message}" }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| on_retry.call(()),
                    "Try Again"
                }
            }
        }
    }
}

/// Employee listing, fetched fresh every time the page is opened.
#[component]
pub fn Dashboard() -> Element {
    let mut directory = use_signal(DirectoryState::default);
    let source = use_signal(|| HttpRecordSource::new(directory_endpoint()));

    // The spawned task is owned by this component, so a response arriving after
    // navigation away is dropped with it.
    let mut load = move || {
        directory.set(DirectoryState::Loading);
        let source = HttpRecordSource::clone(&source.peek());
        spawn(async move {
            let next = load_directory(&source).await;
            directory.set(next);
        });
    };

    use_effect(move || load());

    let state = directory();

    if state.is_loading() {
        return rsx! { LoadingPanel {} };
    }

    if let Some(message) = state.error() {
        return rsx! {
            ErrorPanel {
                message: message.to_string(),
                on_retry: move |_| load(),
            }
        };
    }

    rsx! {
        div { class: "container mt-4",
            h1 { class: "mb-4 text-center", "Employee Dashboard" }
            div { class: "table-responsive",
                table { class: "table table-striped table-hover table-bordered",
                    thead { class: "table-dark",
                        tr {
                            th { scope: "col", "ID" }
                            th { scope: "col", "Name" }
                            th { scope: "col", "Email" }
                        }
                    }
                    tbody {
                        for (id, name, email) in state.rows() {
                            tr { key: "{id}",
                                td { "{id}" }
                                td { "{name}" }
                                td { "{email}" }
                            }
                        }
                    }
                }
            }
            div { class: "text-center mt-3",
                p { class: "text-muted", "Total Employees: {state.total()}" }
            }
        }
    }
}
