use dioxus::prelude::*;
use crate::routes::Route;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                class: "navbar",
                div {
                    id: "navbar",
                    class: "navbar-inner",
                    Link {
                        class: "navbar-brand",
                        to: Route::Dashboard,
                        "Employee Management"
                    }
                    div {
                        class: "navbar-links",
                        Link {
                            class: "nav-link",
                            active_class: "active",
                            to: Route::Dashboard,
                            "Dashboard"
                        }
                        Link {
                            class: "nav-link",
                            active_class: "active",
                            to: Route::EmployeeForm,
                            "Employee Form"
                        }
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}
