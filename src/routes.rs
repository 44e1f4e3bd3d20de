use dioxus::prelude::*;
use crate::views::{ Dashboard, EmployeeForm, Navbar };

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Dashboard,
    #[route("/employee-form")]
    EmployeeForm,
}
