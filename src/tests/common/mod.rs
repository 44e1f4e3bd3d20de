pub mod http;
pub mod mocks;

use crate::model::{ FormField, IntakeForm };

#[allow(dead_code)]
pub fn setup() {
    std::env::set_var("RUST_LOG", "debug");
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Form with every field filled with values that pass validation.
#[allow(dead_code)]
pub fn filled_form() -> IntakeForm {
    let mut form = IntakeForm::new();
    form.edit(FormField::Name, "Ada");
    form.edit(FormField::Designation, "Engineer");
    form.edit(FormField::Location, "Remote");
    form.edit(FormField::Salary, "1000");
    form
}
