mod dashboard;
mod employee_form;
mod navbar;

pub use dashboard::Dashboard;
pub use employee_form::EmployeeForm;
pub use navbar::Navbar;
