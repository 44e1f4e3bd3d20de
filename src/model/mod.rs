pub mod directory;
pub mod intake;

// Re-export commonly used items
pub use directory::{
    load_directory,
    DirectoryState,
    HttpRecordSource,
    PersonRecord,
    RecordSource,
};
pub use intake::{
    check,
    parse_salary,
    validate,
    Accepted,
    EmployeeSubmission,
    FieldErrorSet,
    FormField,
    FormValues,
    IntakeForm,
    SubmissionTicket,
    SUBMIT_RESET_DELAY,
};
