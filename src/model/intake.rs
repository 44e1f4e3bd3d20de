use std::collections::BTreeMap;
use std::fmt::{ Display, Formatter };
use std::str::FromStr;
use std::time::Duration;
use chrono::{ DateTime, Local };
use serde::{ Deserialize, Serialize };

/// How long the success notice stays up before the form clears itself.
pub const SUBMIT_RESET_DELAY: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Designation,
    Location,
    Salary,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Designation,
        FormField::Location,
        FormField::Salary,
    ];

    /// Value used for the input's `id` and `name` attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Designation => "designation",
            Self::Location => "location",
            Self::Salary => "salary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Designation => "Designation",
            Self::Location => "Location",
            Self::Salary => "Salary",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Enter employee name",
            Self::Designation => "Enter designation",
            Self::Location => "Enter location",
            Self::Salary => "Enter salary",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Salary => "number",
            _ => "text",
        }
    }

    /// `step` attribute for the input; only the salary field has one.
    pub fn step(&self) -> Option<&'static str> {
        match self {
            Self::Salary => Some("0.01"),
            _ => None,
        }
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL.into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("Unknown form field: {}", s))
    }
}

/// Validation messages keyed by the field they belong to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrorSet {
    errors: BTreeMap<FormField, String>,
}

impl FieldErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Drops the message for `field` only.
    pub fn clear(&mut self, field: FormField) -> Option<String> {
        self.errors.remove(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// The four raw input values, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub designation: String,
    pub location: String,
    pub salary: String,
}

impl FormValues {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Designation => &self.designation,
            FormField::Location => &self.location,
            FormField::Salary => &self.salary,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Designation => self.designation = value,
            FormField::Location => self.location = value,
            FormField::Salary => self.salary = value,
        }
    }

    pub fn is_blank(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// Checks every field and returns all failures together.
pub fn validate(values: &FormValues) -> FieldErrorSet {
    check(values).err().unwrap_or_default()
}

/// Same rules as [`validate`], yielding the parsed salary when the whole form passes.
pub fn check(values: &FormValues) -> Result<f64, FieldErrorSet> {
    let mut errors = FieldErrorSet::new();

    if values.name.trim().is_empty() {
        errors.insert(FormField::Name, "Name is required");
    }
    if values.designation.trim().is_empty() {
        errors.insert(FormField::Designation, "Designation is required");
    }
    if values.location.trim().is_empty() {
        errors.insert(FormField::Location, "Location is required");
    }

    let salary = check_salary(&values.salary);
    match salary {
        Ok(amount) if errors.is_empty() => Ok(amount),
        Ok(_) => Err(errors),
        Err(message) => {
            errors.insert(FormField::Salary, message);
            Err(errors)
        }
    }
}

fn check_salary(raw: &str) -> Result<f64, &'static str> {
    if raw.is_empty() {
        return Err("Salary is required");
    }
    parse_salary(raw).ok_or("Please enter a valid salary")
}

/// A positive, finite amount, or `None`.
pub fn parse_salary(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

/// Identifies one accepted submission so its delayed reset can tell whether it is still current.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(u64);

/// Form data accepted by a successful submit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSubmission {
    pub name: String,
    pub designation: String,
    pub location: String,
    pub salary: f64,
    pub submitted_at: DateTime<Local>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Accepted {
    pub submission: EmployeeSubmission,
    pub ticket: SubmissionTicket,
}

/// Local state behind the employee form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntakeForm {
    values: FormValues,
    errors: FieldErrorSet,
    submitted: bool,
    generation: u64,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: FormField) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &FieldErrorSet {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn edit(&mut self, field: FormField, value: impl Into<String>) {
        self.values.set(field, value.into());
        self.errors.clear(field);
    }

    pub fn validate(&self) -> FieldErrorSet {
        validate(&self.values)
    }

    /// Accepts the form when every field passes, otherwise records the errors and leaves the
    /// submitted flag untouched.
    pub fn submit(&mut self) -> Result<Accepted, FieldErrorSet> {
        let salary = match check(&self.values) {
            Ok(salary) => salary,
            Err(errors) => {
                log::debug!("Form rejected with {} error(s)", errors.len());
                self.errors = errors.clone();
                return Err(errors);
            }
        };

        self.errors = FieldErrorSet::new();
        self.submitted = true;
        self.generation += 1;

        Ok(Accepted {
            submission: EmployeeSubmission {
                name: self.values.name.clone(),
                designation: self.values.designation.clone(),
                location: self.values.location.clone(),
                salary,
                submitted_at: Local::now(),
            },
            ticket: SubmissionTicket(self.generation),
        })
    }

    /// Clears the form once the success notice has been shown. Returns `false` when the ticket
    /// is stale, i.e. the form was reset or submitted again in the meantime.
    pub fn expire_submission(&mut self, ticket: SubmissionTicket) -> bool {
        if !self.submitted || ticket.0 != self.generation {
            log::debug!("Skipping stale form reset {:?}", ticket);
            return false;
        }
        self.values = FormValues::default();
        self.submitted = false;
        true
    }

    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.errors = FieldErrorSet::new();
        self.submitted = false;
        self.generation += 1;
    }
}
