use std::cell::{ Cell, RefCell };
use std::collections::VecDeque;
use crate::error::FetchError;
use crate::model::{ PersonRecord, RecordSource };

/// Hands out queued responses in order and counts how often it was asked.
#[allow(dead_code)]
pub struct MockRecordSource {
    responses: RefCell<VecDeque<Result<Vec<PersonRecord>, FetchError>>>,
    calls: Cell<usize>,
}

#[allow(dead_code)]
impl MockRecordSource {
    pub fn new(responses: Vec<Result<Vec<PersonRecord>, FetchError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl RecordSource for MockRecordSource {
    async fn fetch(&self) -> Result<Vec<PersonRecord>, FetchError> {
        self.calls.set(self.calls.get() + 1);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport("no response queued".to_string())))
    }
}

#[allow(dead_code)]
pub fn person(id: i64, name: &str, email: &str) -> PersonRecord {
    PersonRecord {
        id,
        name: name.to_string(),
        email: email.to_string(),
    }
}
