//! Mock absence source for testing
//!
//! Stands in for [`PersonioClient`](super::PersonioClient) so the run flow
//! can be tested without HTTP.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::AbsenceApi;
use crate::error::{Error, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockAbsenceClient::new().with_names(["Jane Doe"]);
/// let names = mock.absences_on(today).await?;
/// assert_eq!(mock.calls(), &[today]);
/// ```
#[derive(Debug, Default)]
pub struct MockAbsenceClient {
    /// Names returned from absences_on
    names: Vec<String>,
    /// Error to return (if any) - consumed on first use
    error: Option<Error>,
    /// Dates requested, in call order
    calls: Vec<NaiveDate>,
}

impl MockAbsenceClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names to return, in arrival order
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Fail the next call with `error`
    pub fn with_error(mut self, error: impl Into<Error>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Dates that were requested
    pub fn calls(&self) -> &[NaiveDate] {
        &self.calls
    }
}

#[async_trait]
impl AbsenceApi for MockAbsenceClient {
    async fn absences_on(&mut self, date: NaiveDate) -> Result<Vec<String>> {
        self.calls.push(date);

        if let Some(err) = self.error.take() {
            return Err(err);
        }

        Ok(self.names.clone())
    }
}
