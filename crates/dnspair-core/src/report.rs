//! Per-record outcomes and the ordered batch report
//!
//! One [`OperationResult`] per submitted record, in submission order. The
//! aggregator does no retries and no reordering; a failed record sits next
//! to the succeeded ones so the caller sees the whole batch at once.

use serde::{Deserialize, Serialize};

use crate::record::{RecordDescriptor, RecordType};

/// Outcome status of a single record submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeStatus {
    /// The provider accepted the record
    Success,
    /// The provider (or the transport) rejected it
    Failure,
}

/// Result of submitting one record to one provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    /// Success or failure
    pub status: OutcomeStatus,

    /// Record type that was submitted
    pub record_type: RecordType,

    /// Owner name that was submitted
    pub record_name: String,

    /// RDATA value that was submitted
    pub record_target: String,

    /// Provider name the record was submitted to
    pub provider: String,

    /// Provider-reported error messages, in the order the provider gave them
    pub errors: Vec<String>,
}

impl OperationResult {
    /// Successful submission of `record` to `provider`
    pub fn success(record: &RecordDescriptor, provider: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Success,
            record_type: record.rtype,
            record_name: record.name.clone(),
            record_target: record.content.clone(),
            provider: provider.into(),
            errors: Vec::new(),
        }
    }

    /// Failed submission with the provider-reported (or transport) errors
    pub fn failure(
        record: &RecordDescriptor,
        provider: impl Into<String>,
        errors: Vec<String>,
    ) -> Self {
        Self {
            status: OutcomeStatus::Failure,
            record_type: record.rtype,
            record_name: record.name.clone(),
            record_target: record.content.clone(),
            provider: provider.into(),
            errors,
        }
    }

    /// True if the submission succeeded
    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }
}

/// Ordered collection of per-record outcomes for one batch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    results: Vec<OperationResult>,
}

impl Report {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outcome, preserving submission order
    pub fn push(&mut self, result: OperationResult) {
        self.results.push(result);
    }

    /// All outcomes in submission order
    pub fn results(&self) -> &[OperationResult] {
        &self.results
    }

    /// Number of outcomes in the report
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True if nothing was submitted
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of successful submissions
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    /// Number of failed submissions
    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }

    /// True if every submission succeeded
    pub fn is_all_success(&self) -> bool {
        self.failed() == 0
    }
}

impl IntoIterator for Report {
    type Item = OperationResult;
    type IntoIter = std::vec::IntoIter<OperationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a OperationResult;
    type IntoIter = std::slice::Iter<'a, OperationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
