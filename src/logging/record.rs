use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::dispatch::DispatchReport;

/// Summary of one command invocation, emitted as a single log event.
#[derive(Debug, Clone)]
pub struct InvocationRecord {
    pub invocation_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub command: String,
    pub requested_url: String,
    pub result_status: Option<String>,
    pub outcome: Option<String>,
    pub response_time_ms: i64,
    pub error_type: Option<String>,
    pub error_kind: Option<String>,
    pub error_message: Option<String>,
}

impl InvocationRecord {
    pub fn new(command: &str, url: &str) -> Self {
        Self {
            invocation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            command: command.to_string(),
            requested_url: url.to_string(),
            result_status: None,
            outcome: None,
            response_time_ms: 0,
            error_type: None,
            error_kind: None,
            error_message: None,
        }
    }

    pub fn with_report(mut self, report: &DispatchReport) -> Self {
        self.result_status = report.status.clone();
        self.outcome = Some(report.outcome.as_str().to_string());
        if let Some(error) = &report.error {
            self.error_type = Some(error.error_code().to_string());
            self.error_kind = Some(error.kind().as_str().to_string());
            self.error_message = Some(error.to_string());
        }
        self
    }

    pub fn with_error(mut self, error_type: &str, message: &str) -> Self {
        self.error_type = Some(error_type.to_string());
        self.error_message = Some(message.to_string());
        self
    }

    /// Stamp the elapsed time since the record was created.
    pub fn finish(mut self) -> Self {
        self.response_time_ms = (Utc::now() - self.timestamp).num_milliseconds();
        self
    }

    pub fn emit(&self) {
        tracing::info!(
            invocation_id = %self.invocation_id,
            timestamp = %self.timestamp.to_rfc3339(),
            command = %self.command,
            url = %self.requested_url,
            status = self.result_status.as_deref().unwrap_or("-"),
            outcome = self.outcome.as_deref().unwrap_or("-"),
            response_time_ms = self.response_time_ms,
            error_type = self.error_type.as_deref(),
            error_kind = self.error_kind.as_deref(),
            error_message = self.error_message.as_deref(),
            "invocation finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, dispatch::Outcome};

    #[test]
    fn test_with_report_copies_error_details() {
        let report = DispatchReport {
            status: Some("tunnel".to_string()),
            outcome: Outcome::Failed,
            error: Some(Error::FetchTimeout("https://media/x".to_string())),
        };

        let record = InvocationRecord::new("video", "https://x.com/v").with_report(&report);

        assert_eq!(record.result_status.as_deref(), Some("tunnel"));
        assert_eq!(record.outcome.as_deref(), Some("failed"));
        assert_eq!(record.error_type.as_deref(), Some("FETCH_TIMEOUT"));
        assert_eq!(record.error_kind.as_deref(), Some("network"));
    }

    #[test]
    fn test_finish_sets_non_negative_elapsed() {
        let record = InvocationRecord::new("video", "https://x.com/v").finish();
        assert!(record.response_time_ms >= 0);
    }
}
