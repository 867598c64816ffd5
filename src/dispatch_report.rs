use crate::dispatch_outcome::{DeliveryStatus, DispatchOutcome};

#[derive(Debug, Clone, PartialEq)]
pub struct FailedDelivery {
    pub label: String,
    pub reason: String,
}

/// Read-only aggregation over the outcomes of one dispatch attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchReport {
    pub successes: Vec<String>,
    pub failures: Vec<FailedDelivery>,
    pub summary: String,
}

impl DispatchReport {
    /// Pure and total: partitions outcomes into successes and failures and
    /// builds the operator-facing summary string.
    pub fn aggregate(outcomes: &[DispatchOutcome]) -> Self {
        let mut successes = vec![];
        let mut failures = vec![];

        for outcome in outcomes {
            match &outcome.status {
                DeliveryStatus::Sent => successes.push(outcome.label.clone()),
                DeliveryStatus::Failed { reason } => failures.push(FailedDelivery {
                    label: outcome.label.clone(),
                    reason: reason.clone(),
                }),
            }
        }

        let summary = Self::build_summary(&successes, &failures);

        Self { successes, failures, summary }
    }

    /// Closing the workflow is allowed only when nothing is left for the
    /// operator to act on: zero failures and at least one success.
    pub fn is_fully_successful(&self) -> bool {
        self.failures.is_empty() && !self.successes.is_empty()
    }

    fn build_summary(
        successes: &[String],
        failures: &[FailedDelivery],
    ) -> String {
        let mut summary = String::new();

        if !successes.is_empty() {
            summary.push_str(&format!("Successfully sent SMS to {} user(s): {}. ", successes.len(), successes.join(", ")));
        }

        if !failures.is_empty() {
            let details = failures.iter().map(|it| format!("{} ({})", it.label, it.reason)).collect::<Vec<_>>().join(", ");
            summary.push_str(&format!("Failed to send SMS to {} user(s): {}.", failures.len(), details));
        }

        if summary.is_empty() {
            summary = "SMS processing complete.".to_string();
        }

        summary
    }
}
