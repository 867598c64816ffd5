use uuid::Uuid;

pub const MISSING_CONTACT_ADDRESS_REASON: &str = "missing or invalid contact address";

/// Per-recipient result of one dispatch attempt, keyed by the recipient
/// identifier. Created exactly once per recipient per attempt and immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    pub identifier: Uuid,
    pub label: String,
    pub status: DeliveryStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryStatus {
    Sent,
    Failed { reason: String },
}

impl DispatchOutcome {
    pub fn sent(
        identifier: Uuid,
        label: String,
    ) -> Self {
        Self {
            identifier,
            label,
            status: DeliveryStatus::Sent,
        }
    }

    pub fn failed(
        identifier: Uuid,
        label: String,
        reason: &str,
    ) -> Self {
        Self {
            identifier,
            label,
            status: DeliveryStatus::Failed { reason: reason.to_string() },
        }
    }

    pub fn is_sent(&self) -> bool {
        self.status == DeliveryStatus::Sent
    }
}
