use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmsDispatchErrorKind {
    EmptyRecipients,
    EmptyMessage,
    Roster,
    Gateway,
    Internal,
}

#[derive(Debug)]
pub struct SmsDispatchError {
    pub kind: SmsDispatchErrorKind,
    pub cause: String,
    pub message: Option<String>,
}

impl SmsDispatchError {
    pub fn empty_recipients() -> Self {
        Self {
            kind: SmsDispatchErrorKind::EmptyRecipients,
            cause: "empty recipient set".to_string(),
            message: Some("Select at least one recipient before sending".to_string()),
        }
    }

    pub fn empty_message() -> Self {
        Self {
            kind: SmsDispatchErrorKind::EmptyMessage,
            cause: "empty message body".to_string(),
            message: Some("Type a message before sending".to_string()),
        }
    }

    pub fn roster(
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            kind: SmsDispatchErrorKind::Roster,
            cause: cause.to_string(),
            message: Some(message.to_string()),
        }
    }

    pub fn gateway(
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            kind: SmsDispatchErrorKind::Gateway,
            cause: cause.to_string(),
            message: Some(message.to_string()),
        }
    }

    pub fn internal(
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            kind: SmsDispatchErrorKind::Internal,
            cause: cause.to_string(),
            message: Some(message.to_string()),
        }
    }

    pub fn reason(&self) -> String {
        self.message.clone().unwrap_or_else(|| self.cause.clone())
    }
}

impl std::error::Error for SmsDispatchError {}

impl fmt::Display for SmsDispatchError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.cause)
    }
}
