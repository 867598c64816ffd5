use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One roster record, as returned by the roster provider. Loaded read-only at
/// selector-open time and never mutated by this crate.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub identifier: Uuid,
    pub display_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl Recipient {
    /// The phone number, but only when present and structurally valid.
    /// A missing and an invalid number are the same state for dispatch.
    pub fn contact_address(&self) -> Option<&str> {
        let phone = self.phone_number.as_deref()?;

        if Self::is_valid_phone(phone) {
            Some(phone)
        } else {
            None
        }
    }

    pub fn display_label(&self) -> String {
        let name = self.display_name.trim();
        if !name.is_empty() {
            return name.to_string();
        }

        if let Some(email) = &self.email {
            if !email.trim().is_empty() {
                return email.trim().to_string();
            }
        }

        self.identifier.to_string()
    }

    pub fn matches_filter(
        &self,
        filter_text: &str,
    ) -> bool {
        let needle = filter_text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.display_name.to_lowercase().contains(&needle)
            || self.email.as_deref().unwrap_or_default().to_lowercase().contains(&needle)
            || self.phone_number.as_deref().unwrap_or_default().to_lowercase().contains(&needle)
    }

    fn is_valid_phone(value: &str) -> bool {
        let normalized = value.chars().filter(|it| !matches!(*it, ' ' | '-' | '(' | ')' | '.')).collect::<String>();

        if let Ok(regex) = Regex::new(r"^\+?[0-9]{7,15}$") {
            regex.is_match(&normalized)
        } else {
            false
        }
    }
}
