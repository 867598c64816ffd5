use crate::app_state::AppState;
use crate::error::SmsDispatchError;
use crate::recipient::Recipient;
use crate::roster_client::RosterClient;
use uuid::Uuid;

/// Operator-facing recipient picking: a roster snapshot, a filter and the
/// ordered, deduplicated recipient set. Set membership is validated lazily,
/// at dispatch time.
#[derive(Debug)]
pub struct RecipientSelector {
    roster: Vec<Recipient>,
    filter_text: String,
    selected: Vec<Uuid>,
}

impl RecipientSelector {
    pub fn new(roster: Vec<Recipient>) -> Self {
        Self {
            roster,
            filter_text: String::new(),
            selected: vec![],
        }
    }

    pub async fn open(app_state: &AppState) -> Result<Self, SmsDispatchError> {
        let roster = RosterClient::load(app_state).await?;
        Ok(Self::new(roster))
    }

    pub fn set_filter_text(
        &mut self,
        filter_text: &str,
    ) {
        self.filter_text = filter_text.to_string();
    }

    /// Candidates in roster order: addressable, matching the filter and not
    /// already selected. An empty result is a valid answer, never an error.
    pub fn visible_candidates(&self) -> Vec<&Recipient> {
        self.roster
            .iter()
            .filter(|it| it.contact_address().is_some())
            .filter(|it| it.matches_filter(&self.filter_text))
            .filter(|it| !self.selected.contains(&it.identifier))
            .collect()
    }

    pub fn add_to_set(
        &mut self,
        identifier: Uuid,
    ) {
        if identifier.is_nil() || self.selected.contains(&identifier) {
            return;
        }

        self.selected.push(identifier);
    }

    pub fn remove_from_set(
        &mut self,
        identifier: Uuid,
    ) {
        self.selected.retain(|it| *it != identifier);
    }

    pub fn recipient_set(&self) -> &[Uuid] {
        &self.selected
    }

    pub fn roster(&self) -> &[Recipient] {
        &self.roster
    }

    pub fn resolve(
        &self,
        identifier: &Uuid,
    ) -> Option<&Recipient> {
        self.roster.iter().find(|it| it.identifier == *identifier)
    }
}
