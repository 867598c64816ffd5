use crate::app_state::AppState;
use crate::error::SmsDispatchError;
use crate::recipient::Recipient;
use serde::Deserialize;
use tracing::instrument;

#[derive(Deserialize)]
struct RosterResponse {
    users: Vec<Recipient>,
}

pub struct RosterClient;

impl RosterClient {
    /// Bulk read of the full user roster. Called once when the selector
    /// opens; the snapshot is never refreshed mid-workflow.
    #[instrument(skip_all, name = "load_roster")]
    pub async fn load(app_state: &AppState) -> Result<Vec<Recipient>, SmsDispatchError> {
        let url = format!("{}/api/get-users", app_state.gateway_base_url);

        let response = app_state
            .http_gateway
            .client
            .get(&url)
            .send()
            .await
            .map_err(|error| SmsDispatchError::roster(&error.to_string(), "Failed to reach roster provider"))?;

        if !response.status().is_success() {
            return Err(SmsDispatchError::roster(
                &format!("roster provider responded with status {}", response.status()),
                "Failed to load user roster",
            ));
        }

        let roster = response
            .json::<RosterResponse>()
            .await
            .map_err(|error| SmsDispatchError::roster(&error.to_string(), "Failed to parse user roster"))?;

        Ok(roster.users)
    }
}
