use crate::app_state::AppState;
use crate::error::SmsDispatchError;
use serde::{Deserialize, Serialize};
use tracing::error;
use tracing::instrument;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SmsRequest<'a> {
    destination_address: &'a str,
    body: &'a str,
}

#[derive(Deserialize)]
struct SmsErrorBody {
    message: Option<String>,
}

pub struct SmsGatewayService;

impl SmsGatewayService {
    /// One send for one recipient. The returned error carries the best-effort
    /// human-readable reason: the provider's structured message when it
    /// supplies one, a generic status/network text otherwise.
    #[instrument(skip_all, name = "send_sms")]
    pub async fn send(
        app_state: &AppState,
        destination_address: &str,
        body: &str,
    ) -> Result<(), SmsDispatchError> {
        let url = format!("{}/api/send-sms", app_state.gateway_base_url);
        let request = SmsRequest { destination_address, body };

        let result = app_state.http_gateway.client.post(&url).json(&request).send().await;

        match result {
            Ok(response) if response.status().is_success() => Ok(()),
            Ok(response) => {
                let status = response.status();
                let reason = response
                    .json::<SmsErrorBody>()
                    .await
                    .ok()
                    .and_then(|it| it.message)
                    .unwrap_or_else(|| format!("SMS gateway responded with status {status}"));

                error!("Failed to send SMS with status {} and reason {}", status, reason);

                Err(SmsDispatchError::gateway(&format!("SMS gateway responded with status {status}"), &reason))
            },
            Err(error) => {
                error!("Failed to send SMS cause {}", error.to_string());

                Err(SmsDispatchError::gateway(&error.to_string(), "Failed to reach SMS gateway"))
            },
        }
    }
}
