use crate::dispatcher_resources::SmsDispatcherResources;
use crate::environment::Environment;
use crate::error::SmsDispatchError;
use crate::http_gateway::HttpGateway;
use crate::message_template::DEFAULT_SENDER_NAME;

#[derive(Clone)]
pub struct AppState {
    pub http_gateway: HttpGateway,
    pub gateway_base_url: String,
    pub sender_name: String,
    pub max_concurrent_sends: u32,
}

impl AppState {
    pub fn from_resources(resources: &SmsDispatcherResources) -> Result<Self, SmsDispatchError> {
        Ok(Self {
            http_gateway: HttpGateway::new(
                resources.http_timeout_in_millis.unwrap_or_else(|| Environment::u64("SMS_HTTP_TIMEOUT_IN_MILLIS", 3000)),
            )?,
            gateway_base_url: resources.gateway_base_url.clone(),
            sender_name: resources
                .sender_name
                .clone()
                .unwrap_or_else(|| Environment::string("SMS_SENDER_NAME", DEFAULT_SENDER_NAME)),
            max_concurrent_sends: resources.max_concurrent_sends.unwrap_or_else(|| Environment::u32("SMS_MAX_CONCURRENT_SENDS", 8)).max(1),
        })
    }
}
