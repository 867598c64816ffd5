#[derive(Clone)]
pub struct SmsDispatcherResources {
    pub gateway_base_url: String,
    pub http_timeout_in_millis: Option<u64>,
    pub max_concurrent_sends: Option<u32>,
    pub sender_name: Option<String>,
}

impl SmsDispatcherResources {
    pub fn new(gateway_base_url: &str) -> Self {
        Self {
            gateway_base_url: gateway_base_url.trim_end_matches('/').to_string(),
            http_timeout_in_millis: None,
            max_concurrent_sends: None,
            sender_name: None,
        }
    }

    pub fn with_http_timeout_in_millis(
        self,
        http_timeout: u64,
    ) -> Self {
        Self {
            gateway_base_url: self.gateway_base_url,
            http_timeout_in_millis: Some(http_timeout),
            max_concurrent_sends: self.max_concurrent_sends,
            sender_name: self.sender_name,
        }
    }

    pub fn with_max_concurrent_sends(
        self,
        max_concurrent_sends: u32,
    ) -> Self {
        Self {
            gateway_base_url: self.gateway_base_url,
            http_timeout_in_millis: self.http_timeout_in_millis,
            max_concurrent_sends: Some(max_concurrent_sends),
            sender_name: self.sender_name,
        }
    }

    pub fn with_sender_name(
        self,
        sender_name: &str,
    ) -> Self {
        Self {
            gateway_base_url: self.gateway_base_url,
            http_timeout_in_millis: self.http_timeout_in_millis,
            max_concurrent_sends: self.max_concurrent_sends,
            sender_name: Some(sender_name.to_string()),
        }
    }
}
