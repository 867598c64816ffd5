use std::time::Duration;

use crate::error::SmsDispatchError;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

#[derive(Clone)]
pub struct HttpGateway {
    pub client: ClientWithMiddleware,
}

impl HttpGateway {
    pub fn new(request_timeout_in_millis: u64) -> Result<Self, SmsDispatchError> {
        let client = ClientBuilder::new(
            Client::builder()
                .timeout(Duration::from_millis(request_timeout_in_millis))
                .build()
                .map_err(|error| SmsDispatchError::internal(&error.to_string(), "Failed to create http gateway client"))?,
        )
        .build();

        Ok(Self { client })
    }
}
