pub mod app_state;
pub mod dispatch_outcome;
pub mod dispatch_report;
pub mod dispatch_workflow;
pub mod dispatcher_resources;
pub mod environment;
pub mod error;
pub mod http_gateway;
pub mod message_template;
pub mod recipient;
pub mod recipient_selector;
pub mod roster_client;
pub mod sms_dispatcher;
pub mod sms_gateway_service;
