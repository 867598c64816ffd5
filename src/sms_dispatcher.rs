use crate::app_state::AppState;
use crate::dispatch_outcome::{DispatchOutcome, MISSING_CONTACT_ADDRESS_REASON};
use crate::dispatch_report::DispatchReport;
use crate::dispatcher_resources::SmsDispatcherResources;
use crate::error::SmsDispatchError;
use crate::message_template::MessageTemplate;
use crate::recipient::Recipient;
use crate::sms_gateway_service::SmsGatewayService;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, instrument};
use uuid::Uuid;

pub struct SmsDispatcher;

impl SmsDispatcher {
    /// One full batch attempt: pre-flight validation, one concurrent gateway
    /// call per addressable recipient, settle-all join, aggregation.
    ///
    /// Only the two pre-flight validations fail the call. Every per-recipient
    /// error is captured as a Failure outcome instead; one recipient failing
    /// never cancels another's attempt. Re-invoking is a brand-new attempt
    /// with no deduplication against a prior one.
    #[instrument(skip_all, name = "dispatch_sms_batch")]
    pub async fn dispatch(
        resources: &SmsDispatcherResources,
        roster: &[Recipient],
        recipient_set: &[Uuid],
        message_body: &str,
    ) -> Result<DispatchReport, SmsDispatchError> {
        if recipient_set.is_empty() {
            return Err(SmsDispatchError::empty_recipients());
        }

        if message_body.trim().is_empty() {
            return Err(SmsDispatchError::empty_message());
        }

        let app_state = AppState::from_resources(resources)?;
        let wrapped_message = MessageTemplate::wrap(&app_state.sender_name, message_body);

        let semaphore = Arc::new(Semaphore::new(app_state.max_concurrent_sends as usize));
        let mut attempts = JoinSet::new();

        for (index, identifier) in recipient_set.iter().enumerate() {
            let identifier = *identifier;
            let recipient = roster.iter().find(|it| it.identifier == identifier).cloned();
            let app_state = app_state.clone();
            let wrapped_message = wrapped_message.clone();
            let semaphore = semaphore.clone();

            attempts.spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok();
                (index, Self::attempt(&app_state, identifier, recipient, &wrapped_message).await)
            });
        }

        let mut outcomes = Vec::with_capacity(recipient_set.len());
        while let Some(joined) = attempts.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(join_error) => error!("Dispatch task failed with error: {}", join_error.to_string()),
            }
        }

        // Settlement order is nondeterministic; restore recipient-set order
        // before aggregating so the report is stable.
        outcomes.sort_by_key(|(index, _)| *index);
        let outcomes = outcomes.into_iter().map(|(_, outcome)| outcome).collect::<Vec<_>>();

        Ok(DispatchReport::aggregate(&outcomes))
    }

    async fn attempt(
        app_state: &AppState,
        identifier: Uuid,
        recipient: Option<Recipient>,
        wrapped_message: &str,
    ) -> DispatchOutcome {
        let Some(recipient) = recipient else {
            return DispatchOutcome::failed(identifier, identifier.to_string(), MISSING_CONTACT_ADDRESS_REASON);
        };

        let label = recipient.display_label();

        let Some(destination_address) = recipient.contact_address() else {
            return DispatchOutcome::failed(identifier, label, MISSING_CONTACT_ADDRESS_REASON);
        };

        match SmsGatewayService::send(app_state, destination_address, wrapped_message).await {
            Ok(()) => DispatchOutcome::sent(identifier, label),
            Err(gateway_error) => DispatchOutcome::failed(identifier, label, &gateway_error.reason()),
        }
    }
}
