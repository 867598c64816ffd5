use crate::app_state::AppState;
use crate::dispatch_report::DispatchReport;
use crate::dispatcher_resources::SmsDispatcherResources;
use crate::error::SmsDispatchError;
use crate::recipient_selector::RecipientSelector;
use crate::sms_dispatcher::SmsDispatcher;

/// The bulk-SMS modal as one tagged union switched on an explicit
/// discriminant, instead of a pile of co-existing booleans and strings.
/// Exactly one phase is active at a time and each phase carries only its
/// own fields.
#[derive(Debug)]
pub enum DispatchWorkflow {
    Closed,
    Composing { selector: RecipientSelector, message_body: String },
    Reported { selector: RecipientSelector, report: DispatchReport },
}

impl DispatchWorkflow {
    pub fn closed() -> Self {
        DispatchWorkflow::Closed
    }

    /// Loads a fresh roster snapshot and enters composition.
    pub async fn open(resources: &SmsDispatcherResources) -> Result<Self, SmsDispatchError> {
        let app_state = AppState::from_resources(resources)?;
        let selector = RecipientSelector::open(&app_state).await?;

        Ok(DispatchWorkflow::Composing {
            selector,
            message_body: String::new(),
        })
    }

    pub fn open_with_roster(selector: RecipientSelector) -> Self {
        DispatchWorkflow::Composing {
            selector,
            message_body: String::new(),
        }
    }

    pub fn set_message_body(
        &mut self,
        text: &str,
    ) {
        if let DispatchWorkflow::Composing { message_body, .. } = self {
            *message_body = text.to_string();
        }
    }

    pub fn selector_mut(&mut self) -> Option<&mut RecipientSelector> {
        match self {
            DispatchWorkflow::Composing { selector, .. } => Some(selector),
            DispatchWorkflow::Reported { selector, .. } => Some(selector),
            DispatchWorkflow::Closed => None,
        }
    }

    /// Runs one dispatch attempt and moves to the report phase. The selector
    /// (and its recipient set) is retained so the operator can see which
    /// recipients need attention. Pre-flight validation errors leave the
    /// composition untouched.
    pub async fn submit(
        &mut self,
        resources: &SmsDispatcherResources,
    ) -> Result<DispatchReport, SmsDispatchError> {
        match self {
            DispatchWorkflow::Composing { selector, message_body } => {
                let report = SmsDispatcher::dispatch(resources, selector.roster(), selector.recipient_set(), message_body).await?;

                let selector = std::mem::replace(selector, RecipientSelector::new(vec![]));
                *self = DispatchWorkflow::Reported {
                    selector,
                    report: report.clone(),
                };

                Ok(report)
            },
            _ => Err(SmsDispatchError::internal("submit outside composing phase", "No SMS composition is in progress")),
        }
    }

    /// The workflow-closing action. Refused after any failure, even partial,
    /// and refused mid-composition; the operator decides what to do with the
    /// remaining recipients.
    pub fn try_close(&mut self) -> bool {
        match self {
            DispatchWorkflow::Closed => true,
            DispatchWorkflow::Reported { report, .. } if report.is_fully_successful() => {
                *self = DispatchWorkflow::Closed;
                true
            },
            _ => false,
        }
    }

    /// Back to composition after a report, keeping the recipient set.
    /// Failed-only sends never clear the set automatically.
    pub fn revise(&mut self) {
        if let DispatchWorkflow::Reported { selector, .. } = self {
            let selector = std::mem::replace(selector, RecipientSelector::new(vec![]));
            *self = DispatchWorkflow::Composing {
                selector,
                message_body: String::new(),
            };
        }
    }

    /// Operator-forced reset, allowed from any phase.
    pub fn discard(&mut self) {
        *self = DispatchWorkflow::Closed;
    }
}
