pub const DEFAULT_SENDER_NAME: &str = "Xpress Auto Care";
pub const OPT_OUT_SUFFIX: &str = "Reply STOP to opt out.";

pub struct MessageTemplate;

impl MessageTemplate {
    /// Wraps the operator-supplied body in the fixed sender preamble and
    /// opt-out suffix. Every recipient in a batch receives the identical
    /// wrapped text.
    pub fn wrap(
        sender_name: &str,
        message_body: &str,
    ) -> String {
        format!("{}: {} {}", sender_name, message_body.trim(), OPT_OUT_SUFFIX)
    }
}
