//! Console framing text.
//!
//! Commands return plain lines; the read loop prints them. The separator is
//! the first line of every command response and frames error reports.

const CHATBOT_SEPARATOR: &str = "____________________________________________________________";
const CHATBOT_NAME: &str = "ChatMan";

pub struct Ui;

impl Ui {
    /// Constant horizontal rule framing chatbot responses.
    pub fn chatbot_separator() -> &'static str {
        CHATBOT_SEPARATOR
    }

    /// Lines printed once when a session starts.
    pub fn greeting() -> Vec<String> {
        vec![
            CHATBOT_SEPARATOR.to_string(),
            format!("Hello! I'm {CHATBOT_NAME}"),
            "What can I do for you?".to_string(),
            CHATBOT_SEPARATOR.to_string(),
        ]
    }

    /// Lines used to report a failed command.
    pub fn error_report(message: &str) -> Vec<String> {
        vec![
            CHATBOT_SEPARATOR.to_string(),
            format!("OOPS!!! {message}"),
            CHATBOT_SEPARATOR.to_string(),
        ]
    }
}
