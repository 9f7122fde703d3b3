//! Text shown on the floating result object placed at the anchor.

use crate::vision::error::LabelError;
use crate::vision::types::LabelAnnotation;

pub const DEFAULT_WAITING_TEXT: &str = "Waiting for response...";

#[derive(Debug, Clone, PartialEq)]
pub enum LabelState {
    /// Just placed, no query started
    Initial,
    /// Query sent, no response yet
    Waiting,
    Labels(Vec<LabelAnnotation>),
    Failed(String),
}

/// Result panel for one placed anchor.
#[derive(Debug, Clone)]
pub struct LabelDisplay {
    initial_text: String,
    waiting_text: String,
    state: LabelState,
}

impl Default for LabelDisplay {
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_WAITING_TEXT)
    }
}

impl LabelDisplay {
    pub fn new(initial_text: impl Into<String>, waiting_text: impl Into<String>) -> Self {
        Self {
            initial_text: initial_text.into(),
            waiting_text: waiting_text.into(),
            state: LabelState::Initial,
        }
    }

    pub fn state(&self) -> &LabelState {
        &self.state
    }

    pub fn start_query(&mut self) {
        self.state = LabelState::Waiting;
    }

    pub fn complete(&mut self, result: Result<Vec<LabelAnnotation>, LabelError>) {
        match result {
            Ok(labels) => self.state = LabelState::Labels(labels),
            Err(e) => self.fail(e.to_string()),
        }
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = LabelState::Failed(message.into());
    }

    pub fn text(&self) -> String {
        match &self.state {
            LabelState::Initial => self.initial_text.clone(),
            LabelState::Waiting => self.waiting_text.clone(),
            LabelState::Labels(labels) => format_labels(labels),
            LabelState::Failed(message) => message.clone(),
        }
    }
}

/// One `"<description> <score>%"` line per label.
pub fn format_labels(labels: &[LabelAnnotation]) -> String {
    labels
        .iter()
        .map(|label| format!("{} {}%\n", label.description, label.score))
        .collect()
}
