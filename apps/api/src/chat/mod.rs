//! Resume Chat Adapter — one visitor question in, one model reply out.
//!
//! Stateless per call: the only conversational content sent is the question itself.
//! All model traffic goes through `llm_client::ChatModel`.

pub mod handlers;
pub mod prompts;

use std::sync::Arc;

use thiserror::Error;
use tracing::error;

use crate::llm_client::{ChatModel, LlmError, Turn};
use crate::models::resume::ResumeSnapshot;

/// Shown when no credential is configured.
pub const DEMO_MODE_REPLY: &str = "I'm currently in demo mode (no API key configured). \
    But normally, I'd tell you about the pipelines, dashboards, and automation work on this resume!";

/// Shown when the hosted model call fails for any other reason.
pub const APOLOGY_REPLY: &str = "I'm having trouble connecting right now. \
    Please try asking about the experience on this resume again later.";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("Chat assistant is unavailable: no API credential configured")]
    Unavailable,

    #[error("Chat service error: {0}")]
    Service(LlmError),
}

impl From<LlmError> for ChatError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingCredential => ChatError::Unavailable,
            other => ChatError::Service(other),
        }
    }
}

#[derive(Clone)]
pub struct ResumeChat {
    resume: Arc<ResumeSnapshot>,
    system_instruction: Arc<str>,
    model: Arc<dyn ChatModel>,
}

impl ResumeChat {
    pub fn new(resume: Arc<ResumeSnapshot>, model: Arc<dyn ChatModel>) -> Self {
        let system_instruction = prompts::build_system_instruction(&resume).into();
        Self {
            resume,
            system_instruction,
            model,
        }
    }

    pub fn resume(&self) -> &ResumeSnapshot {
        &self.resume
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    /// Answers a visitor question with exactly one model call.
    pub async fn ask(&self, question: &str) -> Result<String, ChatError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ChatError::EmptyQuestion);
        }

        self.model
            .generate(&self.system_instruction, &[Turn::user(question)])
            .await
            .map_err(|e| {
                if !matches!(e, LlmError::MissingCredential) {
                    error!("Resume chat call failed: {e}");
                }
                ChatError::from(e)
            })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{ChatModel, LlmError, Turn};

    /// Canned model that records every call it receives.
    pub struct ScriptedModel {
        pub reply: Result<String, fn() -> LlmError>,
        pub calls: Mutex<Vec<(String, Vec<Turn>)>>,
    }

    impl ScriptedModel {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(make_err: fn() -> LlmError) -> Self {
            Self {
                reply: Err(make_err),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ChatModel for ScriptedModel {
        async fn generate(&self, system: &str, turns: &[Turn]) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((system.to_string(), turns.to_vec()));
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(make_err) => Err(make_err()),
            }
        }
    }
}
