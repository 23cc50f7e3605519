use std::sync::Arc;

use crate::models::ChatRole;

use super::ollama::LlmClient;
use super::prompt;

/// Reply served when the model cannot be reached.
pub const OFFLINE_REPLY: &str = "The assistant is offline right now. Please try again in a few \
    minutes. If you need medical help in the meantime, contact your doctor or call a health \
    helpline.";

/// One prior exchange supplied by the caller. The assistant holds no
/// state; clients resend whatever history they want considered.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

/// Conversational assistant over the same model backend as the scorer.
#[derive(Clone)]
pub struct ChatAssistant {
    client: Arc<dyn LlmClient>,
    model: String,
}

impl ChatAssistant {
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Forward the message and return the model's reply verbatim. Any
    /// failure yields the fixed offline reply instead of an error.
    pub fn reply(&self, message: &str, history: &[ChatTurn]) -> String {
        let prompt = prompt::build_chat_prompt(message, history);
        match self
            .client
            .generate(&self.model, &prompt, prompt::CHAT_SYSTEM_PROMPT)
        {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(%error, "chat generation failed, serving offline reply");
                OFFLINE_REPLY.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::ollama::MockLlmClient;

    #[test]
    fn reply_is_returned_verbatim() {
        let assistant = ChatAssistant::new(
            Arc::new(MockLlmClient::new("  Drink fluids and rest.\n")),
            "medgemma",
        );
        let reply = assistant.reply("What helps with a cold?", &[]);
        assert_eq!(reply, "  Drink fluids and rest.\n");
    }

    #[test]
    fn failure_serves_offline_reply() {
        let assistant = ChatAssistant::new(Arc::new(MockLlmClient::failing()), "medgemma");
        let reply = assistant.reply("Hello?", &[]);
        assert_eq!(reply, OFFLINE_REPLY);
    }

    #[test]
    fn history_is_forwarded_to_the_prompt() {
        let history = vec![ChatTurn {
            role: ChatRole::User,
            content: "I have a headache.".into(),
        }];
        let prompt = prompt::build_chat_prompt("Should I worry?", &history);
        assert!(prompt.contains("Patient: I have a headache."));
    }
}
