//! EmployeeAiService - Answers natural-language questions about the directory.
//!
//! Every outcome is rendered as text. A missing API key short-circuits before
//! the store is read, and any failure after that is folded into
//! [`error_answer`] rather than returned as an error.

use std::fmt::Write as _;
use std::sync::Arc;

use crate::adapters::ai::{OpenAIConfig, OpenAIProvider};
use crate::config::AiConfig;
use crate::domain::employee::Employee;
use crate::ports::{AIError, AIProvider, CompletionRequest, MessageRole};

use super::EmployeeService;

/// Answer returned when no API key is configured.
pub const NOT_CONFIGURED_ANSWER: &str =
    "OpenAI API key is not configured. Please set the OPENAI_API_KEY environment variable.";

pub const MODEL: &str = "gpt-4o-mini";
pub const MAX_TOKENS: u32 = 200;
pub const TEMPERATURE: f32 = 0.3;

pub const SYSTEM_PROMPT: &str = "You are a concise AI assistant for employee data queries. \
Answer questions directly and briefly using only the provided employee data. \
Use short sentences. No explanations unless asked. \
If data is unavailable, say 'No data available' in one sentence.";

const CONTEXT_HEADER: &str = "Here is the complete list of employees:\n\n";

/// Formats a failure into the user-facing answer text.
pub fn error_answer(detail: impl std::fmt::Display) -> String {
    format!(
        "Error processing your question: {}. Please check your OpenAI API key and try again.",
        detail
    )
}

/// Renders the employee list into the context block sent with each question.
pub fn build_employee_context(employees: &[Employee]) -> String {
    let mut context = String::from(CONTEXT_HEADER);
    for employee in employees {
        let id = employee
            .id
            .map(|id| id.to_string())
            .unwrap_or_default();
        // Writing to a String cannot fail.
        let _ = writeln!(
            context,
            "- ID: {}, Name: {}, Position: {}, Title: {}, Division: {}",
            id, employee.name, employee.position, employee.title, employee.division
        );
    }
    context
}

/// Service that forwards directory questions to an AI provider.
pub struct EmployeeAiService {
    employees: Arc<EmployeeService>,
    provider: Option<Arc<dyn AIProvider>>,
}

impl EmployeeAiService {
    /// `provider` is `None` when no API key is configured.
    pub fn new(employees: Arc<EmployeeService>, provider: Option<Arc<dyn AIProvider>>) -> Self {
        Self {
            employees,
            provider,
        }
    }

    /// Builds the service from configuration, wiring an OpenAI provider
    /// only when a non-empty key is present.
    pub fn from_config(config: &AiConfig, employees: Arc<EmployeeService>) -> Result<Self, AIError> {
        let provider: Option<Arc<dyn AIProvider>> = match config.openai_api_key.as_deref() {
            Some(key) if !key.is_empty() => {
                let openai = OpenAIConfig::new(key)
                    .with_base_url(config.base_url.clone())
                    .with_timeout(config.timeout());
                let provider: Arc<dyn AIProvider> = Arc::new(OpenAIProvider::new(openai)?);
                Some(provider)
            }
            _ => None,
        };

        if provider.is_none() {
            tracing::warn!("OpenAI API key not configured; AI queries will return a fixed notice");
        }

        Ok(Self::new(employees, provider))
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Answers `question` using the full employee list as context.
    pub async fn query_employees(&self, question: &str) -> String {
        let Some(provider) = &self.provider else {
            return NOT_CONFIGURED_ANSWER.to_string();
        };

        let employees = match self.employees.get_all_employees().await {
            Ok(employees) => employees,
            Err(err) => {
                tracing::error!(error = %err, "failed to load employees for AI query");
                return error_answer(err);
            }
        };

        let request = build_request(&employees, question);

        match provider.complete(request).await {
            Ok(response) => {
                tracing::debug!(
                    model = %response.model,
                    total_tokens = response.usage.total_tokens,
                    "AI query answered"
                );
                response.content
            }
            Err(err) => {
                tracing::warn!(error = %err, "AI query failed");
                error_answer(err)
            }
        }
    }
}

fn build_request(employees: &[Employee], question: &str) -> CompletionRequest {
    let user_message = format!(
        "{}\n\nUser Question: {}",
        build_employee_context(employees),
        question
    );

    CompletionRequest::new(MODEL)
        .with_system_prompt(SYSTEM_PROMPT)
        .with_message(MessageRole::User, user_message)
        .with_max_tokens(MAX_TOKENS)
        .with_temperature(TEMPERATURE)
}
