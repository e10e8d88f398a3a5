use std::collections::HashMap;
use std::sync::OnceLock;

use medibot_core::Value;
use regex::Regex;

use crate::Passage;

/// The literal refusal the model is instructed to return when the
/// context does not contain the answer. Instruction-enforced only; the
/// pipeline never verifies compliance.
pub const REFUSAL_MESSAGE: &str =
    "I'm sorry, but I couldn't find relevant information in the provided documents.";

const ANSWER_TEMPLATE: &str = r#"You are MediBot, an AI assistant helping users understand medical documents.

Answer ONLY from the provided context.

Context:
{{context}}

User Question:
{{question}}

Answer:
- If the answer is not found in the context, say:
"I'm sorry, but I couldn't find relevant information in the provided documents."
- Do NOT make up facts.
- Do NOT give medical advice.
"#;

fn var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("literal pattern compiles"))
}

/// Minimal `{{var}}` substitution; unknown variables render empty.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn render(&self, vars: &HashMap<String, Value>) -> String {
        let rendered = var_pattern().replace_all(&self.template, |caps: &regex::Captures| {
            let key = &caps[1];
            match vars.get(key) {
                Some(value) => value
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| value.to_string()),
                None => "".to_string(),
            }
        });
        rendered.to_string()
    }
}

/// Builds the full instruction prompt: passage texts joined by a blank
/// line (in retrieval order, no truncation) plus the question. Context
/// overflow is the generation service's problem, not handled here.
pub fn compose_prompt(question: &str, passages: &[Passage]) -> String {
    let context = passages
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    let mut vars = HashMap::new();
    vars.insert("context".to_string(), Value::String(context));
    vars.insert("question".to_string(), Value::String(question.to_string()));
    PromptTemplate::new(ANSWER_TEMPLATE).render(&vars)
}
