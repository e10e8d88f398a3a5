use std::collections::HashMap;

use medibot_core::Value;
use medibot_rag::{compose_prompt, Passage, PromptTemplate, REFUSAL_MESSAGE};
use serde_json::json;

fn passage_with_text(text: &str) -> Passage {
    Passage {
        id: "p".to_string(),
        score: 0.5,
        text: text.to_string(),
        metadata: HashMap::new(),
    }
}

#[test]
fn context_joins_passages_with_blank_line() {
    let prompt = compose_prompt(
        "q",
        &[passage_with_text("alpha"), passage_with_text("beta")],
    );
    assert!(prompt.contains("alpha\n\nbeta"));
}

#[test]
fn prompt_carries_question_and_refusal_instruction() {
    let prompt = compose_prompt("How is hypertension treated?", &[passage_with_text("ctx")]);
    assert!(prompt.contains("How is hypertension treated?"));
    assert!(prompt.contains(REFUSAL_MESSAGE));
    assert!(prompt.contains("Do NOT give medical advice."));
}

#[test]
fn template_renders_string_values_unquoted() {
    let template = PromptTemplate::new("Hello {{ name }}!");
    let mut vars = HashMap::new();
    vars.insert("name".to_string(), Value::String("world".to_string()));
    assert_eq!(template.render(&vars), "Hello world!");
}

#[test]
fn template_renders_missing_variables_empty() {
    let template = PromptTemplate::new("[{{missing}}]");
    assert_eq!(template.render(&HashMap::new()), "[]");
}

#[test]
fn template_renders_non_string_values_as_json() {
    let template = PromptTemplate::new("page {{page}}");
    let mut vars = HashMap::new();
    vars.insert("page".to_string(), json!(7));
    assert_eq!(template.render(&vars), "page 7");
}
