//! Static questionnaire catalog
//!
//! Every flow is a `'static` table built at compile time. The profile deriver
//! reads option vocabularies from here and presentation layers read labels.

pub mod legacy;
pub mod msme;
pub mod startup;
pub mod step2;

use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

use crate::models::EntityType;

pub use legacy::LEGACY_QUESTIONS;
pub use msme::MSME_QUESTIONS;
pub use startup::STARTUP_QUESTIONS;
pub use step2::STEP2_QUESTIONS;

/// A selectable answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// A single questionnaire step
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub key: &'static str,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'static str>,
    pub options: &'static [QuestionOption],
    #[serde(skip_serializing_if = "is_false")]
    pub multi: bool,
    #[serde(rename = "maxSelections", skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<usize>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

pub(crate) const fn opt(value: &'static str, label: &'static str) -> QuestionOption {
    QuestionOption { value, label }
}

pub(crate) const fn single(
    key: &'static str,
    title: &'static str,
    subtitle: Option<&'static str>,
    options: &'static [QuestionOption],
) -> Question {
    Question {
        key,
        title,
        subtitle,
        options,
        multi: false,
        max_selections: None,
    }
}

impl Question {
    /// Whether `value` is one of this question's option values
    pub fn accepts(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

/// Gateway question choosing between the Startup and MSME flows
pub const GATEWAY_QUESTION: Question = single(
    "entity_type",
    "How would you classify your entity?",
    Some("We'll show you a short questionnaire tailored to your path."),
    &[opt("startup", "Startup"), opt("msme", "MSME")],
);

/// Display label for an answer value, falling back to the value itself
pub fn get_option_label<'a>(question: &Question, value: &'a str) -> Cow<'a, str> {
    match question.options.iter().find(|o| o.value == value) {
        Some(option) => Cow::Borrowed(option.label),
        None => Cow::Borrowed(value),
    }
}

pub fn find_question<'q>(flow: &'q [Question], key: &str) -> Option<&'q Question> {
    flow.iter().find(|q| q.key == key)
}

/// Question flow shown after the gateway choice
pub fn flow_for(entity_type: EntityType) -> &'static [Question] {
    match entity_type {
        EntityType::Startup => STARTUP_QUESTIONS,
        EntityType::Msme => MSME_QUESTIONS,
    }
}

/// Title/label pair for rendering a stored questionnaire
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub title: &'static str,
    pub label: String,
}

/// Build display rows from a stored entity type, flow responses and step 2 responses
pub fn build_summary_rows(
    entity_type: Option<EntityType>,
    responses: Option<&Map<String, Value>>,
    step2: Option<&Map<String, Value>>,
) -> Vec<SummaryRow> {
    let mut rows = Vec::new();

    if let Some(entity_type) = entity_type {
        rows.push(SummaryRow {
            title: GATEWAY_QUESTION.title,
            label: get_option_label(&GATEWAY_QUESTION, entity_type.as_str()).into_owned(),
        });

        if let Some(responses) = responses {
            for question in flow_for(entity_type) {
                if let Some(label) = responses.get(question.key).and_then(|v| value_label(question, v)) {
                    rows.push(SummaryRow { title: question.title, label });
                }
            }
        }
    }

    if let Some(step2) = step2 {
        for question in STEP2_QUESTIONS {
            if let Some(label) = step2.get(question.key).and_then(|v| value_label(question, v)) {
                rows.push(SummaryRow { title: question.title, label });
            }
        }
    }

    rows
}

fn value_label(question: &Question, value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(get_option_label(question, s).into_owned()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => get_option_label(question, s).into_owned(),
                    other => get_option_label(question, &other.to_string()).into_owned(),
                })
                .collect::<Vec<_>>()
                .join(", "),
        ),
        other => Some(other.to_string()),
    }
}

/// Record an error when a non-empty single-select answer is outside the vocabulary
pub(crate) fn check_single(errors: &mut ValidationErrors, question: &Question, value: Option<&str>) {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return;
    };
    if !question.accepts(value) {
        errors.add(question.key, unknown_option(question, value));
    }
}

/// Record an error for unknown multi-select values or too many selections
pub(crate) fn check_multi(errors: &mut ValidationErrors, question: &Question, values: &[String]) {
    if let Some(bad) = values.iter().find(|v| !question.accepts(v)) {
        errors.add(question.key, unknown_option(question, bad));
        return;
    }
    if let Some(max) = question.max_selections {
        if values.len() > max {
            let mut error = ValidationError::new("too_many_selections");
            error.message = Some(Cow::Owned(format!(
                "{} accepts at most {} selections",
                question.key, max
            )));
            error.add_param(Cow::from("max"), &max);
            error.add_param(Cow::from("actual"), &values.len());
            errors.add(question.key, error);
        }
    }
}

fn unknown_option(question: &Question, value: &str) -> ValidationError {
    let mut error = ValidationError::new("unknown_option");
    error.message = Some(Cow::Owned(format!(
        "'{}' is not a valid option for {}",
        value, question.key
    )));
    error.add_param(Cow::from("value"), &value);
    error
}
