//! Flashcard is a pair <question, answer>. Only text is used in questions and answers
use crate::error::{FlashcardError, Result};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Converts the card into a `{"question", "answer"}` JSON object
    pub fn to_json_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Builds a card from a JSON object.
    ///
    /// Both `question` and `answer` must be present and hold strings.
    /// Extra keys are ignored.
    pub fn from_json_value(data: &Value) -> Result<Self> {
        let question = text_field(data, "question")?;
        let answer = text_field(data, "answer")?;
        Ok(Self { question, answer })
    }
}

fn text_field(data: &Value, field: &'static str) -> Result<String> {
    data.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(FlashcardError::MissingField { field })
}
