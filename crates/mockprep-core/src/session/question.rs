//! Question domain model.

use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Identifier of a question, unique within a session.
pub type QuestionId = i64;

/// Kind of prompt a question presents.
///
/// `Coding` still decodes so older sessions load, but no flow answers it
/// differently from a subjective question.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(try_from = "String", into = "String")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum QuestionType {
    Subjective,
    Mcq,
    Coding,
}

impl TryFrom<String> for QuestionType {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

impl From<QuestionType> for String {
    fn from(value: QuestionType) -> Self {
        value.as_ref().to_string()
    }
}

/// A single interview prompt as served by the session API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub question_text: String,
    #[serde(default)]
    pub topic: Option<String>,
    /// Answer choices for MCQ questions, in display order.
    #[serde(default, deserialize_with = "deserialize_options")]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Reference answer. The server stores it as `correctAnswer`: the
    /// option letter for MCQs, generated prose for subjective questions.
    #[serde(default, rename = "correctAnswer", alias = "modelAnswer")]
    pub model_answer: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Stored in place of a model answer when generation failed server-side.
const MODEL_ANSWER_PLACEHOLDER: &str = "Model answer not available";

impl Question {
    pub fn is_mcq(&self) -> bool {
        self.kind == QuestionType::Mcq
    }

    /// Choices to render, empty for anything that is not a usable MCQ.
    pub fn choices(&self) -> &[String] {
        match (&self.kind, &self.options) {
            (QuestionType::Mcq, Some(options)) => options,
            _ => &[],
        }
    }

    /// The model answer worth showing, skipping blanks and the server
    /// placeholder.
    pub fn usable_model_answer(&self) -> Option<&str> {
        self.model_answer
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty() && !text.starts_with(MODEL_ANSWER_PLACEHOLDER))
    }

    /// Only subjective questions can have a model answer generated on demand.
    pub fn needs_model_answer(&self) -> bool {
        self.kind == QuestionType::Subjective && self.usable_model_answer().is_none()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOptions {
    List(Vec<String>),
    Encoded(String),
}

/// Options arrive either as a JSON array or as a string holding one.
fn deserialize_options<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawOptions>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(RawOptions::List(list)) => Ok(Some(list)),
        Some(RawOptions::Encoded(text)) if text.trim().is_empty() => Ok(None),
        Some(RawOptions::Encoded(text)) => serde_json::from_str::<Vec<String>>(&text)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
