//! Domain models used by the backend: languages, difficulty, test cases,
//! problems, and the chapter/language grouping around them.

use serde::{Deserialize, Serialize};

/// Which language track does a problem belong to?
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Language {
  Javascript,
  Python,
}

impl Language {
  pub fn display_name(&self) -> &'static str {
    match self {
      Language::Javascript => "JavaScript",
      Language::Python => "Python",
    }
  }
  pub fn icon(&self) -> &'static str {
    match self {
      Language::Javascript => "🟨",
      Language::Python => "🐍",
    }
  }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
  Easy,
  Medium,
  Hard,
}

impl Default for Difficulty {
  fn default() -> Self { Difficulty::Easy }
}

/// One input/expected-output pair. Hidden cases still count toward pass/fail
/// but their input and expected output are blanked before leaving the server.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
  pub id: String,
  #[serde(default)]
  pub input: String,
  pub expected_output: String,
  #[serde(default)]
  pub is_hidden: bool,
}

/// A worked example shown in the problem statement.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Example {
  pub input: String,
  pub output: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub explanation: Option<String>,
}

/// A single coding exercise. Immutable after catalog build; `id` is the sole
/// lookup key and must be unique across both language tracks.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
  pub id: String,
  pub title: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub input_format: String,
  #[serde(default)]
  pub output_format: String,
  #[serde(default)]
  pub examples: Vec<Example>,
  #[serde(default)]
  pub difficulty: Difficulty,
  #[serde(default)]
  pub tags: Vec<String>,
  pub language: Language,
  /// Foreign key into this language's chapter list.
  pub chapter: String,
  #[serde(default)]
  pub starter_code: String,
  pub test_cases: Vec<TestCase>,
}

/// A named, ordered group of problems within one language track.
#[derive(Clone, Debug, Serialize)]
pub struct Chapter {
  pub id: String,
  pub title: String,
  pub description: String,
  pub icon: String,
  pub problems: Vec<Problem>,
}

/// One language track: ordered chapters, each with its problems.
#[derive(Clone, Debug, Serialize)]
pub struct LanguageData {
  pub id: Language,
  pub name: String,
  pub icon: String,
  pub chapters: Vec<Chapter>,
}
