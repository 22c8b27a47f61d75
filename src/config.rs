//! Loading an optional extra problem bank from TOML.
//!
//! `PLAYGROUND_CONFIG_PATH` may point at a TOML file whose `[[problems]]`
//! entries extend the built-in catalog. Entries missing required fields are
//! logged and skipped; a broken file never prevents startup.

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::{Difficulty, Example, Language, Problem, TestCase};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct PlaygroundConfig {
  #[serde(default)]
  pub problems: Vec<ProblemCfg>,
}

/// Problem entry accepted in TOML configuration. Required: `id`, `title`,
/// `language`, `chapter`, and at least one test case.
#[derive(Clone, Debug, Deserialize)]
pub struct ProblemCfg {
  #[serde(default)] pub id: Option<String>,
  #[serde(default)] pub title: Option<String>,
  #[serde(default)] pub description: String,
  #[serde(default)] pub input_format: String,
  #[serde(default)] pub output_format: String,
  #[serde(default)] pub examples: Vec<Example>,
  #[serde(default)] pub difficulty: Difficulty,
  #[serde(default)] pub tags: Vec<String>,
  #[serde(default)] pub language: Option<Language>,
  #[serde(default)] pub chapter: Option<String>,
  #[serde(default)] pub starter_code: String,
  #[serde(default)] pub test_cases: Vec<TestCase>,
}

impl PlaygroundConfig {
  /// Convert entries to problems, dropping the invalid ones with a log line.
  pub fn into_problems(self) -> Vec<Problem> {
    self.problems.into_iter().filter_map(cfg_to_problem).collect()
  }
}

fn cfg_to_problem(cfg: ProblemCfg) -> Option<Problem> {
  let id = match cfg.id {
    Some(id) if !id.is_empty() => id,
    _ => {
      error!(target: "catalog", "Skipping bank item: missing id.");
      return None;
    }
  };
  let (Some(title), Some(language), Some(chapter)) = (cfg.title, cfg.language, cfg.chapter) else {
    error!(target: "catalog", %id, "Skipping bank item: missing title, language, or chapter.");
    return None;
  };
  if cfg.test_cases.is_empty() {
    error!(target: "catalog", %id, "Skipping bank item: no test cases.");
    return None;
  }
  Some(Problem {
    id,
    title,
    description: cfg.description,
    input_format: cfg.input_format,
    output_format: cfg.output_format,
    examples: cfg.examples,
    difficulty: cfg.difficulty,
    tags: cfg.tags,
    language,
    chapter,
    starter_code: cfg.starter_code,
    test_cases: cfg.test_cases,
  })
}

/// Attempt to load `PlaygroundConfig` from PLAYGROUND_CONFIG_PATH. On any
/// parsing/IO error, returns None.
pub fn load_playground_config_from_env() -> Option<PlaygroundConfig> {
  let path = std::env::var("PLAYGROUND_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<PlaygroundConfig>(&s) {
      Ok(cfg) => {
        info!(target: "codemaster_backend", %path, "Loaded playground config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "codemaster_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "codemaster_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn toml_bank_parses_and_filters() {
    let raw = r#"
      [[problems]]
      id = "js-extra-1"
      title = "Extra"
      language = "javascript"
      chapter = "variables"
      starter_code = "function extra() {\n}"
      test_cases = [{ id = "t1", input = "", expectedOutput = "42" }]

      [[problems]]
      title = "No id, gets skipped"
      language = "python"
      chapter = "loops"
      test_cases = [{ id = "t1", input = "", expectedOutput = "x" }]

      [[problems]]
      id = "js-extra-2"
      title = "No tests, gets skipped"
      language = "javascript"
      chapter = "loops"
    "#;
    let cfg: PlaygroundConfig = toml::from_str(raw).expect("parse");
    let problems = cfg.into_problems();
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].id, "js-extra-1");
    assert_eq!(problems[0].language, Language::Javascript);
    assert_eq!(problems[0].test_cases[0].expected_output, "42");
    assert!(!problems[0].test_cases[0].is_hidden);
  }
}
