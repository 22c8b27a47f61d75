//! Mock evaluation engine.
//!
//! There is no interpreter behind this: pass/fail comes from a per-problem
//! heuristic keyed on substrings of the problem id and title, plus a cheap syntax
//! smell-check per language. The `Evaluator` trait is the seam where a real
//! sandboxed runner would plug in without touching the session or the data
//! model.

use std::time::Instant;

use rand::Rng;
use serde::Serialize;

use crate::domain::{Language, Problem};

const JS_SYNTAX_ERROR: &str = "SyntaxError: Unexpected token";
const PY_SYNTAX_ERROR: &str = "SyntaxError: expected \":\"";
const STDOUT_PLACEHOLDER: &str = "Output here...";
const WRONG_OUTPUT: &str = "incorrect output";

/// Pass probability for problems without a dedicated heuristic.
const DEFAULT_PASS_RATE: f64 = 0.7;

/// Outcome of one evaluated test case. Mirrors the test case's id and
/// hidden flag; `actual` is synthesized, never computed from the input.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
  pub id: String,
  pub passed: bool,
  pub input: String,
  pub expected: String,
  pub actual: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
  pub is_hidden: bool,
}

/// What the frontend renders in the output panel. `test_results` is present
/// only for Submit; Run evaluates internally but discards the breakdown.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
  pub stdout: String,
  pub stderr: String,
  pub exit_code: i32,
  #[serde(rename = "executionTime")]
  pub execution_time_ms: u64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub test_results: Option<Vec<TestResult>>,
}

impl ExecutionResult {
  /// Result carrying only an error message, used when evaluation itself
  /// blows up at the session boundary.
  pub fn from_error(message: impl Into<String>) -> Self {
    Self {
      stdout: String::new(),
      stderr: message.into(),
      exit_code: 1,
      execution_time_ms: 0,
      test_results: None,
    }
  }

  pub fn all_passed(&self) -> bool {
    self
      .test_results
      .as_ref()
      .map(|results| results.iter().all(|t| t.passed))
      .unwrap_or(false)
  }
}

/// Decides pass/fail for a problem's test cases given raw source text.
/// Total: every input produces a result, no errors escape.
pub trait Evaluator: Send + Sync {
  fn evaluate(&self, source: &str, problem: &Problem, run_all_tests: bool) -> ExecutionResult;
}

/// The placeholder policy standing in for a real execution backend.
pub struct HeuristicEvaluator;

impl Evaluator for HeuristicEvaluator {
  fn evaluate(&self, source: &str, problem: &Problem, run_all_tests: bool) -> ExecutionResult {
    let start = Instant::now();

    let stderr = syntax_smell(source, problem.language);
    let exit_code = if stderr.is_some() { 1 } else { 0 };

    // Heuristic key: lowercased id + title, so "js-var-1 hello world"
    // matches the hello branch and "js-loop-3 fizzbuzz" the fizz branch.
    let key = format!("{} {}", problem.id, problem.title).to_lowercase();

    let mut rng = rand::thread_rng();
    let test_results: Vec<TestResult> = problem
      .test_cases
      .iter()
      .map(|tc| {
        let (mut passed, mut actual) = judge(source, &key, &tc.expected_output, &mut rng);
        // A flagged syntax error overrides everything.
        if stderr.is_some() {
          passed = false;
          actual = String::new();
        }
        TestResult {
          id: tc.id.clone(),
          passed,
          input: tc.input.clone(),
          expected: tc.expected_output.clone(),
          actual,
          error: stderr.clone(),
          is_hidden: tc.is_hidden,
        }
      })
      .collect();

    let stdout = if stderr.is_some() {
      String::new()
    } else {
      let visible: Vec<&str> = test_results
        .iter()
        .filter(|t| !t.is_hidden && !t.actual.is_empty())
        .map(|t| t.actual.as_str())
        .collect();
      if visible.is_empty() { STDOUT_PLACEHOLDER.to_string() } else { visible.join("\n") }
    };

    ExecutionResult {
      stdout,
      stderr: stderr.unwrap_or_default(),
      exit_code,
      execution_time_ms: start.elapsed().as_millis() as u64,
      test_results: run_all_tests.then_some(test_results),
    }
  }
}

/// Not a parser: flags only the crudest shape mismatch per language.
fn syntax_smell(source: &str, language: Language) -> Option<String> {
  match language {
    Language::Javascript if source.contains("function") && !source.contains('{') => {
      Some(JS_SYNTAX_ERROR.to_string())
    }
    Language::Python if source.contains("def ") && !source.contains(':') => {
      Some(PY_SYNTAX_ERROR.to_string())
    }
    _ => None,
  }
}

/// Per-problem pass heuristic keyed on the problem identity (id + title),
/// never on the test input.
fn judge(source: &str, key: &str, expected: &str, rng: &mut impl Rng) -> (bool, String) {
  if key.contains("hello") {
    let passed = source.contains("Hello, World!") || source.contains("Hello, World");
    let actual = if passed { "Hello, World!".to_string() } else { String::new() };
    (passed, actual)
  } else if key.contains("sum") {
    let passed = source.contains("return") && source.contains('+');
    let actual = if passed { expected.to_string() } else { "undefined".to_string() };
    (passed, actual)
  } else if key.contains("fizz") {
    let passed =
      source.contains("FizzBuzz") && source.contains("Fizz") && source.contains("Buzz");
    let actual = if passed { expected.to_string() } else { String::new() };
    (passed, actual)
  } else {
    let passed = rng.gen_bool(DEFAULT_PASS_RATE);
    let actual = if passed { expected.to_string() } else { WRONG_OUTPUT.to_string() };
    (passed, actual)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::Catalog;

  fn problem(catalog: &Catalog, id: &str) -> Problem {
    catalog.problem_by_id(id).expect("known problem").clone()
  }

  #[test]
  fn hello_world_passes_with_the_greeting() {
    let catalog = Catalog::built_in();
    let p = problem(&catalog, "js-var-1");
    let result = HeuristicEvaluator.evaluate(
      "function helloWorld() {\n  return \"Hello, World!\";\n}",
      &p,
      true,
    );
    assert_eq!(result.exit_code, 0);
    let tests = result.test_results.as_ref().expect("submit breakdown");
    assert!(tests[0].passed);
    assert_eq!(tests[0].actual, "Hello, World!");
    assert_eq!(result.stdout, "Hello, World!");
    assert!(result.all_passed());
  }

  #[test]
  fn hello_world_fails_without_the_greeting() {
    let catalog = Catalog::built_in();
    let p = problem(&catalog, "js-var-1");
    let result = HeuristicEvaluator.evaluate("return 5;", &p, true);
    let tests = result.test_results.as_ref().expect("submit breakdown");
    assert!(!tests[0].passed);
    assert_eq!(tests[0].actual, "");
    assert_eq!(result.stdout, STDOUT_PLACEHOLDER);
  }

  #[test]
  fn sum_requires_return_and_plus() {
    let catalog = Catalog::built_in();
    let p = problem(&catalog, "js-var-2");
    let pass = HeuristicEvaluator.evaluate("function sum(a, b) { return a + b; }", &p, true);
    assert!(pass.all_passed());
    // Hidden case contributes to the tally but not to stdout.
    assert_eq!(pass.stdout, "5\n0");

    let fail = HeuristicEvaluator.evaluate("function sum(a, b) { a + b; }", &p, true);
    let tests = fail.test_results.as_ref().expect("submit breakdown");
    assert!(tests.iter().all(|t| !t.passed));
    assert!(tests.iter().all(|t| t.actual == "undefined"));
  }

  #[test]
  fn fizzbuzz_needs_all_three_literals() {
    let catalog = Catalog::built_in();
    let p = problem(&catalog, "js-loop-3");
    let source = "function fizzBuzz(n) { console.log(\"FizzBuzz\", \"Fizz\", \"Buzz\"); }";
    assert!(HeuristicEvaluator.evaluate(source, &p, true).all_passed());

    let partial = "function fizzBuzz(n) { console.log(\"Fizz\", \"Buzz\"); }";
    assert!(!HeuristicEvaluator.evaluate(partial, &p, true).all_passed());
  }

  #[test]
  fn js_syntax_smell_forces_every_test_to_fail() {
    let catalog = Catalog::built_in();
    let p = problem(&catalog, "js-var-2");
    // Mentions "function" but never opens a brace.
    let result = HeuristicEvaluator.evaluate("function sum(a, b) return a + b;", &p, true);
    assert_eq!(result.stderr, JS_SYNTAX_ERROR);
    assert_eq!(result.exit_code, 1);
    assert_eq!(result.stdout, "");
    let tests = result.test_results.as_ref().expect("submit breakdown");
    assert!(tests.iter().all(|t| !t.passed && t.actual.is_empty()));
    assert!(tests.iter().all(|t| t.error.as_deref() == Some(JS_SYNTAX_ERROR)));
  }

  #[test]
  fn py_syntax_smell_uses_the_python_diagnostic() {
    let catalog = Catalog::built_in();
    let p = problem(&catalog, "py-var-1");
    let result = HeuristicEvaluator.evaluate("def hello_world()\n    pass", &p, false);
    assert_eq!(result.stderr, PY_SYNTAX_ERROR);
    assert_eq!(result.exit_code, 1);
  }

  #[test]
  fn run_mode_omits_the_test_breakdown() {
    let catalog = Catalog::built_in();
    let p = problem(&catalog, "js-var-1");
    let result = HeuristicEvaluator.evaluate("console.log(\"Hello, World!\");", &p, false);
    assert!(result.test_results.is_none());
    // Console output is still produced from the internal evaluation.
    assert_eq!(result.stdout, "Hello, World!");
  }

  #[test]
  fn random_branch_synthesizes_expected_or_placeholder() {
    let catalog = Catalog::built_in();
    let p = problem(&catalog, "js-func-1"); // factorial: no dedicated heuristic
    for _ in 0..50 {
      let result = HeuristicEvaluator.evaluate("function factorial(n) { }", &p, true);
      for t in result.test_results.as_ref().expect("submit breakdown") {
        if t.passed {
          assert_eq!(t.actual, t.expected);
        } else {
          assert_eq!(t.actual, WRONG_OUTPUT);
        }
      }
    }
  }
}
