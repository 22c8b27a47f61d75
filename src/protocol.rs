//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{Difficulty, Example, Language, LanguageData, Problem};
use crate::evaluator::ExecutionResult;
use crate::progress::{Submission, SubmissionTally};

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    SelectProblem {
        #[serde(default, rename = "problemId")]
        problem_id: Option<String>,
    },
    EditCode {
        code: String,
    },
    ResetCode,
    Run,
    Submit,
    Progress,
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Problem {
        problem: ProblemOut,
        /// Saved snapshot, or the starter code when none exists.
        code: String,
        solved: bool,
    },
    CodeSaved,
    CodeReset {
        code: String,
    },
    RunResult {
        result: ExecutionResult,
    },
    SubmitResult {
        result: ExecutionResult,
        passed: bool,
        #[serde(rename = "testResults")]
        test_results: SubmissionTally,
        solved: bool,
    },
    Progress {
        summary: ProgressSummaryOut,
    },
    Error {
        message: String,
    },
}

/// Test case as shown to the client. Hidden cases keep their id and flag but
/// have input and expected output blanked.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseOut {
    pub id: String,
    pub input: String,
    pub expected_output: String,
    pub is_hidden: bool,
}

/// Full problem DTO used by both WS and HTTP for problem delivery.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemOut {
    pub id: String,
    pub title: String,
    pub description: String,
    pub input_format: String,
    pub output_format: String,
    pub examples: Vec<Example>,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub language: Language,
    pub chapter: String,
    pub starter_code: String,
    pub test_cases: Vec<TestCaseOut>,
}

/// Convert full `Problem` (internal) to the public DTO, redacting hidden
/// test cases on the way out.
pub fn to_out(p: &Problem) -> ProblemOut {
    ProblemOut {
        id: p.id.clone(),
        title: p.title.clone(),
        description: p.description.clone(),
        input_format: p.input_format.clone(),
        output_format: p.output_format.clone(),
        examples: p.examples.clone(),
        difficulty: p.difficulty,
        tags: p.tags.clone(),
        language: p.language,
        chapter: p.chapter.clone(),
        starter_code: p.starter_code.clone(),
        test_cases: p
            .test_cases
            .iter()
            .map(|tc| {
                if tc.is_hidden {
                    TestCaseOut {
                        id: tc.id.clone(),
                        input: String::new(),
                        expected_output: String::new(),
                        is_hidden: true,
                    }
                } else {
                    TestCaseOut {
                        id: tc.id.clone(),
                        input: tc.input.clone(),
                        expected_output: tc.expected_output.clone(),
                        is_hidden: false,
                    }
                }
            })
            .collect(),
    }
}

/// Compact problem listing for sidebars and the catalog endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSummaryOut {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub language: Language,
    pub chapter: String,
    pub solved: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChapterOut {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub problems: Vec<ProblemSummaryOut>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageOut {
    pub id: Language,
    pub name: String,
    pub icon: String,
    pub chapters: Vec<ChapterOut>,
}

/// Language tree with per-problem solved flags.
pub fn language_tree(languages: &[LanguageData], solved: &[String]) -> Vec<LanguageOut> {
    languages
        .iter()
        .map(|l| LanguageOut {
            id: l.id,
            name: l.name.clone(),
            icon: l.icon.clone(),
            chapters: l
                .chapters
                .iter()
                .map(|c| ChapterOut {
                    id: c.id.clone(),
                    title: c.title.clone(),
                    description: c.description.clone(),
                    icon: c.icon.clone(),
                    problems: c.problems.iter().map(|p| problem_summary(p, solved)).collect(),
                })
                .collect(),
        })
        .collect()
}

pub fn problem_summary(p: &Problem, solved: &[String]) -> ProblemSummaryOut {
    ProblemSummaryOut {
        id: p.id.clone(),
        title: p.title.clone(),
        difficulty: p.difficulty,
        tags: p.tags.clone(),
        language: p.language,
        chapter: p.chapter.clone(),
        solved: solved.iter().any(|id| id == &p.id),
    }
}

//
// Progress summary (the stats the progress page renders)
//

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterProgressOut {
    pub id: String,
    pub title: String,
    pub solved: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageProgressOut {
    pub id: Language,
    pub name: String,
    pub solved: usize,
    pub total: usize,
    pub chapters: Vec<ChapterProgressOut>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummaryOut {
    pub solved_count: usize,
    pub total_problems: usize,
    /// Percent of recent submissions that passed; 0 when there are none.
    pub accuracy: f32,
    pub languages: Vec<LanguageProgressOut>,
    pub recent_submissions: Vec<Submission>,
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize)]
pub struct ProblemQuery {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExecuteIn {
    #[serde(rename = "problemId")]
    pub problem_id: String,
    pub code: String,
}

#[derive(Serialize)]
pub struct SubmitOut {
    pub result: ExecutionResult,
    pub passed: bool,
    #[serde(rename = "testResults")]
    pub test_results: SubmissionTally,
    pub solved: bool,
}

#[derive(Debug, Deserialize)]
pub struct CodeQuery {
    #[serde(rename = "problemId")]
    pub problem_id: String,
}

#[derive(Debug, Deserialize)]
pub struct CodeIn {
    #[serde(rename = "problemId")]
    pub problem_id: String,
    pub code: String,
}

#[derive(Serialize)]
pub struct CodeOut {
    pub code: String,
    pub solved: bool,
}

#[derive(Serialize)]
pub struct AckOut {
    pub ok: bool,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
