//! Public protocol structs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::{AcademyResult, Difficulty, EmailTemplate, Progress};
use crate::logic::{snippet_for, TaskResult};
use crate::story::{BossTask, StoryUnit, Suspect};

/// Full story unit as shown in story mode: body included, clue included
/// where the corpus carries one.
#[derive(Debug, Serialize)]
pub struct StoryUnitOut {
    pub id: String,
    pub from: String,
    pub subject: String,
    pub snippet: String,
    pub body: String,
    #[serde(rename = "isPhish")]
    pub is_phish: bool,
    pub clue: Option<String>,
}

pub fn to_unit_out(u: &StoryUnit) -> StoryUnitOut {
    StoryUnitOut {
        id: u.id.to_string(),
        from: u.from.to_string(),
        subject: u.subject.to_string(),
        snippet: u.snippet.to_string(),
        body: u.body.to_string(),
        is_phish: u.is_phish,
        clue: u.clue.map(str::to_string),
    }
}

/// Preview-only view used by quick mode: no body, no clue, and the snippet
/// is always non-empty (derived from the body when the corpus left it out).
#[derive(Debug, Serialize)]
pub struct QuickEmailOut {
    pub id: String,
    pub from: String,
    pub subject: String,
    pub snippet: String,
    #[serde(rename = "isPhish")]
    pub is_phish: bool,
}

pub fn to_quick_out(u: &StoryUnit) -> QuickEmailOut {
    QuickEmailOut {
        id: u.id.to_string(),
        from: u.from.to_string(),
        subject: u.subject.to_string(),
        snippet: snippet_for(u),
        is_phish: u.is_phish,
    }
}

#[derive(Debug, Deserialize)]
pub struct QuickQuery {
    pub level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProgressIn {
    #[serde(default)]
    pub gain: i64,
    #[serde(default)]
    pub clues: HashMap<String, String>,
    #[serde(default, rename = "dayCleared")]
    pub day_cleared: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ProgressOut {
    pub score: i64,
    pub clues: HashMap<String, String>,
    #[serde(rename = "daysCleared")]
    pub days_cleared: Vec<u32>,
}

pub fn to_progress_out(p: &Progress) -> ProgressOut {
    ProgressOut {
        score: p.score,
        clues: p.clues.clone(),
        days_cleared: p.days_cleared.iter().copied().collect(),
    }
}

#[derive(Debug, Serialize)]
pub struct SuspectOut {
    pub id: String,
    pub name: String,
    pub title: String,
    pub dept: String,
    pub motive: String,
}

pub fn to_suspect_out(s: &Suspect) -> SuspectOut {
    SuspectOut {
        id: s.id.to_string(),
        name: s.name.to_string(),
        title: s.title.to_string(),
        dept: s.dept.to_string(),
        motive: s.motive.to_string(),
    }
}

#[derive(Debug, Deserialize)]
pub struct AccuseIn {
    #[serde(rename = "suspectId")]
    pub suspect_id: String,
}

#[derive(Debug, Serialize)]
pub struct AccuseOut {
    pub correct: bool,
    pub difficulty: Difficulty,
    pub score: i64,
}

/// Boss task with the grading secret stripped: no answer index, no
/// explanation, only what the player needs to answer.
#[derive(Debug, Serialize)]
pub struct TaskOut {
    pub id: String,
    pub category: String,
    pub prompt: String,
    pub options: Vec<String>,
}

pub fn to_task_out(t: &BossTask) -> TaskOut {
    TaskOut {
        id: t.id.to_string(),
        category: t.category.to_string(),
        prompt: t.prompt.to_string(),
        options: t.options.iter().map(|o| o.to_string()).collect(),
    }
}

#[derive(Debug, Serialize)]
pub struct BossTasksOut {
    pub difficulty: Difficulty,
    pub tasks: Vec<TaskOut>,
}

/// Answers are signed on the wire so a stray `-1` grades as a miss instead
/// of failing to parse.
#[derive(Debug, Deserialize)]
pub struct SubmitIn {
    #[serde(default)]
    pub answers: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct TaskFeedbackOut {
    #[serde(rename = "taskId")]
    pub task_id: String,
    pub correct: bool,
    pub explanation: String,
}

pub fn to_feedback_out(r: &TaskResult) -> TaskFeedbackOut {
    TaskFeedbackOut {
        task_id: r.task_id.to_string(),
        correct: r.correct,
        explanation: r.explanation.to_string(),
    }
}

#[derive(Debug, Serialize)]
pub struct SubmitOut {
    pub passed: bool,
    pub correct: usize,
    pub total: usize,
    pub results: Vec<TaskFeedbackOut>,
    pub score: i64,
    pub difficulty: Difficulty,
}

//
// Academy DTOs
//

/// `level` defaults to easy when absent; a present-but-unknown level is
/// passed through untouched and 404s on the empty lookup.
#[derive(Debug, Deserialize)]
pub struct AcademyEmailsQuery {
    pub level: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TemplateOut {
    pub id: String,
    pub level: String,
    pub sender: String,
    pub subject: String,
    pub snippet: String,
    #[serde(rename = "isPhish")]
    pub is_phish: bool,
}

pub fn to_template_out(t: &EmailTemplate) -> TemplateOut {
    TemplateOut {
        id: t.id.clone(),
        level: t.level.clone(),
        sender: t.sender.clone(),
        subject: t.subject.clone(),
        snippet: t.snippet.clone(),
        is_phish: t.is_phish,
    }
}

#[derive(Debug, Deserialize)]
pub struct AcademyResultIn {
    pub level: String,
    pub score: i64,
    pub total: u32,
    pub answered: u32,
}

#[derive(Debug, Serialize)]
pub struct AcademyResultOut {
    pub id: String,
    pub level: String,
    pub score: i64,
    pub total: u32,
    pub answered: u32,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

pub fn to_result_out(r: &AcademyResult) -> AcademyResultOut {
    AcademyResultOut {
        id: r.id.clone(),
        level: r.level.clone(),
        score: r.score,
        total: r.total,
        answered: r.answered,
        timestamp: r.timestamp,
    }
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub level: String,
}

#[derive(Debug, Serialize)]
pub struct SeedOut {
    pub seeded: bool,
    pub counts: BTreeMap<String, usize>,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

/// Error body shared by every failing route: a descriptive message plus the
/// HTTP status it rode in on.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}
