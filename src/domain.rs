//! Domain models used by the backend: boss difficulty, cumulative player
//! progress, boss run state, and the academy template/result records.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Boss-phase difficulty. Resolved by the accusation outcome and consumed by
/// the task grader.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
  /// Correct accusation: the short task set, no misses allowed.
  Normal,
  /// Wrong accusation: one extra task, exactly one miss tolerated.
  Hard,
}
impl Default for Difficulty {
  fn default() -> Self { Difficulty::Normal }
}

/// Where did an academy template row come from?
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateSource {
  /// From the user-provided TOML bank.
  LocalBank,
  /// Built-in seed rows.
  Seed,
}

/// Cumulative player progress. Entries only grow: clues are upserted (last
/// write wins), cleared days are inserted once, and the score is an unbounded
/// running total that may go negative.
#[derive(Clone, Debug, Default)]
pub struct Progress {
  pub score: i64,
  pub clues: HashMap<String, String>,
  pub days_cleared: BTreeSet<u32>,
}

/// State of the single boss run. Each accusation overwrites the whole record;
/// each submission overwrites `passed`.
#[derive(Clone, Debug, Default)]
pub struct BossState {
  pub accused: Option<String>,
  pub difficulty: Difficulty,
  pub passed: bool,
}

/// Academy quiz template row held by the in-memory repository.
#[derive(Clone, Debug)]
pub struct EmailTemplate {
  pub id: String,
  pub level: String,   // "easy", "medium", "hard"
  pub sender: String,
  pub subject: String,
  pub snippet: String,
  pub is_phish: bool,
  pub source: TemplateSource,
}

/// A finished academy round, recorded with an id and a server-side timestamp.
#[derive(Clone, Debug)]
pub struct AcademyResult {
  pub id: String,
  pub level: String,
  pub score: i64,
  pub total: u32,
  pub answered: u32,
  pub timestamp: DateTime<Utc>,
}
