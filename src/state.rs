//! Application state: the player's progress, the boss run, and the academy
//! template repository.
//!
//! This module owns:
//!   - the cumulative Progress record and its single mutation path
//!   - the BossState record driven by accusations and submissions
//!   - the academy template store (config bank and/or built-in seeds)
//!   - recorded academy results and the leaderboard query
//!
//! Everything is process-wide shared state behind `Arc<RwLock>`: one game,
//! one process, matching the rest of the design. Tests build isolated
//! instances through `with_config`.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::config::{load_game_config_from_env, GameConfig};
use crate::domain::{AcademyResult, BossState, Difficulty, EmailTemplate, Progress, TemplateSource};
use crate::logic;
use crate::seeds::seed_templates;
use crate::story;

/// Everything a graded boss submission reports back.
#[derive(Clone, Debug)]
pub struct BossOutcome {
    pub difficulty: Difficulty,
    pub results: Vec<logic::TaskResult>,
    pub correct: usize,
    pub total: usize,
    pub passed: bool,
    pub score: i64,
}

#[derive(Clone)]
pub struct AppState {
    pub progress: Arc<RwLock<Progress>>,
    pub boss: Arc<RwLock<BossState>>,
    pub templates: Arc<RwLock<Vec<EmailTemplate>>>,
    pub results: Arc<RwLock<Vec<AcademyResult>>>,
}

impl AppState {
    /// Build state from env: load the optional TOML template bank. The
    /// academy store is filled here from the bank; `ensure_seeded` covers
    /// the no-bank case at startup.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        Self::with_config(load_game_config_from_env())
    }

    /// Build state from an explicit config. Tests use this to get isolated
    /// stores without touching the environment.
    pub fn with_config(cfg: Option<GameConfig>) -> Self {
        let rows = cfg.as_ref().map(bank_templates).unwrap_or_default();
        if cfg.is_some() {
            info!(target: "academy", local_bank = rows.len(), "Template bank loaded from config");
        }
        Self {
            progress: Arc::new(RwLock::new(Progress::default())),
            boss: Arc::new(RwLock::new(BossState::default())),
            templates: Arc::new(RwLock::new(rows)),
            results: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Current progress snapshot.
    #[instrument(level = "debug", skip(self))]
    pub async fn progress_snapshot(&self) -> Progress {
        self.progress.read().await.clone()
    }

    /// Current boss run snapshot.
    #[instrument(level = "debug", skip(self))]
    pub async fn boss_snapshot(&self) -> BossState {
        self.boss.read().await.clone()
    }

    /// The only mutation path for progress: add `gain` (may be negative),
    /// upsert every clue, and mark `day_cleared` if not already present.
    /// Nothing here ever removes or resets an entry.
    #[instrument(level = "info", skip(self, clues), fields(clue_count = clues.len()))]
    pub async fn merge_progress(
        &self,
        gain: i64,
        clues: HashMap<String, String>,
        day_cleared: Option<u32>,
    ) -> Progress {
        let mut p = self.progress.write().await;
        p.score += gain;
        for (k, v) in clues {
            p.clues.insert(k, v);
        }
        if let Some(day) = day_cleared {
            p.days_cleared.insert(day);
        }
        info!(target: "story", score = p.score, clues = p.clues.len(), days_cleared = p.days_cleared.len(), "Progress merged");
        p.clone()
    }

    /// Resolve an accusation against the fixed culprit: overwrite BossState
    /// with the accused id and resulting difficulty, then apply the score
    /// delta. Repeating simply overwrites the record and moves the score
    /// again.
    #[instrument(level = "info", skip(self), fields(%suspect_id))]
    pub async fn accuse(&self, suspect_id: &str) -> (bool, Difficulty, i64) {
        let correct = suspect_id == story::CULPRIT_ID;
        let difficulty = if correct { Difficulty::Normal } else { Difficulty::Hard };
        let delta: i64 = if correct { 30 } else { -15 };
        {
            let mut boss = self.boss.write().await;
            boss.accused = Some(suspect_id.to_string());
            boss.difficulty = difficulty;
            boss.passed = false;
        }
        let score = {
            let mut p = self.progress.write().await;
            p.score += delta;
            p.score
        };
        info!(target: "boss", %suspect_id, correct, ?difficulty, score, "Accusation resolved");
        (correct, difficulty, score)
    }

    /// Difficulty currently selected by the accusation outcome.
    pub async fn boss_difficulty(&self) -> Difficulty {
        self.boss.read().await.difficulty
    }

    /// Grade a submission against the current difficulty's task set and
    /// record the outcome. A passing submission adds +50 every time it
    /// happens, including repeats.
    #[instrument(level = "info", skip(self, answers), fields(answer_count = answers.len()))]
    pub async fn submit_boss(&self, answers: &[i64]) -> BossOutcome {
        let difficulty = self.boss_difficulty().await;
        let tasks = story::tasks_for(difficulty);
        let (results, correct) = logic::grade_boss(tasks, answers);
        let passed = correct >= logic::pass_threshold(difficulty, tasks.len());
        {
            let mut boss = self.boss.write().await;
            boss.passed = passed;
        }
        let score = {
            let mut p = self.progress.write().await;
            if passed {
                p.score += 50;
            }
            p.score
        };
        info!(target: "boss", ?difficulty, correct, total = tasks.len(), passed, score, "Boss submission graded");
        BossOutcome { difficulty, results, correct, total: tasks.len(), passed, score }
    }

    /// Idempotent academy seeding: a non-empty store is left untouched.
    /// Returns whether anything was inserted plus per-level counts either
    /// way.
    #[instrument(level = "info", skip(self))]
    pub async fn ensure_seeded(&self) -> (bool, BTreeMap<String, usize>) {
        let mut rows = self.templates.write().await;
        let inserted = if rows.is_empty() {
            *rows = seed_templates();
            true
        } else {
            false
        };
        let mut inventory: BTreeMap<String, (usize, usize)> = BTreeMap::new();
        for t in rows.iter() {
            let e = inventory.entry(t.level.clone()).or_insert((0, 0));
            match t.source {
                TemplateSource::LocalBank => e.0 += 1,
                TemplateSource::Seed => e.1 += 1,
            }
        }
        let mut counts = BTreeMap::new();
        for (level, (bank, seed)) in &inventory {
            info!(target: "academy", %level, local_bank = bank, seed = seed, "Template inventory");
            counts.insert(level.clone(), bank + seed);
        }
        (inserted, counts)
    }

    /// Stored template rows for one level. No normalization on purpose: an
    /// unknown or miscased level yields no rows and the route answers 404.
    #[instrument(level = "debug", skip(self), fields(%level))]
    pub async fn templates_for_level(&self, level: &str) -> Vec<EmailTemplate> {
        self.templates
            .read()
            .await
            .iter()
            .filter(|t| t.level == level)
            .cloned()
            .collect()
    }

    /// Persist a finished academy round with a fresh id and server-side
    /// timestamp.
    #[instrument(level = "info", skip(self), fields(%level, score, total, answered))]
    pub async fn record_result(&self, level: &str, score: i64, total: u32, answered: u32) -> AcademyResult {
        let rec = AcademyResult {
            id: Uuid::new_v4().to_string(),
            level: level.to_string(),
            score,
            total,
            answered,
            timestamp: Utc::now(),
        };
        self.results.write().await.push(rec.clone());
        info!(target: "academy", id = %rec.id, %level, score, "Academy result recorded");
        rec
    }

    /// Best results for a level: highest score first, earlier submission
    /// breaking ties.
    #[instrument(level = "debug", skip(self), fields(%level, limit))]
    pub async fn leaderboard(&self, level: &str, limit: usize) -> Vec<AcademyResult> {
        let mut rows: Vec<AcademyResult> = self
            .results
            .read()
            .await
            .iter()
            .filter(|r| r.level == level)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.score.cmp(&a.score).then(a.timestamp.cmp(&b.timestamp)));
        rows.truncate(limit);
        rows
    }
}

/// Convert bank rows, skipping anything with a level the game does not
/// know. Stored levels are canonical lowercase.
fn bank_templates(cfg: &GameConfig) -> Vec<EmailTemplate> {
    let mut rows = Vec::new();
    for tc in &cfg.templates {
        if !story::is_known_level(&tc.level) {
            error!(target: "academy", level = %tc.level, subject = %tc.subject, "Skipping bank template: unknown level.");
            continue;
        }
        rows.push(EmailTemplate {
            id: tc.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string()),
            level: tc.level.trim().to_lowercase(),
            sender: tc.sender.clone(),
            subject: tc.subject.clone(),
            snippet: tc.snippet.clone(),
            is_phish: tc.is_phish,
            source: TemplateSource::LocalBank,
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TemplateCfg;

    fn fresh() -> AppState {
        AppState::with_config(None)
    }

    #[tokio::test]
    async fn merge_accumulates_like_a_single_call() {
        let a = fresh();
        a.merge_progress(10, HashMap::new(), None).await;
        let split = a.merge_progress(-3, HashMap::new(), None).await;

        let b = fresh();
        let single = b.merge_progress(7, HashMap::new(), None).await;

        assert_eq!(split.score, single.score);
        assert_eq!(split.score, 7);
    }

    #[tokio::test]
    async fn clues_upsert_and_days_dedupe() {
        let state = fresh();
        let mut clues = HashMap::new();
        clues.insert("d3e2".to_string(), "first read".to_string());
        state.merge_progress(0, clues, Some(3)).await;

        let mut clues = HashMap::new();
        clues.insert("d3e2".to_string(), "second read".to_string());
        let p = state.merge_progress(0, clues, Some(3)).await;

        assert_eq!(p.clues.get("d3e2").map(String::as_str), Some("second read"));
        assert_eq!(p.clues.len(), 1);
        assert_eq!(p.days_cleared.len(), 1);
        assert!(p.days_cleared.contains(&3));
    }

    #[tokio::test]
    async fn accusation_branches_on_the_culprit() {
        let state = fresh();
        let (correct, difficulty, score) = state.accuse("S2").await;
        assert!(correct);
        assert_eq!(difficulty, Difficulty::Normal);
        assert_eq!(score, 30);

        let other = fresh();
        let (correct, difficulty, score) = other.accuse("S4").await;
        assert!(!correct);
        assert_eq!(difficulty, Difficulty::Hard);
        assert_eq!(score, -15);
        let boss = other.boss_snapshot().await;
        assert_eq!(boss.accused.as_deref(), Some("S4"));
    }

    #[tokio::test]
    async fn re_accusing_moves_the_score_again() {
        // Not a bug: every accusation applies its delta.
        let state = fresh();
        state.accuse("S2").await;
        let (_, _, score) = state.accuse("S2").await;
        assert_eq!(score, 60);
        let (_, difficulty, score) = state.accuse("S5").await;
        assert_eq!(difficulty, Difficulty::Hard);
        assert_eq!(score, 45);
    }

    #[tokio::test]
    async fn normal_run_passes_only_on_a_perfect_sheet() {
        let state = fresh();
        state.accuse("S2").await;

        let out = state.submit_boss(&[0, 0, 99]).await;
        assert!(!out.passed);
        assert_eq!(out.correct, 2);
        assert_eq!(out.total, 3);
        assert_eq!(out.score, 30, "a failing submission leaves the score alone");

        let out = state.submit_boss(&[0, 0, 0]).await;
        assert!(out.passed);
        assert_eq!(out.correct, 3);
        assert_eq!(out.score, 80);
        assert!(state.boss_snapshot().await.passed);
    }

    #[tokio::test]
    async fn hard_run_tolerates_exactly_one_miss() {
        let state = fresh();
        state.accuse("S1").await;

        let out = state.submit_boss(&[0, 0, 0, 0]).await;
        assert_eq!(out.total, 4);
        assert_eq!(out.correct, 3);
        assert!(out.passed);
        assert_eq!(out.score, -15 + 50);

        let out = state.submit_boss(&[0, 0, 99, 0]).await;
        assert_eq!(out.correct, 2);
        assert!(!out.passed);
        assert_eq!(out.score, 35);
    }

    #[tokio::test]
    async fn passing_twice_scores_twice() {
        let state = fresh();
        state.accuse("S2").await;
        state.submit_boss(&[0, 0, 0]).await;
        let out = state.submit_boss(&[0, 0, 0]).await;
        assert_eq!(out.score, 130);
    }

    #[tokio::test]
    async fn a_new_accusation_resets_the_passed_flag() {
        let state = fresh();
        state.accuse("S2").await;
        state.submit_boss(&[0, 0, 0]).await;
        assert!(state.boss_snapshot().await.passed);
        state.accuse("S3").await;
        assert!(!state.boss_snapshot().await.passed);
    }

    #[tokio::test]
    async fn seeding_is_idempotent() {
        let state = fresh();
        let (inserted, counts) = state.ensure_seeded().await;
        assert!(inserted);
        assert_eq!(counts.get("easy"), Some(&5));
        assert_eq!(counts.get("medium"), Some(&5));
        assert_eq!(counts.get("hard"), Some(&5));

        let (inserted, counts) = state.ensure_seeded().await;
        assert!(!inserted);
        assert_eq!(counts.values().sum::<usize>(), 15);
    }

    #[tokio::test]
    async fn bank_rows_replace_seeds_and_bad_levels_are_skipped() {
        let cfg = GameConfig {
            templates: vec![
                TemplateCfg {
                    id: Some("bank-1".into()),
                    level: "easy".into(),
                    sender: "it@corp.example".into(),
                    subject: "VPN maintenance".into(),
                    snippet: "The VPN will be down Sunday night.".into(),
                    is_phish: false,
                },
                TemplateCfg {
                    id: None,
                    level: "impossible".into(),
                    sender: "x@corp.example".into(),
                    subject: "dropped".into(),
                    snippet: "bad level".into(),
                    is_phish: true,
                },
            ],
        };
        let state = AppState::with_config(Some(cfg));
        let (inserted, counts) = state.ensure_seeded().await;
        assert!(!inserted, "a bank-filled store must not be re-seeded");
        assert_eq!(counts.get("easy"), Some(&1));
        assert_eq!(counts.len(), 1);

        let rows = state.templates_for_level("easy").await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "bank-1");
        assert_eq!(rows[0].source, TemplateSource::LocalBank);
    }

    #[tokio::test]
    async fn template_lookup_is_exact_about_level_strings() {
        let state = fresh();
        state.ensure_seeded().await;
        assert_eq!(state.templates_for_level("easy").await.len(), 5);
        assert!(state.templates_for_level("EASY").await.is_empty());
        assert!(state.templates_for_level("bogus").await.is_empty());
    }

    #[tokio::test]
    async fn leaderboard_sorts_by_score_then_time() {
        let state = fresh();
        state.record_result("easy", 3, 5, 5).await;
        let first_top = state.record_result("easy", 5, 5, 5).await;
        state.record_result("easy", 5, 5, 5).await;
        state.record_result("medium", 8, 8, 8).await;

        let rows = state.leaderboard("easy", 10).await;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].score, 5);
        assert_eq!(rows[0].id, first_top.id, "earlier submission wins the tie");
        assert_eq!(rows[2].score, 3);

        let rows = state.leaderboard("easy", 2).await;
        assert_eq!(rows.len(), 2);
    }
}
