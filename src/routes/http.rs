//! HTTP endpoint handlers. These are thin wrappers that forward to core
//! logic and state; each handler is instrumented and logs basic result info.
//!
//! Fallible routes answer with `(StatusCode, Json<ErrorResponse>)` so the
//! frontend always gets a JSON body with a message and the status code.

use std::sync::Arc;
use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use tracing::{info, instrument};

use crate::logic;
use crate::protocol::*;
use crate::state::AppState;
use crate::story;

fn err(code: StatusCode, msg: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
  (code, Json(ErrorResponse { error: msg.into(), code: code.as_u16() }))
}

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info")]
pub async fn http_get_story_day(
  Path(n): Path<i64>,
) -> Result<Json<Vec<StoryUnitOut>>, (StatusCode, Json<ErrorResponse>)> {
  let units = usize::try_from(n)
    .ok()
    .and_then(story::day)
    .ok_or_else(|| err(StatusCode::NOT_FOUND, format!("No story content for day {n}")))?;
  info!(target: "story", day = n, units = units.len(), "HTTP story day served");
  Ok(Json(units.iter().map(to_unit_out).collect()))
}

#[instrument(level = "info")]
pub async fn http_get_finale() -> impl IntoResponse {
  let units = story::finale();
  info!(target: "story", units = units.len(), "HTTP finale served");
  Json(units.iter().map(to_unit_out).collect::<Vec<_>>())
}

#[instrument(level = "info", fields(level = %q.level.clone().unwrap_or_else(|| "easy".into())))]
pub async fn http_get_quick_emails(Query(q): Query<QuickQuery>) -> impl IntoResponse {
  let level = q.level.unwrap_or_else(|| "easy".into());
  // Unknown level names quietly land on the easy band.
  let band = story::level_band(&level);
  let picks = {
    let mut rng = rand::thread_rng();
    logic::sample_quick_round(&mut rng, &band)
  };
  info!(target: "story", %level, band = band.name, served = picks.len(), "HTTP quick emails sampled");
  Json(picks.iter().map(|u| to_quick_out(u)).collect::<Vec<_>>())
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_progress(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let p = state.progress_snapshot().await;
  Json(to_progress_out(&p))
}

#[instrument(level = "info", skip(state, body), fields(gain = body.gain, clue_count = body.clues.len()))]
pub async fn http_post_progress(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ProgressIn>,
) -> impl IntoResponse {
  let p = state.merge_progress(body.gain, body.clues, body.day_cleared).await;
  Json(to_progress_out(&p))
}

#[instrument(level = "info")]
pub async fn http_get_suspects() -> impl IntoResponse {
  Json(story::suspects().iter().map(to_suspect_out).collect::<Vec<_>>())
}

#[instrument(level = "info", skip(state, body), fields(%body.suspect_id))]
pub async fn http_post_accuse(
  State(state): State<Arc<AppState>>,
  Json(body): Json<AccuseIn>,
) -> impl IntoResponse {
  let (correct, difficulty, score) = state.accuse(&body.suspect_id).await;
  Json(AccuseOut { correct, difficulty, score })
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_boss_tasks(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let boss = state.boss_snapshot().await;
  let tasks: Vec<TaskOut> = story::tasks_for(boss.difficulty).iter().map(to_task_out).collect();
  info!(
    target: "boss",
    difficulty = ?boss.difficulty,
    accused = ?boss.accused,
    passed = boss.passed,
    tasks = tasks.len(),
    "HTTP boss tasks served"
  );
  Json(BossTasksOut { difficulty: boss.difficulty, tasks })
}

#[instrument(level = "info", skip(state, body), fields(answer_count = body.answers.len()))]
pub async fn http_post_boss_submit(
  State(state): State<Arc<AppState>>,
  Json(body): Json<SubmitIn>,
) -> impl IntoResponse {
  let out = state.submit_boss(&body.answers).await;
  Json(SubmitOut {
    passed: out.passed,
    correct: out.correct,
    total: out.total,
    results: out.results.iter().map(to_feedback_out).collect(),
    score: out.score,
    difficulty: out.difficulty,
  })
}

#[instrument(level = "info", skip(state), fields(level = %q.level.clone().unwrap_or_else(|| "easy".into())))]
pub async fn http_get_academy_emails(
  State(state): State<Arc<AppState>>,
  Query(q): Query<AcademyEmailsQuery>,
) -> Result<Json<Vec<TemplateOut>>, (StatusCode, Json<ErrorResponse>)> {
  // Absent level defaults to easy; a present value is looked up as-is.
  let level = q.level.unwrap_or_else(|| "easy".into());
  let rows = state.templates_for_level(&level).await;
  if rows.is_empty() {
    return Err(err(StatusCode::NOT_FOUND, "No templates for this level"));
  }
  info!(target: "academy", %level, rows = rows.len(), "HTTP academy emails served");
  Ok(Json(rows.iter().map(to_template_out).collect()))
}

#[instrument(level = "info", skip(state, body), fields(%body.level, score = body.score))]
pub async fn http_post_academy_result(
  State(state): State<Arc<AppState>>,
  Json(body): Json<AcademyResultIn>,
) -> impl IntoResponse {
  let rec = state.record_result(&body.level, body.score, body.total, body.answered).await;
  Json(to_result_out(&rec))
}

const LEADERBOARD_LIMIT: usize = 10;

#[instrument(level = "info", skip(state), fields(%q.level))]
pub async fn http_get_leaderboard(
  State(state): State<Arc<AppState>>,
  Query(q): Query<LeaderboardQuery>,
) -> Result<Json<Vec<AcademyResultOut>>, (StatusCode, Json<ErrorResponse>)> {
  // Unlike quick mode, an unknown level here is a caller error.
  if !story::is_known_level(&q.level) {
    return Err(err(StatusCode::BAD_REQUEST, format!("Unknown level '{}'", q.level)));
  }
  let level = q.level.trim().to_lowercase();
  let rows = state.leaderboard(&level, LEADERBOARD_LIMIT).await;
  info!(target: "academy", %level, rows = rows.len(), "HTTP leaderboard served");
  Ok(Json(rows.iter().map(to_result_out).collect()))
}

#[instrument(level = "info", skip(state))]
pub async fn http_post_seed(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let (seeded, counts) = state.ensure_seeded().await;
  Json(SeedOut { seeded, counts })
}
