use super::state::AppState;
use crate::core::logic::{CallOutcome, ImportOutcome, RollCallLogic};
use crate::errors::{AppError, AppResult};
use crate::import;
use crate::models::{HistoryRecord, Stats, Student};
use crate::utils::date::now_local;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

/// Largest roster upload accepted.
const MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/students", get(list_students))
        .route("/api/import", post(import_roster))
        .route("/api/call", post(call_student))
        .route("/api/history", get(history))
        .route("/api/stats", get(stats))
        .route("/api/clear", post(clear))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn list_students(State(state): State<AppState>) -> AppResult<Json<Vec<Student>>> {
    let students = state
        .with_shared(|shared| RollCallLogic::students(shared.store.as_ref()))
        .await?;
    Ok(Json(students))
}

async fn import_roster(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<ImportOutcome>> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Import(format!("malformed upload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Import(format!("cannot read upload: {e}")))?;
        upload = Some((file_name, bytes));
        break;
    }

    let Some((file_name, bytes)) = upload else {
        return Err(AppError::Import("no file uploaded".to_string()));
    };
    if file_name.is_empty() {
        return Err(AppError::Import("no file selected".to_string()));
    }

    // parse fully before touching the stored roster
    let roster = import::parse_bytes(&file_name, &bytes)?;

    let outcome = state
        .with_shared(move |shared| RollCallLogic::replace_roster(shared.store.as_mut(), &roster))
        .await?;

    tracing::info!(file = %file_name, students = outcome.count, "roster imported");
    state
        .record_activity(
            "import",
            file_name,
            format!("Imported {} students", outcome.count),
        )
        .await;

    Ok(Json(outcome))
}

async fn call_student(State(state): State<AppState>) -> AppResult<Json<CallOutcome>> {
    let outcome = state
        .with_shared(|shared| {
            RollCallLogic::call(shared.store.as_mut(), &mut shared.rng, now_local())
        })
        .await?;

    tracing::info!(name = %outcome.name, count = outcome.count, "student called");
    state
        .record_activity(
            "call",
            outcome.name.clone(),
            format!("Called (count {})", outcome.count),
        )
        .await;

    Ok(Json(outcome))
}

async fn history(State(state): State<AppState>) -> AppResult<Json<Vec<HistoryRecord>>> {
    let limit = state.history_limit;
    let records = state
        .with_shared(move |shared| RollCallLogic::recent_history(shared.store.as_ref(), limit))
        .await?;
    Ok(Json(records))
}

async fn stats(State(state): State<AppState>) -> AppResult<Json<Stats>> {
    let stats = state
        .with_shared(|shared| RollCallLogic::stats(shared.store.as_ref()))
        .await?;
    Ok(Json(stats))
}

async fn clear(State(state): State<AppState>) -> AppResult<Json<Value>> {
    state
        .with_shared(|shared| RollCallLogic::clear(shared.store.as_mut()))
        .await?;

    tracing::info!("roster and history cleared");
    state
        .record_activity("clear", String::new(), "Roster and history cleared".to_string())
        .await;

    Ok(Json(json!({ "success": true })))
}
