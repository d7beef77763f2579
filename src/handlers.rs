use crate::commands;
use crate::dates;
use crate::errors::AppError;
use crate::models::{
    GroupCard, HabitCard, NewGroupedGoal, NewHabit, OverviewParams, OverviewResponse,
    ToggleRequest,
};
use crate::progress::{build_overview, group_card, habit_card};
use crate::state::AppState;
use crate::storage::persist_store;
use crate::ui::INDEX_HTML;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use chrono::NaiveDate;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn overview(
    State(state): State<AppState>,
    Query(params): Query<OverviewParams>,
) -> Result<Json<OverviewResponse>, AppError> {
    let today = dates::today();
    let as_of = match params.date {
        Some(raw) => parse_date(&raw)?,
        None => today,
    };

    let data = state.data.lock().await;
    Ok(Json(build_overview(&data, as_of, today)))
}

pub async fn toggle_completion(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<HabitCard>, AppError> {
    let today = dates::today();
    let as_of = match payload.date {
        Some(raw) => parse_date(&raw)?,
        None => today,
    };

    let mut data = state.data.lock().await;
    let habit = commands::toggle_completion(&mut data, &id, as_of)?;
    persist_store(&state.data_dir, &data).await?;

    Ok(Json(habit_card(&habit, as_of, today)))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<NewHabit>,
) -> Result<Json<HabitCard>, AppError> {
    let today = dates::today();

    let mut data = state.data.lock().await;
    let habit = commands::create_habit(&mut data, payload)?;
    persist_store(&state.data_dir, &data).await?;

    Ok(Json(habit_card(&habit, today, today)))
}

pub async fn create_group(
    State(state): State<AppState>,
    Json(payload): Json<NewGroupedGoal>,
) -> Result<Json<GroupCard>, AppError> {
    let today = dates::today();

    let mut data = state.data.lock().await;
    let group = commands::create_grouped_goal(&mut data, payload)?;
    persist_store(&state.data_dir, &data).await?;

    Ok(Json(group_card(&group, &data.habits, today, today)))
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    raw.parse()
        .map_err(|_| AppError::bad_request("date must be formatted YYYY-MM-DD"))
}
