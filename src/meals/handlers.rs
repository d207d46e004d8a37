use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::{
    error::ApiError,
    meals::{
        dto::{MealBody, MealMetrics, MealResponse, MealsResponse, MetricsResponse},
        repo::Meal,
    },
    session::SessionUser,
    state::AppState,
};

#[instrument(skip(state))]
pub async fn list_meals(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
) -> Result<Json<MealsResponse>, ApiError> {
    let meals = Meal::list_by_user(&state.db, user_id).await?;
    Ok(Json(MealsResponse { meals }))
}

#[instrument(skip(state))]
pub async fn get_meal(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MealResponse>, ApiError> {
    let meal = Meal::find_by_id(&state.db, user_id, id).await?;
    Ok(Json(MealResponse { meal }))
}

#[instrument(skip(state, body))]
pub async fn create_meal(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    Json(body): Json<MealBody>,
) -> Result<StatusCode, ApiError> {
    let id = Uuid::new_v4();
    Meal::insert(
        &state.db,
        id,
        user_id,
        &body.name,
        &body.description,
        &body.meal_date,
        body.on_diet,
    )
    .await?;

    info!(meal_id = %id, %user_id, "meal created");
    Ok(StatusCode::CREATED)
}

#[instrument(skip(state, body))]
pub async fn update_meal(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    Path(id): Path<Uuid>,
    Json(body): Json<MealBody>,
) -> Result<StatusCode, ApiError> {
    let affected = Meal::update(
        &state.db,
        user_id,
        id,
        &body.name,
        &body.description,
        &body.meal_date,
        body.on_diet,
    )
    .await?;

    // Zero matched rows is still reported as success to the caller.
    if affected == 0 {
        debug!(meal_id = %id, %user_id, "update matched no rows");
    }
    Ok(StatusCode::OK)
}

#[instrument(skip(state))]
pub async fn delete_meal(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let affected = Meal::delete(&state.db, user_id, id).await?;

    if affected == 0 {
        debug!(meal_id = %id, %user_id, "delete matched no rows");
    }
    Ok(StatusCode::OK)
}

#[instrument(skip(state))]
pub async fn metrics(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
) -> Result<Json<MetricsResponse>, ApiError> {
    let meals = Meal::list_by_user(&state.db, user_id).await?;
    Ok(Json(MetricsResponse {
        metrics: MealMetrics::from_meals(&meals),
    }))
}
