use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::RosterError;
use crate::models::ActivityCatalog;
use crate::services::roster_service;
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

pub async fn list_activities_handler(State(state): State<AppState>) -> Json<ActivityCatalog> {
    Json(roster_service::list(&state.store).await)
}

pub async fn signup_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Json<MessageBody>, RosterError> {
    match roster_service::signup(
        &state.store,
        state.capacity_policy,
        &activity_name,
        &query.email,
    )
    .await
    {
        Ok(message) => {
            info!(activity = %activity_name, email = %query.email, "signup accepted");
            Ok(Json(MessageBody { message }))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %query.email, error = %e, "signup rejected");
            Err(e)
        }
    }
}

pub async fn unregister_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Json<MessageBody>, RosterError> {
    roster_service::unregister(&state.store, &activity_name, &query.email)
        .await
        .map(|message| {
            info!(activity = %activity_name, email = %query.email, "unregister accepted");
            Json(MessageBody { message })
        })
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, error = %e, "unregister rejected");
            e
        })
}
