//! Woodpellet services - Handler HTTP per /woodpellet

use crate::core::{AppError, AppState};
use crate::dtos::WoodpelletDTO;
use crate::repositories::{Create, Delete, Read, ReadAll, RepositoryError, Update};
use axum::{
    extract::{
        Json, Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{Span, debug, info, instrument, warn};

/// Estrae l'id dal path e lo registra nello span corrente
fn path_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, AppError> {
    let Path(id) = path.inspect_err(|e| warn!("Rejected path: {}", e))?;
    Span::current().record("id", id);
    Ok(id)
}

#[instrument(skip(state))]
pub async fn list_woodpellets(State(state): State<Arc<AppState>>) -> Json<Vec<WoodpelletDTO>> {
    debug!("Listing woodpellets");
    let woodpellets = state.woodpellets.read().await.read_all();
    info!("Returning {} woodpellets", woodpellets.len());
    Json(woodpellets.into_iter().map(WoodpelletDTO::from).collect())
}

#[instrument(skip(state, path), fields(id = tracing::field::Empty))]
pub async fn get_woodpellet(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>, // parametro dalla URL /woodpellet/{id}
) -> Result<Json<WoodpelletDTO>, AppError> {
    let id = path_id(path)?;
    debug!("Fetching woodpellet by ID");
    let woodpellet = state.woodpellets.read().await.read(&id);
    match woodpellet {
        Some(woodpellet) => Ok(Json(WoodpelletDTO::from(woodpellet))),
        None => {
            warn!("Woodpellet not found");
            Err(RepositoryError::NotFound(id).into())
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn create_woodpellet(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<WoodpelletDTO>, JsonRejection>, // deve restare ultimo, consuma il body
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = payload.inspect_err(|e| warn!("Rejected payload: {}", e))?;
    debug!(requested_id = body.id, "Creating woodpellet");

    let created = state
        .woodpellets
        .write()
        .await
        .create(body)
        .inspect_err(|e| warn!("Create failed: {}", e))?;

    info!(id = created.id, "Woodpellet created");
    let location = format!("/woodpellet/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(WoodpelletDTO::from(created)),
    ))
}

#[instrument(skip(state, path, payload), fields(id = tracing::field::Empty))]
pub async fn update_woodpellet(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<WoodpelletDTO>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let id = path_id(path)?;
    let Json(body) = payload.inspect_err(|e| warn!("Rejected payload: {}", e))?;

    if body.id != id {
        warn!(body_id = body.id, "Path and body ids differ");
        return Err(AppError::bad_request("Id mismatch")
            .with_details(format!("path id {} does not match body id {}", id, body.id)));
    }

    debug!("Updating woodpellet");
    state
        .woodpellets
        .write()
        .await
        .update(&body)
        .inspect_err(|e| warn!("Update failed: {}", e))?;

    info!("Woodpellet updated");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, path), fields(id = tracing::field::Empty))]
pub async fn delete_woodpellet(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = path_id(path)?;
    debug!("Deleting woodpellet");
    state
        .woodpellets
        .write()
        .await
        .delete(&id)
        .inspect_err(|e| warn!("Delete failed: {}", e))?;

    info!("Woodpellet deleted");
    Ok(StatusCode::NO_CONTENT)
}
