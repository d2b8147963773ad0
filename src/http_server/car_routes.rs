//! Car HTTP Routes
//!
//! CRUD endpoints for car records under `/api/cars`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, MethodRouter},
    Json, Router,
};
use serde_json::Value;

use crate::model::Car;
use crate::rest_api::{ApiError, ApiResult, CarController, MessageResponse};
use crate::validation::ValidationErrors;

/// Message for bodies that are not parseable JSON
pub const INVALID_JSON_MESSAGE: &str = "Request body must be valid JSON";

/// Message for bodies sent without a JSON content type
pub const CONTENT_TYPE_MESSAGE: &str = "Content-Type must be application/json";

/// Raw body as extracted; a rejection is turned into a validation error
type Payload = Result<Json<Value>, JsonRejection>;

/// Create car routes.
///
/// Every path also answers with a trailing slash.
pub fn car_routes(controller: Arc<CarController>) -> Router {
    let collection: MethodRouter<Arc<CarController>> =
        get(list_cars_handler).post(create_car_handler);
    let member: MethodRouter<Arc<CarController>> = get(get_car_handler)
        .put(update_car_handler)
        .delete(delete_car_handler);

    Router::new()
        .route("/api/cars", collection.clone())
        .route("/api/cars/", collection)
        .route("/api/cars/:id", member.clone())
        .route("/api/cars/:id/", member)
        .with_state(controller)
}

fn into_payload(payload: Payload) -> ApiResult<Value> {
    let rejection = match payload {
        Ok(Json(value)) => return Ok(value),
        Err(rejection) => rejection,
    };

    tracing::debug!(reason = %rejection.body_text(), "unreadable request body");
    let message = match rejection {
        JsonRejection::MissingJsonContentType(_) => CONTENT_TYPE_MESSAGE,
        _ => INVALID_JSON_MESSAGE,
    };
    Err(ApiError::Validation(ValidationErrors::single("body", message)))
}

async fn create_car_handler(
    State(controller): State<Arc<CarController>>,
    payload: Payload,
) -> ApiResult<(StatusCode, Json<Car>)> {
    tracing::info!("Handling POST /api/cars");
    let payload = into_payload(payload)?;
    let car = controller.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

async fn list_cars_handler(
    State(controller): State<Arc<CarController>>,
) -> ApiResult<Json<Vec<Car>>> {
    tracing::info!("Handling GET /api/cars");
    Ok(Json(controller.list().await?))
}

async fn get_car_handler(
    State(controller): State<Arc<CarController>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Car>> {
    tracing::info!(%id, "Handling GET /api/cars/:id");
    Ok(Json(controller.get(&id).await?))
}

async fn update_car_handler(
    State(controller): State<Arc<CarController>>,
    Path(id): Path<String>,
    payload: Payload,
) -> ApiResult<Json<Car>> {
    tracing::info!(%id, "Handling PUT /api/cars/:id");
    let payload = into_payload(payload)?;
    Ok(Json(controller.update(&id, &payload).await?))
}

async fn delete_car_handler(
    State(controller): State<Arc<CarController>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    tracing::info!(%id, "Handling DELETE /api/cars/:id");
    Ok(Json(controller.delete(&id).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryCarStore;

    #[test]
    fn test_router_builds() {
        let controller = Arc::new(CarController::new(Arc::new(MemoryCarStore::new())));
        let _router = car_routes(controller);
    }

    #[test]
    fn test_parsed_body_passes_through() {
        let value = into_payload(Ok(Json(serde_json::json!({"model": "Civic"})))).unwrap();
        assert_eq!(value["model"], "Civic");
    }
}
