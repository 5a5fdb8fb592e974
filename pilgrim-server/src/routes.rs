//! Request handlers.

use actix_web::{HttpResponse, error::JsonPayloadError, web};
use pilgrim_core::{PlanId, PlanRequest};

use crate::{ApiError, AppState, Operation};

/// Register every planner route and the JSON body configuration.
///
/// Handlers expect a [`web::Data<AppState>`] registered on the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(reject_payload))
        .route("/generate-plan", web::post().to(generate_plan))
        .route("/api/generate-plan", web::post().to(generate_plan))
        .route("/api/locations", web::get().to(locations))
        .route("/api/plan/{plan_id}", web::get().to(find_plan));
}

fn reject_payload(err: JsonPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    ApiError::BadRequest {
        message: err.to_string(),
    }
    .into()
}

async fn generate_plan(
    state: web::Data<AppState>,
    body: web::Json<PlanRequest>,
) -> Result<HttpResponse, ApiError> {
    let planner = state.planner();
    let request = body.into_inner();
    let itinerary = web::block(move || planner.plan(&request))
        .await
        .map_err(|err| ApiError::internal(Operation::GeneratePlan, &err))?
        .map_err(|err| ApiError::from_plan(Operation::GeneratePlan, err))?;
    Ok(HttpResponse::Ok().json(itinerary))
}

async fn locations(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let planner = state.planner();
    let sites = web::block(move || planner.locations())
        .await
        .map_err(|err| ApiError::internal(Operation::FetchLocations, &err))?
        .map_err(|err| ApiError::from_plan(Operation::FetchLocations, err))?;
    Ok(HttpResponse::Ok().json(sites))
}

async fn find_plan(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let planner = state.planner();
    let id = PlanId::from(path.into_inner());
    let itinerary = web::block(move || planner.find_plan(&id))
        .await
        .map_err(|err| ApiError::internal(Operation::FetchPlan, &err))?
        .map_err(|err| ApiError::from_plan(Operation::FetchPlan, err))?;
    Ok(HttpResponse::Ok().json(itinerary))
}
