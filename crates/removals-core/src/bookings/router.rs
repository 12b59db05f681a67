use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::autoquote::ItemCount;

use super::domain::{
    AddressDetails, BookingSubmission, ContactDetails, DateDetails, FurnitureItem, JobId,
    JobStatus, PackingMaterial, PricingInput, QuoteRecommendationRequest,
};
use super::notify::NotificationSink;
use super::repository::{JobRepository, RepositoryError};
use super::service::{BookingService, BookingServiceError};

/// Combined message kept stable for existing clients of the booking API.
const MISSING_REQUIRED_FIELDS: &str =
    "missing required fields: businessRef, furnitureItems, homeSize";

/// Router builder exposing the booking, quoting, and tenant endpoints.
pub fn booking_router<R, N>(service: Arc<BookingService<R, N>>) -> Router
where
    R: JobRepository + 'static,
    N: NotificationSink + 'static,
{
    Router::new()
        .route(
            "/api/v1/bookings",
            post(create_booking_handler::<R, N>).get(list_bookings_handler::<R, N>),
        )
        .route(
            "/api/v1/bookings/:job_id",
            get(get_booking_handler::<R, N>),
        )
        .route(
            "/api/v1/bookings/:job_id/status",
            patch(update_status_handler::<R, N>),
        )
        .route(
            "/api/v1/bookings/:job_id/notes",
            patch(update_notes_handler::<R, N>),
        )
        .route(
            "/api/v1/quotes/preview",
            post(quote_preview_handler::<R, N>),
        )
        .route(
            "/api/v1/quotes/recommendation",
            post(quote_recommendation_handler::<R, N>),
        )
        .route(
            "/api/v1/businesses/:business_ref",
            get(business_config_handler::<R, N>),
        )
        .with_state(service)
}

/// Create payload. The contractually required trio is optional here so an
/// absent field reports the API's combined message rather than a decode error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateBookingRequest {
    business_ref: Option<String>,
    home_size: Option<String>,
    furniture_items: Option<Vec<FurnitureItem>>,
    #[serde(default)]
    initial_furniture_items: Vec<FurnitureItem>,
    #[serde(default)]
    packing_service: String,
    #[serde(default)]
    packing_materials: Vec<PackingMaterial>,
    #[serde(default)]
    dismantle_package: bool,
    #[serde(default)]
    collection_address: Option<AddressDetails>,
    #[serde(default)]
    delivery_address: Option<AddressDetails>,
    #[serde(default)]
    collection_date: Option<DateDetails>,
    #[serde(default)]
    materials_delivery_date: Option<DateDetails>,
    #[serde(default)]
    contact: ContactDetails,
}

impl CreateBookingRequest {
    fn into_submission(self) -> Option<BookingSubmission> {
        Some(BookingSubmission {
            business_ref: self.business_ref?,
            home_size: self.home_size?,
            furniture_items: self.furniture_items?,
            initial_furniture_items: self.initial_furniture_items,
            packing_service: self.packing_service,
            packing_materials: self.packing_materials,
            dismantle_package: self.dismantle_package,
            collection_address: self.collection_address,
            delivery_address: self.delivery_address,
            collection_date: self.collection_date,
            materials_delivery_date: self.materials_delivery_date,
            contact: self.contact,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecommendationPayload {
    business_ref: Option<String>,
    home_size: Option<String>,
    furniture_items: Option<Vec<ItemCount>>,
    #[serde(default)]
    distance_miles: f64,
    #[serde(default)]
    driving_minutes: f64,
    #[serde(default)]
    no_parking: bool,
    #[serde(default)]
    no_lift: bool,
    #[serde(default)]
    customer_assistance: bool,
    #[serde(default)]
    difficult_access: bool,
}

impl RecommendationPayload {
    fn into_request(self) -> Option<QuoteRecommendationRequest> {
        Some(QuoteRecommendationRequest {
            business_ref: self.business_ref?,
            home_size: self.home_size?,
            furniture_items: self.furniture_items?,
            distance_miles: self.distance_miles,
            driving_minutes: self.driving_minutes,
            no_parking: self.no_parking,
            no_lift: self.no_lift,
            customer_assistance: self.customer_assistance,
            difficult_access: self.difficult_access,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateStatusRequest {
    status: JobStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateNotesRequest {
    notes: String,
}

fn missing_fields_response() -> Response {
    let payload = json!({
        "success": false,
        "error": MISSING_REQUIRED_FIELDS,
    });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}

fn failure_response(status: StatusCode, error: impl std::fmt::Display) -> Response {
    let payload = json!({
        "success": false,
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn create_booking_handler<R, N>(
    State(service): State<Arc<BookingService<R, N>>>,
    axum::Json(request): axum::Json<CreateBookingRequest>,
) -> Response
where
    R: JobRepository + 'static,
    N: NotificationSink + 'static,
{
    let Some(submission) = request.into_submission() else {
        return missing_fields_response();
    };

    match service.submit(submission) {
        Ok(job_id) => {
            let payload = json!({
                "success": true,
                "jobId": job_id,
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(BookingServiceError::Intake(error)) => {
            failure_response(StatusCode::UNPROCESSABLE_ENTITY, error)
        }
        Err(BookingServiceError::Repository(RepositoryError::Conflict)) => {
            failure_response(StatusCode::CONFLICT, "job already exists")
        }
        Err(other) => failure_response(StatusCode::INTERNAL_SERVER_ERROR, other),
    }
}

pub(crate) async fn list_bookings_handler<R, N>(
    State(service): State<Arc<BookingService<R, N>>>,
) -> Response
where
    R: JobRepository + 'static,
    N: NotificationSink + 'static,
{
    match service.jobs() {
        Ok(records) => {
            let payload = json!({
                "success": true,
                "data": records,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => failure_response(StatusCode::INTERNAL_SERVER_ERROR, error),
    }
}

pub(crate) async fn get_booking_handler<R, N>(
    State(service): State<Arc<BookingService<R, N>>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: JobRepository + 'static,
    N: NotificationSink + 'static,
{
    let id = JobId(job_id);
    match service.job(&id) {
        Ok(record) => {
            let payload = json!({
                "success": true,
                "data": record,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(BookingServiceError::JobNotFound(_)) => {
            failure_response(StatusCode::NOT_FOUND, "job not found")
        }
        Err(other) => failure_response(StatusCode::INTERNAL_SERVER_ERROR, other),
    }
}

pub(crate) async fn update_status_handler<R, N>(
    State(service): State<Arc<BookingService<R, N>>>,
    Path(job_id): Path<String>,
    axum::Json(request): axum::Json<UpdateStatusRequest>,
) -> Response
where
    R: JobRepository + 'static,
    N: NotificationSink + 'static,
{
    let id = JobId(job_id);
    match service.set_status(&id, request.status) {
        Ok(()) => {
            let payload = json!({
                "success": true,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(BookingServiceError::JobNotFound(_)) => {
            failure_response(StatusCode::NOT_FOUND, "job not found")
        }
        Err(other) => failure_response(StatusCode::INTERNAL_SERVER_ERROR, other),
    }
}

pub(crate) async fn update_notes_handler<R, N>(
    State(service): State<Arc<BookingService<R, N>>>,
    Path(job_id): Path<String>,
    axum::Json(request): axum::Json<UpdateNotesRequest>,
) -> Response
where
    R: JobRepository + 'static,
    N: NotificationSink + 'static,
{
    let id = JobId(job_id);
    match service.set_notes(&id, &request.notes) {
        Ok(()) => {
            let payload = json!({
                "success": true,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(BookingServiceError::JobNotFound(_)) => {
            failure_response(StatusCode::NOT_FOUND, "job not found")
        }
        Err(other) => failure_response(StatusCode::INTERNAL_SERVER_ERROR, other),
    }
}

pub(crate) async fn quote_preview_handler<R, N>(
    State(service): State<Arc<BookingService<R, N>>>,
    axum::Json(input): axum::Json<PricingInput>,
) -> Response
where
    R: JobRepository + 'static,
    N: NotificationSink + 'static,
{
    let breakdown = service.quote(&input);
    let payload = json!({
        "success": true,
        "breakdown": breakdown,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn quote_recommendation_handler<R, N>(
    State(service): State<Arc<BookingService<R, N>>>,
    axum::Json(payload): axum::Json<RecommendationPayload>,
) -> Response
where
    R: JobRepository + 'static,
    N: NotificationSink + 'static,
{
    let Some(request) = payload.into_request() else {
        return missing_fields_response();
    };

    match service.recommendation(&request) {
        Ok(recommendation) => {
            let payload = json!({
                "success": true,
                "data": recommendation,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(BookingServiceError::Intake(error)) => {
            failure_response(StatusCode::UNPROCESSABLE_ENTITY, error)
        }
        Err(other) => failure_response(StatusCode::INTERNAL_SERVER_ERROR, other),
    }
}

pub(crate) async fn business_config_handler<R, N>(
    State(service): State<Arc<BookingService<R, N>>>,
    Path(business_ref): Path<String>,
) -> Response
where
    R: JobRepository + 'static,
    N: NotificationSink + 'static,
{
    match service.directory().lookup(&business_ref) {
        Some(config) => {
            let payload = json!({
                "success": true,
                "data": config,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        None => failure_response(StatusCode::NOT_FOUND, "unknown business reference"),
    }
}
