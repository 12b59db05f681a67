use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use removals_core::autoquote::{
    analyze_inventory, recommendation, rooms_for_home_size, ItemCatalog, ItemCount, QuoteInputs,
    QuoteRecommendation,
};
use removals_core::bookings::{
    booking_router, pricing, BookingService, CostBreakdown, JobRepository, NotificationSink,
    PricingInput,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Combined estimate request: the quote calculator's input plus an optional
/// inventory and move parameters for the auto-quote engine. A single call
/// covers the booking form's pricing panel.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MoveEstimateRequest {
    #[serde(flatten)]
    pub(crate) pricing: PricingInput,
    #[serde(default)]
    pub(crate) inventory: Vec<ItemCount>,
    #[serde(default)]
    pub(crate) distance_miles: f64,
    #[serde(default)]
    pub(crate) driving_minutes: f64,
    #[serde(default)]
    pub(crate) no_parking: bool,
    #[serde(default)]
    pub(crate) no_lift: bool,
    #[serde(default)]
    pub(crate) customer_assistance: bool,
    #[serde(default)]
    pub(crate) difficult_access: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MoveEstimateResponse {
    pub(crate) success: bool,
    pub(crate) breakdown: CostBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) recommendation: Option<QuoteRecommendation>,
}

pub(crate) fn with_booking_routes<R, N>(service: Arc<BookingService<R, N>>) -> axum::Router
where
    R: JobRepository + 'static,
    N: NotificationSink + 'static,
{
    booking_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/quotes/estimate",
            axum::routing::post(move_estimate_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn move_estimate_endpoint(
    Json(payload): Json<MoveEstimateRequest>,
) -> Json<MoveEstimateResponse> {
    let MoveEstimateRequest {
        pricing: input,
        inventory,
        distance_miles,
        driving_minutes,
        no_parking,
        no_lift,
        customer_assistance,
        difficult_access,
    } = payload;

    let breakdown = pricing::quote(&input);

    let engine_quote = if inventory.is_empty() {
        None
    } else {
        let catalog = ItemCatalog::standard();
        let analysis = analyze_inventory(&inventory, &catalog);
        let inputs = QuoteInputs {
            total_volume: analysis.total_volume,
            num_heavy_items: analysis.num_heavy_items,
            customer_assistance,
            num_rooms: rooms_for_home_size(&input.home_size),
            difficult_access,
            distance_miles,
            no_parking,
            no_lift,
            driving_minutes,
        };
        Some(recommendation(&inputs))
    };

    Json(MoveEstimateResponse {
        success: true,
        breakdown,
        recommendation: engine_quote,
    })
}
