use axum::{extract::State, Json};
use plan_core::Clock;
use serde_json::{json, Value};

use crate::AppState;

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let prices_configured = state.config.stripe.price_ids.len();
    Json(json!({
        "status": "healthy",
        "pricesConfigured": prices_configured,
        "timestamp": state.calculator.clock().now(),
    }))
}
