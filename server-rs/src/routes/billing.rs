use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use plan_core::{format_plan_badge, preview_plan_change, PlanCatalog, PlanChangePreview};

use crate::error::AppResult;
use crate::models::{PlanListing, ProrationPreviewRequest};
use crate::AppState;

fn listing(state: &AppState, plan: &plan_core::PlanInfo) -> PlanListing {
    let months = plan.duration().months();
    PlanListing {
        plan: *plan,
        label: plan.label(),
        badge: format_plan_badge(Some(plan.plan_type().as_str()), Some(months)),
        price_configured: state.config.stripe.price_ids.contains(&plan.key()),
    }
}

pub async fn plans(State(state): State<AppState>) -> Json<Value> {
    let plans: Vec<PlanListing> = PlanCatalog::global()
        .plans()
        .map(|plan| listing(&state, plan))
        .collect();

    Json(json!({ "plans": plans }))
}

pub async fn plan(
    State(state): State<AppState>,
    Path((plan_type, months)): Path<(String, u32)>,
) -> AppResult<Json<PlanListing>> {
    let plan = PlanCatalog::global().lookup_raw(&plan_type, months)?;
    Ok(Json(listing(&state, &plan)))
}

pub async fn proration_preview(
    State(state): State<AppState>,
    Json(body): Json<ProrationPreviewRequest>,
) -> AppResult<Json<PlanChangePreview>> {
    let preview = preview_plan_change(
        PlanCatalog::global(),
        &state.config.stripe.price_ids,
        &state.calculator,
        body.current_plan,
        body.target_plan,
        body.current_period_end,
    )?;

    tracing::info!(
        from = %preview.current_plan.plan_type(),
        to = %preview.target_plan.plan_type(),
        total = preview.proration.total,
        "Plan change preview"
    );

    Ok(Json(preview))
}
