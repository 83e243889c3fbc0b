use axum::Json;

use plan_core::{can_access_content, has_access_to_content};

use crate::error::{AppError, AppResult};
use crate::models::{ContentAccessRequest, ContentAccessResponse};

pub async fn access(Json(body): Json<ContentAccessRequest>) -> AppResult<Json<ContentAccessResponse>> {
    if body.category.is_none() && body.is_premium.is_none() {
        return Err(AppError::BadRequest(
            "Either category or isPremium is required".into(),
        ));
    }

    // Premium gating keys off the plan type alone; activity is not checked.
    let category_access = body
        .category
        .map(|category| has_access_to_content(&body.plan, category));
    let premium_access = body
        .is_premium
        .map(|is_premium| can_access_content(is_premium, body.plan.plan_type));

    Ok(Json(ContentAccessResponse {
        category_access,
        premium_access,
    }))
}
