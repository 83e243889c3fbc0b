use chrono::{DateTime, Utc};
use plan_core::{ContentCategory, PlanInfo, PlanKey, UserPlanState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProrationPreviewRequest {
    pub current_plan: PlanKey,
    pub target_plan: PlanKey,
    pub current_period_end: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanListing {
    #[serde(flatten)]
    pub plan: PlanInfo,
    pub label: String,
    pub badge: String,
    pub price_configured: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAccessRequest {
    pub plan: UserPlanState,
    pub category: Option<ContentCategory>,
    pub is_premium: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAccessResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_access: Option<bool>,
}
