use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PlanType;

/// Subscription snapshot for one account, supplied by the identity layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPlanState {
    pub plan_type: Option<PlanType>,
    pub is_active: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

impl UserPlanState {
    pub fn active(plan_type: PlanType) -> Self {
        Self {
            plan_type: Some(plan_type),
            is_active: true,
            expires_at: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Learning,
    Member,
}
