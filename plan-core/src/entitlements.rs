//! Access decisions for gated content.
//!
//! Two rule sets live here and they do not agree with each other:
//! the category table used by [`has_access_to_content`] and the premium flag
//! check in [`can_access_content`]. `community` is not a learning plan in the
//! first but unlocks premium content in the second, and `feedback` only exists
//! in the second. Keep them separate until product decides which one wins.

use crate::models::{ContentCategory, PlanType, UserPlanState};

const LEARNING_PLANS: &[PlanType] = &[PlanType::Standard, PlanType::Growth];

const MEMBER_PLANS: &[PlanType] = &[PlanType::Standard, PlanType::Growth, PlanType::Community];

const PREMIUM_PLANS: &[PlanType] = &[
    PlanType::Standard,
    PlanType::Growth,
    PlanType::Community,
    PlanType::Feedback,
];

pub fn allowed_plans(category: ContentCategory) -> &'static [PlanType] {
    match category {
        ContentCategory::Learning => LEARNING_PLANS,
        ContentCategory::Member => MEMBER_PLANS,
    }
}

/// Category check. Inactive accounts and accounts without a plan never pass.
pub fn has_access_to_content(state: &UserPlanState, category: ContentCategory) -> bool {
    if !state.is_active {
        return false;
    }
    match state.plan_type {
        Some(plan_type) => allowed_plans(category).contains(&plan_type),
        None => false,
    }
}

/// Premium flag check. Non-premium content is open to everyone.
pub fn can_access_content(is_premium: bool, plan_type: Option<PlanType>) -> bool {
    if !is_premium {
        return true;
    }
    plan_type.is_some_and(|t| PREMIUM_PLANS.contains(&t))
}
