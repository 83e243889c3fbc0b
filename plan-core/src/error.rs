use crate::models::{BillingDuration, PlanType};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("No plan defined for {plan_type} / {duration}")]
    UnknownPlan {
        plan_type: PlanType,
        duration: BillingDuration,
    },

    #[error("No price id configured for {plan_type} / {duration}")]
    MissingPriceId {
        plan_type: PlanType,
        duration: BillingDuration,
    },

    #[error("Unknown plan type: {0}")]
    UnknownPlanType(String),

    #[error("Unsupported billing duration: {0} months")]
    UnsupportedDuration(u32),

    #[error("Monthly price must be greater than zero")]
    InvalidPrice,
}

impl PlanError {
    /// Errors caused by the catalog or gateway price table rather than by
    /// caller input. Checkout must abort on these.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PlanError::UnknownPlan { .. } | PlanError::MissingPriceId { .. }
        )
    }
}

pub type PlanResult<T> = Result<T, PlanError>;
