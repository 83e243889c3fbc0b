use crate::error::{PlanError, PlanResult};
use crate::models::{BillingDuration, PlanInfo, PlanKey, PlanType};

use BillingDuration::*;
use PlanType::*;

static PLANS: [PlanInfo; 6] = [
    PlanInfo::priced(Standard, OneMonth, 4000),
    PlanInfo::priced(Standard, ThreeMonths, 3800),
    PlanInfo::priced(Standard, SixMonths, 3600),
    PlanInfo::priced(Feedback, OneMonth, 1480),
    PlanInfo::priced(Feedback, ThreeMonths, 1280),
    PlanInfo::priced(Feedback, SixMonths, 1180),
];

/// The process-wide plan catalog.
pub static CATALOG: PlanCatalog = PlanCatalog { plans: &PLANS };

/// Read-only table of the plans that can be purchased.
#[derive(Debug, Clone, Copy)]
pub struct PlanCatalog {
    plans: &'static [PlanInfo],
}

impl PlanCatalog {
    pub fn global() -> &'static PlanCatalog {
        &CATALOG
    }

    /// Resolve a priced plan. Combinations outside the table are a
    /// configuration error, never a default.
    pub fn lookup(&self, plan_type: PlanType, duration: BillingDuration) -> PlanResult<PlanInfo> {
        self.plans
            .iter()
            .find(|p| p.plan_type() == plan_type && p.duration() == duration)
            .copied()
            .ok_or(PlanError::UnknownPlan {
                plan_type,
                duration,
            })
    }

    pub fn lookup_key(&self, key: PlanKey) -> PlanResult<PlanInfo> {
        self.lookup(key.plan_type, key.duration)
    }

    /// Lookup from untrusted identifiers, e.g. query parameters.
    pub fn lookup_raw(&self, plan_type: &str, months: u32) -> PlanResult<PlanInfo> {
        let plan_type: PlanType = plan_type.parse()?;
        let duration = BillingDuration::try_from(months)?;
        self.lookup(plan_type, duration)
    }

    pub fn plans(&self) -> impl Iterator<Item = &PlanInfo> {
        self.plans.iter()
    }

    pub fn durations_for(&self, plan_type: PlanType) -> Vec<BillingDuration> {
        self.plans
            .iter()
            .filter(|p| p.plan_type() == plan_type)
            .map(|p| p.duration())
            .collect()
    }

    pub fn contains(&self, plan_type: PlanType, duration: BillingDuration) -> bool {
        self.lookup(plan_type, duration).is_ok()
    }
}
