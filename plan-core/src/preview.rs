use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::PlanCatalog;
use crate::error::PlanResult;
use crate::models::{PlanInfo, PlanKey};
use crate::price_ids::PriceIdMap;
use crate::proration::{Clock, ProrationCalculator, ProrationResult};

/// What the plan-change screen shows before handing off to checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanChangePreview {
    pub current_plan: PlanInfo,
    pub current_label: String,
    pub target_plan: PlanInfo,
    pub target_label: String,
    pub target_price_id: String,
    pub proration: ProrationResult,
}

/// Resolves both plans and the target price id, then estimates the proration.
/// Fails before any arithmetic if the catalog or price table is incomplete.
pub fn preview_plan_change<C: Clock>(
    catalog: &PlanCatalog,
    prices: &PriceIdMap,
    calculator: &ProrationCalculator<C>,
    current: PlanKey,
    target: PlanKey,
    current_period_end: DateTime<Utc>,
) -> PlanResult<PlanChangePreview> {
    let current_plan = catalog.lookup_key(current)?;
    let target_plan = catalog.lookup_key(target)?;
    let target_price_id = prices
        .price_id(target.plan_type, target.duration)?
        .to_string();

    let proration = calculator.calculate(&current_plan, &target_plan, current_period_end);

    Ok(PlanChangePreview {
        current_label: current_plan.label(),
        current_plan,
        target_label: target_plan.label(),
        target_plan,
        target_price_id,
        proration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use crate::error::PlanError;
    use crate::models::{BillingDuration, PlanType};
    use crate::proration::FixedClock;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap()
    }

    fn std_1m() -> PlanKey {
        PlanKey::new(PlanType::Standard, BillingDuration::OneMonth)
    }

    fn std_3m() -> PlanKey {
        PlanKey::new(PlanType::Standard, BillingDuration::ThreeMonths)
    }

    fn prices() -> PriceIdMap {
        PriceIdMap::from_entries([(std_1m(), "price_std_1m"), (std_3m(), "price_std_3m")])
    }

    #[test]
    fn test_preview_upgrade() {
        let calc = ProrationCalculator::new(FixedClock(now()));

        let preview = preview_plan_change(
            &CATALOG,
            &prices(),
            &calc,
            std_1m(),
            std_3m(),
            now() + Duration::days(15),
        )
        .unwrap();

        assert_eq!(preview.current_label, "スタンダードプラン（1ヶ月）");
        assert_eq!(preview.target_label, "スタンダードプラン（3ヶ月）");
        assert_eq!(preview.target_price_id, "price_std_3m");
        assert_eq!(preview.proration.refund, -2000);
        assert_eq!(preview.proration.new_charge, 1900);
        assert_eq!(preview.proration.total, -100);
    }

    #[test]
    fn test_preview_fails_on_missing_price_id() {
        let calc = ProrationCalculator::new(FixedClock(now()));
        let target = PlanKey::new(PlanType::Feedback, BillingDuration::OneMonth);

        let err = preview_plan_change(&CATALOG, &prices(), &calc, std_1m(), target, now())
            .unwrap_err();

        assert_eq!(
            err,
            PlanError::MissingPriceId {
                plan_type: PlanType::Feedback,
                duration: BillingDuration::OneMonth,
            }
        );
    }

    #[test]
    fn test_preview_fails_on_unknown_current_plan() {
        let calc = ProrationCalculator::new(FixedClock(now()));
        let current = PlanKey::new(PlanType::Community, BillingDuration::OneMonth);

        let err = preview_plan_change(&CATALOG, &prices(), &calc, current, std_3m(), now())
            .unwrap_err();

        assert!(matches!(err, PlanError::UnknownPlan { .. }));
    }

    #[test]
    fn test_preview_serializes_camel_case() {
        let calc = ProrationCalculator::new(FixedClock(now()));
        let preview = preview_plan_change(
            &CATALOG,
            &prices(),
            &calc,
            std_3m(),
            std_1m(),
            now() + Duration::days(30),
        )
        .unwrap();

        let json = serde_json::to_value(&preview).unwrap();
        assert_eq!(json["targetPriceId"], "price_std_1m");
        assert_eq!(json["proration"]["refund"], -3800);
        assert_eq!(json["proration"]["newCharge"], 4000);
        assert_eq!(json["proration"]["daysRemaining"], 30);
        assert_eq!(json["currentPlan"]["monthlyPrice"], 3800);
    }
}
