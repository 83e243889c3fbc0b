//! Mid-cycle plan change estimate.
//!
//! Every month is treated as 30 days. The numbers here are a preview shown
//! before the payment gateway performs its own authoritative proration.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::PlanInfo;

pub const DAYS_PER_MONTH: f64 = 30.0;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Source of "now" for anything that depends on wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProrationResult {
    /// Credit for the unused part of the current plan. Never positive.
    pub refund: i64,
    /// Cost of the remaining days on the new plan. Never negative.
    pub new_charge: i64,
    /// `refund + new_charge`, summed after each term is rounded.
    pub total: i64,
    pub days_remaining: i64,
}

impl ProrationResult {
    pub fn is_refund(&self) -> bool {
        self.total < 0
    }

    pub fn is_charge(&self) -> bool {
        self.total > 0
    }

    pub fn is_neutral(&self) -> bool {
        self.total == 0
    }
}

/// Whole days left until `period_end`, clamped at zero.
pub fn days_remaining(period_end: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let ms = (period_end - now).num_milliseconds();
    ms.max(0) / MS_PER_DAY
}

pub fn daily_rate(plan: &PlanInfo) -> f64 {
    f64::from(plan.monthly_price()) / DAYS_PER_MONTH
}

/// Nearest integer, ties toward positive infinity (`-2.5 -> -2`, `2.5 -> 3`).
pub fn round_half_up(x: f64) -> i64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

pub fn calculate_proration(
    current_plan: &PlanInfo,
    new_plan: &PlanInfo,
    current_period_end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> ProrationResult {
    let days = days_remaining(current_period_end, now);

    let refund = round_half_up(-(daily_rate(current_plan) * days as f64));
    let new_charge = round_half_up(daily_rate(new_plan) * days as f64);
    let total = refund + new_charge;

    tracing::debug!(
        from = %current_plan.plan_type(),
        from_months = current_plan.duration().months(),
        to = %new_plan.plan_type(),
        to_months = new_plan.duration().months(),
        days,
        refund,
        new_charge,
        total,
        "Computed proration estimate"
    );

    ProrationResult {
        refund,
        new_charge,
        total,
        days_remaining: days,
    }
}

/// Proration bound to a clock, so callers never read the system time directly.
#[derive(Debug, Clone, Default)]
pub struct ProrationCalculator<C = SystemClock> {
    clock: C,
}

impl<C: Clock> ProrationCalculator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn calculate(
        &self,
        current_plan: &PlanInfo,
        new_plan: &PlanInfo,
        current_period_end: DateTime<Utc>,
    ) -> ProrationResult {
        calculate_proration(current_plan, new_plan, current_period_end, self.clock.now())
    }
}
