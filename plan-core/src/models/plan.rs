use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Standard,
    Feedback,
    Growth,
    Community,
}

impl PlanType {
    pub const ALL: [PlanType; 4] = [
        PlanType::Standard,
        PlanType::Feedback,
        PlanType::Growth,
        PlanType::Community,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Standard => "standard",
            PlanType::Feedback => "feedback",
            PlanType::Growth => "growth",
            PlanType::Community => "community",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| PlanError::UnknownPlanType(s.to_string()))
    }
}

/// Billing cycle length in months. Serialised as the bare month count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BillingDuration {
    OneMonth,
    ThreeMonths,
    SixMonths,
}

impl BillingDuration {
    pub const ALL: [BillingDuration; 3] = [
        BillingDuration::OneMonth,
        BillingDuration::ThreeMonths,
        BillingDuration::SixMonths,
    ];

    pub const fn months(&self) -> u32 {
        match self {
            BillingDuration::OneMonth => 1,
            BillingDuration::ThreeMonths => 3,
            BillingDuration::SixMonths => 6,
        }
    }
}

impl TryFrom<u32> for BillingDuration {
    type Error = PlanError;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        match months {
            1 => Ok(BillingDuration::OneMonth),
            3 => Ok(BillingDuration::ThreeMonths),
            6 => Ok(BillingDuration::SixMonths),
            other => Err(PlanError::UnsupportedDuration(other)),
        }
    }
}

impl From<BillingDuration> for u32 {
    fn from(d: BillingDuration) -> Self {
        d.months()
    }
}

impl fmt::Display for BillingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.months() {
            1 => f.write_str("1 month"),
            n => write!(f, "{n} months"),
        }
    }
}

/// Identity of a plan offering: type plus billing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanKey {
    pub plan_type: PlanType,
    pub duration: BillingDuration,
}

impl PlanKey {
    pub const fn new(plan_type: PlanType, duration: BillingDuration) -> Self {
        Self {
            plan_type,
            duration,
        }
    }
}

/// A priced plan. Prices are whole currency units (yen) per month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanInfo {
    plan_type: PlanType,
    duration: BillingDuration,
    monthly_price: u32,
}

impl PlanInfo {
    pub fn new(
        plan_type: PlanType,
        duration: BillingDuration,
        monthly_price: u32,
    ) -> PlanResult<Self> {
        if monthly_price == 0 {
            return Err(PlanError::InvalidPrice);
        }
        Ok(Self {
            plan_type,
            duration,
            monthly_price,
        })
    }

    // Only for the static catalog, whose prices are all non-zero.
    pub(crate) const fn priced(
        plan_type: PlanType,
        duration: BillingDuration,
        monthly_price: u32,
    ) -> Self {
        Self {
            plan_type,
            duration,
            monthly_price,
        }
    }

    pub fn plan_type(&self) -> PlanType {
        self.plan_type
    }

    pub fn duration(&self) -> BillingDuration {
        self.duration
    }

    pub fn monthly_price(&self) -> u32 {
        self.monthly_price
    }

    pub fn key(&self) -> PlanKey {
        PlanKey::new(self.plan_type, self.duration)
    }

    pub fn label(&self) -> String {
        crate::display::format_plan_display(
            Some(self.plan_type.as_str()),
            Some(self.duration.months()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_type_round_trips_through_str() {
        for t in PlanType::ALL {
            assert_eq!(t.as_str().parse::<PlanType>().unwrap(), t);
        }
        assert_eq!(
            "premium".parse::<PlanType>(),
            Err(PlanError::UnknownPlanType("premium".into()))
        );
    }

    #[test]
    fn plan_type_serializes_lowercase() {
        let json = serde_json::to_string(&PlanType::Feedback).unwrap();
        assert_eq!(json, "\"feedback\"");
    }

    #[test]
    fn only_one_three_and_six_months_are_durations() {
        assert_eq!(BillingDuration::try_from(3u32), Ok(BillingDuration::ThreeMonths));
        assert_eq!(
            BillingDuration::try_from(12u32),
            Err(PlanError::UnsupportedDuration(12))
        );
        assert_eq!(
            BillingDuration::try_from(0u32),
            Err(PlanError::UnsupportedDuration(0))
        );
    }

    #[test]
    fn duration_serializes_as_month_count() {
        assert_eq!(serde_json::to_string(&BillingDuration::SixMonths).unwrap(), "6");
        let d: BillingDuration = serde_json::from_str("1").unwrap();
        assert_eq!(d, BillingDuration::OneMonth);
        assert!(serde_json::from_str::<BillingDuration>("2").is_err());
    }

    #[test]
    fn zero_price_is_rejected() {
        assert_eq!(
            PlanInfo::new(PlanType::Standard, BillingDuration::OneMonth, 0),
            Err(PlanError::InvalidPrice)
        );
    }

    #[test]
    fn plan_info_serializes_camel_case() {
        let plan = PlanInfo::new(PlanType::Standard, BillingDuration::ThreeMonths, 3800).unwrap();
        let json = serde_json::to_value(plan).unwrap();
        assert_eq!(json["planType"], "standard");
        assert_eq!(json["duration"], 3);
        assert_eq!(json["monthlyPrice"], 3800);
    }
}
