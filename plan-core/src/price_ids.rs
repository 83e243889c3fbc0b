use std::collections::HashMap;

use crate::catalog::PlanCatalog;
use crate::error::{PlanError, PlanResult};
use crate::models::{BillingDuration, PlanKey, PlanType};

/// Payment gateway price identifiers per plan, fixed at startup.
#[derive(Debug, Clone, Default)]
pub struct PriceIdMap {
    ids: HashMap<PlanKey, String>,
}

impl PriceIdMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map, skipping blank ids so they surface as missing.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (PlanKey, S)>,
        S: Into<String>,
    {
        let ids = entries
            .into_iter()
            .map(|(key, id)| {
                let id: String = id.into();
                (key, id.trim().to_string())
            })
            .filter(|(_, id)| !id.is_empty())
            .collect();
        Self { ids }
    }

    pub fn price_id(&self, plan_type: PlanType, duration: BillingDuration) -> PlanResult<&str> {
        match self.ids.get(&PlanKey::new(plan_type, duration)) {
            Some(id) => Ok(id.as_str()),
            None => {
                tracing::warn!(
                    plan_type = %plan_type,
                    months = duration.months(),
                    "No payment price id configured"
                );
                Err(PlanError::MissingPriceId {
                    plan_type,
                    duration,
                })
            }
        }
    }

    pub fn contains(&self, key: &PlanKey) -> bool {
        self.ids.contains_key(key)
    }

    /// Catalog plans that have no price id.
    pub fn missing(&self, catalog: &PlanCatalog) -> Vec<PlanKey> {
        catalog
            .plans()
            .map(|p| p.key())
            .filter(|key| !self.contains(key))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    fn prices() -> PriceIdMap {
        PriceIdMap::from_entries([
            (
                PlanKey::new(PlanType::Standard, BillingDuration::OneMonth),
                "price_std_1m",
            ),
            (
                PlanKey::new(PlanType::Standard, BillingDuration::ThreeMonths),
                "  price_std_3m ",
            ),
            (
                PlanKey::new(PlanType::Feedback, BillingDuration::OneMonth),
                "",
            ),
        ])
    }

    #[test]
    fn test_configured_price_id() {
        let map = prices();
        assert_eq!(
            map.price_id(PlanType::Standard, BillingDuration::OneMonth).unwrap(),
            "price_std_1m"
        );
        assert_eq!(
            map.price_id(PlanType::Standard, BillingDuration::ThreeMonths).unwrap(),
            "price_std_3m"
        );
    }

    #[test]
    fn test_missing_or_blank_price_id_is_an_error() {
        let map = prices();
        let err = map
            .price_id(PlanType::Feedback, BillingDuration::OneMonth)
            .unwrap_err();
        assert_eq!(
            err,
            PlanError::MissingPriceId {
                plan_type: PlanType::Feedback,
                duration: BillingDuration::OneMonth,
            }
        );
        assert!(err.is_configuration());
        assert!(map
            .price_id(PlanType::Growth, BillingDuration::SixMonths)
            .is_err());
    }

    #[test]
    fn test_missing_lists_unpriced_catalog_plans() {
        let map = prices();
        assert_eq!(map.len(), 2);

        let missing = map.missing(&CATALOG);
        assert_eq!(missing.len(), 4);
        assert!(missing.contains(&PlanKey::new(PlanType::Feedback, BillingDuration::OneMonth)));
        assert!(!missing.contains(&PlanKey::new(PlanType::Standard, BillingDuration::OneMonth)));
        assert_eq!(PriceIdMap::new().missing(&CATALOG).len(), 6);
    }
}
