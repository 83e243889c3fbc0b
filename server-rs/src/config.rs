use std::env;

use plan_core::{PlanCatalog, PlanKey, PriceIdMap};

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub node_env: String,
    pub cors_origins: Vec<String>,
    pub stripe: StripeConfig,
}

#[derive(Clone, Debug)]
pub struct StripeConfig {
    pub price_ids: PriceIdMap,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_or_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// `STRIPE_PRICE_STANDARD_3M` style variable name for a plan's price id.
pub fn price_env_key(key: &PlanKey) -> String {
    format!(
        "STRIPE_PRICE_{}_{}M",
        key.plan_type.as_str().to_uppercase(),
        key.duration.months()
    )
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env_or_parse("PORT", 3000),
            node_env: env_or("NODE_ENV", "development"),
            cors_origins: parse_origins(&env_or(
                "CORS_ORIGINS",
                "http://localhost:3000,http://localhost:8080",
            )),
            stripe: StripeConfig::from_env(PlanCatalog::global()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.node_env == "production"
    }
}

impl StripeConfig {
    pub fn from_env(catalog: &PlanCatalog) -> Self {
        let price_ids = PriceIdMap::from_entries(
            catalog
                .plans()
                .map(|plan| (plan.key(), env_or(&price_env_key(&plan.key()), ""))),
        );
        Self { price_ids }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use plan_core::{BillingDuration, PlanType};

    #[test]
    fn test_price_env_key() {
        let key = PlanKey::new(PlanType::Feedback, BillingDuration::SixMonths);
        assert_eq!(price_env_key(&key), "STRIPE_PRICE_FEEDBACK_6M");
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins(" https://a.example , ,https://b.example"),
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert!(parse_origins("").is_empty());
    }
}
