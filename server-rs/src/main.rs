use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod config;
mod error;
mod models;
mod routes;

use config::Config;
use plan_core::{Clock, PlanCatalog, ProrationCalculator, SystemClock};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub calculator: ProrationCalculator<Arc<dyn Clock>>,
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let billing_routes = Router::new()
        .route("/plans", get(routes::billing::plans))
        .route("/plans/:planType/:duration", get(routes::billing::plan))
        .route(
            "/proration-preview",
            post(routes::billing::proration_preview),
        );

    let content_routes = Router::new().route("/access", post(routes::content::access));

    let api = Router::new()
        .nest("/billing", billing_routes)
        .nest("/content", content_routes);

    Router::new()
        .nest("/api/v1", api)
        .route("/health", get(routes::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .json()
        .init();

    for key in config.stripe.price_ids.missing(PlanCatalog::global()) {
        tracing::warn!(
            env = %config::price_env_key(&key),
            "Plan has no payment price id; checkout for it will be refused"
        );
    }

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let production = config.is_production();

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let state = AppState {
        config: Arc::new(config),
        calculator: ProrationCalculator::new(clock),
    };

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, production, "Study plans API listening");

    axum::serve(listener, build_router(state)).await
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use chrono::{TimeZone, Utc};
    use config::StripeConfig;
    use plan_core::{BillingDuration, FixedClock, PlanKey, PlanType, PriceIdMap};

    // Everything priced except feedback / 6 months.
    let price_ids = PriceIdMap::from_entries(
        PlanCatalog::global()
            .plans()
            .map(|p| p.key())
            .filter(|key| *key != PlanKey::new(PlanType::Feedback, BillingDuration::SixMonths))
            .map(|key| {
                let id = format!("price_{}_{}m", key.plan_type, key.duration.months());
                (key, id)
            }),
    );

    let clock: Arc<dyn Clock> = Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2026, 4, 1, 12, 0, 0).unwrap(),
    ));

    AppState {
        config: Arc::new(Config {
            port: 0,
            node_env: "test".to_string(),
            cors_origins: vec!["*".to_string()],
            stripe: StripeConfig { price_ids },
        }),
        calculator: ProrationCalculator::new(clock),
    }
}
