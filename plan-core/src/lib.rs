//! Subscription plans, content entitlements and mid-cycle proration for the
//! study platform. Everything here is pure and synchronous; the payment
//! gateway stays the authority on what is actually charged.

pub mod catalog;
pub mod display;
pub mod entitlements;
pub mod error;
pub mod models;
pub mod preview;
pub mod price_ids;
pub mod proration;

pub use catalog::{PlanCatalog, CATALOG};
pub use display::{format_plan_badge, format_plan_display};
pub use entitlements::{can_access_content, has_access_to_content};
pub use error::{PlanError, PlanResult};
pub use models::*;
pub use preview::{preview_plan_change, PlanChangePreview};
pub use price_ids::PriceIdMap;
pub use proration::{
    calculate_proration, Clock, FixedClock, ProrationCalculator, ProrationResult, SystemClock,
};
