pub const FREE_PLAN_KEY: &str = "free";

pub const FREE_PLAN_LABEL: &str = "フリープラン";

const PLAN_NAMES: &[(&str, &str)] = &[
    ("standard", "スタンダードプラン"),
    ("feedback", "フィードバックプラン"),
];

fn plan_name(plan_type: &str) -> &'static str {
    PLAN_NAMES
        .iter()
        .find(|(key, _)| *key == plan_type)
        .map(|(_, name)| *name)
        .unwrap_or(FREE_PLAN_LABEL)
}

/// Human readable plan label, e.g. `スタンダードプラン（3ヶ月）`.
///
/// Types without a display name (including `growth` and `community`) are
/// shown as the free plan.
pub fn format_plan_display(plan_type: Option<&str>, duration: Option<u32>) -> String {
    let plan_type = match plan_type {
        Some(t) if t != FREE_PLAN_KEY => t,
        _ => return FREE_PLAN_LABEL.to_string(),
    };

    let name = plan_name(plan_type);
    match duration {
        Some(months) if months > 0 => format!("{name}（{months}ヶ月）"),
        _ => name.to_string(),
    }
}

/// Label for the plan badge. Same output as [`format_plan_display`] for now.
pub fn format_plan_badge(plan_type: Option<&str>, duration: Option<u32>) -> String {
    format_plan_display(plan_type, duration)
}
