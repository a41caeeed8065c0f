//! User Preferences
//!
//! Display preferences persisted through the preferences endpoint. The server
//! owns the stored copy; the client mutates its in-memory copy on every
//! control change and posts the whole object back.

/// Card identifiers in their default display order
pub const DEFAULT_METRICS_ORDER: [&str; 4] = [
    "deployment_frequency",
    "lead_time",
    "change_failure_rate",
    "time_to_restore",
];

/// Fallback refresh period when the server has no stored preference
pub const DEFAULT_REFRESH_INTERVAL_SECS: u32 = 60;

/// Dashboard layout for the metric cards
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Grid,
    List,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }

    /// Parse a control value, falling back to the default for anything else
    pub fn parse(value: &str) -> Self {
        match value {
            "list" => Self::List,
            _ => Self::Grid,
        }
    }
}

/// Color theme applied to the document body
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Visual chart style applied to both charts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Radar,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Radar => "radar",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "line" => Self::Line,
            "radar" => Self::Radar,
            _ => Self::Bar,
        }
    }
}

/// The full preference set, persisted as one JSON object
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub chart_type: ChartKind,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: u32,
    #[serde(default = "default_metrics_order")]
    pub metrics_order: Vec<String>,
}

fn default_refresh_interval() -> u32 {
    DEFAULT_REFRESH_INTERVAL_SECS
}

fn default_metrics_order() -> Vec<String> {
    DEFAULT_METRICS_ORDER.iter().map(|m| m.to_string()).collect()
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            chart_type: ChartKind::default(),
            theme: Theme::default(),
            refresh_interval: default_refresh_interval(),
            metrics_order: default_metrics_order(),
        }
    }
}

/// Coerce a refresh-interval control value into whole seconds.
///
/// Non-numeric or non-positive input falls back to the default; there is no
/// further validation, matching the permissive preference contract.
pub fn parse_refresh_interval(value: &str) -> u32 {
    match value.trim().parse::<u32>() {
        Ok(secs) if secs > 0 => secs,
        _ => DEFAULT_REFRESH_INTERVAL_SECS,
    }
}

/// Move `dragged` so it occupies the slot currently held by `target`.
///
/// Unknown identifiers leave the order untouched. Dropping a card onto itself
/// is a no-op.
pub fn reorder_metrics(order: &mut Vec<String>, dragged: &str, target: &str) {
    if dragged == target {
        return;
    }
    let (Some(from), Some(to)) = (
        order.iter().position(|m| m == dragged),
        order.iter().position(|m| m == target),
    ) else {
        return;
    };
    let card = order.remove(from);
    order.insert(to, card);
}

/// Human-readable card title for a metric identifier
pub fn metric_title(metric: &str) -> &'static str {
    match metric {
        "deployment_frequency" => "Deployment Frequency",
        "lead_time" => "Lead Time",
        "change_failure_rate" => "Change Failure Rate",
        "time_to_restore" => "Time to Restore",
        _ => "Unknown Metric",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_decode_with_missing_fields() {
        // A server that has never stored preferences returns `{}`.
        let prefs: UserPreferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, UserPreferences::default());
        assert_eq!(prefs.refresh_interval, DEFAULT_REFRESH_INTERVAL_SECS);
        assert_eq!(prefs.metrics_order.len(), 4);
    }

    #[test]
    fn test_preferences_serialize_as_flat_object() {
        let prefs = UserPreferences {
            layout: Layout::List,
            chart_type: ChartKind::Line,
            theme: Theme::Dark,
            refresh_interval: 30,
            metrics_order: vec!["lead_time".into(), "deployment_frequency".into()],
        };
        let json = serde_json::to_value(&prefs).unwrap();
        assert_eq!(json["layout"], "list");
        assert_eq!(json["chart_type"], "line");
        assert_eq!(json["theme"], "dark");
        assert_eq!(json["refresh_interval"], 30);
        assert_eq!(json["metrics_order"][0], "lead_time");
    }

    #[test]
    fn test_interval_coercion() {
        assert_eq!(parse_refresh_interval("30"), 30);
        assert_eq!(parse_refresh_interval(" 5 "), 5);
        assert_eq!(parse_refresh_interval("0"), DEFAULT_REFRESH_INTERVAL_SECS);
        assert_eq!(parse_refresh_interval("soon"), DEFAULT_REFRESH_INTERVAL_SECS);
    }

    #[test]
    fn test_unknown_control_values_fall_back() {
        assert_eq!(Layout::parse("masonry"), Layout::Grid);
        assert_eq!(Theme::parse("solarized"), Theme::Light);
        assert_eq!(ChartKind::parse("pie"), ChartKind::Bar);
    }

    #[test]
    fn test_reorder_moves_card_to_target_slot() {
        let mut order: Vec<String> = DEFAULT_METRICS_ORDER.iter().map(|m| m.to_string()).collect();
        reorder_metrics(&mut order, "time_to_restore", "lead_time");
        assert_eq!(
            order,
            vec!["deployment_frequency", "time_to_restore", "lead_time", "change_failure_rate"]
        );
    }

    #[test]
    fn test_reorder_ignores_unknown_and_self_drops() {
        let mut order: Vec<String> = DEFAULT_METRICS_ORDER.iter().map(|m| m.to_string()).collect();
        let before = order.clone();
        reorder_metrics(&mut order, "velocity", "lead_time");
        reorder_metrics(&mut order, "lead_time", "lead_time");
        assert_eq!(order, before);
    }
}
