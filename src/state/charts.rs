//! Chart Configuration and Handles
//!
//! Pure chart-building logic: turning a metrics payload into a drawable
//! configuration, and tracking the live handle per chart so a rebuild always
//! destroys the previous handle before installing the new one. The canvas
//! drawing itself lives in `components::chart`.

use super::payload::MetricsPayload;
use super::preferences::ChartKind;

/// Identifier for each chart mount point on the dashboard
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartId {
    Github,
    Jira,
}

impl ChartId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Jira => "jira",
        }
    }
}

/// Fill/stroke color pair for one data series
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub fill: &'static str,
    pub stroke: &'static str,
}

/// Blue, for the Four Keys chart
const GITHUB_PALETTE: Palette = Palette {
    fill: "rgba(54, 162, 235, 0.2)",
    stroke: "rgba(54, 162, 235, 1)",
};

/// Teal, for the weekly delivery chart
const JIRA_PALETTE: Palette = Palette {
    fill: "rgba(75, 192, 192, 0.2)",
    stroke: "rgba(75, 192, 192, 1)",
};

/// Everything the renderer needs to draw one chart
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub series_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub palette: Palette,
}

/// Build a chart configuration from a metrics payload.
///
/// Four Keys payloads produce the four canonical metrics in fixed order; weekly
/// payloads produce one point per week. An empty payload produces an empty
/// config and draws as an empty chart; no shape is ever rejected.
pub fn build_chart_config(payload: &MetricsPayload, kind: ChartKind) -> ChartConfig {
    match payload {
        MetricsPayload::FourKeys(keys) => ChartConfig {
            kind,
            series_label: "GitHub Metrics".to_string(),
            labels: vec![
                "Deployment Frequency".to_string(),
                "Lead Time".to_string(),
                "Change Failure Rate".to_string(),
                "Time to Restore".to_string(),
            ],
            values: keys.values(),
            palette: GITHUB_PALETTE,
        },
        MetricsPayload::Weekly(values) => ChartConfig {
            kind,
            series_label: "Ticket Completion Rate".to_string(),
            labels: (1..=values.len()).map(|week| format!("Week {}", week)).collect(),
            values: values.clone(),
            palette: JIRA_PALETTE,
        },
    }
}

/// A live chart bound to one canvas.
///
/// The generation number changes on every install, so the drawing effect can
/// tell a rebuilt chart from a redraw of the same one.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartHandle {
    pub generation: u64,
    pub config: ChartConfig,
}

/// Registry holding at most one live handle per chart id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartRegistry {
    github: Option<ChartHandle>,
    jira: Option<ChartHandle>,
    next_generation: u64,
    destroyed: u64,
}

impl ChartRegistry {
    /// Install a new handle for `id`, destroying any existing one first.
    pub fn install(&mut self, id: ChartId, config: ChartConfig) {
        let slot = self.slot_mut(id);
        if slot.take().is_some() {
            self.destroyed += 1;
        }
        self.next_generation += 1;
        let handle = ChartHandle {
            generation: self.next_generation,
            config,
        };
        *self.slot_mut(id) = Some(handle);
    }

    /// The live handle for `id`, if one has been installed
    pub fn get(&self, id: ChartId) -> Option<&ChartHandle> {
        match id {
            ChartId::Github => self.github.as_ref(),
            ChartId::Jira => self.jira.as_ref(),
        }
    }

    /// Number of handles destroyed over the registry's lifetime
    pub fn destroyed_count(&self) -> u64 {
        self.destroyed
    }

    /// Number of currently live handles
    pub fn live_count(&self) -> usize {
        self.github.iter().count() + self.jira.iter().count()
    }

    fn slot_mut(&mut self, id: ChartId) -> &mut Option<ChartHandle> {
        match id {
            ChartId::Github => &mut self.github,
            ChartId::Jira => &mut self.jira,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::payload::{FourKeysMetrics, MetricValue};

    fn four_keys_payload() -> MetricsPayload {
        MetricsPayload::FourKeys(FourKeysMetrics {
            deployment_frequency: MetricValue { value: 5.0, unit: "per day".into() },
            lead_time: MetricValue { value: 2.0, unit: "days".into() },
            change_failure_rate: MetricValue { value: 0.1, unit: "percent".into() },
            time_to_restore: MetricValue { value: 3.0, unit: "hours".into() },
        })
    }

    #[test]
    fn test_four_keys_config_order_and_labels() {
        let config = build_chart_config(&four_keys_payload(), ChartKind::Bar);
        assert_eq!(config.values, vec![5.0, 2.0, 0.1, 3.0]);
        assert_eq!(
            config.labels,
            vec!["Deployment Frequency", "Lead Time", "Change Failure Rate", "Time to Restore"]
        );
        assert_eq!(config.palette, GITHUB_PALETTE);
    }

    #[test]
    fn test_weekly_config_labels_by_week() {
        let payload = MetricsPayload::Weekly(vec![10.0, 12.0, 8.0, 15.0]);
        let config = build_chart_config(&payload, ChartKind::Line);
        assert_eq!(config.values, vec![10.0, 12.0, 8.0, 15.0]);
        assert_eq!(config.labels, vec!["Week 1", "Week 2", "Week 3", "Week 4"]);
        assert_eq!(config.palette, JIRA_PALETTE);
    }

    #[test]
    fn test_empty_payload_builds_empty_config() {
        let config = build_chart_config(&MetricsPayload::Weekly(Vec::new()), ChartKind::Bar);
        assert!(config.values.is_empty());
        assert!(config.labels.is_empty());
    }

    #[test]
    fn test_install_destroys_previous_handle() {
        let mut registry = ChartRegistry::default();
        let payload = four_keys_payload();

        registry.install(ChartId::Github, build_chart_config(&payload, ChartKind::Bar));
        assert_eq!(registry.destroyed_count(), 0);
        assert_eq!(registry.live_count(), 1);

        registry.install(ChartId::Github, build_chart_config(&payload, ChartKind::Line));
        assert_eq!(registry.destroyed_count(), 1);
        assert_eq!(registry.live_count(), 1);
        assert_eq!(registry.get(ChartId::Github).unwrap().config.kind, ChartKind::Line);
    }

    #[test]
    fn test_rebuild_is_idempotent_on_final_state() {
        let mut once = ChartRegistry::default();
        let mut twice = ChartRegistry::default();
        let payload = four_keys_payload();

        once.install(ChartId::Github, build_chart_config(&payload, ChartKind::Radar));

        twice.install(ChartId::Github, build_chart_config(&payload, ChartKind::Line));
        twice.install(ChartId::Github, build_chart_config(&payload, ChartKind::Radar));

        // Same final handle config either way; only the bookkeeping differs.
        assert_eq!(
            once.get(ChartId::Github).unwrap().config,
            twice.get(ChartId::Github).unwrap().config
        );
        assert_eq!(twice.destroyed_count(), 1);
        assert_eq!(twice.live_count(), 1);
    }

    #[test]
    fn test_charts_track_independently() {
        let mut registry = ChartRegistry::default();
        registry.install(ChartId::Github, build_chart_config(&four_keys_payload(), ChartKind::Bar));
        registry.install(
            ChartId::Jira,
            build_chart_config(&MetricsPayload::Weekly(vec![1.0]), ChartKind::Bar),
        );

        assert_eq!(registry.live_count(), 2);
        assert_ne!(
            registry.get(ChartId::Github).unwrap().generation,
            registry.get(ChartId::Jira).unwrap().generation
        );
    }
}
