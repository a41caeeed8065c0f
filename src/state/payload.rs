//! Metrics Payloads
//!
//! Typed wire payloads for the two chart sources. The backend serves either a
//! Four Keys mapping (GitHub) or a plain weekly sequence (Jira); the two are
//! structurally distinct, so deserialization picks the variant and everything
//! downstream matches on the enum instead of probing for keys.

/// A single metric value with its display unit
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct MetricValue {
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub unit: String,
}

/// GitHub Four Keys metrics, in their canonical order
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FourKeysMetrics {
    #[serde(default)]
    pub deployment_frequency: MetricValue,
    #[serde(default)]
    pub lead_time: MetricValue,
    #[serde(default)]
    pub change_failure_rate: MetricValue,
    #[serde(default)]
    pub time_to_restore: MetricValue,
}

impl FourKeysMetrics {
    /// Scalar values in canonical order (deployment frequency, lead time,
    /// change failure rate, time to restore)
    pub fn values(&self) -> Vec<f64> {
        vec![
            self.deployment_frequency.value,
            self.lead_time.value,
            self.change_failure_rate.value,
            self.time_to_restore.value,
        ]
    }

    /// Look up one metric by its card identifier
    pub fn get(&self, metric: &str) -> Option<&MetricValue> {
        match metric {
            "deployment_frequency" => Some(&self.deployment_frequency),
            "lead_time" => Some(&self.lead_time),
            "change_failure_rate" => Some(&self.change_failure_rate),
            "time_to_restore" => Some(&self.time_to_restore),
            _ => None,
        }
    }
}

/// Metrics payload as served by the refresh endpoint.
///
/// Untagged: a JSON object decodes as `FourKeys`, a JSON array of numbers as
/// `Weekly`. An object missing some (or all) Four Keys entries still decodes,
/// with the absent values defaulting to zero. That permissiveness matches the
/// backend contract, which never signals a malformed payload.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum MetricsPayload {
    FourKeys(FourKeysMetrics),
    Weekly(Vec<f64>),
}

impl Default for MetricsPayload {
    fn default() -> Self {
        Self::Weekly(Vec::new())
    }
}

impl MetricsPayload {
    /// Four Keys view of the payload, if it has that shape
    pub fn four_keys(&self) -> Option<&FourKeysMetrics> {
        match self {
            Self::FourKeys(keys) => Some(keys),
            Self::Weekly(_) => None,
        }
    }
}

/// Response body of the metrics refresh endpoint
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct MetricsRefresh {
    #[serde(default)]
    pub github_metrics: MetricsPayload,
    #[serde(default)]
    pub jira_metrics: MetricsPayload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_keys_payload_decodes_from_object() {
        let json = r#"{
            "deployment_frequency": {"value": 5, "unit": "per day"},
            "lead_time": {"value": 2, "unit": "days"},
            "change_failure_rate": {"value": 0.1, "unit": "percent"},
            "time_to_restore": {"value": 3, "unit": "hours"}
        }"#;

        let payload: MetricsPayload = serde_json::from_str(json).unwrap();
        let keys = payload.four_keys().expect("should decode as Four Keys");
        assert_eq!(keys.values(), vec![5.0, 2.0, 0.1, 3.0]);
        assert_eq!(keys.deployment_frequency.unit, "per day");
    }

    #[test]
    fn test_weekly_payload_decodes_from_array() {
        let payload: MetricsPayload = serde_json::from_str("[10, 12, 8, 15]").unwrap();
        assert_eq!(payload, MetricsPayload::Weekly(vec![10.0, 12.0, 8.0, 15.0]));
        assert!(payload.four_keys().is_none());
    }

    #[test]
    fn test_partial_four_keys_defaults_to_zero() {
        let json = r#"{"deployment_frequency": {"value": 1.5}}"#;
        let payload: MetricsPayload = serde_json::from_str(json).unwrap();
        let keys = payload.four_keys().unwrap();
        assert_eq!(keys.values(), vec![1.5, 0.0, 0.0, 0.0]);
        assert_eq!(keys.deployment_frequency.unit, "");
    }

    #[test]
    fn test_empty_object_is_four_keys_with_zeroes() {
        // The backend can serve `{}` before any integration is configured.
        let payload: MetricsPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.four_keys().unwrap().values(), vec![0.0; 4]);
    }

    #[test]
    fn test_metric_lookup_by_card_id() {
        let keys = FourKeysMetrics {
            lead_time: MetricValue { value: 4.2, unit: "days".into() },
            ..Default::default()
        };
        assert_eq!(keys.get("lead_time").unwrap().value, 4.2);
        assert!(keys.get("velocity").is_none());
    }
}
