//! State Management
//!
//! Global application state, typed payloads, chart bookkeeping, and the
//! refresh loop.

pub mod charts;
pub mod global;
pub mod payload;
pub mod preferences;
pub mod refresh;
pub mod requests;

pub use charts::{build_chart_config, ChartConfig, ChartId, ChartRegistry};
pub use global::{apply_theme, provide_global_state, GlobalState};
pub use payload::{FourKeysMetrics, MetricsPayload, MetricsRefresh};
pub use preferences::{ChartKind, Layout, Theme, UserPreferences};
