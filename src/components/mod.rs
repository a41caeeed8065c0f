//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod nav;
pub mod chart;
pub mod metric_card;
pub mod markdown_editor;
pub mod loading;
pub mod toast;

pub use nav::Nav;
pub use chart::MetricsChart;
pub use metric_card::MetricCard;
pub use markdown_editor::MarkdownEditor;
pub use loading::ChartSkeleton;
pub use toast::Toast;
