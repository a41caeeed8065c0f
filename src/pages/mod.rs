//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod readme;
pub mod settings;

pub use dashboard::Dashboard;
pub use readme::ReadmeGenerator;
pub use settings::Settings;
