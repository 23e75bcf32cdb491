mod dashboard;

pub use dashboard::{DashboardService, render_dashboard};
