pub mod dashboard;
pub mod season_picker;

pub use dashboard::StoreLayoutDashboard;
