mod chart;
mod location;
mod stats;
mod view;
mod welcome;

pub use view::Dashboard;
