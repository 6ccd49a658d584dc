pub mod aggregator;
pub mod types;

pub use aggregator::{aggregate, team_averages};
pub use types::{Developer, DeveloperPerformance, TeamAverages};
