pub mod api;
pub mod feedback;

pub use api::{ApiError, RankingApi};
pub use feedback::Feedback;
