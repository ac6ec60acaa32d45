pub mod fetch_service;
pub mod ranking_service;

pub use fetch_service::FetchService;
pub use ranking_service::{rank_by_repository_size, TOP_N};
