pub mod api;
pub mod auth;
pub mod cache;
pub mod coindata;
pub mod fetcher;
pub mod series;
pub mod storage;
