pub mod api;
pub mod app_state;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod generation;
pub mod health;
pub mod normalizer;
pub mod presentation;
