pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod headers;
pub mod predicate;
pub mod render;
pub mod signals;
pub mod template;
pub mod utils;
