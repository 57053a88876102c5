pub mod assignment;
pub mod repository;
pub mod service;
