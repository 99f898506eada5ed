pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod extractors;
pub mod factories;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod response;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
