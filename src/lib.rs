//! Star Wars CRUD API: users, characters and planets over PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use models::{Character, Entity, Planet, Quantity, User};
pub use routes::{app, router, RouteInfo, RouteRegistry};
pub use service::CrudService;
pub use state::AppState;
pub use store::{connect, ensure_database_exists};
