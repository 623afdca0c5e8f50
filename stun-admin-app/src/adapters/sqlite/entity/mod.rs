//! `SeaORM` entities for `SqliteStore`.

pub mod app_config;
