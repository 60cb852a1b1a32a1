//! # Airline reservation backend library

#[macro_use]
extern crate tracing;

use axum::extract::FromRef;
use common::DbPool;
use mailer::Mailer;

mod config;
mod seeder;

pub mod controllers;
pub mod mailer;
pub mod notification;
pub mod routes;
pub mod schemas;

pub use config::*;
pub use seeder::*;

/// Common state of the app
#[derive(Clone)]
pub struct AppState {
	pub database_pool: DbPool,
	pub mailer:        Mailer,
}

impl FromRef<AppState> for DbPool {
	fn from_ref(input: &AppState) -> Self { input.database_pool.clone() }
}

impl FromRef<AppState> for Mailer {
	fn from_ref(input: &AppState) -> Self { input.mailer.clone() }
}
