//! Defines controller functions that correspond to individual routes

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{DbPool, Error};
use diesel::{RunQueryDsl, sql_query};

pub mod account;
pub mod airline;
pub mod airport;
pub mod booking;
pub mod flight;
pub mod reservation;
pub mod ticket;

/// Check if the database connection and webserver are functional
#[instrument(skip(pool))]
pub async fn healthcheck(
	State(pool): State<DbPool>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	conn.interact(|conn| sql_query("SELECT 1").execute(conn)).await??;

	Ok(StatusCode::OK)
}
