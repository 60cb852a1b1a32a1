use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{DbPool, Error};
use primitive_airport::PrimitiveAirport;
use validator::Validate;

use crate::schemas::airport::{AirportResponse, CreateAirportRequest};

#[instrument(skip(pool))]
pub async fn get_all_airports(
	State(pool): State<DbPool>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let airports = PrimitiveAirport::get_all(&conn).await?;
	let response: Vec<AirportResponse> =
		airports.into_iter().map(Into::into).collect();

	Ok((StatusCode::OK, Json(response)))
}

#[instrument(skip(pool))]
pub async fn get_airport(
	State(pool): State<DbPool>,
	Path(code): Path<String>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let airport = PrimitiveAirport::get_by_code(code, &conn).await?;
	let response: AirportResponse = airport.into();

	Ok((StatusCode::OK, Json(response)))
}

#[instrument(skip(pool))]
pub async fn create_airport(
	State(pool): State<DbPool>,
	Json(request): Json<CreateAirportRequest>,
) -> Result<impl IntoResponse, Error> {
	request.validate()?;

	let conn = pool.get().await?;

	let airport = request.to_insertable().insert(&conn).await?;
	let response: AirportResponse = airport.into();

	Ok((StatusCode::CREATED, Json(response)))
}
