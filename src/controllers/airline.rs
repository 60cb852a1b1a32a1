use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{DbPool, Error};
use primitive_airline::PrimitiveAirline;
use validator::Validate;

use crate::schemas::airline::{AirlineResponse, CreateAirlineRequest};

#[instrument(skip(pool))]
pub async fn get_all_airlines(
	State(pool): State<DbPool>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let airlines = PrimitiveAirline::get_all(&conn).await?;
	let response: Vec<AirlineResponse> =
		airlines.into_iter().map(Into::into).collect();

	Ok((StatusCode::OK, Json(response)))
}

#[instrument(skip(pool))]
pub async fn get_airline(
	State(pool): State<DbPool>,
	Path(code): Path<String>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let airline = PrimitiveAirline::get_by_code(code, &conn).await?;
	let response: AirlineResponse = airline.into();

	Ok((StatusCode::OK, Json(response)))
}

#[instrument(skip(pool))]
pub async fn create_airline(
	State(pool): State<DbPool>,
	Json(request): Json<CreateAirlineRequest>,
) -> Result<impl IntoResponse, Error> {
	request.validate()?;

	let conn = pool.get().await?;

	let airline = request.to_insertable().insert(&conn).await?;
	let response: AirlineResponse = airline.into();

	Ok((StatusCode::CREATED, Json(response)))
}
