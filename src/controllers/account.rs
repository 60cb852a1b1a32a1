//! Controllers for passenger accounts

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{DbPool, Error};
use flight::Flight;
use primitive_passenger::PrimitivePassenger;
use ticket::Ticket;
use validator::Validate;

use crate::schemas::flight::FlightResponse;
use crate::schemas::passenger::{
	CreatePassengerRequest,
	PassengerResponse,
	UpdatePassengerRequest,
};
use crate::schemas::ticket::TicketResponse;

#[instrument(skip(pool))]
pub async fn create_account(
	State(pool): State<DbPool>,
	Json(request): Json<CreatePassengerRequest>,
) -> Result<impl IntoResponse, Error> {
	request.validate()?;

	let conn = pool.get().await?;

	let passenger = request.to_insertable().insert(&conn).await?;
	let response: PassengerResponse = passenger.into();

	Ok((StatusCode::CREATED, Json(response)))
}

#[instrument(skip(pool))]
pub async fn get_account(
	State(pool): State<DbPool>,
	Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let passenger = PrimitivePassenger::get_by_id(id, &conn).await?;
	let response: PassengerResponse = passenger.into();

	Ok((StatusCode::OK, Json(response)))
}

#[instrument(skip(pool))]
pub async fn update_account(
	State(pool): State<DbPool>,
	Path(id): Path<i32>,
	Json(request): Json<UpdatePassengerRequest>,
) -> Result<impl IntoResponse, Error> {
	request.validate()?;

	let conn = pool.get().await?;

	let passenger = request.to_insertable().apply_to(id, &conn).await?;
	let response: PassengerResponse = passenger.into();

	Ok((StatusCode::OK, Json(response)))
}

#[instrument(skip(pool))]
pub async fn get_account_tickets(
	State(pool): State<DbPool>,
	Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	// 404 for unknown passengers instead of an empty list
	PrimitivePassenger::get_by_id(id, &conn).await?;

	let tickets = Ticket::for_passenger(id, &conn).await?;
	let response: Vec<TicketResponse> =
		tickets.into_iter().map(Into::into).collect();

	Ok((StatusCode::OK, Json(response)))
}

/// Get the flight on the most recent ticket of a passenger
#[instrument(skip(pool))]
pub async fn get_account_flight(
	State(pool): State<DbPool>,
	Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	PrimitivePassenger::get_by_id(id, &conn).await?;

	let number = Ticket::latest_flight_number_for_passenger(id, &conn).await?;
	let flight = Flight::get_by_flight_number(number, &conn).await?;
	let response: FlightResponse = flight.into();

	Ok((StatusCode::OK, Json(response)))
}
