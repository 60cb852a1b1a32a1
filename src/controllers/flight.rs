//! Controllers for [`Flight`]s

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Local;
use common::{DbPool, Error};
use flight::{Flight, FlightFilter};
use primitive_airline::PrimitiveAirline;
use primitive_airport::PrimitiveAirport;
use rayon::prelude::*;
use ticket::Ticket;
use validator::Validate;

use crate::mailer::Mailer;
use crate::notification::send_upcoming_flight_reminders;
use crate::schemas::flight::{CreateFlightRequest, FlightResponse};
use crate::schemas::ticket::TicketResponse;

#[instrument(skip(pool))]
pub async fn create_flight(
	State(pool): State<DbPool>,
	Json(request): Json<CreateFlightRequest>,
) -> Result<impl IntoResponse, Error> {
	request.validate()?;

	if request.departure_airport == request.arrival_airport {
		return Err(Error::ValidationError(
			"departure and arrival airport must differ".to_string(),
		));
	}

	let conn = pool.get().await?;

	let airline =
		PrimitiveAirline::get_by_code(request.airline_code.clone(), &conn)
			.await?;
	let departure_airport =
		PrimitiveAirport::get_by_code(request.departure_airport.clone(), &conn)
			.await?;
	let arrival_airport =
		PrimitiveAirport::get_by_code(request.arrival_airport.clone(), &conn)
			.await?;

	let new_flight =
		request.to_insertable(&airline, &departure_airport, &arrival_airport);
	let flight = new_flight.insert(&conn).await?;
	let response: FlightResponse = flight.into();

	Ok((StatusCode::CREATED, Json(response)))
}

#[instrument(skip(pool))]
pub async fn get_flights(
	State(pool): State<DbPool>,
	Query(filter): Query<FlightFilter>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let flights = Flight::get_all(filter, &conn).await?;
	let response: Vec<FlightResponse> =
		flights.into_par_iter().map(Into::into).collect();

	Ok((StatusCode::OK, Json(response)))
}

#[instrument(skip(pool))]
pub async fn get_flight(
	State(pool): State<DbPool>,
	Path(flight_number): Path<i32>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let flight = Flight::get_by_flight_number(flight_number, &conn).await?;
	let response: FlightResponse = flight.into();

	Ok((StatusCode::OK, Json(response)))
}

#[instrument(skip(pool))]
pub async fn get_flight_tickets(
	State(pool): State<DbPool>,
	Path(flight_number): Path<i32>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	Flight::get_by_flight_number(flight_number, &conn).await?;

	let tickets = Ticket::for_flight_number(flight_number, &conn).await?;
	let response: Vec<TicketResponse> =
		tickets.into_iter().map(Into::into).collect();

	Ok((StatusCode::OK, Json(response)))
}

/// Remind passengers of flights departing in the next couple of hours
///
/// The reminders are sent in the background, this returns immediately
#[instrument(skip(pool, mailer))]
pub async fn notify_upcoming_flights(
	State(pool): State<DbPool>,
	State(mailer): State<Mailer>,
) -> impl IntoResponse {
	let now = Local::now().naive_local();

	tokio::spawn(async move {
		if let Err(e) = send_upcoming_flight_reminders(&pool, &mailer, now).await
		{
			error!("could not send departure reminders -- {e}");
		}
	});

	StatusCode::ACCEPTED
}
