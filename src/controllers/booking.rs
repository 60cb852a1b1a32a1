use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use booking::Booking;
use common::{DbPool, Error};
use flight::Flight;
use primitive_passenger::PrimitivePassenger;

use crate::mailer::Mailer;
use crate::schemas::flight::BookingRequest;
use crate::schemas::ticket::TicketResponse;

/// Book a seat on a flight and issue a ticket
///
/// The confirmation email is queued in the background, failing to send it
/// does not fail the booking
#[instrument(skip(pool, mailer))]
pub async fn book_flight(
	State(pool): State<DbPool>,
	State(mailer): State<Mailer>,
	Json(request): Json<BookingRequest>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let flight = Flight::get_by_id(request.flight_id, &conn).await?;
	let passenger =
		PrimitivePassenger::get_by_id(request.passenger_id, &conn).await?;

	let booking = Booking::create(&flight, passenger.id, &conn).await?;
	let response: TicketResponse = booking.clone().into();

	tokio::spawn(async move {
		if let Err(e) =
			mailer.send_booking_confirmation(&passenger, &booking).await
		{
			error!(
				"could not send confirmation for reservation {} -- {e}",
				booking.reservation.id
			);
		}
	});

	Ok((StatusCode::CREATED, Json(response)))
}
