use booking::Booking;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use primitive_ticket::PrimitiveTicket;
use serde::{Deserialize, Serialize};
use ticket::Ticket;

use crate::schemas::reservation::ReservationResponse;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
	pub id:                i32,
	pub flight_number:     i32,
	pub airline_name:      String,
	pub departure_airport: String,
	pub arrival_airport:   String,
	pub departure_date:    NaiveDate,
	pub departure_time:    NaiveTime,
	pub arrival_date:      NaiveDate,
	pub arrival_time:      NaiveTime,
	pub issued_at:         NaiveDateTime,
	pub passenger_id:      i32,
	pub reservation_id:    i32,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub reservation:       Option<ReservationResponse>,
}

impl TicketResponse {
	/// Build a response for a ticket, optionally embedding its reservation
	#[must_use]
	pub fn from_parts(
		ticket: PrimitiveTicket,
		reservation: Option<ReservationResponse>,
	) -> Self {
		Self {
			id:                ticket.id,
			flight_number:     ticket.flight_number,
			airline_name:      ticket.airline_name,
			departure_airport: ticket.departure_airport,
			arrival_airport:   ticket.arrival_airport,
			departure_date:    ticket.departure_date,
			departure_time:    ticket.departure_time,
			arrival_date:      ticket.arrival_date,
			arrival_time:      ticket.arrival_time,
			issued_at:         ticket.issued_at,
			passenger_id:      ticket.passenger_id,
			reservation_id:    ticket.reservation_id,
			reservation,
		}
	}
}

impl From<Ticket> for TicketResponse {
	fn from(value: Ticket) -> Self {
		Self::from_parts(value.primitive, Some(value.reservation.into()))
	}
}

impl From<Booking> for TicketResponse {
	fn from(value: Booking) -> Self {
		Self::from_parts(value.ticket, Some(value.reservation.into()))
	}
}
