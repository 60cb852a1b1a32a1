use chrono::NaiveDateTime;
use primitive_reservation::PrimitiveReservation;
use reservation::Reservation;
use serde::{Deserialize, Serialize};

use crate::schemas::passenger::PassengerResponse;
use crate::schemas::ticket::TicketResponse;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
	pub id:               i32,
	pub confirmed:        bool,
	pub reservation_code: String,
	pub passenger_id:     i32,
	pub flight_numbers:   Vec<i32>,
	pub created_at:       NaiveDateTime,
}

impl From<PrimitiveReservation> for ReservationResponse {
	fn from(value: PrimitiveReservation) -> Self {
		Self {
			id:               value.id,
			confirmed:        value.confirmed,
			reservation_code: value.reservation_code,
			passenger_id:     value.passenger_id,
			flight_numbers:   value.flight_numbers,
			created_at:       value.created_at,
		}
	}
}

/// A reservation with its passenger and issued tickets
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDetailsResponse {
	#[serde(flatten)]
	pub reservation: ReservationResponse,
	pub passenger:   PassengerResponse,
	pub tickets:     Vec<TicketResponse>,
}

impl From<Reservation> for ReservationDetailsResponse {
	fn from(value: Reservation) -> Self {
		Self {
			reservation: value.primitive.into(),
			passenger:   value.passenger.into(),
			tickets:     value
				.tickets
				.into_iter()
				.map(|t| TicketResponse::from_parts(t, None))
				.collect(),
		}
	}
}
