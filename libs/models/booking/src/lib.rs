//! Booking a seat on a flight

#[macro_use]
extern crate tracing;

use ::flight::Flight;
use common::{BookingError, DbConn, Error};
use db::{flight, reservation, ticket};
use diesel::prelude::*;
use primitive_reservation::{NewReservation, PrimitiveReservation};
use primitive_ticket::{NewTicket, PrimitiveTicket};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The records created by a successful booking
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Booking {
	pub reservation: PrimitiveReservation,
	pub ticket:      PrimitiveTicket,
}

/// Generate a reservation code, the airline code followed by three random
/// digits
///
/// Codes are not unique
#[must_use]
pub fn generate_reservation_code(airline_code: &str) -> String {
	let suffix = rand::rng().random_range(0..1000);

	format!("{airline_code}{suffix:03}")
}

/// Build the ticket for a seat on the given flight
///
/// Airline and airport names are copied so the ticket stays readable if the
/// flight is changed later on
fn issue_ticket(
	flight: &Flight,
	reservation_id: i32,
	passenger_id: i32,
) -> NewTicket {
	NewTicket {
		flight_number:     flight.primitive.flight_number,
		airline_name:      flight.airline.name.clone(),
		departure_airport: flight.departure_airport.name.clone(),
		arrival_airport:   flight.arrival_airport.name.clone(),
		departure_date:    flight.primitive.departure_date,
		departure_time:    flight.primitive.departure_time,
		arrival_date:      flight.primitive.arrival_date,
		arrival_time:      flight.primitive.arrival_time,
		reservation_id,
		passenger_id,
	}
}

impl Booking {
	/// Book one seat on a flight for a passenger
	///
	/// Claiming the seat, creating the reservation and issuing the ticket
	/// happen in a single transaction. The seat counter is decremented with a
	/// conditional update so concurrent bookings can never oversell a flight.
	///
	/// # Errors
	/// Fails with [`BookingError::FlightFull`] if no seats are left, in which
	/// case nothing is written
	#[instrument(skip(flight, conn))]
	pub async fn create(
		flight: &Flight,
		p_id: i32,
		conn: &DbConn,
	) -> Result<Self, Error> {
		let number = flight.primitive.flight_number;

		if !flight.primitive.has_seats_available() {
			return Err(BookingError::FlightFull(number).into());
		}

		let f_id = flight.primitive.id;
		let flight = flight.clone();

		let new_reservation = NewReservation {
			confirmed:        true,
			reservation_code: generate_reservation_code(&flight.airline.code),
			passenger_id:     p_id,
			flight_numbers:   vec![number],
		};

		let booking = conn
			.interact(move |conn| {
				conn.transaction::<_, Error, _>(|conn| {
					let claimed = diesel::update(
						flight::table
							.find(f_id)
							.filter(flight::seats_available.gt(0)),
					)
					.set(flight::seats_available.eq(flight::seats_available - 1))
					.execute(conn)?;

					if claimed == 0 {
						return Err(BookingError::FlightFull(number).into());
					}

					let reservation = diesel::insert_into(reservation::table)
						.values(new_reservation)
						.returning(PrimitiveReservation::as_returning())
						.get_result(conn)?;

					let ticket = diesel::insert_into(ticket::table)
						.values(issue_ticket(&flight, reservation.id, p_id))
						.returning(PrimitiveTicket::as_returning())
						.get_result(conn)?;

					Ok(Self { reservation, ticket })
				})
			})
			.await??;

		info!(
			"booked flight {number} for passenger {p_id} under reservation {}",
			booking.reservation.reservation_code
		);

		Ok(booking)
	}
}

#[cfg(test)]
mod tests {
	use chrono::{NaiveDate, NaiveTime};
	use primitive_airline::PrimitiveAirline;
	use primitive_airport::PrimitiveAirport;
	use primitive_flight::PrimitiveFlight;

	use super::*;

	fn sample_flight() -> Flight {
		let departure_date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
		let arrival_date = NaiveDate::from_ymd_opt(2025, 7, 2).unwrap();

		Flight {
			primitive:         PrimitiveFlight {
				id: 7,
				flight_number: 1203,
				capacity: 180,
				seats_available: 12,
				departure_airport_id: 1,
				arrival_airport_id: 2,
				departure_date,
				departure_time: NaiveTime::from_hms_opt(22, 15, 0).unwrap(),
				arrival_date,
				arrival_time: NaiveTime::from_hms_opt(6, 40, 0).unwrap(),
				airline_id: 3,
				created_at: departure_date.and_hms_opt(0, 0, 0).unwrap(),
			},
			airline:           PrimitiveAirline {
				id:   3,
				code: "SN".to_string(),
				name: "Brussels Airlines".to_string(),
			},
			departure_airport: PrimitiveAirport {
				id:   1,
				code: "BRU".to_string(),
				name: "Brussels Airport".to_string(),
			},
			arrival_airport:   PrimitiveAirport {
				id:   2,
				code: "JFK".to_string(),
				name: "John F. Kennedy International".to_string(),
			},
		}
	}

	#[test]
	fn reservation_code_starts_with_airline_code() {
		for _ in 0..100 {
			let code = generate_reservation_code("SN");

			assert_eq!(code.len(), 5);
			assert!(code.starts_with("SN"));
			assert!(code[2..].chars().all(|c| c.is_ascii_digit()));
		}
	}

	#[test]
	fn ticket_copies_flight_details() {
		let flight = sample_flight();
		let ticket = issue_ticket(&flight, 41, 5);

		assert_eq!(ticket.flight_number, 1203);
		assert_eq!(ticket.airline_name, "Brussels Airlines");
		assert_eq!(ticket.departure_airport, "Brussels Airport");
		assert_eq!(ticket.arrival_airport, "John F. Kennedy International");
		assert_eq!(ticket.departure_date, flight.primitive.departure_date);
		assert_eq!(ticket.arrival_time, flight.primitive.arrival_time);
		assert_eq!(ticket.reservation_id, 41);
		assert_eq!(ticket.passenger_id, 5);
	}
}
