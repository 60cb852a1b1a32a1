#[macro_use]
extern crate tracing;

use chrono::NaiveDate;
use common::{DbConn, Error};
use db::{flight, passenger, reservation, ticket};
use diesel::prelude::*;
use primitive_passenger::PrimitivePassenger;
use primitive_reservation::PrimitiveReservation;
use primitive_ticket::PrimitiveTicket;
use serde::{Deserialize, Serialize};

pub type JoinedTicketData = (PrimitiveTicket, PrimitiveReservation);

/// An issued ticket together with the reservation it was issued against
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Ticket {
	pub primitive:   PrimitiveTicket,
	pub reservation: PrimitiveReservation,
}

mod auto_type_helpers {
	pub use diesel::dsl::*;
}

impl Ticket {
	/// Build a query joining every ticket with its reservation
	#[diesel::dsl::auto_type(no_type_alias, dsl_path = "auto_type_helpers")]
	fn joined_query() -> _ { ticket::table.inner_join(reservation::table) }

	/// Construct a full [`Ticket`] struct from the data returned by a
	/// joined query
	fn from_joined(data: JoinedTicketData) -> Self {
		Self { primitive: data.0, reservation: data.1 }
	}

	/// Get a [`Ticket`] given its id
	#[instrument(skip(conn))]
	pub async fn get_by_id(t_id: i32, conn: &DbConn) -> Result<Self, Error> {
		let query = Self::joined_query();

		let ticket = conn
			.interact(move |conn| {
				query
					.filter(ticket::id.eq(t_id))
					.select((
						PrimitiveTicket::as_select(),
						PrimitiveReservation::as_select(),
					))
					.get_result(conn)
					.optional()
			})
			.await??
			.ok_or_else(|| {
				Error::NotFound(format!("no ticket with id {t_id}"))
			})?;

		Ok(Self::from_joined(ticket))
	}

	/// Get all the tickets held by a passenger, most recently issued first
	#[instrument(skip(conn))]
	pub async fn for_passenger(
		p_id: i32,
		conn: &DbConn,
	) -> Result<Vec<Self>, Error> {
		let query = Self::joined_query();

		let tickets = conn
			.interact(move |conn| {
				query
					.filter(ticket::passenger_id.eq(p_id))
					.order((ticket::issued_at.desc(), ticket::id.desc()))
					.select((
						PrimitiveTicket::as_select(),
						PrimitiveReservation::as_select(),
					))
					.get_results(conn)
			})
			.await??
			.into_iter()
			.map(Self::from_joined)
			.collect();

		Ok(tickets)
	}

	/// Get all the tickets issued for a flight number
	#[instrument(skip(conn))]
	pub async fn for_flight_number(
		number: i32,
		conn: &DbConn,
	) -> Result<Vec<Self>, Error> {
		let query = Self::joined_query();

		let tickets = conn
			.interact(move |conn| {
				query
					.filter(ticket::flight_number.eq(number))
					.order(ticket::id.asc())
					.select((
						PrimitiveTicket::as_select(),
						PrimitiveReservation::as_select(),
					))
					.get_results(conn)
			})
			.await??
			.into_iter()
			.map(Self::from_joined)
			.collect();

		Ok(tickets)
	}

	/// Get the flight number on the most recently issued ticket of a
	/// passenger
	#[instrument(skip(conn))]
	pub async fn latest_flight_number_for_passenger(
		p_id: i32,
		conn: &DbConn,
	) -> Result<i32, Error> {
		let number = conn
			.interact(move |conn| {
				use self::ticket::dsl::*;

				ticket
					.filter(passenger_id.eq(p_id))
					.order((issued_at.desc(), id.desc()))
					.select(flight_number)
					.first(conn)
					.optional()
			})
			.await??
			.ok_or_else(|| {
				Error::NotFound(format!("passenger {p_id} holds no tickets"))
			})?;

		Ok(number)
	}

	/// Get every ticket for a flight departing on the given day together with
	/// the passenger holding it
	#[instrument(skip(conn))]
	pub async fn holders_departing_on(
		day: NaiveDate,
		conn: &DbConn,
	) -> Result<Vec<(PrimitiveTicket, PrimitivePassenger)>, Error> {
		let holders = conn
			.interact(move |conn| {
				ticket::table
					.inner_join(
						flight::table
							.on(flight::flight_number.eq(ticket::flight_number)),
					)
					.inner_join(passenger::table)
					.filter(flight::departure_date.eq(day))
					.select((
						PrimitiveTicket::as_select(),
						PrimitivePassenger::as_select(),
					))
					.get_results(conn)
			})
			.await??;

		debug!("found {} tickets departing on {day}", holders.len());

		Ok(holders)
	}
}
