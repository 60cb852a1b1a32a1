#[macro_use]
extern crate tracing;

use common::{DbConn, Error};
use db::{passenger, reservation, ticket};
use diesel::prelude::*;
use primitive_passenger::PrimitivePassenger;
use primitive_reservation::PrimitiveReservation;
use primitive_ticket::PrimitiveTicket;
use serde::{Deserialize, Serialize};

/// A reservation with the passenger who made it and every ticket issued
/// against it
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Reservation {
	pub primitive: PrimitiveReservation,
	pub passenger: PrimitivePassenger,
	pub tickets:   Vec<PrimitiveTicket>,
}

impl Reservation {
	/// Get a [`Reservation`] given its id
	#[instrument(skip(conn))]
	pub async fn get_by_id(r_id: i32, conn: &DbConn) -> Result<Self, Error> {
		let reservation = conn
			.interact(move |conn| -> QueryResult<Option<Self>> {
				let Some((primitive, passenger)) = reservation::table
					.inner_join(passenger::table)
					.filter(reservation::id.eq(r_id))
					.select((
						PrimitiveReservation::as_select(),
						PrimitivePassenger::as_select(),
					))
					.get_result(conn)
					.optional()?
				else {
					return Ok(None);
				};

				let tickets = ticket::table
					.filter(ticket::reservation_id.eq(r_id))
					.order(ticket::id.asc())
					.select(PrimitiveTicket::as_select())
					.get_results(conn)?;

				Ok(Some(Self { primitive, passenger, tickets }))
			})
			.await??
			.ok_or_else(|| {
				Error::NotFound(format!("no reservation with id {r_id}"))
			})?;

		Ok(reservation)
	}
}
