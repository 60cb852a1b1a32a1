#[macro_use]
extern crate tracing;

use common::{DbConn, Error};
use db::airport;
use diesel::pg::Pg;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[diesel(table_name = airport)]
#[diesel(check_for_backend(Pg))]
pub struct PrimitiveAirport {
	pub id:   i32,
	pub code: String,
	pub name: String,
}

impl PrimitiveAirport {
	/// Get a [`PrimitiveAirport`] by its IATA code
	#[instrument(skip(conn))]
	pub async fn get_by_code(
		a_code: String,
		conn: &DbConn,
	) -> Result<Self, Error> {
		let query_code = a_code.clone();

		let airport = conn
			.interact(move |conn| {
				use self::airport::dsl::*;

				airport
					.filter(code.eq(query_code))
					.select(Self::as_select())
					.get_result(conn)
					.optional()
			})
			.await??
			.ok_or_else(|| {
				Error::NotFound(format!("no airport with code '{a_code}'"))
			})?;

		Ok(airport)
	}

	/// Get all [`PrimitiveAirport`]s ordered by code
	#[instrument(skip(conn))]
	pub async fn get_all(conn: &DbConn) -> Result<Vec<Self>, Error> {
		let airports = conn
			.interact(|conn| {
				use self::airport::dsl::*;

				airport.order(code.asc()).select(Self::as_select()).load(conn)
			})
			.await??;

		Ok(airports)
	}
}

#[derive(Clone, Debug, Deserialize, Insertable, Serialize)]
#[diesel(table_name = airport)]
#[diesel(check_for_backend(Pg))]
pub struct NewAirport {
	pub code: String,
	pub name: String,
}

impl NewAirport {
	/// Insert this [`NewAirport`]
	#[instrument(skip(conn))]
	pub async fn insert(
		self,
		conn: &DbConn,
	) -> Result<PrimitiveAirport, Error> {
		let airport = conn
			.interact(|conn| {
				use self::airport::dsl::*;

				diesel::insert_into(airport)
					.values(self)
					.returning(PrimitiveAirport::as_returning())
					.get_result(conn)
			})
			.await??;

		info!("created airport {airport:?}");

		Ok(airport)
	}
}
