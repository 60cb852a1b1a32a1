#[macro_use]
extern crate tracing;

use common::{DbConn, Error};
use db::airline;
use diesel::pg::Pg;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[diesel(table_name = airline)]
#[diesel(check_for_backend(Pg))]
pub struct PrimitiveAirline {
	pub id:   i32,
	pub code: String,
	pub name: String,
}

impl PrimitiveAirline {
	/// Get a [`PrimitiveAirline`] by its IATA code
	#[instrument(skip(conn))]
	pub async fn get_by_code(
		a_code: String,
		conn: &DbConn,
	) -> Result<Self, Error> {
		let query_code = a_code.clone();

		let airline = conn
			.interact(move |conn| {
				use self::airline::dsl::*;

				airline
					.filter(code.eq(query_code))
					.select(Self::as_select())
					.get_result(conn)
					.optional()
			})
			.await??
			.ok_or_else(|| {
				Error::NotFound(format!("no airline with code '{a_code}'"))
			})?;

		Ok(airline)
	}

	/// Get all [`PrimitiveAirline`]s ordered by code
	#[instrument(skip(conn))]
	pub async fn get_all(conn: &DbConn) -> Result<Vec<Self>, Error> {
		let airlines = conn
			.interact(|conn| {
				use self::airline::dsl::*;

				airline.order(code.asc()).select(Self::as_select()).load(conn)
			})
			.await??;

		Ok(airlines)
	}
}

#[derive(Clone, Debug, Deserialize, Insertable, Serialize)]
#[diesel(table_name = airline)]
#[diesel(check_for_backend(Pg))]
pub struct NewAirline {
	pub code: String,
	pub name: String,
}

impl NewAirline {
	/// Insert this [`NewAirline`]
	#[instrument(skip(conn))]
	pub async fn insert(
		self,
		conn: &DbConn,
	) -> Result<PrimitiveAirline, Error> {
		let airline = conn
			.interact(|conn| {
				use self::airline::dsl::*;

				diesel::insert_into(airline)
					.values(self)
					.returning(PrimitiveAirline::as_returning())
					.get_result(conn)
			})
			.await??;

		info!("created airline {airline:?}");

		Ok(airline)
	}
}
