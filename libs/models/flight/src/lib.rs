#[macro_use]
extern crate tracing;

use chrono::{NaiveDate, NaiveTime};
use common::{DbConn, Error};
use db::{airline, airport, arrival_airport, departure_airport, flight};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Date};
use models_common::{BoxedCondition, ToFilter};
use primitive_airline::PrimitiveAirline;
use primitive_airport::PrimitiveAirport;
use primitive_flight::PrimitiveFlight;
use serde::{Deserialize, Serialize};

pub type JoinedFlightData =
	(PrimitiveFlight, PrimitiveAirline, PrimitiveAirport, PrimitiveAirport);

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightFilter {
	pub departure_date: Option<NaiveDate>,
}

impl<S> ToFilter<S> for FlightFilter
where
	S: 'static,
	flight::departure_date: SelectableExpression<S>,
{
	type SqlType = Bool;

	fn to_filter(&self) -> BoxedCondition<S, Self::SqlType> {
		let mut filter: BoxedCondition<S, Self::SqlType> =
			Box::new(true.into_sql::<Bool>());

		if let Some(date) = self.departure_date {
			filter = Box::new(
				filter
					.and(date.into_sql::<Date>().eq(flight::departure_date)),
			);
		}

		filter
	}
}

/// A flight together with its airline and both airports
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Flight {
	pub primitive:         PrimitiveFlight,
	pub airline:           PrimitiveAirline,
	pub departure_airport: PrimitiveAirport,
	pub arrival_airport:   PrimitiveAirport,
}

mod auto_type_helpers {
	pub use diesel::dsl::*;
}

impl Flight {
	/// Build a query with all required joins to select a full flight data
	/// tuple
	#[diesel::dsl::auto_type(no_type_alias, dsl_path = "auto_type_helpers")]
	fn joined_query() -> _ {
		let departure_join = departure_airport.on(flight::departure_airport_id
			.eq(departure_airport.field(airport::id)));

		let arrival_join = arrival_airport.on(flight::arrival_airport_id
			.eq(arrival_airport.field(airport::id)));

		flight::table
			.inner_join(airline::table)
			.inner_join(departure_join)
			.inner_join(arrival_join)
	}

	/// Construct a full [`Flight`] struct from the data returned by a
	/// joined query
	fn from_joined(data: JoinedFlightData) -> Self {
		Self {
			primitive:         data.0,
			airline:           data.1,
			departure_airport: data.2,
			arrival_airport:   data.3,
		}
	}

	/// Get a [`Flight`] given its id
	#[instrument(skip(conn))]
	pub async fn get_by_id(f_id: i32, conn: &DbConn) -> Result<Self, Error> {
		let query = Self::joined_query();

		let flight = conn
			.interact(move |conn| {
				query
					.filter(flight::id.eq(f_id))
					.select((
						PrimitiveFlight::as_select(),
						PrimitiveAirline::as_select(),
						departure_airport.fields(airport::all_columns),
						arrival_airport.fields(airport::all_columns),
					))
					.get_result(conn)
					.optional()
			})
			.await??
			.ok_or_else(|| {
				Error::NotFound(format!("no flight with id {f_id}"))
			})?;

		Ok(Self::from_joined(flight))
	}

	/// Get a [`Flight`] given its flight number
	#[instrument(skip(conn))]
	pub async fn get_by_flight_number(
		number: i32,
		conn: &DbConn,
	) -> Result<Self, Error> {
		let query = Self::joined_query();

		let flight = conn
			.interact(move |conn| {
				query
					.filter(flight::flight_number.eq(number))
					.select((
						PrimitiveFlight::as_select(),
						PrimitiveAirline::as_select(),
						departure_airport.fields(airport::all_columns),
						arrival_airport.fields(airport::all_columns),
					))
					.get_result(conn)
					.optional()
			})
			.await??
			.ok_or_else(|| {
				Error::NotFound(format!("no flight with number {number}"))
			})?;

		Ok(Self::from_joined(flight))
	}

	/// Get all [`Flight`]s matching the given filter, ordered by departure
	#[instrument(skip(conn))]
	pub async fn get_all(
		filter: FlightFilter,
		conn: &DbConn,
	) -> Result<Vec<Self>, Error> {
		let filter = filter.to_filter();
		let query = Self::joined_query();

		let flights = conn
			.interact(move |conn| {
				query
					.filter(filter)
					.order((
						flight::departure_date.asc(),
						flight::departure_time.asc(),
					))
					.select((
						PrimitiveFlight::as_select(),
						PrimitiveAirline::as_select(),
						departure_airport.fields(airport::all_columns),
						arrival_airport.fields(airport::all_columns),
					))
					.get_results(conn)
			})
			.await??
			.into_iter()
			.map(Self::from_joined)
			.collect();

		Ok(flights)
	}
}

#[derive(Clone, Debug, Deserialize, Insertable, Serialize)]
#[diesel(table_name = flight)]
#[diesel(check_for_backend(Pg))]
pub struct NewFlight {
	pub flight_number:        i32,
	pub capacity:             i32,
	pub seats_available:      i32,
	pub departure_airport_id: i32,
	pub arrival_airport_id:   i32,
	pub departure_date:       NaiveDate,
	pub departure_time:       NaiveTime,
	pub arrival_date:         NaiveDate,
	pub arrival_time:         NaiveTime,
	pub airline_id:           i32,
}

impl NewFlight {
	/// Insert this [`NewFlight`]
	#[instrument(skip(conn))]
	pub async fn insert(self, conn: &DbConn) -> Result<Flight, Error> {
		let flight = conn
			.interact(|conn| {
				use self::flight::dsl::*;

				diesel::insert_into(flight)
					.values(self)
					.returning(PrimitiveFlight::as_returning())
					.get_result(conn)
			})
			.await??;

		let flight = Flight::get_by_id(flight.id, conn).await?;

		info!("created flight {}", flight.primitive.flight_number);

		Ok(flight)
	}
}
