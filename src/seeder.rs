use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use common::{DbConn, Error};
use flight::NewFlight;
use primitive_airline::PrimitiveAirline;
use primitive_airport::PrimitiveAirport;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Fills a database with records read from JSON seed files
pub struct Seeder<'c> {
	connection: &'c DbConn,
}

impl<'c> Seeder<'c> {
	#[must_use]
	pub fn new(connection: &'c DbConn) -> Self { Self { connection } }

	/// Read a file into a list of deserializable items
	///
	/// # Panics
	/// Panics if reading or deserializing the file fails
	fn read_file_records<T>(filename: &str) -> Vec<T>
	where
		T: DeserializeOwned,
	{
		let path = std::env::var("CARGO_MANIFEST_DIR")
			.map(PathBuf::from)
			.unwrap_or_default()
			.join(filename);

		let s = std::fs::read_to_string(path).unwrap_or_else(|e| {
			panic!("COULD NOT READ SEED FILE {filename} -- {e}")
		});

		serde_json::from_str(&s).unwrap_or_else(|e| {
			panic!("COULD NOT MAP SEED FILE {filename} -- {e}")
		})
	}

	/// Load a file and populate the database with it
	///
	/// # Panics
	/// Panics if reading the file or interacting with the database fails
	pub async fn populate<T, F>(&self, filename: &str, loader: F) -> &Self
	where
		T: DeserializeOwned + std::fmt::Debug,
		F: AsyncFnOnce(&DbConn, Vec<T>) -> Result<(), Error>,
	{
		let records = Self::read_file_records(filename);

		loader(self.connection, records).await.unwrap_or_else(|e| {
			panic!("COULD NOT LOAD RECORDS FOR {filename} -- {e:?}")
		});

		info!("seeded database from {filename}");

		self
	}
}

/// A flight as it appears in a seed file, referencing airlines and airports
/// by code
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedFlight {
	pub flight_number:     i32,
	pub capacity:          i32,
	/// Defaults to the full capacity
	#[serde(default)]
	pub seats_available:   Option<i32>,
	pub airline_code:      String,
	pub departure_airport: String,
	pub arrival_airport:   String,
	pub departure_date:    NaiveDate,
	pub departure_time:    NaiveTime,
	pub arrival_date:      NaiveDate,
	pub arrival_time:      NaiveTime,
}

impl SeedFlight {
	/// Resolve the referenced codes and insert this [`SeedFlight`]
	///
	/// # Errors
	/// Fails if a referenced airline or airport does not exist
	pub async fn insert(self, conn: &DbConn) -> Result<(), Error> {
		let airline =
			PrimitiveAirline::get_by_code(self.airline_code, conn).await?;
		let departure_airport =
			PrimitiveAirport::get_by_code(self.departure_airport, conn).await?;
		let arrival_airport =
			PrimitiveAirport::get_by_code(self.arrival_airport, conn).await?;

		let new_flight = NewFlight {
			flight_number:        self.flight_number,
			capacity:             self.capacity,
			seats_available:      self.seats_available.unwrap_or(self.capacity),
			departure_airport_id: departure_airport.id,
			arrival_airport_id:   arrival_airport.id,
			departure_date:       self.departure_date,
			departure_time:       self.departure_time,
			arrival_date:         self.arrival_date,
			arrival_time:         self.arrival_time,
			airline_id:           airline.id,
		};

		new_flight.insert(conn).await?;

		Ok(())
	}
}
