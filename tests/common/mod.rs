use std::sync::Arc;

use airline_reservation::mailer::{Mailer, StubMailbox};
use airline_reservation::{AppState, Config, SeedFlight, Seeder, routes};
use axum_test::TestServer;
use common::{DbPool, Error};
use diesel::prelude::*;
use primitive_airline::NewAirline;
use primitive_airport::NewAirport;
use primitive_passenger::NewPassenger;

pub mod wrappers;

mod mock_db;

use mock_db::{DATABASE_PROVIDER, DatabaseGuard};

/// Flight with free seats in the seed data
#[allow(dead_code)]
pub const OPEN_FLIGHT: i32 = 1203;
/// Flight without any free seats in the seed data
#[allow(dead_code)]
pub const FULL_FLIGHT: i32 = 1204;

#[allow(dead_code)]
pub struct TestEnv {
	pub app:           TestServer,
	pub db_guard:      DatabaseGuard,
	pub database_pool: DbPool,
	pub mailer:        Mailer,
	pub stub_mailbox:  Arc<StubMailbox>,
}

impl TestEnv {
	/// Get a test environment with mocked resources for running tests
	///
	/// # Panics
	/// Panics if building a test server or mailbox fails
	pub async fn new() -> Self {
		let config = Config::from_env();

		let test_pool_guard = (*DATABASE_PROVIDER).acquire().await;
		let test_pool = test_pool_guard.create_pool();

		{
			let conn = test_pool.get().await.unwrap();
			let seeder = Seeder::new(&conn);

			seeder
				.populate("seed/airlines.json", async |conn, airlines| {
					for airline in airlines {
						NewAirline::insert(airline, conn).await?;
					}

					Ok(())
				})
				.await
				.populate("seed/airports.json", async |conn, airports| {
					for airport in airports {
						NewAirport::insert(airport, conn).await?;
					}

					Ok(())
				})
				.await
				.populate("seed/passengers.json", async |conn, passengers| {
					for passenger in passengers {
						NewPassenger::insert(passenger, conn).await?;
					}

					Ok(())
				})
				.await
				.populate("seed/flights.json", async |conn, flights| {
					for flight in flights {
						SeedFlight::insert(flight, conn).await?;
					}

					Ok(())
				})
				.await;
		}

		let stub_mailbox = config.create_stub_mailbox();

		let mailer = Mailer::new(&config, stub_mailbox.clone());

		let state = AppState {
			database_pool: test_pool.clone(),
			mailer: mailer.clone(),
		};
		let app = routes::get_app_router(state);

		let test_server = TestServer::builder().build(app).unwrap();

		TestEnv {
			app: test_server,
			db_guard: test_pool_guard,
			database_pool: test_pool,
			mailer,
			stub_mailbox: stub_mailbox.unwrap(),
		}
	}

	/// Get the id of a seeded flight by its number
	#[allow(dead_code)]
	pub async fn flight_id(&self, number: i32) -> Result<i32, Error> {
		let conn = self.database_pool.get().await?;

		let f_id = conn
			.interact(move |conn| {
				use db::flight::dsl::*;

				flight
					.filter(flight_number.eq(number))
					.select(id)
					.get_result::<i32>(conn)
			})
			.await??;

		Ok(f_id)
	}

	/// Get the id of a seeded passenger by their email
	#[allow(dead_code)]
	pub async fn passenger_id(&self, mail: &str) -> Result<i32, Error> {
		let conn = self.database_pool.get().await?;
		let mail = mail.to_string();

		let p_id = conn
			.interact(move |conn| {
				use db::passenger::dsl::*;

				passenger
					.filter(email.eq(mail))
					.select(id)
					.get_result::<i32>(conn)
			})
			.await??;

		Ok(p_id)
	}

	/// Count the reservations and tickets stored in the database
	#[allow(dead_code)]
	pub async fn booking_counts(&self) -> Result<(i64, i64), Error> {
		let conn = self.database_pool.get().await?;

		let counts = conn
			.interact(|conn| {
				let reservations =
					db::reservation::table.count().get_result::<i64>(conn)?;
				let tickets =
					db::ticket::table.count().get_result::<i64>(conn)?;

				Ok::<_, diesel::result::Error>((reservations, tickets))
			})
			.await??;

		Ok(counts)
	}
}
