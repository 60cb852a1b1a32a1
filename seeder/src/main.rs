mod util;

use std::env;

use chrono::{Duration, Local, NaiveTime};
use clap::{Error, Parser};
use common::DbConn;
use deadpool_diesel::postgres::{Manager, Pool};
use diesel::prelude::*;
use fake::Fake;
use fake::faker::address::raw::CityName;
use fake::faker::company::raw::CompanyName;
use fake::faker::internet::raw::Username;
use fake::faker::name::raw::Name;
use fake::locales::EN;
use flight::NewFlight;
use primitive_airline::NewAirline;
use primitive_airport::NewAirport;
use primitive_passenger::NewPassenger;
use rand::seq::IndexedRandom;
use rand::{Rng, rng};

use crate::util::{
	batch_insert,
	generate_unique_codes,
	generate_unique_set,
	load_ids,
};

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const UPPERCASE_DIGITS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(Parser, Debug)]
struct Opt {
	#[arg(long, short = 'a', default_value_t = 50)]
	airlines:   usize,
	#[arg(long, short = 'p', default_value_t = 200)]
	airports:   usize,
	#[arg(long, short = 'u', default_value_t = 10_000)]
	passengers: usize,
	#[arg(long, short = 'f', default_value_t = 1_000)]
	flights:    usize,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
	let cli = Opt::parse();
	let conn = get_conn().await;

	if cli.airlines > 0 {
		println!("Seeding {} airlines…", cli.airlines);
		let inserted = seed_airlines(&conn, cli.airlines).await?;
		println!("Inserted {inserted} airlines");
	}

	if cli.airports > 0 {
		println!("Seeding {} airports…", cli.airports);
		let inserted = seed_airports(&conn, cli.airports).await?;
		println!("Inserted {inserted} airports");
	}

	if cli.passengers > 0 {
		println!("Seeding {} passengers…", cli.passengers);
		let inserted = seed_passengers(&conn, cli.passengers).await?;
		println!("Inserted {inserted} unique passengers");
	}

	if cli.flights > 0 {
		println!("Seeding {} flights…", cli.flights);
		let inserted = seed_flights(&conn, cli.flights).await?;
		println!("Inserted {inserted} flights");
	}

	Ok(())
}

/// Get a database connection from the pool
async fn get_conn() -> DbConn {
	let database_url = env::var("DATABASE_URL").expect("DATABASE_URL missing");

	let manager = Manager::new(database_url, deadpool_diesel::Runtime::Tokio1);
	let pool = Pool::builder(manager).build().expect("Failed to create pool");

	pool.get().await.expect("Failed to get a database connection")
}

/// Seed airlines with unique two character codes
async fn seed_airlines(conn: &DbConn, count: usize) -> Result<usize, Error> {
	let airlines: Vec<NewAirline> =
		generate_unique_codes(count, 2, UPPERCASE_DIGITS)
			.into_iter()
			.map(|code| NewAirline { code, name: CompanyName(EN).fake() })
			.collect();

	batch_insert(conn, airlines, 2 << 10, |conn, chunk| {
		use db::airline::dsl::*;
		diesel::insert_into(airline)
			.values(chunk)
			.on_conflict_do_nothing()
			.execute(conn)
	})
	.await
}

/// Seed airports with unique three letter codes
async fn seed_airports(conn: &DbConn, count: usize) -> Result<usize, Error> {
	let airports: Vec<NewAirport> = generate_unique_codes(count, 3, UPPERCASE)
		.into_iter()
		.map(|code| {
			let city = CityName(EN).fake::<String>();

			NewAirport { code, name: format!("{city} Airport") }
		})
		.collect();

	batch_insert(conn, airports, 2 << 10, |conn, chunk| {
		use db::airport::dsl::*;
		diesel::insert_into(airport)
			.values(chunk)
			.on_conflict_do_nothing()
			.execute(conn)
	})
	.await
}

/// Seed passengers with unique emails
async fn seed_passengers(conn: &DbConn, count: usize) -> Result<usize, Error> {
	let passengers: Vec<NewPassenger> =
		generate_unique_set(count, || Username(EN).fake::<String>())
			.into_iter()
			.map(|username| {
				NewPassenger {
					name:  Name(EN).fake(),
					email: format!("{username}@example.com"),
				}
			})
			.collect();

	batch_insert(conn, passengers, 8192, |conn, chunk| {
		use db::passenger::dsl::*;
		diesel::insert_into(passenger).values(chunk).execute(conn)
	})
	.await
}

/// Seed flights between random airports over the coming month
async fn seed_flights(conn: &DbConn, count: usize) -> Result<usize, Error> {
	let airline_ids = load_ids(conn, |c| {
		use db::airline::dsl::*;
		airline.select(id).load::<i32>(c)
	})
	.await?;

	let airport_ids = load_ids(conn, |c| {
		use db::airport::dsl::*;
		airport.select(id).load::<i32>(c)
	})
	.await?;

	let next_flight_number = load_ids(conn, |c| {
		use db::flight::dsl::*;
		flight.select(flight_number).load::<i32>(c)
	})
	.await?
	.into_iter()
	.max()
	.unwrap_or(999)
		+ 1;

	assert!(!airline_ids.is_empty(), "No airlines exist to operate flights");
	assert!(airport_ids.len() > 1, "At least two airports are required");

	let mut rng = rng();
	let today = Local::now().date_naive();

	let flights: Vec<NewFlight> = (0..count)
		.map(|i| {
			let airline_id = *airline_ids.choose(&mut rng).unwrap();
			let mut route = airport_ids.choose_multiple(&mut rng, 2);
			let departure_airport_id = *route.next().unwrap();
			let arrival_airport_id = *route.next().unwrap();

			let departure_time = NaiveTime::from_hms_opt(
				rng.random_range(0..24),
				rng.random_range(0..12) * 5,
				0,
			)
			.unwrap();
			let departure = (today
				+ Duration::days(rng.random_range(0..30)))
			.and_time(departure_time);
			let arrival =
				departure + Duration::minutes(rng.random_range(45..720));

			let capacity = (50..300).fake_with_rng(&mut rng);

			NewFlight {
				flight_number: next_flight_number + i as i32,
				capacity,
				seats_available: capacity,
				departure_airport_id,
				arrival_airport_id,
				departure_date: departure.date(),
				departure_time: departure.time(),
				arrival_date: arrival.date(),
				arrival_time: arrival.time(),
				airline_id,
			}
		})
		.collect();

	batch_insert(conn, flights, 2 << 10, |conn, chunk| {
		use db::flight::dsl::*;
		diesel::insert_into(flight).values(chunk).execute(conn)
	})
	.await
}
