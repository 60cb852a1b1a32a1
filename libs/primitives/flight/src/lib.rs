use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use db::flight;
use diesel::pg::Pg;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[diesel(table_name = flight)]
#[diesel(check_for_backend(Pg))]
pub struct PrimitiveFlight {
	pub id:                   i32,
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
	pub created_at:           NaiveDateTime,
}

impl PrimitiveFlight {
	/// Check if at least one seat is left on this flight
	#[must_use]
	pub fn has_seats_available(&self) -> bool { self.seats_available > 0 }
}

#[cfg(test)]
mod tests {
	use chrono::{NaiveDate, NaiveTime};

	use super::*;

	fn flight_with_seats(seats_available: i32) -> PrimitiveFlight {
		let day = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
		let time = NaiveTime::from_hms_opt(9, 30, 0).unwrap();

		PrimitiveFlight {
			id: 1,
			flight_number: 1203,
			capacity: 2,
			seats_available,
			departure_airport_id: 1,
			arrival_airport_id: 2,
			departure_date: day,
			departure_time: time,
			arrival_date: day,
			arrival_time: time,
			airline_id: 1,
			created_at: day.and_time(time),
		}
	}

	#[test]
	fn full_flight_has_no_seats() {
		assert!(!flight_with_seats(0).has_seats_available());
	}

	#[test]
	fn last_seat_is_available() {
		assert!(flight_with_seats(1).has_seats_available());
	}
}
