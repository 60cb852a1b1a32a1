use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use db::ticket;
use diesel::pg::Pg;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[diesel(table_name = ticket)]
#[diesel(check_for_backend(Pg))]
pub struct PrimitiveTicket {
	pub id:                i32,
	pub flight_number:     i32,
	pub airline_name:      String,
	pub departure_airport: String,
	pub arrival_airport:   String,
	pub departure_date:    NaiveDate,
	pub departure_time:    NaiveTime,
	pub arrival_date:      NaiveDate,
	pub arrival_time:      NaiveTime,
	pub issued_at:         NaiveDateTime,
	pub reservation_id:    i32,
	pub passenger_id:      i32,
}

#[derive(Clone, Debug, Deserialize, Insertable, Serialize)]
#[diesel(table_name = ticket)]
#[diesel(check_for_backend(Pg))]
pub struct NewTicket {
	pub flight_number:     i32,
	pub airline_name:      String,
	pub departure_airport: String,
	pub arrival_airport:   String,
	pub departure_date:    NaiveDate,
	pub departure_time:    NaiveTime,
	pub arrival_date:      NaiveDate,
	pub arrival_time:      NaiveTime,
	pub reservation_id:    i32,
	pub passenger_id:      i32,
}
