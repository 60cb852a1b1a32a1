use chrono::NaiveDateTime;
use db::reservation;
use diesel::pg::Pg;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[diesel(table_name = reservation)]
#[diesel(check_for_backend(Pg))]
pub struct PrimitiveReservation {
	pub id:               i32,
	pub confirmed:        bool,
	pub reservation_code: String,
	pub passenger_id:     i32,
	pub flight_numbers:   Vec<i32>,
	pub created_at:       NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize, Insertable, Serialize)]
#[diesel(table_name = reservation)]
#[diesel(check_for_backend(Pg))]
pub struct NewReservation {
	pub confirmed:        bool,
	pub reservation_code: String,
	pub passenger_id:     i32,
	pub flight_numbers:   Vec<i32>,
}
