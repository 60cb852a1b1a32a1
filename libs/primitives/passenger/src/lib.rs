#[macro_use]
extern crate tracing;

use chrono::{NaiveDateTime, Utc};
use common::{DbConn, Error};
use db::passenger;
use diesel::pg::Pg;
use diesel::prelude::*;
use lettre::message::Mailbox;
use serde::{Deserialize, Serialize};

#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[diesel(table_name = passenger)]
#[diesel(check_for_backend(Pg))]
pub struct PrimitivePassenger {
	pub id:         i32,
	pub name:       String,
	pub email:      String,
	pub created_at: NaiveDateTime,
	pub updated_at: NaiveDateTime,
}

impl TryFrom<&PrimitivePassenger> for Mailbox {
	type Error = Error;

	fn try_from(value: &PrimitivePassenger) -> Result<Mailbox, Error> {
		Ok(Mailbox::new(Some(value.name.clone()), value.email.parse()?))
	}
}

impl PrimitivePassenger {
	/// Get a [`PrimitivePassenger`] by its id
	#[instrument(skip(conn))]
	pub async fn get_by_id(p_id: i32, conn: &DbConn) -> Result<Self, Error> {
		let passenger = conn
			.interact(move |conn| {
				use self::passenger::dsl::*;

				passenger
					.find(p_id)
					.select(Self::as_select())
					.get_result(conn)
					.optional()
			})
			.await??
			.ok_or_else(|| {
				Error::NotFound(format!("no passenger with id {p_id}"))
			})?;

		Ok(passenger)
	}
}

#[derive(Clone, Debug, Deserialize, Insertable, Serialize)]
#[diesel(table_name = passenger)]
#[diesel(check_for_backend(Pg))]
pub struct NewPassenger {
	pub name:  String,
	pub email: String,
}

impl NewPassenger {
	/// Insert this [`NewPassenger`]
	#[instrument(skip(conn))]
	pub async fn insert(
		self,
		conn: &DbConn,
	) -> Result<PrimitivePassenger, Error> {
		let passenger = conn
			.interact(|conn| {
				use self::passenger::dsl::*;

				diesel::insert_into(passenger)
					.values(self)
					.returning(PrimitivePassenger::as_returning())
					.get_result(conn)
			})
			.await??;

		info!("created passenger {}", passenger.id);

		Ok(passenger)
	}
}

#[derive(AsChangeset, Clone, Debug, Deserialize, Serialize)]
#[diesel(table_name = passenger)]
#[diesel(check_for_backend(Pg))]
pub struct PassengerUpdate {
	pub name:  Option<String>,
	pub email: Option<String>,
}

impl PassengerUpdate {
	/// Apply this update to the [`PrimitivePassenger`] with the given id
	#[instrument(skip(conn))]
	pub async fn apply_to(
		self,
		p_id: i32,
		conn: &DbConn,
	) -> Result<PrimitivePassenger, Error> {
		let passenger = conn
			.interact(move |conn| {
				use self::passenger::dsl::*;

				diesel::update(passenger.find(p_id))
					.set((self, updated_at.eq(Utc::now().naive_utc())))
					.returning(PrimitivePassenger::as_returning())
					.get_result(conn)
					.optional()
			})
			.await??
			.ok_or_else(|| {
				Error::NotFound(format!("no passenger with id {p_id}"))
			})?;

		info!("updated passenger {p_id}");

		Ok(passenger)
	}
}
