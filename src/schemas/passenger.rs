use chrono::NaiveDateTime;
use primitive_passenger::{NewPassenger, PassengerUpdate, PrimitivePassenger};
use serde::{Deserialize, Serialize};
use validator_derive::Validate;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerResponse {
	pub id:         i32,
	pub name:       String,
	pub email:      String,
	pub created_at: NaiveDateTime,
	pub updated_at: NaiveDateTime,
}

impl From<PrimitivePassenger> for PassengerResponse {
	fn from(value: PrimitivePassenger) -> Self {
		Self {
			id:         value.id,
			name:       value.name,
			email:      value.email,
			created_at: value.created_at,
			updated_at: value.updated_at,
		}
	}
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePassengerRequest {
	#[validate(length(
		min = 1,
		max = 128,
		message = "name must be between 1 and 128 characters long",
		code = "name-length"
	))]
	pub name:  String,
	#[validate(email(message = "invalid email", code = "email"))]
	pub email: String,
}

impl CreatePassengerRequest {
	#[must_use]
	pub fn to_insertable(self) -> NewPassenger {
		NewPassenger { name: self.name, email: self.email }
	}
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePassengerRequest {
	#[validate(length(
		min = 1,
		max = 128,
		message = "name must be between 1 and 128 characters long",
		code = "name-length"
	))]
	pub name:  Option<String>,
	#[validate(email(message = "invalid email", code = "email"))]
	pub email: Option<String>,
}

impl UpdatePassengerRequest {
	#[must_use]
	pub fn to_insertable(self) -> PassengerUpdate {
		PassengerUpdate { name: self.name, email: self.email }
	}
}
