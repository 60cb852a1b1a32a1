use std::sync::LazyLock;

use primitive_airline::{NewAirline, PrimitiveAirline};
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator_derive::Validate;

static AIRLINE_CODE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[A-Z0-9]{2}$").unwrap());

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirlineResponse {
	pub id:   i32,
	pub code: String,
	pub name: String,
}

impl From<PrimitiveAirline> for AirlineResponse {
	fn from(value: PrimitiveAirline) -> Self {
		Self { id: value.id, code: value.code, name: value.name }
	}
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAirlineRequest {
	#[validate(regex(
		path = *AIRLINE_CODE_REGEX,
		message = "airline code must be two uppercase letters or digits",
		code = "airline-code"
	))]
	pub code: String,
	#[validate(length(
		min = 1,
		max = 128,
		message = "name must be between 1 and 128 characters long",
		code = "name-length"
	))]
	pub name: String,
}

impl CreateAirlineRequest {
	#[must_use]
	pub fn to_insertable(self) -> NewAirline {
		NewAirline { code: self.code, name: self.name }
	}
}
