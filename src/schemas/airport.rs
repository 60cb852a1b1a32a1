use std::sync::LazyLock;

use primitive_airport::{NewAirport, PrimitiveAirport};
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator_derive::Validate;

static AIRPORT_CODE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").unwrap());

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportResponse {
	pub id:   i32,
	pub code: String,
	pub name: String,
}

impl From<PrimitiveAirport> for AirportResponse {
	fn from(value: PrimitiveAirport) -> Self {
		Self { id: value.id, code: value.code, name: value.name }
	}
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAirportRequest {
	#[validate(regex(
		path = *AIRPORT_CODE_REGEX,
		message = "airport code must be three uppercase letters",
		code = "airport-code"
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

impl CreateAirportRequest {
	#[must_use]
	pub fn to_insertable(self) -> NewAirport {
		NewAirport { code: self.code, name: self.name }
	}
}
