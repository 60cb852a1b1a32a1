use chrono::{NaiveDate, NaiveTime};
use flight::{Flight, NewFlight};
use primitive_airline::PrimitiveAirline;
use primitive_airport::PrimitiveAirport;
use serde::{Deserialize, Serialize};
use validator_derive::Validate;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightResponse {
	pub id:                     i32,
	pub flight_number:          i32,
	pub capacity:               i32,
	pub seats_available:        i32,
	pub airline_code:           String,
	pub airline_name:           String,
	pub departure_airport:      String,
	pub departure_airport_code: String,
	pub departure_date:         NaiveDate,
	pub departure_time:         NaiveTime,
	pub arrival_airport:        String,
	pub arrival_airport_code:   String,
	pub arrival_date:           NaiveDate,
	pub arrival_time:           NaiveTime,
}

impl From<Flight> for FlightResponse {
	fn from(value: Flight) -> Self {
		let flight = value.primitive;

		Self {
			id:                     flight.id,
			flight_number:          flight.flight_number,
			capacity:               flight.capacity,
			seats_available:        flight.seats_available,
			airline_code:           value.airline.code,
			airline_name:           value.airline.name,
			departure_airport:      value.departure_airport.name,
			departure_airport_code: value.departure_airport.code,
			departure_date:         flight.departure_date,
			departure_time:         flight.departure_time,
			arrival_airport:        value.arrival_airport.name,
			arrival_airport_code:   value.arrival_airport.code,
			arrival_date:           flight.arrival_date,
			arrival_time:           flight.arrival_time,
		}
	}
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlightRequest {
	#[validate(range(
		min = 1,
		message = "flight number must be positive",
		code = "flight-number"
	))]
	pub flight_number:     i32,
	#[validate(range(
		min = 1,
		max = 1000,
		message = "capacity must be between 1 and 1000 seats",
		code = "capacity"
	))]
	pub capacity:          i32,
	pub airline_code:      String,
	pub departure_airport: String,
	pub arrival_airport:   String,
	pub departure_date:    NaiveDate,
	pub departure_time:    NaiveTime,
	pub arrival_date:      NaiveDate,
	pub arrival_time:      NaiveTime,
}

impl CreateFlightRequest {
	/// Build the insertable flight once the referenced codes are resolved
	///
	/// A new flight starts with every seat available
	#[must_use]
	pub fn to_insertable(
		self,
		airline: &PrimitiveAirline,
		departure_airport: &PrimitiveAirport,
		arrival_airport: &PrimitiveAirport,
	) -> NewFlight {
		NewFlight {
			flight_number:        self.flight_number,
			capacity:             self.capacity,
			seats_available:      self.capacity,
			departure_airport_id: departure_airport.id,
			arrival_airport_id:   arrival_airport.id,
			departure_date:       self.departure_date,
			departure_time:       self.departure_time,
			arrival_date:         self.arrival_date,
			arrival_time:         self.arrival_time,
			airline_id:           airline.id,
		}
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
	pub flight_id:    i32,
	pub passenger_id: i32,
}
