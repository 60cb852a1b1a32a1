mod schema;

pub use schema::*;

// A flight references the airport table twice
diesel::alias!(
	airport as departure_airport: DepartureAirportAlias,
	airport as arrival_airport: ArrivalAirportAlias,
);
