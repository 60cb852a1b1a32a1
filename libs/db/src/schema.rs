diesel::table! {
	airline (id) {
		id -> Int4,
		code -> Text,
		name -> Text,
	}
}

diesel::table! {
	airport (id) {
		id -> Int4,
		code -> Text,
		name -> Text,
	}
}

diesel::table! {
	flight (id) {
		id -> Int4,
		flight_number -> Int4,
		capacity -> Int4,
		seats_available -> Int4,
		departure_airport_id -> Int4,
		arrival_airport_id -> Int4,
		departure_date -> Date,
		departure_time -> Time,
		arrival_date -> Date,
		arrival_time -> Time,
		airline_id -> Int4,
		created_at -> Timestamp,
	}
}

diesel::table! {
	passenger (id) {
		id -> Int4,
		name -> Text,
		email -> Text,
		created_at -> Timestamp,
		updated_at -> Timestamp,
	}
}

diesel::table! {
	reservation (id) {
		id -> Int4,
		confirmed -> Bool,
		reservation_code -> Text,
		passenger_id -> Int4,
		// Elements are never null, narrowed by hand from the printed schema
		flight_numbers -> Array<Int4>,
		created_at -> Timestamp,
	}
}

diesel::table! {
	ticket (id) {
		id -> Int4,
		flight_number -> Int4,
		airline_name -> Text,
		departure_airport -> Text,
		arrival_airport -> Text,
		departure_date -> Date,
		departure_time -> Time,
		arrival_date -> Date,
		arrival_time -> Time,
		issued_at -> Timestamp,
		reservation_id -> Int4,
		passenger_id -> Int4,
	}
}

diesel::joinable!(flight -> airline (airline_id));
diesel::joinable!(reservation -> passenger (passenger_id));
diesel::joinable!(ticket -> passenger (passenger_id));
diesel::joinable!(ticket -> reservation (reservation_id));

diesel::allow_tables_to_appear_in_same_query!(
	airline,
	airport,
	flight,
	passenger,
	reservation,
	ticket,
);
