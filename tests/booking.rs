mod common;

use airline_reservation::schemas::flight::FlightResponse;
use airline_reservation::schemas::ticket::TicketResponse;
use axum::http::StatusCode;
use common::wrappers::{expect_mail, expect_no_mail, last_mail_body};
use common::{FULL_FLIGHT, OPEN_FLIGHT, TestEnv};

async fn seats_available(env: &TestEnv, number: i32) -> i32 {
	env.app
		.get(&format!("/flights/{number}"))
		.await
		.json::<FlightResponse>()
		.seats_available
}

#[tokio::test(flavor = "multi_thread")]
async fn book_flight() {
	let env = TestEnv::new().await;
	let p_id = env.passenger_id("alice@example.com").await.unwrap();
	let f_id = env.flight_id(OPEN_FLIGHT).await.unwrap();

	let seats_before = seats_available(&env, OPEN_FLIGHT).await;

	let response = expect_mail(env.stub_mailbox.clone(), || async {
		env.app
			.post("/flights/book")
			.json(&serde_json::json!({ "flightId": f_id, "passengerId": p_id }))
			.await
	})
	.await;

	assert_eq!(response.status_code(), StatusCode::CREATED);

	let ticket = response.json::<TicketResponse>();
	assert_eq!(ticket.flight_number, OPEN_FLIGHT);
	assert_eq!(ticket.passenger_id, p_id);
	assert_eq!(ticket.airline_name, "Brussels Airlines");
	assert_eq!(ticket.departure_airport, "Brussels Airport");
	assert_eq!(ticket.arrival_airport, "Lisbon Airport");

	let reservation = ticket.reservation.unwrap();
	assert!(reservation.confirmed);
	assert_eq!(reservation.id, ticket.reservation_id);
	assert_eq!(reservation.flight_numbers, vec![OPEN_FLIGHT]);
	assert!(reservation.reservation_code.starts_with("SN"));
	assert_eq!(reservation.reservation_code.len(), 5);

	assert_eq!(seats_available(&env, OPEN_FLIGHT).await, seats_before - 1);
	assert_eq!(env.booking_counts().await.unwrap(), (1, 1));

	let body = last_mail_body(&env.stub_mailbox).unwrap();
	assert!(body.contains("alice@example.com"));
	assert!(body.contains(&reservation.reservation_code));
}

#[tokio::test(flavor = "multi_thread")]
async fn book_full_flight() {
	let env = TestEnv::new().await;
	let p_id = env.passenger_id("alice@example.com").await.unwrap();
	let f_id = env.flight_id(FULL_FLIGHT).await.unwrap();

	let response = expect_no_mail(env.stub_mailbox.clone(), || async {
		env.app
			.post("/flights/book")
			.json(&serde_json::json!({ "flightId": f_id, "passengerId": p_id }))
			.await
	})
	.await;

	assert_eq!(response.status_code(), StatusCode::CONFLICT);

	let body = response.json::<serde_json::Value>();
	assert_eq!(body["code"], 5);

	assert_eq!(seats_available(&env, FULL_FLIGHT).await, 0);
	assert_eq!(env.booking_counts().await.unwrap(), (0, 0));
}

#[tokio::test(flavor = "multi_thread")]
async fn book_missing_flight() {
	let env = TestEnv::new().await;
	let p_id = env.passenger_id("alice@example.com").await.unwrap();

	let response = env
		.app
		.post("/flights/book")
		.json(&serde_json::json!({ "flightId": 4242, "passengerId": p_id }))
		.await;

	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
	assert_eq!(env.booking_counts().await.unwrap(), (0, 0));
}

#[tokio::test(flavor = "multi_thread")]
async fn book_for_missing_passenger() {
	let env = TestEnv::new().await;
	let f_id = env.flight_id(OPEN_FLIGHT).await.unwrap();

	let seats_before = seats_available(&env, OPEN_FLIGHT).await;

	let response = env
		.app
		.post("/flights/book")
		.json(&serde_json::json!({ "flightId": f_id, "passengerId": 4242 }))
		.await;

	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
	assert_eq!(seats_available(&env, OPEN_FLIGHT).await, seats_before);
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_bookings_never_oversell() {
	let env = TestEnv::new().await;
	let alice = env.passenger_id("alice@example.com").await.unwrap();
	let bob = env.passenger_id("bob@example.com").await.unwrap();

	// A flight with a single seat
	let response = env
		.app
		.post("/flights")
		.json(&serde_json::json!({
			"flightNumber": 1400,
			"capacity": 1,
			"airlineCode": "KL",
			"departureAirport": "AMS",
			"arrivalAirport": "LIS",
			"departureDate": "2030-09-01",
			"departureTime": "09:00:00",
			"arrivalDate": "2030-09-01",
			"arrivalTime": "12:00:00",
		}))
		.await;
	let f_id = response.json::<FlightResponse>().id;

	let app = &env.app;
	let book = |p_id: i32| {
		async move {
			app.post("/flights/book")
				.json(&serde_json::json!({
					"flightId": f_id,
					"passengerId": p_id,
				}))
				.await
		}
	};

	let (first, second) = tokio::join!(book(alice), book(bob));

	let mut statuses = [first.status_code(), second.status_code()];
	statuses.sort_by_key(StatusCode::as_u16);

	assert_eq!(statuses, [StatusCode::CREATED, StatusCode::CONFLICT]);
	assert_eq!(seats_available(&env, 1400).await, 0);
	assert_eq!(env.booking_counts().await.unwrap(), (1, 1));
}
