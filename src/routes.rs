use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::controllers::account::{
	create_account,
	get_account,
	get_account_flight,
	get_account_tickets,
	update_account,
};
use crate::controllers::airline::{
	create_airline,
	get_airline,
	get_all_airlines,
};
use crate::controllers::airport::{
	create_airport,
	get_airport,
	get_all_airports,
};
use crate::controllers::booking::book_flight;
use crate::controllers::flight::{
	create_flight,
	get_flight,
	get_flight_tickets,
	get_flights,
	notify_upcoming_flights,
};
use crate::controllers::healthcheck;
use crate::controllers::reservation::get_reservation;
use crate::controllers::ticket::get_ticket;

/// Get the app router
pub fn get_app_router(state: AppState) -> Router {
	let api_routes = Router::new()
		.route("/healthcheck", get(healthcheck))
		.nest("/accounts", account_routes())
		.nest("/airlines", airline_routes())
		.nest("/airports", airport_routes())
		.nest("/flights", flight_routes())
		.route("/reservations/{id}", get(get_reservation))
		.route("/tickets/{id}", get(get_ticket));

	Router::new()
		.merge(api_routes)
		.layer(
			ServiceBuilder::new()
				.layer(TraceLayer::new_for_http())
				.layer(TimeoutLayer::with_status_code(
					StatusCode::REQUEST_TIMEOUT,
					Duration::from_secs(10),
				))
				.layer(CompressionLayer::new()),
		)
		.with_state(state)
}

/// Passenger account routes
fn account_routes() -> Router<AppState> {
	Router::new()
		.route("/", post(create_account))
		.route("/{id}", get(get_account).patch(update_account))
		.route("/{id}/tickets", get(get_account_tickets))
		.route("/{id}/flight", get(get_account_flight))
}

/// Airline routes
fn airline_routes() -> Router<AppState> {
	Router::new()
		.route("/", get(get_all_airlines).post(create_airline))
		.route("/{code}", get(get_airline))
}

/// Airport routes
fn airport_routes() -> Router<AppState> {
	Router::new()
		.route("/", get(get_all_airports).post(create_airport))
		.route("/{code}", get(get_airport))
}

/// Flight routes, booking included
fn flight_routes() -> Router<AppState> {
	Router::new()
		.route("/", get(get_flights).post(create_flight))
		.route("/book", post(book_flight))
		.route("/notify-upcoming", post(notify_upcoming_flights))
		.route("/{flight_number}", get(get_flight))
		.route("/{flight_number}/tickets", get(get_flight_tickets))
}
