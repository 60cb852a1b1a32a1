use askama::Template;
use booking::Booking;
use chrono::{NaiveDate, NaiveTime};
use common::Error;
use primitive_passenger::PrimitivePassenger;
use primitive_ticket::PrimitiveTicket;

use crate::mailer::Mailer;

#[derive(Clone, Debug, Template)]
#[template(path = "booking_confirmation.txt")]
struct BookingConfirmationTemplate<'a> {
	passenger_name:    &'a str,
	reservation_code:  &'a str,
	confirmed:         bool,
	flight_numbers:    String,
	airline_name:      &'a str,
	flight_number:     i32,
	departure_airport: &'a str,
	arrival_airport:   &'a str,
	departure_date:    NaiveDate,
	departure_time:    NaiveTime,
}

impl<'a> BookingConfirmationTemplate<'a> {
	fn new(passenger: &'a PrimitivePassenger, booking: &'a Booking) -> Self {
		let reservation = &booking.reservation;
		let ticket = &booking.ticket;

		let flight_numbers = reservation
			.flight_numbers
			.iter()
			.map(ToString::to_string)
			.collect::<Vec<_>>()
			.join(", ");

		Self {
			passenger_name:    &passenger.name,
			reservation_code:  &reservation.reservation_code,
			confirmed:         reservation.confirmed,
			flight_numbers,
			airline_name:      &ticket.airline_name,
			flight_number:     ticket.flight_number,
			departure_airport: &ticket.departure_airport,
			arrival_airport:   &ticket.arrival_airport,
			departure_date:    ticket.departure_date,
			departure_time:    ticket.departure_time,
		}
	}
}

#[derive(Clone, Debug, Template)]
#[template(path = "flight_reminder.txt")]
struct FlightReminderTemplate<'a> {
	passenger_name:    &'a str,
	flight_number:     i32,
	airline_name:      &'a str,
	departure_time:    NaiveTime,
	departure_airport: &'a str,
	arrival_airport:   &'a str,
}

impl Mailer {
	/// Send out a booking confirmation email
	#[instrument(skip(self))]
	pub(crate) async fn send_booking_confirmation(
		&self,
		passenger: &PrimitivePassenger,
		booking: &Booking,
	) -> Result<(), Error> {
		let body = BookingConfirmationTemplate::new(passenger, booking);

		let mail = self.try_build_message(
			passenger,
			"Reservation Successfully Made",
			&body.render()?,
		)?;

		self.send(mail).await?;

		info!(
			"sent booking confirmation for reservation {} to passenger {}",
			booking.reservation.id, passenger.id
		);

		Ok(())
	}

	/// Send out a reminder for a flight departing soon
	#[instrument(skip(self))]
	pub(crate) async fn send_flight_reminder(
		&self,
		passenger: &PrimitivePassenger,
		ticket: &PrimitiveTicket,
	) -> Result<(), Error> {
		let body = FlightReminderTemplate {
			passenger_name:    &passenger.name,
			flight_number:     ticket.flight_number,
			airline_name:      &ticket.airline_name,
			departure_time:    ticket.departure_time,
			departure_airport: &ticket.departure_airport,
			arrival_airport:   &ticket.arrival_airport,
		};

		let mail = self.try_build_message(
			passenger,
			&format!("Your flight {} departs soon", ticket.flight_number),
			&body.render()?,
		)?;

		self.send(mail).await?;

		info!(
			"sent departure reminder for flight {} to passenger {}",
			ticket.flight_number, passenger.id
		);

		Ok(())
	}
}
