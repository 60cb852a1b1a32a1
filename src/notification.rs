//! Reminders for passengers whose flight departs soon

use std::collections::HashSet;

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use common::{DbPool, Error};
use primitive_passenger::PrimitivePassenger;
use primitive_ticket::PrimitiveTicket;
use ticket::Ticket;

use crate::mailer::Mailer;

/// How many hours ahead of departure passengers are reminded
pub const REMINDER_LEAD_HOURS: u32 = 2;

/// Check if a departure falls `hours` clock hours after `now`
///
/// Only the hour component is compared, minutes are ignored
#[must_use]
pub fn departs_in_hours(
	departure: NaiveTime,
	now: NaiveTime,
	hours: u32,
) -> bool {
	i64::from(departure.hour()) - i64::from(now.hour()) == i64::from(hours)
}

/// Select the ticket holders to remind, at most one reminder per passenger
#[must_use]
pub fn select_reminders(
	holders: Vec<(PrimitiveTicket, PrimitivePassenger)>,
	now: NaiveDateTime,
) -> Vec<(PrimitiveTicket, PrimitivePassenger)> {
	let mut reminded = HashSet::new();

	holders
		.into_iter()
		.filter(|(ticket, _)| {
			ticket.departure_date == now.date()
				&& departs_in_hours(
					ticket.departure_time,
					now.time(),
					REMINDER_LEAD_HOURS,
				)
		})
		.filter(|(_, passenger)| reminded.insert(passenger.id))
		.collect()
}

/// Queue a reminder email for every passenger with a flight departing
/// [`REMINDER_LEAD_HOURS`] hours after `now`
///
/// Returns the number of reminders queued
///
/// # Errors
/// Fails if the ticket holders cannot be loaded, a failing email is only
/// logged
#[instrument(skip(pool, mailer))]
pub async fn send_upcoming_flight_reminders(
	pool: &DbPool,
	mailer: &Mailer,
	now: NaiveDateTime,
) -> Result<usize, Error> {
	let conn = pool.get().await?;

	let holders = Ticket::holders_departing_on(now.date(), &conn).await?;
	let reminders = select_reminders(holders, now);

	let mut sent = 0;

	for (ticket, passenger) in &reminders {
		match mailer.send_flight_reminder(passenger, ticket).await {
			Ok(()) => sent += 1,
			Err(e) => {
				error!(
					"could not remind passenger {} of flight {} -- {e}",
					passenger.id, ticket.flight_number
				);
			},
		}
	}

	info!("queued {sent} departure reminders");

	Ok(sent)
}
