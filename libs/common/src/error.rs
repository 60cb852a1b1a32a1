//! Library-wide error types and [`From`] impls

use std::collections::HashMap;
use std::sync::LazyLock;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use diesel::result::DatabaseErrorKind;
use thiserror::Error;
use tokio::sync::mpsc;

/// Top level application error, can be converted into a [`Response`]
#[derive(Debug, Error)]
pub enum Error {
	/// Duplicate resource created
	#[error("{0}")]
	Duplicate(String),
	/// Opaque internal server error
	#[error("internal server error")]
	InternalServerError,
	/// Resource not found
	#[error("not found - {0}")]
	NotFound(String),
	/// Any error related to booking a flight
	#[error(transparent)]
	BookingError(#[from] BookingError),
	/// Resource could not be validated
	#[error("{0}")]
	ValidationError(String),
}

impl Error {
	/// Return a unique identifying code for this error
	///
	/// Codes are only ever appended, a code is never reused once it has been
	/// handed out
	fn code(&self) -> i32 {
		match self {
			Self::Duplicate(_) => 1,
			Self::InternalServerError => 2,
			Self::NotFound(_) => 3,
			Self::ValidationError(_) => 4,
			Self::BookingError(e) => {
				match e {
					BookingError::FlightFull(_) => 5,
				}
			},
		}
	}

	/// Return additional information about the error
	fn info(&self) -> Option<String> {
		match self {
			Self::Duplicate(m) | Self::NotFound(m) | Self::ValidationError(m) => {
				Some(m.to_owned())
			},
			Self::BookingError(BookingError::FlightFull(flight_number)) => {
				Some(
					serde_json::json!({ "flightNumber": flight_number })
						.to_string(),
				)
			},
			Self::InternalServerError => None,
		}
	}

	/// The HTTP status this error is reported with
	fn status(&self) -> StatusCode {
		match self {
			Self::Duplicate(_) | Self::BookingError(_) => StatusCode::CONFLICT,
			Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
			Self::NotFound(_) => StatusCode::NOT_FOUND,
			Self::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
		}
	}
}

/// Convert an error into a [`Response`]
impl IntoResponse for Error {
	fn into_response(self) -> Response {
		error!("{self:?}");

		let data = serde_json::json!({
			"message": self.to_string(),
			"code": self.code(),
			"info": self.info(),
		});

		(self.status(), axum::Json(data)).into_response()
	}
}

/// Any error related to booking a seat on a flight
#[derive(Debug, Error)]
pub enum BookingError {
	/// No seats are left on the flight with the given number
	#[error("flight {0} is fully booked")]
	FlightFull(i32),
}

/// A list of possible internal errors
///
/// API end users should never see these details
#[derive(Debug, Error)]
pub enum InternalServerError {
	/// Unknown database constraint violation
	#[error("constraint error -- {0:?}")]
	ConstraintError(String),
	/// Error executing some database operation
	#[error("database error -- {0:?}")]
	DatabaseError(diesel::result::Error),
	/// Error interacting with a database connection
	#[error("database interaction error -- {0:?}")]
	DatabaseInteractionError(deadpool_diesel::InteractError),
	/// Malformed email
	#[error("invalid email -- {0:?}")]
	InvalidEmail(lettre::address::AddressError),
	/// Mailer stopped unexpectedly
	#[error("mailer stopped -- {0:?}")]
	MailerStopped(mpsc::error::SendError<lettre::Message>),
	/// Generic mailer error
	#[error("mail error -- {0:?}")]
	MailError(lettre::error::Error),
	/// Error acquiring database pool connection
	#[error("database pool error -- {0:?}")]
	PoolError(deadpool_diesel::PoolError),
	/// Error rendering a template
	#[error("template error -- {0:?}")]
	TemplateError(askama::Error),
}

// Map internal server errors to application errors
impl From<InternalServerError> for Error {
	fn from(value: InternalServerError) -> Self {
		error!("internal server error -- {value}");

		Self::InternalServerError
	}
}

/// Map validation errors to application errors
impl From<validator::ValidationErrors> for Error {
	fn from(err: validator::ValidationErrors) -> Self {
		let errs = err.field_errors();
		let repr = errs
			.values()
			.map(|v| {
				v.iter()
					.map(ToString::to_string)
					.collect::<Vec<String>>()
					.join("\n")
			})
			.collect::<Vec<String>>()
			.join("\n");

		Self::ValidationError(repr)
	}
}

/// Map database interaction errors to application errors
impl From<deadpool_diesel::InteractError> for Error {
	fn from(value: deadpool_diesel::InteractError) -> Self {
		InternalServerError::DatabaseInteractionError(value).into()
	}
}

/// Map of constraint names to field names.
static CONSTRAINT_TO_FIELD: LazyLock<HashMap<&str, &str>> =
	LazyLock::new(|| {
		HashMap::from([
			("passenger_email_key", "email"),
			("airline_code_key", "code"),
			("airport_code_key", "code"),
			("flight_flight_number_key", "flightNumber"),
		])
	});

/// Map database result errors to application errors.
impl From<diesel::result::Error> for Error {
	fn from(err: diesel::result::Error) -> Self {
		match &err {
			// No rows returned by query that expected at least one
			diesel::result::Error::NotFound => {
				Self::NotFound("no context provided".to_string())
			},
			// Unique constraint violation
			diesel::result::Error::DatabaseError(
				DatabaseErrorKind::UniqueViolation,
				info,
			) => {
				let Some(constraint_name) = info.constraint_name() else {
					return InternalServerError::DatabaseError(err).into();
				};

				match CONSTRAINT_TO_FIELD.get(constraint_name) {
					Some(field) => {
						Self::Duplicate(format!("{field} is already in use"))
					},
					None => {
						InternalServerError::ConstraintError(
							constraint_name.to_string(),
						)
						.into()
					},
				}
			},
			// Foreign key or check constraint violation
			diesel::result::Error::DatabaseError(
				DatabaseErrorKind::ForeignKeyViolation
				| DatabaseErrorKind::CheckViolation,
				info,
			) => Self::ValidationError(info.message().to_string()),
			_ => InternalServerError::DatabaseError(err).into(),
		}
	}
}

impl From<deadpool_diesel::PoolError> for Error {
	fn from(value: deadpool_diesel::PoolError) -> Self {
		InternalServerError::PoolError(value).into()
	}
}

impl From<lettre::address::AddressError> for Error {
	fn from(err: lettre::address::AddressError) -> Self {
		InternalServerError::InvalidEmail(err).into()
	}
}

impl From<mpsc::error::SendError<lettre::Message>> for Error {
	fn from(err: mpsc::error::SendError<lettre::Message>) -> Self {
		InternalServerError::MailerStopped(err).into()
	}
}

impl From<lettre::error::Error> for Error {
	fn from(err: lettre::error::Error) -> Self {
		InternalServerError::MailError(err).into()
	}
}

impl From<askama::Error> for Error {
	fn from(err: askama::Error) -> Self {
		InternalServerError::TemplateError(err).into()
	}
}

#[cfg(test)]
mod tests {
	use axum::response::IntoResponse;

	use super::*;

	#[test]
	fn full_flight_is_a_conflict() {
		let err: Error = BookingError::FlightFull(1203).into();

		assert_eq!(err.code(), 5);
		assert_eq!(err.info(), Some(r#"{"flightNumber":1203}"#.to_string()));
		assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
	}

	#[test]
	fn missing_row_is_not_found() {
		let err: Error = diesel::result::Error::NotFound.into();

		assert!(matches!(err, Error::NotFound(_)));
		assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
	}

	#[test]
	fn internal_details_are_hidden() {
		let err: Error = InternalServerError::ConstraintError(
			"ticket_reservation_id_fkey".to_string(),
		)
		.into();

		assert_eq!(err.to_string(), "internal server error");
		assert_eq!(err.info(), None);
		assert_eq!(
			err.into_response().status(),
			StatusCode::INTERNAL_SERVER_ERROR
		);
	}

	#[test]
	fn stopped_mailer_is_internal() {
		let message = lettre::Message::builder()
			.from("noreply@example.com".parse().unwrap())
			.to("alice@example.com".parse().unwrap())
			.subject("test")
			.body(String::new())
			.unwrap();

		let err: Error = mpsc::error::SendError(message).into();

		assert!(matches!(err, Error::InternalServerError));
		assert_eq!(
			err.into_response().status(),
			StatusCode::INTERNAL_SERVER_ERROR
		);
	}

	#[test]
	fn error_codes_are_unique() {
		let errors = [
			Error::Duplicate(String::new()),
			Error::InternalServerError,
			Error::NotFound(String::new()),
			Error::ValidationError(String::new()),
			Error::BookingError(BookingError::FlightFull(0)),
		];

		let mut codes: Vec<i32> = errors.iter().map(Error::code).collect();
		codes.sort_unstable();
		codes.dedup();

		assert_eq!(codes.len(), errors.len());
	}
}
