use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{DbPool, Error};
use reservation::Reservation;

use crate::schemas::reservation::ReservationDetailsResponse;

#[instrument(skip(pool))]
pub async fn get_reservation(
	State(pool): State<DbPool>,
	Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let reservation = Reservation::get_by_id(id, &conn).await?;
	let response: ReservationDetailsResponse = reservation.into();

	Ok((StatusCode::OK, Json(response)))
}
