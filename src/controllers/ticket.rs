use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{DbPool, Error};
use ticket::Ticket;

use crate::schemas::ticket::TicketResponse;

#[instrument(skip(pool))]
pub async fn get_ticket(
	State(pool): State<DbPool>,
	Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let ticket = Ticket::get_by_id(id, &conn).await?;
	let response: TicketResponse = ticket.into();

	Ok((StatusCode::OK, Json(response)))
}
