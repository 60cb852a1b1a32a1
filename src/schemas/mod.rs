//! Request and response bodies of the REST API

pub mod airline;
pub mod airport;
pub mod flight;
pub mod passenger;
pub mod reservation;
pub mod ticket;
