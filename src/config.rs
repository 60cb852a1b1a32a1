use std::sync::Arc;

use deadpool_diesel::postgres::{Manager, Pool};
use lettre::Address;

use crate::mailer::StubMailbox;

#[derive(Clone, Debug)]
pub struct Config {
	pub database_url: String,

	pub email_address:       Address,
	pub email_smtp_server:   String,
	pub email_smtp_password: String,
	pub email_queue_size:    usize,
}

impl Config {
	fn get_env_var(var: &str) -> String {
		std::env::var(var).unwrap_or_else(|_| panic!("{var} must be set"))
	}

	/// Create a new [`Config`] from environment variables
	///
	/// # Panics
	/// Panics if an environment variable is missing or malformed
	#[must_use]
	pub fn from_env() -> Self {
		let database_url = Self::get_env_var("DATABASE_URL");

		let email_address = Self::get_env_var("EMAIL_ADDRESS")
			.parse::<Address>()
			.unwrap_or_else(|e| panic!("EMAIL_ADDRESS is invalid -- {e}"));
		let email_smtp_server = Self::get_env_var("EMAIL_SMTP_SERVER");
		let email_smtp_password = Self::get_env_var("EMAIL_SMTP_PASSWORD");
		let email_queue_size = Self::get_env_var("EMAIL_QUEUE_SIZE")
			.parse::<usize>()
			.unwrap_or_else(|e| panic!("EMAIL_QUEUE_SIZE is invalid -- {e}"));

		Self {
			database_url,
			email_address,
			email_smtp_server,
			email_smtp_password,
			email_queue_size,
		}
	}

	/// Create a database pool for the given config
	///
	/// # Panics
	/// Panics if creating the pool fails
	#[must_use]
	pub fn create_database_pool(&self) -> Pool {
		let manager = Manager::new(
			self.database_url.to_string(),
			deadpool_diesel::Runtime::Tokio1,
		);

		Pool::builder(manager).build().unwrap()
	}

	/// Create an in-memory mailbox if the stub mail transport is configured
	#[must_use]
	pub fn create_stub_mailbox(&self) -> Option<Arc<StubMailbox>> {
		if self.email_smtp_server == "stub" {
			Some(Arc::default())
		} else {
			None
		}
	}
}
