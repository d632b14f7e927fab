use anyhow::Result;
use surrealdb::{Surreal, engine::any::Any};

use crate::records::{
	CATEGORIES, CITIES, COMMERCES, OWNERS, PRESENTATIONS, PRODUCTS, SCHEDULES, STATES, USERS,
};

/// Deletes every seeded collection, children first so no document outlives
/// the references pointing at it.
pub async fn clear(db: &Surreal<Any>) -> Result<()> {
	for table in [
		PRESENTATIONS,
		PRODUCTS,
		SCHEDULES,
		OWNERS,
		USERS,
		COMMERCES,
		CATEGORIES,
		CITIES,
		STATES,
	] {
		db.query("DELETE type::table($tb);")
			.bind(("tb", table.to_string()))
			.await?
			.check()?;
	}

	println!("Seed data removed");
	Ok(())
}
