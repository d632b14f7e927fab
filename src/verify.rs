//! Post-seed integrity checks: every expected document exists and every
//! stored reference resolves to a document.

use anyhow::{Result, bail};
use surrealdb::{Surreal, engine::any::Any};

use crate::records::{
	CATEGORIES, CATEGORY_ID, CITIES, CITY_ID, COMMERCES, COMMERCE_ID, City, Commerce, OWNER_ID,
	OWNERS, PRESENTATION_ID, PRESENTATIONS, PRODUCT_ID, PRODUCTS, SCHEDULE_ID, SCHEDULES,
	STATE_ID, STATES, USER_ID, USERS, User,
};

pub async fn verify(db: &Surreal<Any>) -> Result<()> {
	let mut broken = 0usize;

	for (table, id) in [
		(STATES, STATE_ID),
		(CITIES, CITY_ID),
		(CATEGORIES, CATEGORY_ID),
		(COMMERCES, COMMERCE_ID),
		(USERS, USER_ID),
	] {
		if !exists(db, table, id).await? {
			eprintln!("missing {table}/{id}");
			broken += 1;
		}
	}

	for (table, key) in [
		(OWNERS, &[COMMERCE_ID, OWNER_ID][..]),
		(SCHEDULES, &[COMMERCE_ID, SCHEDULE_ID][..]),
		(PRODUCTS, &[COMMERCE_ID, PRODUCT_ID][..]),
		(PRESENTATIONS, &[COMMERCE_ID, PRODUCT_ID, PRESENTATION_ID][..]),
	] {
		if !child_exists(db, table, key).await? {
			eprintln!("missing {}/{}", table, key.join("/"));
			broken += 1;
		}
	}

	broken += check_city_reference(db).await?;
	broken += check_commerce_references(db).await?;
	broken += check_user_references(db).await?;

	if broken > 0 {
		bail!("{broken} missing documents or broken references");
	}

	println!("All documents present and references resolve");
	Ok(())
}

async fn exists(db: &Surreal<Any>, table: &str, id: &str) -> Result<bool> {
	let mut resp = db
		.query("SELECT * FROM type::record($tb, $id);")
		.bind(("tb", table.to_string()))
		.bind(("id", id.to_string()))
		.await?;
	let row: Option<serde_json::Value> = resp.take(0)?;

	Ok(row.is_some())
}

async fn child_exists(db: &Surreal<Any>, table: &str, path: &[&str]) -> Result<bool> {
	let key: Vec<String> = path.iter().map(|s| s.to_string()).collect();

	let mut resp = db
		.query("SELECT * FROM type::record($tb, $key);")
		.bind(("tb", table.to_string()))
		.bind(("key", key))
		.await?;
	let row: Option<serde_json::Value> = resp.take(0)?;

	Ok(row.is_some())
}

async fn check_city_reference(db: &Surreal<Any>) -> Result<usize> {
	let mut resp = db
		.query("SELECT name, state_id FROM type::record($tb, $id);")
		.bind(("tb", CITIES.to_string()))
		.bind(("id", CITY_ID.to_string()))
		.await?;
	let city: Option<City> = resp.take(0)?;

	// A missing city was already reported above.
	let Some(city) = city else {
		return Ok(0);
	};

	if exists(db, STATES, &city.state_id).await? {
		Ok(0)
	} else {
		eprintln!(
			"{CITIES}/{CITY_ID} state_id '{}' does not resolve",
			city.state_id
		);
		Ok(1)
	}
}

async fn check_commerce_references(db: &Surreal<Any>) -> Result<usize> {
	let mut resp = db
		.query(
			"SELECT name, location, phone, city_id, state_id, category_ids \
			 FROM type::record($tb, $id);",
		)
		.bind(("tb", COMMERCES.to_string()))
		.bind(("id", COMMERCE_ID.to_string()))
		.await?;
	let commerce: Option<Commerce> = resp.take(0)?;

	let Some(commerce) = commerce else {
		return Ok(0);
	};

	let mut broken = 0usize;
	if !exists(db, CITIES, &commerce.city_id).await? {
		eprintln!(
			"{COMMERCES}/{COMMERCE_ID} city_id '{}' does not resolve",
			commerce.city_id
		);
		broken += 1;
	}
	if !exists(db, STATES, &commerce.state_id).await? {
		eprintln!(
			"{COMMERCES}/{COMMERCE_ID} state_id '{}' does not resolve",
			commerce.state_id
		);
		broken += 1;
	}
	for category_id in &commerce.category_ids {
		if !exists(db, CATEGORIES, category_id).await? {
			eprintln!(
				"{COMMERCES}/{COMMERCE_ID} category_ids entry '{category_id}' does not resolve"
			);
			broken += 1;
		}
	}

	Ok(broken)
}

async fn check_user_references(db: &Surreal<Any>) -> Result<usize> {
	let mut resp = db
		.query(
			"SELECT name, email, password_hash, liked_commerce_ids \
			 FROM type::record($tb, $id);",
		)
		.bind(("tb", USERS.to_string()))
		.bind(("id", USER_ID.to_string()))
		.await?;
	let user: Option<User> = resp.take(0)?;

	let Some(user) = user else {
		return Ok(0);
	};

	let mut broken = 0usize;
	for commerce_id in &user.liked_commerce_ids {
		if !exists(db, COMMERCES, commerce_id).await? {
			eprintln!(
				"{USERS}/{USER_ID} liked_commerce_ids entry '{commerce_id}' does not resolve"
			);
			broken += 1;
		}
	}

	Ok(broken)
}

#[cfg(test)]
mod tests {
	use surrealdb::engine::any::connect;

	use super::*;
	use crate::seed::seed;

	async fn mem_db() -> Surreal<Any> {
		let db = connect("memory").await.expect("in-memory engine");
		db.use_ns("test").use_db("test").await.expect("use_ns/use_db");
		db
	}

	#[tokio::test]
	async fn verify_passes_after_a_seed_run() {
		let db = mem_db().await;
		seed(&db, false).await.expect("seed");

		verify(&db).await.expect("verify");
	}

	#[tokio::test]
	async fn verify_fails_on_an_empty_store() {
		let db = mem_db().await;

		assert!(verify(&db).await.is_err());
	}

	#[tokio::test]
	async fn verify_flags_a_dangling_reference() {
		let db = mem_db().await;
		seed(&db, false).await.expect("seed");

		db.query("DELETE states;")
			.await
			.expect("delete")
			.check()
			.expect("check");

		assert!(verify(&db).await.is_err());
	}
}
