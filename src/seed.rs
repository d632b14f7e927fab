//! Ordered document writes that bootstrap the commerce object graph:
//! state -> city -> category -> commerce -> {owners, schedules, products ->
//! presentations} -> user. Each step returns the ID it wrote so later
//! documents can embed it.

use anyhow::{Context, Result};
use surrealdb::{Surreal, engine::any::Any};

use crate::records::{
	CATEGORIES, CATEGORY_ID, CITIES, CITY_ID, COMMERCES, COMMERCE_ID, Category, City, Commerce,
	OWNER_ID, OWNERS, Owner, PRESENTATION_ID, PRESENTATIONS, PRODUCT_ID, PRODUCTS, Presentation,
	Product, SCHEDULE_ID, SCHEDULES, STATE_ID, STATES, Schedule, State, USER_ID, USERS, User,
};

pub async fn seed(db: &Surreal<Any>, verbose: bool) -> Result<()> {
	let state_id = seed_state(db, verbose).await.context("writing state")?;
	let city_id = seed_city(db, &state_id, verbose)
		.await
		.context("writing city")?;
	let category_id = seed_category(db, verbose).await.context("writing category")?;
	let commerce_id = seed_commerce(db, &city_id, &state_id, &category_id, verbose)
		.await
		.context("writing commerce")?;
	seed_owner(db, &commerce_id, verbose)
		.await
		.context("writing owner")?;
	seed_schedule(db, &commerce_id, verbose)
		.await
		.context("writing schedule")?;
	let product_id = seed_product(db, &commerce_id, verbose)
		.await
		.context("writing product")?;
	seed_presentation(db, &commerce_id, &product_id, verbose)
		.await
		.context("writing presentation")?;
	seed_user(db, &commerce_id, verbose).await.context("writing user")?;

	println!("Seed data written");
	Ok(())
}

async fn seed_state(db: &Surreal<Any>, verbose: bool) -> Result<String> {
	let state = State::example();

	db.query("UPSERT type::record($tb, $id) CONTENT { name: $name };")
		.bind(("tb", STATES.to_string()))
		.bind(("id", STATE_ID.to_string()))
		.bind(("name", state.name))
		.await?
		.check()?;

	if verbose {
		println!("wrote {STATES}/{STATE_ID}");
	}
	Ok(STATE_ID.to_string())
}

async fn seed_city(db: &Surreal<Any>, state_id: &str, verbose: bool) -> Result<String> {
	let city = City::example(state_id);

	db.query("UPSERT type::record($tb, $id) CONTENT { name: $name, state_id: $state_id };")
		.bind(("tb", CITIES.to_string()))
		.bind(("id", CITY_ID.to_string()))
		.bind(("name", city.name))
		.bind(("state_id", city.state_id))
		.await?
		.check()?;

	if verbose {
		println!("wrote {CITIES}/{CITY_ID}");
	}
	Ok(CITY_ID.to_string())
}

async fn seed_category(db: &Surreal<Any>, verbose: bool) -> Result<String> {
	let category = Category::example();

	db.query("UPSERT type::record($tb, $id) CONTENT { name: $name };")
		.bind(("tb", CATEGORIES.to_string()))
		.bind(("id", CATEGORY_ID.to_string()))
		.bind(("name", category.name))
		.await?
		.check()?;

	if verbose {
		println!("wrote {CATEGORIES}/{CATEGORY_ID}");
	}
	Ok(CATEGORY_ID.to_string())
}

async fn seed_commerce(
	db: &Surreal<Any>,
	city_id: &str,
	state_id: &str,
	category_id: &str,
	verbose: bool,
) -> Result<String> {
	let commerce = Commerce::example(city_id, state_id, category_id);

	db.query(
		r#"UPSERT type::record($tb, $id) CONTENT {
			name: $name,
			location: $location,
			phone: $phone,
			city_id: $city_id,
			state_id: $state_id,
			category_ids: $category_ids
		};"#,
	)
	.bind(("tb", COMMERCES.to_string()))
	.bind(("id", COMMERCE_ID.to_string()))
	.bind(("name", commerce.name))
	.bind(("location", commerce.location))
	.bind(("phone", commerce.phone))
	.bind(("city_id", commerce.city_id))
	.bind(("state_id", commerce.state_id))
	.bind(("category_ids", commerce.category_ids))
	.await?
	.check()?;

	if verbose {
		println!("wrote {COMMERCES}/{COMMERCE_ID}");
	}
	Ok(COMMERCE_ID.to_string())
}

async fn seed_owner(db: &Surreal<Any>, commerce_id: &str, verbose: bool) -> Result<()> {
	let owner = Owner::example();

	db.query(
		"UPSERT type::record($tb, [$commerce_id, $id]) CONTENT { name: $name, email: $email };",
	)
	.bind(("tb", OWNERS.to_string()))
	.bind(("commerce_id", commerce_id.to_string()))
	.bind(("id", OWNER_ID.to_string()))
	.bind(("name", owner.name))
	.bind(("email", owner.email))
	.await?
	.check()?;

	if verbose {
		println!("wrote {COMMERCES}/{commerce_id}/{OWNERS}/{OWNER_ID}");
	}
	Ok(())
}

async fn seed_schedule(db: &Surreal<Any>, commerce_id: &str, verbose: bool) -> Result<()> {
	let schedule = Schedule::example();

	db.query(
		r#"UPSERT type::record($tb, [$commerce_id, $id]) CONTENT {
			day_of_week: $day_of_week,
			opening_time: $opening_time,
			closing_time: $closing_time
		};"#,
	)
	.bind(("tb", SCHEDULES.to_string()))
	.bind(("commerce_id", commerce_id.to_string()))
	.bind(("id", SCHEDULE_ID.to_string()))
	.bind(("day_of_week", i64::from(schedule.day_of_week)))
	.bind(("opening_time", schedule.opening_time))
	.bind(("closing_time", schedule.closing_time))
	.await?
	.check()?;

	if verbose {
		println!("wrote {COMMERCES}/{commerce_id}/{SCHEDULES}/{SCHEDULE_ID}");
	}
	Ok(())
}

async fn seed_product(db: &Surreal<Any>, commerce_id: &str, verbose: bool) -> Result<String> {
	let product = Product::example();

	db.query("UPSERT type::record($tb, [$commerce_id, $id]) CONTENT { name: $name };")
		.bind(("tb", PRODUCTS.to_string()))
		.bind(("commerce_id", commerce_id.to_string()))
		.bind(("id", PRODUCT_ID.to_string()))
		.bind(("name", product.name))
		.await?
		.check()?;

	if verbose {
		println!("wrote {COMMERCES}/{commerce_id}/{PRODUCTS}/{PRODUCT_ID}");
	}
	Ok(PRODUCT_ID.to_string())
}

async fn seed_presentation(
	db: &Surreal<Any>,
	commerce_id: &str,
	product_id: &str,
	verbose: bool,
) -> Result<()> {
	let presentation = Presentation::example();

	// Bound as a string and cast so the stored value is a decimal, not a float.
	db.query(
		r#"UPSERT type::record($tb, [$commerce_id, $product_id, $id]) CONTENT {
			name: $name,
			price: <decimal> $price
		};"#,
	)
	.bind(("tb", PRESENTATIONS.to_string()))
	.bind(("commerce_id", commerce_id.to_string()))
	.bind(("product_id", product_id.to_string()))
	.bind(("id", PRESENTATION_ID.to_string()))
	.bind(("name", presentation.name))
	.bind(("price", presentation.price.to_string()))
	.await?
	.check()?;

	if verbose {
		println!(
			"wrote {COMMERCES}/{commerce_id}/{PRODUCTS}/{product_id}/{PRESENTATIONS}/{PRESENTATION_ID}"
		);
	}
	Ok(())
}

async fn seed_user(db: &Surreal<Any>, commerce_id: &str, verbose: bool) -> Result<()> {
	let user = User::example(commerce_id);

	db.query(
		r#"UPSERT type::record($tb, $id) CONTENT {
			name: $name,
			email: $email,
			password_hash: $password_hash,
			liked_commerce_ids: $liked_commerce_ids
		};"#,
	)
	.bind(("tb", USERS.to_string()))
	.bind(("id", USER_ID.to_string()))
	.bind(("name", user.name))
	.bind(("email", user.email))
	.bind(("password_hash", user.password_hash))
	.bind(("liked_commerce_ids", user.liked_commerce_ids))
	.await?
	.check()?;

	if verbose {
		println!("wrote {USERS}/{USER_ID}");
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use rust_decimal::Decimal;
	use surrealdb::engine::any::connect;

	use super::*;
	use crate::records::ALL_COLLECTIONS;
	use crate::status::count;

	async fn mem_db() -> Surreal<Any> {
		let db = connect("memory").await.expect("in-memory engine");
		db.use_ns("test").use_db("test").await.expect("use_ns/use_db");
		db
	}

	#[tokio::test]
	async fn seeding_an_empty_store_writes_nine_documents() {
		let db = mem_db().await;
		seed(&db, false).await.expect("seed");

		let mut total = 0;
		for table in ALL_COLLECTIONS {
			let n = count(&db, table).await.expect("count");
			assert_eq!(n, 1, "expected one document in {table}");
			total += n;
		}
		assert_eq!(total, 9);
	}

	#[tokio::test]
	async fn reseeding_overwrites_the_same_documents() {
		let db = mem_db().await;
		seed(&db, false).await.expect("first seed");
		seed(&db, false).await.expect("second seed");

		for table in ALL_COLLECTIONS {
			assert_eq!(count(&db, table).await.expect("count"), 1);
		}
	}

	#[tokio::test]
	async fn city_references_the_seeded_state() {
		let db = mem_db().await;
		seed(&db, false).await.expect("seed");

		let mut resp = db
			.query("SELECT name, state_id FROM type::record($tb, $id);")
			.bind(("tb", CITIES.to_string()))
			.bind(("id", CITY_ID.to_string()))
			.await
			.expect("select city");
		let city: Option<City> = resp.take(0).expect("take city");

		assert_eq!(city.expect("city row").state_id, STATE_ID);
	}

	#[tokio::test]
	async fn reference_lists_hold_exactly_the_seeded_ids() {
		let db = mem_db().await;
		seed(&db, false).await.expect("seed");

		let mut resp = db
			.query(
				"SELECT name, location, phone, city_id, state_id, category_ids \
				 FROM type::record($tb, $id);",
			)
			.bind(("tb", COMMERCES.to_string()))
			.bind(("id", COMMERCE_ID.to_string()))
			.await
			.expect("select commerce");
		let commerce: Option<Commerce> = resp.take(0).expect("take commerce");
		assert_eq!(
			commerce.expect("commerce row").category_ids,
			vec![CATEGORY_ID.to_string()]
		);

		let mut resp = db
			.query(
				"SELECT name, email, password_hash, liked_commerce_ids \
				 FROM type::record($tb, $id);",
			)
			.bind(("tb", USERS.to_string()))
			.bind(("id", USER_ID.to_string()))
			.await
			.expect("select user");
		let user: Option<User> = resp.take(0).expect("take user");
		assert_eq!(
			user.expect("user row").liked_commerce_ids,
			vec![COMMERCE_ID.to_string()]
		);
	}

	#[tokio::test]
	async fn presentation_price_survives_as_decimal() {
		let db = mem_db().await;
		seed(&db, false).await.expect("seed");

		let mut resp = db
			.query("SELECT name, price FROM type::record($tb, [$commerce_id, $product_id, $id]);")
			.bind(("tb", PRESENTATIONS.to_string()))
			.bind(("commerce_id", COMMERCE_ID.to_string()))
			.bind(("product_id", PRODUCT_ID.to_string()))
			.bind(("id", PRESENTATION_ID.to_string()))
			.await
			.expect("select presentation");
		let presentation: Option<Presentation> = resp.take(0).expect("take presentation");

		assert_eq!(
			presentation.expect("presentation row").price,
			Decimal::new(999, 2)
		);
	}

	#[tokio::test]
	async fn seeded_subcollection_documents_match_the_examples() {
		let db = mem_db().await;
		seed(&db, false).await.expect("seed");

		let mut resp = db
			.query("SELECT name, email FROM type::record($tb, [$commerce_id, $id]);")
			.bind(("tb", OWNERS.to_string()))
			.bind(("commerce_id", COMMERCE_ID.to_string()))
			.bind(("id", OWNER_ID.to_string()))
			.await
			.expect("select owner");
		let owner: Option<Owner> = resp.take(0).expect("take owner");
		assert_eq!(owner.expect("owner row"), Owner::example());

		let mut resp = db
			.query(
				"SELECT day_of_week, opening_time, closing_time \
				 FROM type::record($tb, [$commerce_id, $id]);",
			)
			.bind(("tb", SCHEDULES.to_string()))
			.bind(("commerce_id", COMMERCE_ID.to_string()))
			.bind(("id", SCHEDULE_ID.to_string()))
			.await
			.expect("select schedule");
		let schedule: Option<Schedule> = resp.take(0).expect("take schedule");
		assert_eq!(schedule.expect("schedule row"), Schedule::example());
	}
}
