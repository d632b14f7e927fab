use anyhow::Result;
use surrealdb::{Surreal, engine::any::Any};
use surrealdb_types::SurrealValue;

use crate::records::ALL_COLLECTIONS;

#[derive(serde::Deserialize, Debug, SurrealValue)]
struct CountRow {
	count: i64,
}

pub async fn count(db: &Surreal<Any>, table: &str) -> Result<i64> {
	let mut resp = db
		.query("SELECT count() FROM type::table($tb) GROUP ALL;")
		.bind(("tb", table.to_string()))
		.await?;
	let row: Option<CountRow> = resp.take(0)?;

	Ok(row.map_or(0, |r| r.count))
}

pub async fn status(db: &Surreal<Any>) -> Result<()> {
	let mut lines = Vec::new();
	let mut total = 0;
	for table in ALL_COLLECTIONS {
		let n = count(db, table).await?;
		total += n;
		lines.push(format!("{table:>14}: {n}"));
	}

	if total == 0 {
		println!("No seed data present");
	} else {
		println!("Documents per collection:");
		for line in lines {
			println!("{line}");
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use surrealdb::engine::any::connect;

	use super::*;
	use crate::records::STATES;

	#[tokio::test]
	async fn count_is_zero_on_an_empty_store() {
		let db = connect("memory").await.expect("in-memory engine");
		db.use_ns("test").use_db("test").await.expect("use_ns/use_db");

		assert_eq!(count(&db, STATES).await.expect("count"), 0);
	}
}
