//! The example records and the fixed document IDs they live under.
//!
//! Every write targets a literal ID, so re-running the seeder overwrites
//! the same documents instead of duplicating them.

use rust_decimal::Decimal;
use surrealdb_types::SurrealValue;

// Top-level collections.
pub const STATES: &str = "states";
pub const CITIES: &str = "cities";
pub const CATEGORIES: &str = "categories";
pub const COMMERCES: &str = "commerces";
pub const USERS: &str = "users";

// Subcollections. Child documents are keyed by [parent ids.., own id] so a
// record stays unique within its parent's path.
pub const OWNERS: &str = "owners";
pub const SCHEDULES: &str = "schedules";
pub const PRODUCTS: &str = "products";
pub const PRESENTATIONS: &str = "presentations";

pub const ALL_COLLECTIONS: [&str; 9] = [
	STATES,
	CITIES,
	CATEGORIES,
	COMMERCES,
	OWNERS,
	SCHEDULES,
	PRODUCTS,
	PRESENTATIONS,
	USERS,
];

pub const STATE_ID: &str = "state_id_1";
pub const CITY_ID: &str = "city_id_1";
pub const CATEGORY_ID: &str = "category_id_1";
pub const COMMERCE_ID: &str = "commerce_id_1";
pub const OWNER_ID: &str = "owner_id_1";
pub const SCHEDULE_ID: &str = "schedule_id_1";
pub const PRODUCT_ID: &str = "product_id_1";
pub const PRESENTATION_ID: &str = "presentation_id_1";
pub const USER_ID: &str = "user_id_1";

#[derive(serde::Deserialize, Debug, Clone, PartialEq, SurrealValue)]
pub struct State {
	pub name: String,
}

impl State {
	pub fn example() -> Self {
		Self {
			name: "Example State".to_string(),
		}
	}
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, SurrealValue)]
pub struct City {
	pub name: String,
	pub state_id: String,
}

impl City {
	pub fn example(state_id: &str) -> Self {
		Self {
			name: "Example City".to_string(),
			state_id: state_id.to_string(),
		}
	}
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, SurrealValue)]
pub struct Category {
	pub name: String,
}

impl Category {
	pub fn example() -> Self {
		Self {
			name: "Restaurant".to_string(),
		}
	}
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, SurrealValue)]
pub struct Commerce {
	pub name: String,
	pub location: String,
	pub phone: String,
	pub city_id: String,
	pub state_id: String,
	pub category_ids: Vec<String>,
}

impl Commerce {
	pub fn example(city_id: &str, state_id: &str, category_id: &str) -> Self {
		Self {
			name: "Example Commerce".to_string(),
			location: "Some location".to_string(),
			phone: "1234567890".to_string(),
			city_id: city_id.to_string(),
			state_id: state_id.to_string(),
			category_ids: vec![category_id.to_string()],
		}
	}
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, SurrealValue)]
pub struct Owner {
	pub name: String,
	pub email: String,
}

impl Owner {
	pub fn example() -> Self {
		Self {
			name: "John Owner".to_string(),
			email: "john.owner@example.com".to_string(),
		}
	}
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, SurrealValue)]
pub struct Schedule {
	/// 0 = Sunday .. 6 = Saturday.
	pub day_of_week: u8,
	pub opening_time: String,
	pub closing_time: String,
}

impl Schedule {
	pub fn example() -> Self {
		Self {
			day_of_week: 1,
			opening_time: "08:00".to_string(),
			closing_time: "18:00".to_string(),
		}
	}
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, SurrealValue)]
pub struct Product {
	pub name: String,
}

impl Product {
	pub fn example() -> Self {
		Self {
			name: "Example Product".to_string(),
		}
	}
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, SurrealValue)]
pub struct Presentation {
	pub name: String,
	pub price: Decimal,
}

impl Presentation {
	pub fn example() -> Self {
		Self {
			name: "Small".to_string(),
			price: Decimal::new(999, 2),
		}
	}
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, SurrealValue)]
pub struct User {
	pub name: String,
	pub email: String,
	pub password_hash: String,
	pub liked_commerce_ids: Vec<String>,
}

impl User {
	pub fn example(commerce_id: &str) -> Self {
		Self {
			name: "Alice".to_string(),
			email: "alice@example.com".to_string(),
			password_hash: "secure_hash".to_string(),
			liked_commerce_ids: vec![commerce_id.to_string()],
		}
	}
}
