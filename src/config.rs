use anyhow::{Context, Result};
use rust_dotenv::dotenv::DotEnv;
use surrealdb::{
	Surreal,
	engine::any::{self, Any},
	opt::{Config, auth::Root, capabilities::Capabilities},
};

#[derive(Debug, Clone)]
pub struct DbCfg {
	pub host: String,
	pub ns: String,
	pub db: String,
	pub user: String,
	pub pass: String,
}

impl DbCfg {
	pub fn from_env(_env: &DotEnv) -> Result<Self> {
		let dotenv = DotEnv::new("");

		// DotEnv has already populated std::env; pull from there.
		let host = dotenv
			.get_var("DATABASE_HOST".to_string())
			.unwrap_or(String::from("http://localhost:8000"));

		let ns = dotenv
			.get_var("DATABASE_NAMESPACE".to_string())
			.unwrap_or(String::from("xarhani"));

		let db = dotenv
			.get_var("DATABASE_NAME".to_string())
			.unwrap_or(String::from("dev"));

		let user = dotenv
			.get_var("DATABASE_USER".to_string())
			.unwrap_or(String::from("root"));

		let pass = dotenv
			.get_var("DATABASE_PASSWORD".to_string())
			.unwrap_or(String::from("root"));

		Ok(Self {
			host,
			ns,
			db,
			user,
			pass,
		})
	}
}

async fn create_client(address: &str) -> Result<Surreal<Any>, surrealdb::Error> {
	let config =
		Config::new().capabilities(Capabilities::all().with_all_experimental_features_allowed());

	any::connect((address, config)).await
}

pub async fn connect(cfg: &DbCfg) -> Result<Surreal<Any>> {
	let db = create_client(&cfg.host)
		.await
		.with_context(|| format!("Failed connecting to {}", cfg.host))?;

	db.signin(Root {
		username: cfg.user.clone(),
		password: cfg.pass.clone(),
	})
	.await
	.context("signin failed")?;
	db.use_ns(&cfg.ns)
		.use_db(&cfg.db)
		.await
		.with_context(|| format!("use_ns/use_db failed for ns={} db={}", cfg.ns, cfg.db))?;

	Ok(db)
}
