use uuid::Uuid;

use mesopust_config::Postgres;
use mesopust_storage::{
	db::Db,
	models::SourceRecord,
	queries::{self, Table},
};
use mesopust_testkit::TestDatabase;

async fn bootstrap(test_db: &TestDatabase) -> Db {
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 1 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	db
}

async fn insert_participant(db: &Db, name: &str, show_in_main_menu: bool) -> Uuid {
	sqlx::query_scalar(
		"\
INSERT INTO participants (name, name_croatian, description, show_in_main_menu)
VALUES ($1, NULL, NULL, $2)
RETURNING id",
	)
	.bind(name)
	.bind(show_in_main_menu)
	.fetch_one(&db.pool)
	.await
	.expect("Failed to insert participant.")
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MESOPUST_PG_DSN to run."]
async fn schema_bootstrap_is_idempotent() {
	let Some(base_dsn) = mesopust_testkit::env_dsn() else {
		eprintln!("Skipping schema_bootstrap_is_idempotent; set MESOPUST_PG_DSN to run.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = bootstrap(&test_db).await;

	db.ensure_schema().await.expect("Failed to re-run schema.");

	for table in Table::ALL {
		let count: i64 = sqlx::query_scalar(
			"SELECT count(*) FROM information_schema.tables WHERE table_name = $1",
		)
		.bind(table.name())
		.fetch_one(&db.pool)
		.await
		.expect("Failed to query schema tables.");

		assert_eq!(count, 1, "Missing table {}.", table.name());
	}

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MESOPUST_PG_DSN to run."]
async fn search_matches_any_column_case_insensitively() {
	let Some(base_dsn) = mesopust_testkit::env_dsn() else {
		eprintln!("Skipping search_matches_any_column_case_insensitively; set MESOPUST_PG_DSN.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = bootstrap(&test_db).await;
	let participant_id = insert_participant(&db, "Mesopustari", true).await;

	sqlx::query(
		"\
INSERT INTO instruments (name, name_croatian, description, description_croatian, participant_id)
VALUES ('Drum', 'Bubanj', NULL, NULL, $1), ('Horn', 'Rog', 'Made of ox horn', NULL, $1)",
	)
	.bind(participant_id)
	.execute(&db.pool)
	.await
	.expect("Failed to insert instruments.");

	let rows = queries::search_table(&db, Table::Instruments, "BUBA", 10)
		.await
		.expect("Failed to search instruments.");

	assert_eq!(rows.len(), 1);

	let SourceRecord::Instrument(row) = &rows[0] else {
		panic!("Expected an instrument row, got {:?}.", rows[0]);
	};

	assert_eq!(row.name, "Drum");
	assert_eq!(row.participant_id, Some(participant_id));

	let rows = queries::search_table(&db, Table::Instruments, "ox horn", 10)
		.await
		.expect("Failed to search instruments.");

	assert_eq!(rows.len(), 1);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MESOPUST_PG_DSN to run."]
async fn like_wildcards_in_query_match_literally() {
	let Some(base_dsn) = mesopust_testkit::env_dsn() else {
		eprintln!("Skipping like_wildcards_in_query_match_literally; set MESOPUST_PG_DSN.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = bootstrap(&test_db).await;

	sqlx::query("INSERT INTO items (name) VALUES ('Maska'), ('100% vuna')")
		.execute(&db.pool)
		.await
		.expect("Failed to insert items.");

	let rows = queries::search_table(&db, Table::Items, "%", 10)
		.await
		.expect("Failed to search items.");

	assert_eq!(rows.len(), 1);

	let rows = queries::search_table(&db, Table::Items, "m_sk", 10)
		.await
		.expect("Failed to search items.");

	assert!(rows.is_empty());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MESOPUST_PG_DSN to run."]
async fn fetch_record_returns_none_for_unknown_id() {
	let Some(base_dsn) = mesopust_testkit::env_dsn() else {
		eprintln!("Skipping fetch_record_returns_none_for_unknown_id; set MESOPUST_PG_DSN.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = bootstrap(&test_db).await;
	let participant_id = insert_participant(&db, "Kum", false).await;
	let found = queries::fetch_record(&db, Table::Participants, participant_id)
		.await
		.expect("Failed to fetch participant.");

	assert!(matches!(found, Some(SourceRecord::Participant(ref row)) if !row.show_in_main_menu));

	let missing = queries::fetch_record(&db, Table::Events, Uuid::new_v4())
		.await
		.expect("Failed to fetch event.");

	assert!(missing.is_none());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
async fn zero_limit_is_rejected_before_querying() {
	let cfg = Postgres { dsn: "postgres://invalid@127.0.0.1:1/none".to_string(), pool_max_conns: 1 };
	let pool = sqlx::postgres::PgPoolOptions::new()
		.max_connections(cfg.pool_max_conns)
		.connect_lazy(&cfg.dsn)
		.expect("Failed to build lazy pool.");
	let db = Db { pool };
	let err = queries::search_table(&db, Table::Items, "maska", 0)
		.await
		.expect_err("Expected invalid argument.");

	assert!(matches!(err, mesopust_storage::Error::InvalidArgument(_)));
}

#[test]
fn source_records_serialize_with_table_tag() {
	let record = SourceRecord::Event(mesopust_storage::models::Event {
		id: Uuid::nil(),
		title: "Pokop Mesopusta".to_string(),
		title_local: None,
		description: None,
		start_date: Some(time::macros::date!(2026 - 02 - 17)),
		end_date: None,
	});
	let json = serde_json::to_value(&record).expect("Failed to serialize.");

	assert_eq!(json["table"], serde_json::json!("event"));
	assert_eq!(json["start_date"], serde_json::json!("2026-02-17"));
	assert_eq!(json["end_date"], serde_json::Value::Null);
}
