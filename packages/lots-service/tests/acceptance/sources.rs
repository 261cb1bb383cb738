use super::{build_service, seed_lot, test_db};

#[tokio::test]
#[ignore = "Requires external Postgres with pgvector. Set LOTS_PG_DSN to run."]
async fn sources_lists_distinct_etps() {
	let Some(test_db) = test_db().await else {
		eprintln!("Skipping sources_lists_distinct_etps; set LOTS_PG_DSN to run.");
		return;
	};
	let service = build_service(test_db.dsn()).await;

	seed_lot(&service.db.pool, 1, "Goszakup", None, &[]).await;
	seed_lot(&service.db.pool, 2, "Mitwork", None, &[]).await;
	seed_lot(&service.db.pool, 3, "Mitwork", None, &[]).await;

	let response = service.sources().await.expect("Sources lookup must succeed.");

	assert_eq!(response.sources, vec!["Goszakup", "Mitwork"]);

	test_db.cleanup().await.expect("Failed to clean up test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres with pgvector. Set LOTS_PG_DSN to run."]
async fn sources_falls_back_when_function_is_missing() {
	let Some(test_db) = test_db().await else {
		eprintln!("Skipping sources_falls_back_when_function_is_missing; set LOTS_PG_DSN to run.");
		return;
	};
	let service = build_service(test_db.dsn()).await;

	seed_lot(&service.db.pool, 1, "Goszakup", None, &[]).await;

	sqlx::query("DROP FUNCTION get_distinct_etps_final()")
		.execute(&service.db.pool)
		.await
		.expect("Failed to drop the distinct ETP function.");

	let response = service.sources().await.expect("Sources lookup must succeed.");

	assert_eq!(response.sources, vec!["Goszakup"]);

	test_db.cleanup().await.expect("Failed to clean up test database.");
}
