use super::{build_service, request, seed_chunk, seed_lot, stub_vector, test_db, with_similarity};

#[tokio::test]
#[ignore = "Requires external Postgres with pgvector. Set LOTS_PG_DSN to run."]
async fn larger_candidate_pool_never_loses_filtered_results() {
	let Some(test_db) = test_db().await else {
		eprintln!(
			"Skipping larger_candidate_pool_never_loses_filtered_results; set LOTS_PG_DSN to run."
		);
		return;
	};
	let service = build_service(test_db.dsn()).await;
	let query_vec = stub_vector("экскаватор");

	// A flood of closer matches on another marketplace fills a small
	// candidate pool before the filter is applied.
	for lot_id in 1..=20 {
		seed_lot(&service.db.pool, lot_id, "Noise", None, &[]).await;
		seed_chunk(&service.db.pool, lot_id, "экскаватор гусеничный", &query_vec).await;
	}

	seed_lot(&service.db.pool, 21, "Rare", None, &[]).await;
	seed_chunk(&service.db.pool, 21, "экскаватор колесный", &with_similarity(&query_vec, 0.9))
		.await;

	let mut small_pool = request("экскаватор");

	small_pool.etp_filter = Some(vec!["Rare".to_string()]);
	small_pool.candidate_count = Some(5);

	let small = service
		.search(small_pool)
		.await
		.expect("Search against the seeded store must succeed.");

	let mut large_pool = request("экскаватор");

	large_pool.etp_filter = Some(vec!["Rare".to_string()]);
	large_pool.candidate_count = Some(100);

	let large = service
		.search(large_pool)
		.await
		.expect("Search against the seeded store must succeed.");

	assert!(large.items.len() >= small.items.len());
	assert_eq!(small.items.len(), 0);
	assert_eq!(large.items.len(), 1);
	assert_eq!(large.items[0].etp.as_deref(), Some("Rare"));

	test_db.cleanup().await.expect("Failed to clean up test database.");
}
