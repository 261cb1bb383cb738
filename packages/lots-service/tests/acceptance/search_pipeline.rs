use super::{build_service, request, seed_chunk, seed_lot, stub_vector, test_db, with_similarity};

#[tokio::test]
#[ignore = "Requires external Postgres with pgvector. Set LOTS_PG_DSN to run."]
async fn search_returns_thresholded_ordered_lots() {
	let Some(test_db) = test_db().await else {
		eprintln!("Skipping search_returns_thresholded_ordered_lots; set LOTS_PG_DSN to run.");
		return;
	};
	let service = build_service(test_db.dsn()).await;
	let query_vec = stub_vector("бензин аи 92");

	seed_lot(&service.db.pool, 1, "EtpA", None, &[]).await;
	seed_chunk(&service.db.pool, 1, "бензин аи 92", &query_vec).await;
	seed_lot(&service.db.pool, 2, "EtpA", None, &[]).await;
	seed_chunk(&service.db.pool, 2, "бензин аи 95", &with_similarity(&query_vec, 0.8)).await;
	seed_lot(&service.db.pool, 3, "EtpB", None, &[]).await;
	seed_chunk(&service.db.pool, 3, "дизельное топливо", &with_similarity(&query_vec, 0.6)).await;
	seed_lot(&service.db.pool, 4, "EtpB", None, &[]).await;
	seed_chunk(&service.db.pool, 4, "шпалы железобетонные", &with_similarity(&query_vec, 0.0))
		.await;

	let response = service
		.search(request("бензин аи 92"))
		.await
		.expect("Search against the seeded store must succeed.");

	assert_eq!(response.items.len(), 3);
	assert!(response.items.iter().all(|item| item.similarity_score >= 0.5));

	for pair in response.items.windows(2) {
		assert!(pair[0].similarity_score >= pair[1].similarity_score);
	}

	assert!((response.items[0].similarity_score - 1.0).abs() < 1e-3);

	let mut limited = request("бензин аи 92");

	limited.limit = Some(2);

	let response = service
		.search(limited)
		.await
		.expect("Search against the seeded store must succeed.");

	assert_eq!(response.items.len(), 2);

	test_db.cleanup().await.expect("Failed to clean up test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres with pgvector. Set LOTS_PG_DSN to run."]
async fn source_filter_restricts_results() {
	let Some(test_db) = test_db().await else {
		eprintln!("Skipping source_filter_restricts_results; set LOTS_PG_DSN to run.");
		return;
	};
	let service = build_service(test_db.dsn()).await;
	let query_vec = stub_vector("электрод");

	seed_lot(&service.db.pool, 1, "EtpA", None, &[]).await;
	seed_chunk(&service.db.pool, 1, "электрод сварочный", &query_vec).await;
	seed_lot(&service.db.pool, 2, "EtpB", None, &[]).await;
	seed_chunk(&service.db.pool, 2, "электрод графитовый", &with_similarity(&query_vec, 0.9))
		.await;

	let mut filtered = request("электрод");

	filtered.etp_filter = Some(vec!["EtpA".to_string()]);

	let response = service
		.search(filtered)
		.await
		.expect("Search against the seeded store must succeed.");

	assert_eq!(response.items.len(), 1);
	assert_eq!(response.items[0].etp.as_deref(), Some("EtpA"));

	test_db.cleanup().await.expect("Failed to clean up test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres with pgvector. Set LOTS_PG_DSN to run."]
async fn one_result_per_lot_keeps_best_chunk() {
	let Some(test_db) = test_db().await else {
		eprintln!("Skipping one_result_per_lot_keeps_best_chunk; set LOTS_PG_DSN to run.");
		return;
	};
	let service = build_service(test_db.dsn()).await;
	let query_vec = stub_vector("картридж");

	seed_lot(&service.db.pool, 1, "EtpA", None, &[]).await;
	seed_chunk(&service.db.pool, 1, "картридж лазерный", &query_vec).await;
	seed_chunk(&service.db.pool, 1, "бумага офисная", &with_similarity(&query_vec, 0.6)).await;

	let response = service
		.search(request("картридж"))
		.await
		.expect("Search against the seeded store must succeed.");

	assert_eq!(response.items.len(), 1);
	assert_eq!(response.items[0].best_chunk_text.as_deref(), Some("картридж лазерный"));
	assert!((response.items[0].similarity_score - 1.0).abs() < 1e-3);

	test_db.cleanup().await.expect("Failed to clean up test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres with pgvector. Set LOTS_PG_DSN to run."]
async fn participants_are_shaped_winner_first() {
	let Some(test_db) = test_db().await else {
		eprintln!("Skipping participants_are_shaped_winner_first; set LOTS_PG_DSN to run.");
		return;
	};
	let service = build_service(test_db.dsn()).await;
	let query_vec = stub_vector("автобус");

	seed_lot(
		&service.db.pool,
		1,
		"EtpA",
		Some("ТОО Акме"),
		&[Some("ТОО Акме"), Some("-"), Some("ТОО Глобекс"), Some("NaN")],
	)
	.await;
	seed_chunk(&service.db.pool, 1, "автобус городской", &query_vec).await;
	seed_lot(&service.db.pool, 2, "EtpA", Some("NaN"), &[Some("ТОО Глобекс")]).await;
	seed_chunk(&service.db.pool, 2, "автобус междугородний", &with_similarity(&query_vec, 0.9))
		.await;

	let response = service
		.search(request("автобус"))
		.await
		.expect("Search against the seeded store must succeed.");

	assert_eq!(response.items.len(), 2);
	assert_eq!(response.items[0].winner.as_deref(), Some("ТОО Акме"));
	assert_eq!(response.items[0].participants, vec!["ТОО Акме", "ТОО Глобекс"]);
	assert_eq!(response.items[1].winner, None);
	assert_eq!(response.items[1].participants, vec!["ТОО Глобекс"]);

	test_db.cleanup().await.expect("Failed to clean up test database.");
}
