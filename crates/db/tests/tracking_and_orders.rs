//! Repository-level tests for tracking code sequences and repair orders.

use chrono::NaiveDate;
use sqlx::PgPool;

use lapcare_core::tracking::format_tracking_code;
use lapcare_db::models::order::{CreateOrder, OrderFilter, UpdateOrder};
use lapcare_db::repositories::{OrderRepo, TrackingCounterRepo};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_order(phone: &str) -> CreateOrder {
    CreateOrder {
        tracking_code: None,
        customer_name: "Nguyễn Văn An".to_string(),
        customer_phone: phone.to_string(),
        customer_email: None,
        device_type: "laptop".to_string(),
        device_brand: Some("Asus".to_string()),
        device_model: Some("Vivobook 15".to_string()),
        serial_number: None,
        issue_description: "Không lên nguồn".to_string(),
        estimated_cost: Some(350_000),
        estimated_completion_date: None,
        assigned_to: None,
        service_id: None,
    }
}

// ---------------------------------------------------------------------------
// Tracking counter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn counter_starts_at_one_and_increments(pool: PgPool) {
    let d = day(2026, 8, 20);

    assert_eq!(TrackingCounterRepo::next_sequence(&pool, d).await.unwrap(), 1);
    assert_eq!(TrackingCounterRepo::next_sequence(&pool, d).await.unwrap(), 2);
    assert_eq!(TrackingCounterRepo::next_sequence(&pool, d).await.unwrap(), 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn counter_resets_per_day(pool: PgPool) {
    let monday = day(2026, 8, 24);
    let tuesday = day(2026, 8, 25);

    assert_eq!(
        TrackingCounterRepo::next_sequence(&pool, monday).await.unwrap(),
        1
    );
    assert_eq!(
        TrackingCounterRepo::next_sequence(&pool, monday).await.unwrap(),
        2
    );

    // A new day starts its own sequence; the old day is unaffected.
    assert_eq!(
        TrackingCounterRepo::next_sequence(&pool, tuesday).await.unwrap(),
        1
    );
    assert_eq!(
        TrackingCounterRepo::next_sequence(&pool, monday).await.unwrap(),
        3
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn concurrent_claims_never_collide(pool: PgPool) {
    let d = day(2026, 8, 21);

    let mut handles = Vec::new();
    for _ in 0..8 {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            TrackingCounterRepo::next_sequence(&pool, d).await.unwrap()
        }));
    }

    let mut seqs = Vec::new();
    for handle in handles {
        seqs.push(handle.await.unwrap());
    }
    seqs.sort_unstable();
    assert_eq!(seqs, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

// ---------------------------------------------------------------------------
// Repair orders
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_and_lookup_by_code_and_phone(pool: PgPool) {
    let d = day(2026, 8, 20);
    let seq = TrackingCounterRepo::next_sequence(&pool, d).await.unwrap();
    let code = format_tracking_code(d, seq);
    assert_eq!(code, "LPS-20260820-0001");

    let order = OrderRepo::create(&pool, &code, &sample_order("0901111222"))
        .await
        .unwrap();
    assert_eq!(order.status, "pending");
    assert!(order.internal_notes.is_empty());
    assert!(order.completed_at.is_none());

    // Code + matching phone finds it.
    let found = OrderRepo::find_by_tracking_code_and_phone(&pool, &code, "0901111222")
        .await
        .unwrap();
    assert!(found.is_some());

    // Right code, wrong phone: nothing.
    let found = OrderRepo::find_by_tracking_code_and_phone(&pool, &code, "0909999999")
        .await
        .unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_tracking_code_violates_unique_constraint(pool: PgPool) {
    let code = "LPS-20260820-0042";
    OrderRepo::create(&pool, code, &sample_order("0901111222"))
        .await
        .unwrap();

    let err = OrderRepo::create(&pool, code, &sample_order("0903333444"))
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
}

#[sqlx::test(migrations = "./migrations")]
async fn completed_at_stamped_once(pool: PgPool) {
    let order = OrderRepo::create(&pool, "LPS-20260820-0001", &sample_order("0901111222"))
        .await
        .unwrap();

    let completed = OrderRepo::update(
        &pool,
        order.id,
        &UpdateOrder {
            status: Some("completed".to_string()),
            estimated_cost: None,
            final_cost: Some(400_000),
            estimated_completion_date: None,
            assigned_to: None,
            service_id: None,
        },
    )
    .await
    .unwrap()
    .expect("order exists");

    let first_stamp = completed.completed_at.expect("completed_at stamped");

    // A later update does not move the stamp.
    let updated = OrderRepo::update(
        &pool,
        order.id,
        &UpdateOrder {
            status: Some("completed".to_string()),
            estimated_cost: None,
            final_cost: Some(450_000),
            estimated_completion_date: None,
            assigned_to: None,
            service_id: None,
        },
    )
    .await
    .unwrap()
    .expect("order exists");

    assert_eq!(updated.completed_at, Some(first_stamp));
    assert_eq!(updated.final_cost, Some(450_000));
}

#[sqlx::test(migrations = "./migrations")]
async fn notes_are_append_only(pool: PgPool) {
    let order = OrderRepo::create(&pool, "LPS-20260820-0001", &sample_order("0901111222"))
        .await
        .unwrap();

    let after_first = OrderRepo::append_note(&pool, order.id, "Đã tháo máy kiểm tra")
        .await
        .unwrap()
        .expect("order exists");
    assert_eq!(after_first.internal_notes, vec!["Đã tháo máy kiểm tra"]);

    let after_second = OrderRepo::append_note(&pool, order.id, "Chờ linh kiện")
        .await
        .unwrap()
        .expect("order exists");
    assert_eq!(
        after_second.internal_notes,
        vec!["Đã tháo máy kiểm tra", "Chờ linh kiện"]
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn list_filters_by_status(pool: PgPool) {
    let a = OrderRepo::create(&pool, "LPS-20260820-0001", &sample_order("0901111222"))
        .await
        .unwrap();
    OrderRepo::create(&pool, "LPS-20260820-0002", &sample_order("0903333444"))
        .await
        .unwrap();

    OrderRepo::update(
        &pool,
        a.id,
        &UpdateOrder {
            status: Some("in_progress".to_string()),
            estimated_cost: None,
            final_cost: None,
            estimated_completion_date: None,
            assigned_to: None,
            service_id: None,
        },
    )
    .await
    .unwrap();

    let filter = OrderFilter {
        status: Some("in_progress".to_string()),
        assigned_to: None,
        limit: 50,
        offset: 0,
    };
    let in_progress = OrderRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(in_progress.len(), 1);
    assert_eq!(in_progress[0].id, a.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_returns_whether_removed(pool: PgPool) {
    let order = OrderRepo::create(&pool, "LPS-20260820-0001", &sample_order("0901111222"))
        .await
        .unwrap();

    assert!(OrderRepo::delete(&pool, order.id).await.unwrap());
    assert!(!OrderRepo::delete(&pool, order.id).await.unwrap());
    assert!(OrderRepo::find_by_id(&pool, order.id).await.unwrap().is_none());
}
