//! Integration tests for the rating dual write.
//!
//! Exercises `RatingRepo::rate` against a real database:
//! - First ratings grow the aggregate
//! - Revisions replace the previous score without growing the count
//! - Missing projects leave no trace
//! - Concurrent raters of one project serialize on the row lock

use showcase_core::rating::{RatingAggregate, Score};
use showcase_db::models::project::CreateProject;
use showcase_db::repositories::{ProjectRepo, RatingRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(github: &str, contact: &str) -> CreateProject {
    CreateProject {
        submitter_name: "Ann Lee".to_string(),
        contact_no: contact.to_string(),
        title: "Campus Navigator".to_string(),
        description: "Indoor routing for the engineering block".to_string(),
        domain: "Web Development".to_string(),
        github_username: github.to_string(),
        github_repo_link: format!("https://github.com/{github}/navigator"),
        deployed_link: None,
        linkedin_post: None,
        preview_image_id: None,
        tech_stack: vec!["Rust".to_string()],
    }
}

fn score(raw: i32) -> Score {
    Score::new(raw).unwrap()
}

async fn rating_rows(pool: &PgPool, project_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM ratings WHERE project_id = $1")
        .bind(project_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn first_ratings_accumulate(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("ann", "555-0100"))
        .await
        .unwrap();

    RatingRepo::rate(&pool, project.id, "bob", score(5)).await.unwrap();
    RatingRepo::rate(&pool, project.id, "cat", score(4)).await.unwrap();
    let aggregate = RatingRepo::rate(&pool, project.id, "dan", score(4))
        .await
        .unwrap()
        .expect("project exists");

    assert_eq!(aggregate.count, 3);
    assert_eq!(aggregate.total, 13);
    assert_eq!(aggregate.average, 4.3);

    let stored = ProjectRepo::find_by_id(&pool, project.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.rating_aggregate(), aggregate);
    assert_eq!(rating_rows(&pool, project.id).await, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn revision_replaces_previous_score(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("ann", "555-0100"))
        .await
        .unwrap();

    RatingRepo::rate(&pool, project.id, "bob", score(5)).await.unwrap();
    let aggregate = RatingRepo::rate(&pool, project.id, "bob", score(2))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        aggregate,
        RatingAggregate {
            count: 1,
            total: 2,
            average: 2.0,
        }
    );
    assert_eq!(rating_rows(&pool, project.id).await, 1);
    assert_eq!(
        RatingRepo::find_score(&pool, project.id, "bob").await.unwrap(),
        Some(2)
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rating_missing_project_returns_none(pool: PgPool) {
    let result = RatingRepo::rate(&pool, 999_999, "bob", score(3)).await.unwrap();
    assert!(result.is_none());

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ratings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unrated_score_lookup_is_none(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("ann", "555-0100"))
        .await
        .unwrap();
    assert_eq!(
        RatingRepo::find_score(&pool, project.id, "nobody").await.unwrap(),
        None
    );
    assert!(RatingRepo::list_by_project(&pool, project.id)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_raters_keep_aggregate_consistent(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("ann", "555-0100"))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for (i, raw) in [1, 2, 3, 4, 5, 5, 4, 3].into_iter().enumerate() {
        let pool = pool.clone();
        let rater = format!("rater{i}");
        handles.push(tokio::spawn(async move {
            RatingRepo::rate(&pool, project.id, &rater, Score::new(raw).unwrap())
                .await
                .unwrap()
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let stored = ProjectRepo::find_by_id(&pool, project.id)
        .await
        .unwrap()
        .unwrap();
    let aggregate = stored.rating_aggregate();
    assert_eq!(aggregate.count, 8);
    assert_eq!(aggregate.total, 27);
    assert_eq!(aggregate.average, 3.4);
    assert!(aggregate.is_consistent());
    assert_eq!(rating_rows(&pool, project.id).await, 8);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ratings_list_includes_every_rater(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("ann", "555-0100"))
        .await
        .unwrap();
    RatingRepo::rate(&pool, project.id, "bob", score(3)).await.unwrap();
    RatingRepo::rate(&pool, project.id, "cat", score(5)).await.unwrap();

    let ratings = RatingRepo::list_by_project(&pool, project.id).await.unwrap();
    let mut raters: Vec<_> = ratings.iter().map(|r| r.rater_github.as_str()).collect();
    raters.sort_unstable();
    assert_eq!(raters, ["bob", "cat"]);
}
