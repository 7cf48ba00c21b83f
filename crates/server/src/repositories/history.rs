use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;

use crate::models::{CreateHistoryEntry, HistoryEntry};

/// Window within which a repeat view refreshes the existing row instead of
/// inserting a new one.
const DEDUP_WINDOW_HOURS: i64 = 24;

/// Common SELECT fields for history queries
const SELECT_HISTORY: &str = r#"
    SELECT
        id, user_id, course_id, title, url, platform,
        price, rating, reviews, thumbnail, timestamp
    FROM course_history
"#;

pub struct HistoryRepository;

impl HistoryRepository {
    /// Record a course view with recency dedup.
    pub async fn record_view(
        pool: &SqlitePool,
        entry: CreateHistoryEntry,
    ) -> Result<(), sqlx::Error> {
        Self::record_view_at(pool, entry, Utc::now()).await
    }

    /// Record a course view as of `now`.
    ///
    /// If the user already viewed this course within the dedup window, the
    /// existing row's timestamp is refreshed in place. The update-or-insert
    /// decision runs inside one transaction so two concurrent views of the
    /// same course cannot both insert.
    pub async fn record_view_at(
        pool: &SqlitePool,
        entry: CreateHistoryEntry,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        let window_start = now - Duration::hours(DEDUP_WINDOW_HOURS);

        let mut tx = pool.begin().await?;

        let refreshed = sqlx::query(
            r#"
            UPDATE course_history SET timestamp = $1
            WHERE user_id = $2 AND course_id = $3 AND timestamp >= $4
            "#,
        )
        .bind(now)
        .bind(&entry.user_id)
        .bind(&entry.course_id)
        .bind(window_start)
        .execute(&mut *tx)
        .await?;

        if refreshed.rows_affected() == 0 {
            sqlx::query(
                r#"
                INSERT INTO course_history
                    (user_id, course_id, title, url, platform, price, rating, reviews, thumbnail, timestamp)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                "#,
            )
            .bind(&entry.user_id)
            .bind(&entry.course_id)
            .bind(&entry.title)
            .bind(&entry.url)
            .bind(&entry.platform)
            .bind(&entry.price)
            .bind(entry.rating)
            .bind(entry.reviews)
            .bind(&entry.thumbnail)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Get one page of a user's history, most recent first, plus the total
    /// row count for pagination.
    pub async fn list(
        pool: &SqlitePool,
        user_id: &str,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<HistoryEntry>, i64), sqlx::Error> {
        let (total,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM course_history WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(pool)
                .await?;

        let query = format!(
            "{} WHERE user_id = $1 ORDER BY timestamp DESC LIMIT $2 OFFSET $3",
            SELECT_HISTORY
        );
        let entries = sqlx::query_as::<_, HistoryEntry>(&query)
            .bind(user_id)
            .bind(page_size)
            .bind((page - 1) * page_size)
            .fetch_all(pool)
            .await?;

        Ok((entries, total))
    }

    /// Delete a user's history, optionally narrowed to one course.
    /// Returns the number of rows deleted.
    pub async fn clear(
        pool: &SqlitePool,
        user_id: &str,
        course_id: Option<&str>,
    ) -> Result<u64, sqlx::Error> {
        let result = match course_id {
            Some(course_id) => {
                sqlx::query("DELETE FROM course_history WHERE user_id = $1 AND course_id = $2")
                    .bind(user_id)
                    .bind(course_id)
                    .execute(pool)
                    .await?
            }
            None => {
                sqlx::query("DELETE FROM course_history WHERE user_id = $1")
                    .bind(user_id)
                    .execute(pool)
                    .await?
            }
        };

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_pool() -> SqlitePool {
        // One connection so the in-memory database is shared by all queries
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("../../migrations").run(&pool).await.unwrap();
        pool
    }

    fn entry(user_id: &str, course_id: &str) -> CreateHistoryEntry {
        CreateHistoryEntry {
            user_id: user_id.to_string(),
            course_id: course_id.to_string(),
            title: format!("Course {}", course_id),
            url: format!("https://example.com/{}", course_id),
            platform: "udemy".to_string(),
            price: None,
            rating: None,
            reviews: None,
            thumbnail: None,
        }
    }

    async fn count(pool: &SqlitePool, user_id: &str) -> i64 {
        let (total,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM course_history WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(pool)
                .await
                .unwrap();
        total
    }

    #[tokio::test]
    async fn repeat_view_within_window_refreshes_the_row() {
        let pool = setup_pool().await;
        let first = Utc::now() - Duration::hours(2);
        let second = Utc::now();

        HistoryRepository::record_view_at(&pool, entry("u1", "c1"), first)
            .await
            .unwrap();
        HistoryRepository::record_view_at(&pool, entry("u1", "c1"), second)
            .await
            .unwrap();

        assert_eq!(count(&pool, "u1").await, 1);

        let (entries, total) = HistoryRepository::list(&pool, "u1", 1, 10).await.unwrap();
        assert_eq!(total, 1);
        assert_eq!(entries[0].timestamp.timestamp_millis(), second.timestamp_millis());
    }

    #[tokio::test]
    async fn view_after_window_inserts_a_new_row() {
        let pool = setup_pool().await;
        let first = Utc::now() - Duration::hours(25);
        let second = Utc::now();

        HistoryRepository::record_view_at(&pool, entry("u1", "c1"), first)
            .await
            .unwrap();
        HistoryRepository::record_view_at(&pool, entry("u1", "c1"), second)
            .await
            .unwrap();

        assert_eq!(count(&pool, "u1").await, 2);
    }

    #[tokio::test]
    async fn list_pages_most_recent_first() {
        let pool = setup_pool().await;
        let base = Utc::now() - Duration::hours(12);

        for i in 0..12 {
            let course_id = format!("c{}", i);
            HistoryRepository::record_view_at(
                &pool,
                entry("u1", &course_id),
                base + Duration::minutes(i),
            )
            .await
            .unwrap();
        }

        let (page_two, total) = HistoryRepository::list(&pool, "u1", 2, 5).await.unwrap();
        assert_eq!(total, 12);
        assert_eq!(page_two.len(), 5);
        // Items 6-10 of the descending feed: c6, c5, c4, c3, c2
        assert_eq!(page_two[0].course_id, "c6");
        assert_eq!(page_two[4].course_id, "c2");
    }

    #[tokio::test]
    async fn clear_deletes_everything_for_the_user() {
        let pool = setup_pool().await;

        HistoryRepository::record_view(&pool, entry("u1", "c1"))
            .await
            .unwrap();
        HistoryRepository::record_view(&pool, entry("u1", "c2"))
            .await
            .unwrap();
        HistoryRepository::record_view(&pool, entry("u2", "c1"))
            .await
            .unwrap();

        let deleted = HistoryRepository::clear(&pool, "u1", None).await.unwrap();
        assert_eq!(deleted, 2);

        let (_, total) = HistoryRepository::list(&pool, "u1", 1, 10).await.unwrap();
        assert_eq!(total, 0);
        assert_eq!(count(&pool, "u2").await, 1);
    }

    #[tokio::test]
    async fn clear_by_course_only_touches_that_course() {
        let pool = setup_pool().await;

        HistoryRepository::record_view(&pool, entry("u1", "c1"))
            .await
            .unwrap();
        HistoryRepository::record_view(&pool, entry("u1", "c2"))
            .await
            .unwrap();

        let deleted = HistoryRepository::clear(&pool, "u1", Some("c1"))
            .await
            .unwrap();
        assert_eq!(deleted, 1);
        assert_eq!(count(&pool, "u1").await, 1);
    }
}
