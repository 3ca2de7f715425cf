//! Database module for song persistence.
//!
//! Uses SQLx with SQLite for lightweight, embedded database storage.
//! Provides async operations for:
//! - Song insert, lookup, update and delete
//! - Filtered, paginated listings built from a [`SongQuery`]
//!
//! [`SqliteSongStore`] wraps a pool and implements [`SongStore`] on top of
//! the free functions below.
//!
//! # Example
//!
//! ```ignore
//! use song_library::db::{init_db, get_all_songs, DEFAULT_MAX_CONNECTIONS};
//!
//! let pool = init_db("sqlite:song_library.db", DEFAULT_MAX_CONNECTIONS).await?;
//! let songs = get_all_songs(&pool).await?;
//! ```

use async_trait::async_trait;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite};

use crate::library::query::{Operator, SongQuery, fold};
use crate::library::{SongStore, StoreError};
use crate::model::Song;

/// Default database filename.
pub const DEFAULT_DB_NAME: &str = "song_library.db";

/// Default connection pool size.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const SONG_COLUMNS: &str = "id, group_name, song_name, release_date, text, link";

/// Build a SQLite database URL from an optional path.
///
/// If no path is provided, uses [`DEFAULT_DB_NAME`] in the current directory.
pub fn db_url(path: Option<&std::path::Path>) -> String {
    match path {
        Some(p) => format!("sqlite:{}", p.display()),
        None => format!("sqlite:{}", DEFAULT_DB_NAME),
    }
}

/// Initialize the database connection pool and run migrations.
///
/// Creates the database file if it doesn't exist, establishes a connection
/// pool with up to `max_connections` connections, runs all pending
/// migrations and refreshes the folded name columns.
///
/// # Errors
///
/// Returns an error if:
/// - Database creation fails
/// - Connection cannot be established
/// - Migration fails
pub async fn init_db(db_url: &str, max_connections: u32) -> Result<SqlitePool, StoreError> {
    if !Sqlite::database_exists(db_url).await.unwrap_or(false) {
        tracing::info!(url = db_url, "Creating database");
        Sqlite::create_database(db_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect(db_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let refolded = refold_names(&pool).await?;
    if refolded > 0 {
        tracing::info!(rows = refolded, "Refreshed folded song names");
    }
    tracing::debug!(url = db_url, max_connections, "Database ready");

    Ok(pool)
}

/// Rewrite folded name columns that differ from their Unicode lowercase.
///
/// Only rows written outside [`insert_song`]/[`update_song`] (e.g. the
/// migration backfill, which can fold ASCII only) are touched. Returns the
/// number of rows rewritten.
pub async fn refold_names(pool: &SqlitePool) -> sqlx::Result<u64> {
    let rows: Vec<(i64, String, String, String, String)> = sqlx::query_as(
        "SELECT id, group_name, song_name, group_name_folded, song_name_folded FROM songs",
    )
    .fetch_all(pool)
    .await?;

    let mut tx = pool.begin().await?;
    let mut rewritten = 0;
    for (id, group, song, group_folded, song_folded) in rows {
        let (group, song) = (fold(&group), fold(&song));
        if group == group_folded && song == song_folded {
            continue;
        }
        sqlx::query("UPDATE songs SET group_name_folded = ?, song_name_folded = ? WHERE id = ?")
            .bind(group)
            .bind(song)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        rewritten += 1;
    }
    tx.commit().await?;

    Ok(rewritten)
}

/// Insert a song and return its new ID.
///
/// The input `id` is ignored.
pub async fn insert_song(pool: &SqlitePool, song: &Song) -> sqlx::Result<i64> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO songs
            (group_name, song_name, release_date, text, link, group_name_folded, song_name_folded)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&song.group_name)
    .bind(&song.song_name)
    .bind(&song.release_date)
    .bind(&song.text)
    .bind(&song.link)
    .bind(fold(&song.group_name))
    .bind(fold(&song.song_name))
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Get all songs, ascending by ID.
pub async fn get_all_songs(pool: &SqlitePool) -> sqlx::Result<Vec<Song>> {
    sqlx::query_as::<_, Song>(&format!("SELECT {SONG_COLUMNS} FROM songs ORDER BY id ASC"))
        .fetch_all(pool)
        .await
}

/// Run a filtered, paginated listing.
///
/// Every predicate becomes a bound parameter. `Contains` compiles to a
/// `LIKE` over the folded name column with a folded pattern, so matching is
/// case-insensitive beyond ASCII; the value's wildcards are escaped so they
/// match literally.
pub async fn query_songs(pool: &SqlitePool, query: &SongQuery) -> sqlx::Result<Vec<Song>> {
    let mut builder = build_song_query(query);
    builder.build_query_as::<Song>().fetch_all(pool).await
}

fn build_song_query(query: &SongQuery) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::<Sqlite>::new(format!("SELECT {SONG_COLUMNS} FROM songs"));

    for (i, predicate) in query.predicates().iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });
        match predicate.operator {
            Operator::Contains => {
                builder
                    .push(predicate.column.as_sql())
                    .push(" LIKE ")
                    .push_bind(like_pattern(&fold(&predicate.value)))
                    .push(" ESCAPE '\\'");
            }
        }
    }

    builder
        .push(" ORDER BY id ASC LIMIT ")
        .push_bind(i64::from(query.limit()))
        .push(" OFFSET ")
        .push_bind(i64::try_from(query.offset()).unwrap_or(i64::MAX));

    builder
}

/// `%value%` with LIKE metacharacters escaped.
fn like_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Get a song by ID.
pub async fn get_song_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Song>> {
    sqlx::query_as::<_, Song>(&format!("SELECT {SONG_COLUMNS} FROM songs WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Overwrite every column of the song with `song.id`.
///
/// Returns the number of rows affected (0 when the ID does not exist).
pub async fn update_song(pool: &SqlitePool, song: &Song) -> sqlx::Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE songs
        SET group_name = ?, song_name = ?, release_date = ?, text = ?, link = ?,
            group_name_folded = ?, song_name_folded = ?
        WHERE id = ?
        "#,
    )
    .bind(&song.group_name)
    .bind(&song.song_name)
    .bind(&song.release_date)
    .bind(&song.text)
    .bind(&song.link)
    .bind(fold(&song.group_name))
    .bind(fold(&song.song_name))
    .bind(song.id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Delete a song by ID. Returns the number of rows affected.
pub async fn delete_song(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// [`SongStore`] backed by a SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteSongStore {
    pool: SqlitePool,
}

impl SqliteSongStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating and migrating if needed) the database at `db_url`.
    pub async fn connect(db_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        Ok(Self::new(init_db(db_url, max_connections).await?))
    }
}

#[async_trait]
impl SongStore for SqliteSongStore {
    async fn add(&self, song: &Song) -> Result<Song, StoreError> {
        let id = insert_song(&self.pool, song).await?;
        Ok(Song {
            id,
            ..song.clone()
        })
    }

    async fn list_all(&self) -> Result<Vec<Song>, StoreError> {
        Ok(get_all_songs(&self.pool).await?)
    }

    async fn list_filtered(&self, query: &SongQuery) -> Result<Vec<Song>, StoreError> {
        Ok(query_songs(&self.pool, query).await?)
    }

    async fn find(&self, id: i64) -> Result<Option<Song>, StoreError> {
        Ok(get_song_by_id(&self.pool, id).await?)
    }

    async fn update(&self, song: &Song) -> Result<u64, StoreError> {
        Ok(update_song(&self.pool, song).await?)
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        Ok(delete_song(&self.pool, id).await?)
    }
}
