use crate::db::Database;
use crate::error::{DbError, Result};
use crate::models::{Friend, GeneratedId, NewFriend};

/// Records written by [`initialize_store`] after the table is emptied
pub const SEED_FRIENDS: [(&str, Option<&str>); 3] = [
    ("Rasmus", Some("Raz")),
    ("Pelle", None),
    ("Kiwi", Some("Pipowitch")),
];

/// Creates the friends table if needed, empties it and writes the seed set.
///
/// Destructive: every existing row is lost. The statements are not wrapped
/// in a transaction, so a failure part way leaves whatever already ran.
pub async fn initialize_store(db: &Database) -> Result<()> {
    let mut conn = db.acquire().await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS friends (
            id serial NOT NULL,
            name text NOT NULL,
            nick text,
            PRIMARY KEY (id)
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query("TRUNCATE friends").execute(&mut *conn).await?;

    for (name, nick) in SEED_FRIENDS {
        sqlx::query("INSERT INTO friends (name, nick) VALUES ($1, $2)")
            .bind(name)
            .bind(nick)
            .execute(&mut *conn)
            .await?;
    }

    db.release(conn);
    tracing::info!(seeded = SEED_FRIENDS.len(), "Friends store initialized");

    Ok(())
}

/// Returns every friend ordered by name
pub async fn list_all_friends(db: &Database) -> Result<Vec<Friend>> {
    let mut conn = db.acquire().await?;

    let friends = sqlx::query_as::<_, Friend>(
        r#"
        SELECT id, name, nick FROM friends ORDER BY name
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    db.release(conn);
    tracing::debug!(count = friends.len(), "Listed friends");

    Ok(friends)
}

/// Inserts one friend and returns it with the id the store generated.
///
/// The returned record is built from the arguments; the row is not read back.
pub async fn insert_friend(db: &Database, name: &str, nick: Option<&str>) -> Result<Friend> {
    let new_friend = NewFriend::new(name, nick);
    let mut conn = db.acquire().await?;

    let generated = sqlx::query_as::<_, GeneratedId>(
        r#"
        INSERT INTO friends (name, nick)
        VALUES ($1, $2)
        RETURNING id
        "#,
    )
    .bind(&new_friend.name)
    .bind(&new_friend.nick)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(DbError::InsertFailed)?;

    db.release(conn);
    tracing::info!(id = generated.id, name = %new_friend.name, "Friend created");

    Ok(new_friend.into_friend(generated))
}
