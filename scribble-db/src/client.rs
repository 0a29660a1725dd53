use crate::{
    record::PostRecord,
    store::{PostStore, Result},
};
use async_trait::async_trait;
use scribble_common::model::{
    Id,
    post::{CreatePost, Post, PostMarker, UpdatePost},
    user::UserId,
};
use sqlx::{PgPool, postgres::PgPoolOptions, query, query_as, query_scalar};
use tracing::debug;

/// Post store backed by the Postgres `"Post"` table.
#[derive(Clone, Debug)]
pub struct DbClient {
    pool: PgPool,
}

impl DbClient {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        debug!(max_connections, "Connected to database");

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl PostStore for DbClient {
    async fn create_post(&self, post: &CreatePost) -> Result<Id<PostMarker>> {
        let id: i32 = query_scalar(
            r#"
            INSERT INTO "Post" ("title", "content", "authorId")
            VALUES ($1, $2, $3)
            RETURNING "id"
            "#,
        )
        .bind(&post.content.title)
        .bind(&post.content.content)
        .bind(post.author.get())
        .fetch_one(&self.pool)
        .await?;

        Ok(id.into())
    }

    async fn update_post(&self, update: &UpdatePost, author: &UserId) -> Result<u64> {
        let result = query(
            r#"
            UPDATE "Post"
            SET "title" = $1, "content" = $2
            WHERE "id" = $3 AND "authorId" = $4
            "#,
        )
        .bind(&update.content.title)
        .bind(&update.content.content)
        .bind(update.id.get())
        .bind(author.get())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn fetch_post(&self, post_id: Id<PostMarker>) -> Result<Option<Post>> {
        let record: Option<PostRecord> = query_as(
            r#"
            SELECT "id", "title", "content", "published", "authorId"
            FROM "Post"
            WHERE "id" = $1
            "#,
        )
        .bind(post_id.get())
        .fetch_optional(&self.pool)
        .await?;

        let post = record.map(Post::try_from).transpose()?;
        Ok(post)
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        let records: Vec<PostRecord> = query_as(
            r#"
            SELECT "id", "title", "content", "published", "authorId"
            FROM "Post"
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let posts = records
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(posts)
    }
}
