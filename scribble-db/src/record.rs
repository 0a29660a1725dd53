use scribble_common::model::{ModelValidationError, post::Post, user::UserId};
use sqlx::FromRow;

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, FromRow)]
pub(crate) struct PostRecord {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub published: bool,
    #[sqlx(rename = "authorId")]
    pub author_id: String,
}

impl TryFrom<PostRecord> for Post {
    type Error = ModelValidationError;

    fn try_from(value: PostRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            title: value.title,
            content: value.content,
            published: value.published,
            author_id: UserId::new(value.author_id)?,
        })
    }
}
