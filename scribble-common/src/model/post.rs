use crate::model::{Id, user::UserId};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct PostMarker;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Id<PostMarker>,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub author_id: UserId,
}

/// The user-editable part of a post.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct PostContent {
    pub title: String,
    pub content: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct CreatePost {
    pub author: UserId,
    pub content: PostContent,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct UpdatePost {
    pub id: Id<PostMarker>,
    #[serde(flatten)]
    pub content: PostContent,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct CreatedPost {
    pub id: Id<PostMarker>,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct PostList {
    pub blogs: Vec<Post>,
}

impl Post {
    #[must_use]
    pub fn is_authored_by(&self, user: &UserId) -> bool {
        self.author_id == *user
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{
        Id,
        post::{Post, PostContent, UpdatePost},
        user::UserId,
    };
    use serde_json::json;

    #[test]
    fn post_serializes_author_in_camel_case() {
        let post = Post {
            id: Id::new(3),
            title: "Hello".to_owned(),
            content: "World".to_owned(),
            published: false,
            author_id: UserId::new("12".to_owned()).unwrap(),
        };

        assert_eq!(
            serde_json::to_value(&post).unwrap(),
            json!({
                "id": 3,
                "title": "Hello",
                "content": "World",
                "published": false,
                "authorId": "12",
            })
        );
    }

    #[test]
    fn update_body_is_flat() {
        let update: UpdatePost =
            serde_json::from_value(json!({ "id": 9, "title": "t", "content": "c" })).unwrap();

        assert_eq!(
            update,
            UpdatePost {
                id: Id::new(9),
                content: PostContent {
                    title: "t".to_owned(),
                    content: "c".to_owned(),
                },
            }
        );
    }

    #[test]
    fn bodies_with_wrong_types_are_rejected() {
        assert!(serde_json::from_value::<PostContent>(json!({ "title": 1, "content": "c" })).is_err());
        assert!(serde_json::from_value::<PostContent>(json!({ "title": "t" })).is_err());
        assert!(
            serde_json::from_value::<UpdatePost>(json!({ "id": "9", "title": "t", "content": "c" }))
                .is_err()
        );
    }
}
