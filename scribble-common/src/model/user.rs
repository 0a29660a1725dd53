use serde::{
    Deserialize, Deserializer, Serialize,
    de::{Error, Unexpected},
};
use std::fmt::Display;
use thiserror::Error;

/// Identity of a user as issued by the external identity service.
///
/// Users are not stored here; the id is only carried around as the author of
/// posts and the subject of auth tokens.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Error)]
#[error("The user id is invalid: {0:?}")]
pub struct InvalidUserIdError(String);

impl UserId {
    pub fn new(id: String) -> Result<Self, InvalidUserIdError> {
        if id.is_empty() {
            Err(InvalidUserIdError(id))
        } else {
            Ok(UserId(id))
        }
    }

    #[must_use]
    pub fn get(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let inner = String::deserialize(deserializer)?;
        UserId::new(inner).map_err(|err| Error::invalid_value(Unexpected::Str(&err.0), &"UserId"))
    }
}
