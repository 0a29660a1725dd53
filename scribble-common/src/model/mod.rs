pub mod auth;
pub mod post;
pub mod user;

use crate::model::user::InvalidUserIdError;
use serde::{Deserialize, Serialize};
use std::{
    fmt::Display,
    marker::PhantomData,
    num::ParseIntError,
    str::FromStr,
};
use thiserror::Error;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Error)]
pub enum ModelValidationError {
    #[error(transparent)]
    UserId(#[from] InvalidUserIdError),
}

/// Database-assigned integer identifier, tagged with the kind of object it
/// identifies so post ids cannot be mixed up with other ids.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Id<Marker>(i32, #[serde(skip)] PhantomData<Marker>);

impl<Marker> Id<Marker> {
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self(id, PhantomData)
    }

    #[must_use]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl<Marker> Display for Id<Marker> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<Marker> FromStr for Id<Marker> {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        i32::from_str(s).map(Self::new)
    }
}

impl<Marker> From<i32> for Id<Marker> {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl<Marker> From<Id<Marker>> for i32 {
    fn from(value: Id<Marker>) -> Self {
        value.get()
    }
}
