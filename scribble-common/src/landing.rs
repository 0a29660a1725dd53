//! Decides where a visitor lands based on whether a session token is held.
//!
//! Only the presence of the token matters; it is never verified here.

use std::fmt::{Display, Formatter};

/// Anything that can hand out the locally stored session token.
pub trait TokenSource {
    fn token(&self) -> Option<&str>;
}

impl TokenSource for Option<String> {
    fn token(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl TokenSource for Option<&str> {
    fn token(&self) -> Option<&str> {
        *self
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum LandingTarget {
    Blogs,
    Signin,
}

impl LandingTarget {
    /// Reads the token once. An empty token counts as absent.
    #[must_use]
    pub fn resolve(source: &impl TokenSource) -> Self {
        match source.token() {
            Some(token) if !token.is_empty() => LandingTarget::Blogs,
            _ => LandingTarget::Signin,
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            LandingTarget::Blogs => "/blogs",
            LandingTarget::Signin => "/signin",
        }
    }
}

impl Display for LandingTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use crate::landing::LandingTarget;

    #[test]
    fn token_present() {
        assert_eq!(LandingTarget::resolve(&Some("abc")), LandingTarget::Blogs);
        assert_eq!(LandingTarget::Blogs.path(), "/blogs");
    }

    #[test]
    fn token_absent() {
        assert_eq!(LandingTarget::resolve(&None::<String>), LandingTarget::Signin);
        assert_eq!(LandingTarget::resolve(&Some("")), LandingTarget::Signin);
        assert_eq!(LandingTarget::Signin.path(), "/signin");
    }

    #[test]
    fn repeated_resolution_is_stable() {
        let stored = Some("abc".to_owned());
        let first = LandingTarget::resolve(&stored);

        for _ in 0..3 {
            assert_eq!(LandingTarget::resolve(&stored), first);
        }
        assert_eq!(LandingTarget::resolve(&None::<&str>), LandingTarget::Signin);
    }
}
