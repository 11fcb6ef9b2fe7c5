use serde::{Deserialize, Serialize};
use std::{
    borrow::Borrow,
    fmt::{Debug, Display},
    ops::{Deref, DerefMut},
};

/// Owns a separately allocated `T`.
///
/// A [`Sequence`](super::Sequence) stores its elements through this handle, so
/// [`Number`](super::Number) gets a finite size even though it contains itself.
/// The handle dereferences to the inner value and is otherwise invisible to
/// dispatch.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Recursive<T>(Box<T>);

impl<T> Recursive<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        return Self(Box::new(value));
    }

    #[inline]
    pub fn as_inner(&self) -> &T {
        return &self.0;
    }

    #[inline]
    pub fn as_inner_mut(&mut self) -> &mut T {
        return &mut self.0;
    }

    #[inline]
    pub fn into_inner(self) -> T {
        return *self.0;
    }

    /// Swaps the inner value, returning the previous one.
    #[inline]
    pub fn replace(&mut self, value: T) -> T {
        return std::mem::replace(&mut self.0, value);
    }
}

impl<T> Deref for Recursive<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Recursive<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> AsRef<T> for Recursive<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> Borrow<T> for Recursive<T> {
    #[inline]
    fn borrow(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Recursive<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Debug> Debug for Recursive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl<T: Display> Display for Recursive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T: Serialize> Serialize for Recursive<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.deref().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Recursive<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}
