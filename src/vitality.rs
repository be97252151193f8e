/// The two-valued life state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vitality {
    Alive,

    #[default]
    Dead,
}

impl Vitality {
    /// The state a cell takes when nothing has brought it to life.
    pub const QUIESCENT: Self = Self::Dead;

    #[inline]
    pub const fn from_bool(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }

    #[inline]
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

impl From<bool> for Vitality {
    #[inline]
    fn from(alive: bool) -> Self {
        Self::from_bool(alive)
    }
}

impl From<Vitality> for bool {
    #[inline]
    fn from(value: Vitality) -> Self {
        value.is_alive()
    }
}

/// A health type the transition engine can read and produce.
///
/// The engine only needs to know whether a value counts as alive, and how to
/// build the alive or dead value of the same type.
pub trait Health: Copy + Eq {
    fn is_alive(self) -> bool;
    fn from_alive(alive: bool) -> Self;
}

impl Health for Vitality {
    #[inline]
    fn is_alive(self) -> bool {
        Vitality::is_alive(self)
    }
    #[inline]
    fn from_alive(alive: bool) -> Self {
        Self::from_bool(alive)
    }
}

impl Health for bool {
    #[inline]
    fn is_alive(self) -> bool {
        self
    }
    #[inline]
    fn from_alive(alive: bool) -> Self {
        alive
    }
}

/// Anything that carries a health value, such as a neighbor in a neighbor
/// collection.
pub trait Living {
    type Health: Health;

    fn health(&self) -> Self::Health;
}

impl Living for Vitality {
    type Health = Self;

    #[inline]
    fn health(&self) -> Self {
        *self
    }
}

impl Living for bool {
    type Health = Self;

    #[inline]
    fn health(&self) -> Self {
        *self
    }
}

impl<T: Living + ?Sized> Living for &T {
    type Health = T::Health;

    #[inline]
    fn health(&self) -> Self::Health {
        (**self).health()
    }
}
