use std::fmt::{self, Display, Formatter};

/// Wrapper around a type to indicate that it can be negated. The planning
/// graph uses [`Negatable<Fluent>`](crate::search::Fluent) as the
/// level-independent identity of a literal node: two nodes are the same
/// literal iff fluent and polarity match, regardless of which level they
/// were created at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Negatable<T> {
    Positive(T),
    Negative(T),
}

impl<T> Negatable<T> {
    pub fn new(negated: bool, value: T) -> Self {
        if negated {
            Self::Negative(value)
        } else {
            Self::Positive(value)
        }
    }

    #[inline(always)]
    pub fn is_negated(&self) -> bool {
        match self {
            Self::Positive(_) => false,
            Self::Negative(_) => true,
        }
    }

    #[inline(always)]
    pub fn is_positive(&self) -> bool {
        !self.is_negated()
    }

    #[inline(always)]
    pub fn underlying(&self) -> &T {
        match self {
            Self::Positive(value) => value,
            Self::Negative(value) => value,
        }
    }

    /// The same value with the opposite polarity.
    pub fn negated(&self) -> Self
    where
        T: Clone,
    {
        match self {
            Self::Positive(value) => Self::Negative(value.clone()),
            Self::Negative(value) => Self::Positive(value.clone()),
        }
    }
}

impl<T> From<T> for Negatable<T> {
    fn from(value: T) -> Self {
        Self::Positive(value)
    }
}

impl<T: Display> Display for Negatable<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Positive(value) => write!(f, "{value}"),
            Self::Negative(value) => write!(f, "~{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity() {
        let positive = Negatable::new(false, "Have(Cake)");
        let negative = positive.negated();
        assert!(positive.is_positive());
        assert!(negative.is_negated());
        assert_eq!(negative.negated(), positive);
        assert_eq!(negative.to_string(), "~Have(Cake)");
    }
}
