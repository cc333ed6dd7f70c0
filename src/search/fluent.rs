use internment::Intern;
use smallvec::SmallVec;
use std::fmt::{self, Debug, Display, Formatter};

pub const TYPICAL_NUM_ARGUMENTS: usize = 3;

/// An interned identifier, used for predicate names, action names and ground
/// arguments. Interning makes equality and hashing cheap, which matters in
/// the mutex passes of the planning graph where fluents are compared many
/// times per level.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(Intern<String>);

impl Symbol {
    pub fn new(name: &str) -> Self {
        Self(Intern::new(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// This custom implementation hides the internment details from the user.
impl Debug for Symbol {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:?}", self.0.as_ref())
    }
}

/// Argument tuples are short (three arguments for the largest air cargo
/// schema), so keep them inline.
pub type ArgList = SmallVec<[Symbol; TYPICAL_NUM_ARGUMENTS]>;

/// An atomic, ground propositional literal such as `At(C1, SFO)`. Fluents
/// are immutable values with structural equality; polarity is not part of
/// the fluent itself but of the containing set or
/// [`crate::search::Negatable`] wrapper.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fluent {
    name: Symbol,
    args: ArgList,
}

impl Fluent {
    pub fn new(name: Symbol, args: ArgList) -> Self {
        Self { name, args }
    }

    /// Convenience constructor used by the grounders.
    pub fn ground(name: &str, args: &[Symbol]) -> Self {
        Self {
            name: Symbol::new(name),
            args: args.iter().copied().collect(),
        }
    }

    #[inline(always)]
    pub fn name(&self) -> Symbol {
        self.name
    }

    #[inline(always)]
    pub fn args(&self) -> &[Symbol] {
        &self.args
    }
}

impl Display for Fluent {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{}({})",
            self.name,
            self.args
                .iter()
                .map(|arg| arg.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl Debug for Fluent {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}
