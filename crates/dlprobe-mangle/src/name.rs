//! Scoped names for exported declarations.
//!
//! A scoped name is a non-empty path such as `my::ns::C::g_int_int`: zero
//! or more enclosing scope segments (namespaces and/or a class name) plus
//! the declaration's own name. The decorated form lists the scope
//! innermost-first, so scope order matters.

use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;

/// Inline up to four scope segments; deeper nesting spills to the heap.
type ScopeVec = SmallVec<[String; 4]>;

/// A declaration name with its enclosing scope path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScopedName {
    /// Enclosing scope segments, outermost first (can be empty).
    scope: ScopeVec,
    /// The declaration's own name (always present).
    name: String,
}

impl ScopedName {
    pub fn new(
        scope: impl IntoIterator<Item = impl Into<String>>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            scope: scope.into_iter().map(Into::into).collect(),
            name: name.into(),
        }
    }

    /// A name with no enclosing scope.
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            scope: SmallVec::new(),
            name: name.into(),
        }
    }

    /// Parse a `::`-separated path. Returns `None` for an empty input.
    pub fn parse(path: &str) -> Option<Self> {
        let mut segments: Vec<&str> = path.split("::").filter(|s| !s.is_empty()).collect();
        let name = segments.pop()?;
        Some(Self::new(segments, name))
    }

    /// A member of this name, treating `self` as the enclosing scope.
    ///
    /// `ScopedName::parse("my::ns::C").member("g_int_int")` is
    /// `my::ns::C::g_int_int`.
    pub fn member(&self, name: impl Into<String>) -> Self {
        let mut scope = self.scope.clone();
        scope.push(self.name.clone());
        Self {
            scope,
            name: name.into(),
        }
    }

    /// Enclosing scope segments, outermost first.
    pub fn scope(&self) -> &[String] {
        &self.scope
    }

    /// The declaration's own name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `name@Inner@Outer` fragment of the decorated form.
    pub fn decorated_fragment(&self) -> String {
        let mut out = self.name.clone();
        for segment in self.scope.iter().rev() {
            out.push('@');
            out.push_str(segment);
        }
        out
    }
}

impl fmt::Display for ScopedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.scope {
            write!(f, "{segment}::")?;
        }
        write!(f, "{}", self.name)
    }
}

impl Serialize for ScopedName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
