use serde_json::Value;

/// The outcome of resolving a single field.
///
/// `Absent` means "no value was found, let the destination default apply".
/// `Present(Value::Null)` is a real value and is written into the payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Resolved<T = Value> {
    Present(T),
    #[default]
    Absent,
}

impl<T> Resolved<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Resolved::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Resolved::Absent)
    }

    /// Converts into an `Option`.
    pub fn present(self) -> Option<T> {
        match self {
            Resolved::Present(value) => Some(value),
            Resolved::Absent => None,
        }
    }

    pub fn as_ref(&self) -> Resolved<&T> {
        match self {
            Resolved::Present(value) => Resolved::Present(value),
            Resolved::Absent => Resolved::Absent,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Resolved<U> {
        match self {
            Resolved::Present(value) => Resolved::Present(f(value)),
            Resolved::Absent => Resolved::Absent,
        }
    }

    /// Returns `self` if present, otherwise `other`.
    pub fn or(self, other: Resolved<T>) -> Resolved<T> {
        match self {
            Resolved::Present(_) => self,
            Resolved::Absent => other,
        }
    }
}

impl<T: Clone> Resolved<&T> {
    pub fn cloned(self) -> Resolved<T> {
        self.map(Clone::clone)
    }
}

impl<T> From<Option<T>> for Resolved<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Resolved::Present(value),
            None => Resolved::Absent,
        }
    }
}
