use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Represents a scalar field in a partial update
///
/// A patch must tell "leave this alone" apart from "set this to the empty
/// string" or "set this to false", so the two states are explicit:
/// - `NoChange`: Field keeps its existing value
/// - `Set(value)`: Field is overwritten with the provided value
///
/// On the wire a missing key or `null` is `NoChange`; any other value is `Set`.
///
/// # Example
///
/// ```
/// use board_model::FieldUpdate;
///
/// let mut title = "Roadmap".to_string();
/// FieldUpdate::Set(String::new()).apply_to(&mut title);
/// assert_eq!(title, "");
///
/// FieldUpdate::NoChange.apply_to(&mut title);
/// assert_eq!(title, "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Do not modify this field (keep existing value)
    NoChange,
    /// Overwrite the field with the provided value
    Set(T),
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::NoChange
    }
}

impl<T> FieldUpdate<T> {
    /// Apply this update to a field
    pub fn apply_to(self, field: &mut T) {
        if let FieldUpdate::Set(value) = self {
            *field = value;
        }
    }

    /// Check if this represents a change (not NoChange)
    pub fn is_change(&self) -> bool {
        !self.is_no_change()
    }

    pub fn is_no_change(&self) -> bool {
        matches!(self, FieldUpdate::NoChange)
    }

    pub fn as_set(&self) -> Option<&T> {
        match self {
            FieldUpdate::Set(value) => Some(value),
            FieldUpdate::NoChange => None,
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    /// Convert Option<T> to FieldUpdate<T>
    /// - Some(value) becomes Set(value)
    /// - None becomes NoChange
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::NoChange,
        }
    }
}

impl<T: Serialize> Serialize for FieldUpdate<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_set().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldUpdate<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(FieldUpdate::from)
    }
}
