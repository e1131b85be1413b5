//! Contact form field identifiers and per-field storage

use std::ops::{Index, IndexMut};

/// One of the three contact form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// All fields in display order
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Email, Self::Message];

    /// Stable field name, also used as the template parameter key
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Whether the field accepts line breaks
    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }

    /// Position of the field in display order
    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Message => 2,
        }
    }

    /// Field at a display position, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Fixed three-slot record holding one value per contact field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap<T> {
    pub name: T,
    pub email: T,
    pub message: T,
}

impl<T> FieldMap<T> {
    /// Build a map by computing each slot from its field
    pub fn from_fn(mut f: impl FnMut(ContactField) -> T) -> Self {
        Self {
            name: f(ContactField::Name),
            email: f(ContactField::Email),
            message: f(ContactField::Message),
        }
    }

    /// Iterate over `(field, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &T)> {
        ContactField::ALL.into_iter().map(move |field| (field, &self[field]))
    }

    /// Iterate over the values in display order
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.iter().map(|(_, value)| value)
    }
}

impl<T> Index<ContactField> for FieldMap<T> {
    type Output = T;

    fn index(&self, field: ContactField) -> &T {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }
}

impl<T> IndexMut<ContactField> for FieldMap<T> {
    fn index_mut(&mut self, field: ContactField) -> &mut T {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }
}

/// Visual state of a field, driving its border colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDisplay {
    /// Not interacted with yet
    Untouched,
    /// Touched and currently valid
    Valid,
    /// Touched with a validation error
    Invalid,
}

#[cfg(test)]
mod tests {
    use super::*;

    mod contact_field {
        use super::*;

        #[test]
        fn test_names_match_template_keys() {
            assert_eq!(ContactField::Name.name(), "name");
            assert_eq!(ContactField::Email.name(), "email");
            assert_eq!(ContactField::Message.name(), "message");
        }

        #[test]
        fn test_only_message_is_multiline() {
            assert!(!ContactField::Name.is_multiline());
            assert!(!ContactField::Email.is_multiline());
            assert!(ContactField::Message.is_multiline());
        }

        #[test]
        fn test_index_roundtrips_through_from_index() {
            for field in ContactField::ALL {
                assert_eq!(ContactField::from_index(field.index()), Some(field));
            }
            assert_eq!(ContactField::from_index(3), None);
        }
    }

    mod field_map {
        use super::*;

        #[test]
        fn test_default_is_empty_strings() {
            let map: FieldMap<String> = FieldMap::default();
            assert!(map.values().all(|v| v.is_empty()));
        }

        #[test]
        fn test_index_mut_targets_single_slot() {
            let mut map: FieldMap<bool> = FieldMap::default();
            map[ContactField::Email] = true;
            assert!(!map.name);
            assert!(map.email);
            assert!(!map.message);
        }

        #[test]
        fn test_from_fn_and_iter_follow_display_order() {
            let map = FieldMap::from_fn(|f| f.name().to_string());
            let pairs: Vec<_> = map.iter().map(|(f, v)| (f, v.as_str())).collect();
            assert_eq!(
                pairs,
                vec![
                    (ContactField::Name, "name"),
                    (ContactField::Email, "email"),
                    (ContactField::Message, "message"),
                ]
            );
        }
    }
}
