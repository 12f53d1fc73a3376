//! Personal-Info Set
//!
//! Contact fields keyed by identity. At most one field per key; iteration
//! follows insertion order.

use std::fmt;
use std::marker::PhantomData;

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::error::ModelError;

/// A contact/identity datum with a derived uniqueness key.
pub trait InfoField: Clone + fmt::Debug + PartialEq {
    /// The field kind, e.g. `"email"` or `"gitlab"`.
    fn identity_key(&self) -> &str;
}

/// Insertion-ordered, key-unique collection of personal info fields.
///
/// A second field sharing an identity key is rejected with
/// [`ModelError::DuplicateIdentity`]; the first one stays in place.
#[derive(Debug, Clone)]
pub struct PersonalInfoSet<F> {
    fields: IndexMap<String, F>,
}

// Order-sensitive, unlike `IndexMap`'s own equality.
impl<F: PartialEq> PartialEq for PersonalInfoSet<F> {
    fn eq(&self, other: &Self) -> bool {
        self.fields.iter().eq(other.fields.iter())
    }
}

impl<F: Eq> Eq for PersonalInfoSet<F> {}

impl<F: InfoField> PersonalInfoSet<F> {
    pub fn new() -> Self {
        Self { fields: IndexMap::new() }
    }

    pub fn try_from_fields<I>(fields: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = F>,
    {
        let mut set = Self::new();
        for field in fields {
            set.insert(field)?;
        }
        Ok(set)
    }

    pub fn insert(&mut self, field: F) -> Result<(), ModelError> {
        match self.fields.entry(field.identity_key().to_string()) {
            Entry::Occupied(entry) => Err(ModelError::DuplicateIdentity { key: entry.key().clone() }),
            Entry::Vacant(entry) => {
                entry.insert(field);
                Ok(())
            }
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, field: F) -> Result<Self, ModelError> {
        self.insert(field)?;
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&F> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &F> + '_ {
        self.fields.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<F: InfoField> Default for PersonalInfoSet<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: InfoField + Serialize> Serialize for PersonalInfoSet<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.fields.len()))?;
        for field in self.fields.values() {
            seq.serialize_element(field)?;
        }
        seq.end()
    }
}

impl<'de, F> Deserialize<'de> for PersonalInfoSet<F>
where
    F: InfoField + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SetVisitor<F>(PhantomData<F>);

        impl<'de, F> Visitor<'de> for SetVisitor<F>
        where
            F: InfoField + Deserialize<'de>,
        {
            type Value = PersonalInfoSet<F>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a list of personal info fields")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut set = PersonalInfoSet::new();
                while let Some(field) = seq.next_element::<F>()? {
                    set.insert(field).map_err(de::Error::custom)?;
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(SetVisitor(PhantomData))
    }
}
