use crate::expansion::ExpansionError;
use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;

type Result<T> = std::result::Result<T, ExpansionError>;

/// Concrete object type name -> the sub-fields requested on that type.
///
/// For a composite return type the key set is exactly the set of concrete
/// types the field's value could be at runtime. Leaf return types expand to
/// an empty `FieldExpansion`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldExpansion(IndexMap<String, TypeExpansion>);
impl FieldExpansion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produces an expansion with an empty [`TypeExpansion`] for each of the
    /// given concrete type names.
    pub fn with_type_names<'a>(
        type_names: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self(
            type_names
                .into_iter()
                .map(|name| (name.to_string(), TypeExpansion::new()))
                .collect(),
        )
    }

    /// Merges `other` into `self` in place.
    ///
    /// Type names missing from `self` are added; type names present in both
    /// have their [`TypeExpansion`]s merged recursively.
    pub fn absorb(&mut self, other: FieldExpansion) -> Result<()> {
        for (type_name, type_expansion) in other.0 {
            match self.0.entry(type_name) {
                Entry::Occupied(mut entry) => {
                    entry.get_mut().absorb(type_expansion)?;
                },
                Entry::Vacant(entry) => {
                    entry.insert(type_expansion);
                },
            }
        }
        Ok(())
    }

    pub fn contains_type(&self, type_name: &str) -> bool {
        self.0.contains_key(type_name)
    }

    pub fn get(&self, type_name: &str) -> Option<&TypeExpansion> {
        self.0.get(type_name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeExpansion)> {
        self.0.iter().map(|(name, expansion)| (name.as_str(), expansion))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub(crate) fn type_expansion_mut(
        &mut self,
        type_name: &str,
    ) -> Option<&mut TypeExpansion> {
        self.0.get_mut(type_name)
    }
}
impl FromIterator<(String, TypeExpansion)> for FieldExpansion {
    fn from_iter<T: IntoIterator<Item = (String, TypeExpansion)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Response key -> what was requested under that key for one concrete type.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TypeExpansion(IndexMap<String, SelectionExpansion>);
impl TypeExpansion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absorb(&mut self, other: TypeExpansion) -> Result<()> {
        for (response_key, selection) in other.0 {
            self.absorb_selection(response_key, selection)?;
        }
        Ok(())
    }

    /// Records `selection` under `response_key`, merging with whatever is
    /// already recorded there.
    pub fn absorb_selection(
        &mut self,
        response_key: impl Into<String>,
        selection: SelectionExpansion,
    ) -> Result<()> {
        match self.0.entry(response_key.into()) {
            Entry::Occupied(mut entry) => {
                let response_key = entry.key().clone();
                entry.get_mut().absorb(selection, response_key)
            },
            Entry::Vacant(entry) => {
                entry.insert(selection);
                Ok(())
            },
        }
    }

    pub fn contains_key(&self, response_key: &str) -> bool {
        self.0.contains_key(response_key)
    }

    pub fn get(&self, response_key: &str) -> Option<&SelectionExpansion> {
        self.0.get(response_key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SelectionExpansion)> {
        self.0.iter().map(|(key, selection)| (key.as_str(), selection))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
impl FromIterator<(String, SelectionExpansion)> for TypeExpansion {
    fn from_iter<T: IntoIterator<Item = (String, SelectionExpansion)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// What was requested under a single response key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SelectionExpansion {
    /// The field was selected without a selection set.
    Leaf,

    /// The field was selected with a selection set, expanded over the
    /// concrete types of the field's own return type.
    Nested(FieldExpansion),
}
impl SelectionExpansion {
    pub fn as_nested(&self) -> Option<&FieldExpansion> {
        match self {
            Self::Leaf => None,
            Self::Nested(expansion) => Some(expansion),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    fn absorb(
        &mut self,
        other: SelectionExpansion,
        response_key: String,
    ) -> Result<()> {
        match (self, other) {
            (Self::Leaf, Self::Leaf) => Ok(()),
            (Self::Nested(this), Self::Nested(other)) => this.absorb(other),
            (Self::Leaf, Self::Nested(_))
            | (Self::Nested(_), Self::Leaf) =>
                Err(ExpansionError::MismatchedSelectionShape { response_key }),
        }
    }
}
impl Serialize for SelectionExpansion {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Leaf => serializer.serialize_bool(true),
            Self::Nested(expansion) => expansion.serialize(serializer),
        }
    }
}

/// Structural union of two expansions.
///
/// Leaf with leaf stays a leaf, nested with nested merges recursively, and a
/// leaf meeting a nested expansion under the same response key fails with
/// [`ExpansionError::MismatchedSelectionShape`]. Neither input is modified.
pub fn merge_field_expansions(
    a: &FieldExpansion,
    b: &FieldExpansion,
) -> Result<FieldExpansion> {
    let mut merged = a.clone();
    merged.absorb(b.clone())?;
    Ok(merged)
}
