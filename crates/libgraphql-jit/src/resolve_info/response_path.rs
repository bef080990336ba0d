use std::sync::Arc;

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}
impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Key(key) => f.write_str(key),
        }
    }
}

#[derive(Debug, PartialEq)]
struct ResponsePathNode {
    prev: ResponsePath,
    segment: PathSegment,
    type_name: Option<String>,
}

/// The location of a value within the response, from the root down.
///
/// Paths are persistent: appending shares the existing prefix, so the many
/// sibling paths produced while resolving a list cost one node each.
///
/// ```
/// use libgraphql_jit::resolve_info::ResponsePath;
///
/// let users = ResponsePath::root().append_key("users", Some("Query"));
/// let name = users.append_index(0).append_key("name", Some("User"));
/// assert_eq!(name.to_string(), "users.0.name");
/// assert_eq!(users.to_string(), "users");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponsePath(Option<Arc<ResponsePathNode>>);
impl ResponsePath {
    pub fn root() -> Self {
        Self(None)
    }

    pub fn append_index(&self, index: usize) -> Self {
        self.append(PathSegment::Index(index), None)
    }

    /// Append a response key, recording the runtime type of the object the
    /// key was read from (when known).
    pub fn append_key(&self, key: impl Into<String>, type_name: Option<&str>) -> Self {
        self.append(PathSegment::Key(key.into()), type_name.map(str::to_string))
    }

    pub fn is_root(&self) -> bool {
        self.0.is_none()
    }

    pub fn last_segment(&self) -> Option<&PathSegment> {
        self.0.as_ref().map(|node| &node.segment)
    }

    pub fn parent(&self) -> Option<&ResponsePath> {
        self.0.as_ref().map(|node| &node.prev)
    }

    /// The runtime type name recorded with the last segment.
    pub fn type_name(&self) -> Option<&str> {
        self.0.as_ref().and_then(|node| node.type_name.as_deref())
    }

    /// The segments of this path, root first.
    pub fn to_vec(&self) -> Vec<PathSegment> {
        let mut segments = vec![];
        let mut current = self;
        while let Some(node) = &current.0 {
            segments.push(node.segment.clone());
            current = &node.prev;
        }
        segments.reverse();
        segments
    }

    fn append(&self, segment: PathSegment, type_name: Option<String>) -> Self {
        Self(Some(Arc::new(ResponsePathNode {
            prev: self.clone(),
            segment,
            type_name,
        })))
    }
}
impl std::fmt::Display for ResponsePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let segments = self.to_vec();
        for (idx, segment) in segments.iter().enumerate() {
            if idx > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
