//! Type-safe identifiers for catalogue entities.
//!
//! Names use Arc<str> for cheap cloning into the indexes. Arena indices are
//! plain `usize` newtypes handed out by the entity store.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

macro_rules! impl_name {
    ($name:ident) => {
        #[derive(Clone, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(s: impl AsRef<str>) -> Self {
                Self(s.as_ref().into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.as_str().cmp(other.as_str())
            }
        }

        // Must hash exactly like `str` so that `Borrow<str>` lookups work.
        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.as_str().hash(state);
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

impl_name!(StopName);
impl_name!(BusName);

/// Position of a stop in the entity store
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StopId(pub(crate) usize);

/// Position of a bus in the entity store
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BusId(pub(crate) usize);

impl StopId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl BusId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_equality() {
        let id1 = StopName::new("Marushkino");
        let id2 = StopName::new("Marushkino");
        let id3 = id1.clone();

        assert_eq!(id1, id2);
        assert_eq!(id1, id3);
        assert!(Arc::ptr_eq(&id1.0, &id3.0)); // Clone shares Arc
    }

    #[test]
    fn test_name_borrowed_lookup() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(BusName::new("256"), 42);

        assert_eq!(map.get("256"), Some(&42));
        assert_eq!(map.get(&BusName::new("256")), Some(&42));
    }

    #[test]
    fn test_name_ordering() {
        use std::collections::BTreeSet;

        let names: BTreeSet<BusName> = ["828", "256", "750"].into_iter().map(BusName::from).collect();
        let ordered: Vec<&str> = names.iter().map(BusName::as_str).collect();

        assert_eq!(ordered, vec!["256", "750", "828"]);
    }

    #[test]
    fn test_name_display() {
        let id = StopName::new("Biryulyovo Zapadnoye");
        assert_eq!(format!("{}", id), "Biryulyovo Zapadnoye");
    }

    #[test]
    fn test_name_conversions() {
        let _id1: StopName = "Universam".into();
        let _id2: BusName = String::from("750").into();
    }
}
