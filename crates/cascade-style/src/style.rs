#![forbid(unsafe_code)]

//! Property/value overrides for a single element.

/// Style properties applied verbatim to one element.
///
/// Property names and values are opaque strings interpreted by the host
/// (for a DOM host they are CSS declarations). Properties keep the order
/// they were set in, because shorthands and longhands interact. Setting a
/// property again replaces its value and moves it to the end.
///
/// # Example
/// ```
/// use cascade_style::StyleOverrides;
///
/// let style = StyleOverrides::new()
///     .set("background", "#222")
///     .set("min-width", "180px");
/// assert_eq!(style.get("background"), Some("#222"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleOverrides {
    properties: Vec<(String, String)>,
}

impl StyleOverrides {
    /// Empty overrides.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value.
    #[must_use]
    pub fn set(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    /// Set a property in place.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        self.remove(&property);
        self.properties.push((property, value.into()));
    }

    /// Value of a property, if set.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    /// Remove a property, returning its value.
    pub fn remove(&mut self, property: &str) -> Option<String> {
        let pos = self.properties.iter().position(|(k, _)| k == property)?;
        Some(self.properties.remove(pos).1)
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate properties in the order they were set.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge `other` on top of `self`; `other` wins on conflicts.
    #[must_use]
    pub fn merge(&self, other: &StyleOverrides) -> StyleOverrides {
        let mut merged = self.clone();
        for (k, v) in &other.properties {
            merged.insert(k.as_str(), v.as_str());
        }
        merged
    }
}

impl<K, V> FromIterator<(K, V)> for StyleOverrides
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Self::new();
        for (k, v) in iter {
            style.insert(k, v);
        }
        style
    }
}

/// Serialized as a map, in property order.
#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::StyleOverrides;

    impl Serialize for StyleOverrides {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (k, v) in self.iter() {
                map.serialize_entry(k, v)?;
            }
            map.end()
        }
    }

    struct OverridesVisitor;

    impl<'de> Visitor<'de> for OverridesVisitor {
        type Value = StyleOverrides;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of style property names to values")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut style = StyleOverrides::new();
            while let Some((k, v)) = access.next_entry::<String, String>()? {
                style.insert(k, v);
            }
            Ok(style)
        }
    }

    impl<'de> Deserialize<'de> for StyleOverrides {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(OverridesVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_previous_value() {
        let style = StyleOverrides::new().set("color", "red").set("color", "blue");
        assert_eq!(style.get("color"), Some("blue"));
        assert_eq!(style.len(), 1);
    }

    #[test]
    fn merge_prefers_other() {
        let base = StyleOverrides::new()
            .set("color", "black")
            .set("padding", "4px");
        let over = StyleOverrides::new().set("color", "gray");
        let merged = base.merge(&over);
        assert_eq!(merged.get("color"), Some("gray"));
        assert_eq!(merged.get("padding"), Some("4px"));
        // inputs untouched
        assert_eq!(base.get("color"), Some("black"));
    }

    #[test]
    fn from_iterator_and_iter() {
        let style: StyleOverrides = [("b", "2"), ("a", "1")].into_iter().collect();
        let pairs: Vec<_> = style.iter().collect();
        assert_eq!(pairs, vec![("b", "2"), ("a", "1")]);
    }

    #[test]
    fn shorthand_after_longhand_keeps_set_order() {
        let style = StyleOverrides::new()
            .set("border-left", "2px solid red")
            .set("border", "none");
        let names: Vec<_> = style.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["border-left", "border"]);

        // setting again moves the property last
        let style = style.set("border-left", "1px dotted");
        let names: Vec<_> = style.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["border", "border-left"]);
        assert_eq!(style.len(), 2);
    }

    #[test]
    fn merge_appends_overrides_in_order() {
        let base = StyleOverrides::new().set("margin", "0").set("color", "black");
        let over = StyleOverrides::new().set("margin-top", "2px").set("color", "gray");
        let merged = base.merge(&over);
        let pairs: Vec<_> = merged.iter().collect();
        assert_eq!(
            pairs,
            vec![("margin", "0"), ("margin-top", "2px"), ("color", "gray")]
        );
    }

    #[test]
    fn remove_and_empty() {
        let mut style = StyleOverrides::new().set("opacity", "0.5");
        assert!(!style.is_empty());
        assert_eq!(style.remove("opacity").as_deref(), Some("0.5"));
        assert!(style.is_empty());
        assert_eq!(style.remove("opacity"), None);
    }
}
