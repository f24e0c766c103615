use indexmap::IndexMap;

/// Cleaned key/value pairs parsed from one endpoint's page
///
/// Keys are unique. Lookup ignores order, but iteration follows the order in
/// which keys first appeared on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRecord {
    entries: IndexMap<String, String>,
}

impl CategoryRecord {
    /// Creates an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pair, overwriting an existing value in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Looks up the value stored for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns true if the record contains `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of pairs in the record
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the record holds no pairs
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over pairs in page order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CategoryRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut record = CategoryRecord::new();
        record.insert("MP", "ON");
        assert_eq!(record.get("MP"), Some("ON"));
        assert_eq!(record.get("CP"), None);
        assert!(record.contains_key("MP"));
    }

    #[test]
    fn test_overwrite_keeps_first_position() {
        let mut record: CategoryRecord = [("A", "1"), ("B", "2")].into_iter().collect();
        record.insert("A", "3");

        let pairs: Vec<_> = record.iter().collect();
        assert_eq!(pairs, vec![("A", "3"), ("B", "2")]);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_equality_ignores_order() {
        let first: CategoryRecord = [("A", "1"), ("B", "2")].into_iter().collect();
        let second: CategoryRecord = [("B", "2"), ("A", "1")].into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_record() {
        let record = CategoryRecord::new();
        assert!(record.is_empty());
        assert_eq!(record.iter().count(), 0);
    }
}
