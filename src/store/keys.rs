//! Key arguments for bulk operations.
//!
//! Bulk reads and removals accept single keys or arbitrarily nested lists of
//! keys; the whole sequence is flattened before any lookup.

/// A key, or a nested list of keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyArg {
    /// A single logical key.
    Key(String),
    /// A nested list, flattened recursively.
    List(Vec<KeyArg>),
}

impl KeyArg {
    fn collect_into(&self, keys: &mut Vec<String>) {
        match self {
            KeyArg::Key(key) => keys.push(key.clone()),
            KeyArg::List(items) => {
                for item in items {
                    item.collect_into(keys);
                }
            }
        }
    }
}

/// Flattens key arguments into the sequence of logical keys, in order.
pub(crate) fn flatten(args: &[KeyArg]) -> Vec<String> {
    let mut keys = Vec::new();
    for arg in args {
        arg.collect_into(&mut keys);
    }
    keys
}

impl From<&str> for KeyArg {
    fn from(key: &str) -> Self {
        KeyArg::Key(key.to_string())
    }
}

impl From<String> for KeyArg {
    fn from(key: String) -> Self {
        KeyArg::Key(key)
    }
}

impl<T: Into<KeyArg>> From<Vec<T>> for KeyArg {
    fn from(items: Vec<T>) -> Self {
        KeyArg::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_plain_keys() {
        let args = [KeyArg::from("a"), KeyArg::from("b")];
        assert_eq!(flatten(&args), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_flatten_nested_lists_in_order() {
        let args = [
            KeyArg::from("a"),
            KeyArg::List(vec![
                KeyArg::from("b"),
                KeyArg::List(vec![KeyArg::from("c"), KeyArg::from("d")]),
            ]),
        ];
        assert_eq!(
            flatten(&args),
            vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string()
            ]
        );
    }

    #[test]
    fn test_flatten_empty_list() {
        let args = [KeyArg::List(Vec::new())];
        assert_eq!(flatten(&args), Vec::<String>::new());
    }
}
