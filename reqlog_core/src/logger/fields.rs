use std::fmt::Display;

/// Key-value pairs appended to a log line, in insertion order.
///
/// Values are rendered with their `Display` implementation when inserted.
/// Keys are not deduplicated: pushing a key twice keeps both pairs, and both
/// show up in the line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields(Vec<(String, String)>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<K: Into<String>, V: Display>(mut self, key: K, value: V) -> Self {
        self.push(key, value);
        self
    }

    pub fn push<K: Into<String>, V: Display>(&mut self, key: K, value: V) {
        self.0.push((key.into(), value.to_string()));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (key, value) in iter {
            fields.push(key, value);
        }
        fields
    }
}

impl<K: Into<String>, V: Display> From<Vec<(K, V)>> for Fields {
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

/// Builds [`Fields`](crate::logger::Fields) from `key => value` pairs.
///
/// ```
/// use reqlog_core::fields;
/// let fields = fields! { "svc" => "auth", "attempt" => 3 };
/// assert_eq!(fields.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::logger::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::logger::Fields::new()$(.with($key, $value))+
    };
}
