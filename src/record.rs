use std::collections::HashMap;

/// Labels attached to a metric sample, keyed by label name.
pub type Attributes = HashMap<String, String>;

/// A single metric sample read from the exposition text.
///
/// Records are built by the scanner once a whole line was read
/// and are not modified afterwards.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricRecord {
    key: String,
    attrs: Attributes,
    value: f64,
}

impl MetricRecord {
    /// Creates a new record.
    pub fn new(key: impl Into<String>, attrs: Attributes, value: f64) -> Self {
        Self {
            key: key.into(),
            attrs,
            value,
        }
    }

    /// Returns the metric name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns all the labels of the sample.
    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    /// Returns the value of a single label, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whether the sample carried `NaN` or `unknown` instead of a number.
    pub fn is_nan(&self) -> bool {
        self.value.is_nan()
    }

    pub fn into_parts(self) -> (String, Attributes, f64) {
        (self.key, self.attrs, self.value)
    }
}

// Two NaN samples are the same sample.
impl PartialEq for MetricRecord {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.attrs == other.attrs
            && (self.value == other.value || (self.value.is_nan() && other.value.is_nan()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_records_are_equal() {
        let a = MetricRecord::new("up", Attributes::new(), f64::NAN);
        let b = MetricRecord::new("up", Attributes::new(), f64::NAN);
        assert_eq!(a, b);
        assert!(a.is_nan());

        let c = MetricRecord::new("up", Attributes::new(), 1.0);
        assert_ne!(a, c);
    }

    #[test]
    fn test_accessors() {
        let mut attrs = Attributes::new();
        attrs.insert("job".to_string(), "kafka".to_string());
        let record = MetricRecord::new("kafka_up", attrs, 1.0);

        assert_eq!(record.key(), "kafka_up");
        assert_eq!(record.attr("job"), Some("kafka"));
        assert_eq!(record.attr("instance"), None);
        assert_eq!(record.value(), 1.0);

        let (key, attrs, value) = record.into_parts();
        assert_eq!(key, "kafka_up");
        assert_eq!(attrs.len(), 1);
        assert_eq!(value, 1.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_record() {
        let mut attrs = Attributes::new();
        attrs.insert("quantile".to_string(), "0.5".to_string());
        let record = MetricRecord::new("zookeeper_latency", attrs, 12.5);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"key":"zookeeper_latency","attrs":{"quantile":"0.5"},"value":12.5}"#
        );
        let parsed: MetricRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
