use serde::{Deserialize, Serialize};

use super::kind::SliceKind;

/// Construction-time settings for a [`DataSlice`](super::DataSlice).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceOptions {
    pub name: Option<String>,
    pub kind: SliceKind,
    /// One label per slice along the third axis.
    pub labels: Option<Vec<String>>,
}

impl SliceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn kind(mut self, kind: SliceKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let opts: SliceOptions = serde_json::from_str(r#"{ "kind": "real" }"#).unwrap();
        assert_eq!(opts.kind, SliceKind::Real);
        assert_eq!(opts.name, None);
        assert_eq!(opts.labels, None);
    }

    #[test]
    fn builder_sets_fields() {
        let opts = SliceOptions::new()
            .name("bf")
            .kind(SliceKind::Diffraction)
            .labels(["A", "B"]);
        assert_eq!(opts.name.as_deref(), Some("bf"));
        assert_eq!(opts.labels, Some(vec!["A".to_string(), "B".to_string()]));
    }
}
