use std::collections::HashMap;

use get_size::GetSize;

use super::err::Error;

/// Label -> depth index mapping that keeps the labels in the order they were given.
#[derive(Debug, Clone, PartialEq, Eq, GetSize)]
pub struct SliceLabels {
    labels: Vec<String>,
    by_name: HashMap<String, usize>,
}

impl SliceLabels {
    pub fn new(labels: Vec<String>, depth: usize) -> Result<Self, Error> {
        if labels.len() != depth {
            return Err(Error::LabelCountMismatch {
                labels: labels.len(),
                depth,
            });
        }

        let mut by_name = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if by_name.insert(label.clone(), i).is_some() {
                return Err(Error::DuplicateLabel {
                    label: label.clone(),
                });
            }
        }

        Ok(Self { labels, by_name })
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.by_name.get(label).copied()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.labels
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn keeps_given_order() {
        let l = SliceLabels::new(labels(&["zeta", "alpha", "mu"]), 3).unwrap();
        assert_eq!(l.iter().collect::<Vec<_>>(), vec!["zeta", "alpha", "mu"]);
        assert_eq!(l.position("alpha"), Some(1));
        assert_eq!(l.get(2), Some("mu"));
        assert_eq!(l.position("beta"), None);
    }

    #[test]
    fn rejects_wrong_count() {
        let err = SliceLabels::new(labels(&["a", "b"]), 3).unwrap_err();
        assert!(matches!(
            err,
            Error::LabelCountMismatch {
                labels: 2,
                depth: 3
            }
        ));
    }

    #[test]
    fn rejects_duplicates() {
        let err = SliceLabels::new(labels(&["a", "b", "a"]), 3).unwrap_err();
        assert!(matches!(err, Error::DuplicateLabel { label } if label == "a"));
    }
}
