use serde::{Deserialize, Serialize};

/// Which space the 2D planes of a slice live in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceKind {
    #[default]
    Generic,
    /// Scan positions, indexed by probe position.
    Real,
    /// Reciprocal space, indexed by detector pixel.
    Diffraction,
}

impl SliceKind {
    /// Names of the (width, height) axes.
    pub fn axis_names(&self) -> (&'static str, &'static str) {
        match self {
            SliceKind::Generic => ("x", "y"),
            SliceKind::Real => ("Rx", "Ry"),
            SliceKind::Diffraction => ("Qx", "Qy"),
        }
    }

    pub fn is_real_space(&self) -> bool {
        *self == SliceKind::Real
    }

    pub fn is_diffraction_space(&self) -> bool {
        *self == SliceKind::Diffraction
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn axis_names_follow_kind() {
        assert_eq!(SliceKind::Real.axis_names(), ("Rx", "Ry"));
        assert_eq!(SliceKind::Diffraction.axis_names(), ("Qx", "Qy"));
        assert_eq!(SliceKind::default().axis_names(), ("x", "y"));
    }

    #[test]
    fn deserializes_snake_case() {
        let kind: SliceKind = serde_json::from_str("\"diffraction\"").unwrap();
        assert!(kind.is_diffraction_space());
        assert!(!kind.is_real_space());
    }
}
