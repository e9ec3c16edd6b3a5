use ndarray::{ArrayD, ArrayViewD};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{DataSlice, Error, Planes, SliceKind, SliceOptions};

#[derive(Serialize)]
struct DataSliceRef<'a, T> {
    name: Option<&'a str>,
    kind: SliceKind,
    width: usize,
    height: usize,
    labels: Option<Vec<&'a str>>,
    data: ArrayViewD<'a, T>,
}

#[derive(Deserialize)]
struct DataSliceOwned<T> {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    kind: SliceKind,
    width: usize,
    height: usize,
    #[serde(default)]
    labels: Option<Vec<String>>,
    data: ArrayD<T>,
}

impl<T> DataSliceOwned<T> {
    fn validate(self) -> Result<DataSlice<T>, Error> {
        let options = SliceOptions {
            name: self.name,
            kind: self.kind,
            labels: self.labels,
        };
        DataSlice::from_options(self.data, self.width, self.height, options)
    }
}

impl<T: Serialize> Serialize for DataSlice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let data = match &self.planes {
            Planes::Single(data) => data.view().into_dyn(),
            Planes::Stack(data) => data.view().into_dyn(),
        };
        DataSliceRef {
            name: self.name(),
            kind: self.kind,
            width: self.dims.width,
            height: self.dims.height,
            labels: self.labels.as_ref().map(|labels| labels.iter().collect()),
            data,
        }
        .serialize(serializer)
    }
}

// Runs the same validation as `DataSlice::from_options`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for DataSlice<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        DataSliceOwned::<T>::deserialize(deserializer)?
            .validate()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use ndarray::{Array2, Array3, Axis};

    use super::*;

    #[test]
    fn round_trips_labeled_stack() {
        let data = Array3::from_shape_fn((2, 3, 2), |(i, j, k)| (i * 6 + j * 2 + k) as f32);
        let slice = DataSlice::with_labels(data.clone(), 2, 3, ["bf", "adf"]).unwrap();

        let json = serde_json::to_string(&slice).unwrap();
        let back: DataSlice<f32> = serde_json::from_str(&json).unwrap();

        assert_ne!(back.id(), slice.id());
        assert_eq!(back.depth(), 2);
        assert_eq!(back.labels().collect::<Vec<_>>(), vec!["bf", "adf"]);
        assert_eq!(back.get_by_label("adf").unwrap(), data.index_axis(Axis(2), 1));
    }

    #[test]
    fn round_trips_single_plane() {
        let data = Array2::from_shape_fn((3, 2), |(i, j)| (i + j) as u16);
        let slice = DataSlice::real(data.clone(), 3, 2).unwrap();

        let back: DataSlice<u16> =
            serde_json::from_value(serde_json::to_value(&slice).unwrap()).unwrap();
        assert!(back.is_single());
        assert_eq!(back.kind(), SliceKind::Real);
        assert_eq!(back.single().unwrap(), data);
    }

    #[test]
    fn rejects_inconsistent_document() {
        let data = Array3::<f32>::zeros((2, 3, 2));
        let slice = DataSlice::new(data, 2, 3).unwrap();
        let mut value = serde_json::to_value(&slice).unwrap();
        value["width"] = serde_json::json!(4);

        let err = serde_json::from_value::<DataSlice<f32>>(value).unwrap_err();
        assert!(err.to_string().contains("(4, 3)"), "{err}");
    }
}
