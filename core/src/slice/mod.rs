//! 2D image planes cut out of 4D-STEM data.
//!
//! A [`DataSlice`] holds either a single `(width, height)` plane or a stack of
//! them along a third axis. Stacked planes are addressed by position, or by
//! label when labels were given at construction.
//!
//! Planes are handed out as views into the slice's own storage, so writing
//! through [`DataSlice::get_mut`] changes the stack itself. Call `.to_owned()`
//! on a view to get an independent copy.

use get_size::GetSize;
use ndarray::{
    Array, Array2, Array3, ArrayBase, ArrayD, ArrayView2, ArrayView3, ArrayViewMut2, Axis, Data,
    Dimension, Ix2, Ix3,
};
use tracing::{debug, instrument, trace};

use crate::{
    geom::Dim2,
    object::{DataObject, ObjectId},
};

pub use self::{err::Error, kind::SliceKind, labels::SliceLabels, options::SliceOptions};

pub mod err;
pub mod kind;
pub mod labels;
pub mod options;
mod repr;

#[derive(Debug, Clone, PartialEq)]
enum Planes<T> {
    /// 2D source, stored as given.
    Single(Array2<T>),
    /// 3D source, planes along the last axis.
    Stack(Array3<T>),
}

/// Addresses one plane of a [`DataSlice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceKey<'a> {
    Index(usize),
    Label(&'a str),
}

impl From<usize> for SliceKey<'_> {
    fn from(index: usize) -> Self {
        SliceKey::Index(index)
    }
}

impl<'a> From<&'a str> for SliceKey<'a> {
    fn from(label: &'a str) -> Self {
        SliceKey::Label(label)
    }
}

#[derive(Debug, Clone)]
pub struct DataSlice<T> {
    object: DataObject,
    kind: SliceKind,
    dims: Dim2,
    labels: Option<SliceLabels>,
    planes: Planes<T>,
}

impl<T> DataSlice<T> {
    pub fn new<D: Dimension>(data: Array<T, D>, width: usize, height: usize) -> Result<Self, Error> {
        Self::from_options(data, width, height, SliceOptions::default())
    }

    pub fn with_labels<D, S>(
        data: Array<T, D>,
        width: usize,
        height: usize,
        labels: impl IntoIterator<Item = S>,
    ) -> Result<Self, Error>
    where
        D: Dimension,
        S: Into<String>,
    {
        Self::from_options(data, width, height, SliceOptions::new().labels(labels))
    }

    pub fn real<D: Dimension>(data: Array<T, D>, width: usize, height: usize) -> Result<Self, Error> {
        Self::from_options(
            data,
            width,
            height,
            SliceOptions::new().kind(SliceKind::Real),
        )
    }

    pub fn diffraction<D: Dimension>(
        data: Array<T, D>,
        width: usize,
        height: usize,
    ) -> Result<Self, Error> {
        Self::from_options(
            data,
            width,
            height,
            SliceOptions::new().kind(SliceKind::Diffraction),
        )
    }

    /// Validates `data` against `(width, height)` and splits it into planes.
    ///
    /// `data` must be `(width, height)` or `(width, height, depth)`. If labels are
    /// given there must be exactly `depth` of them, with no repeats.
    #[instrument(level = "debug", skip(data, options), fields(shape = ?data.shape(), kind = ?options.kind))]
    pub fn from_options<D: Dimension>(
        data: Array<T, D>,
        width: usize,
        height: usize,
        options: SliceOptions,
    ) -> Result<Self, Error> {
        let SliceOptions { name, kind, labels } = options;
        let object = DataObject::new(name);
        let dims = Dim2::new(width, height);

        let shape = data.shape().to_vec();
        if !matches!(shape.len(), 2 | 3) {
            return Err(Error::InvalidRank { shape });
        }
        if !dims.is_prefix_of(&shape) {
            return Err(Error::ShapeMismatch {
                shape,
                width,
                height,
            });
        }
        if shape.contains(&0) {
            return Err(Error::EmptyAxis { shape });
        }

        let depth = shape.get(2).copied().unwrap_or(1);
        let labels = labels
            .map(|labels| SliceLabels::new(labels, depth))
            .transpose()?;

        let planes = if shape.len() == 2 {
            Planes::Single(data.into_dimensionality::<Ix2>()?)
        } else {
            Planes::Stack(data.into_dimensionality::<Ix3>()?)
        };

        debug!(id = %object.id(), depth, labeled = labels.is_some(), "Created data slice");

        Ok(Self {
            object,
            kind,
            dims,
            labels,
            planes,
        })
    }

    pub fn id(&self) -> ObjectId {
        self.object.id()
    }

    pub fn name(&self) -> Option<&str> {
        self.object.name()
    }

    pub fn object(&self) -> &DataObject {
        &self.object
    }

    pub fn object_mut(&mut self) -> &mut DataObject {
        &mut self.object
    }

    pub fn kind(&self) -> SliceKind {
        self.kind
    }

    pub fn dims(&self) -> Dim2 {
        self.dims
    }

    pub fn width(&self) -> usize {
        self.dims.width
    }

    pub fn height(&self) -> usize {
        self.dims.height
    }

    pub fn depth(&self) -> usize {
        match &self.planes {
            Planes::Single(_) => 1,
            Planes::Stack(data) => data.len_of(Axis(2)),
        }
    }

    /// Whether the source was 2D.
    pub fn is_single(&self) -> bool {
        matches!(self.planes, Planes::Single(_))
    }

    pub fn is_labeled(&self) -> bool {
        self.labels.is_some()
    }

    pub fn slice_labels(&self) -> Option<&SliceLabels> {
        self.labels.as_ref()
    }

    /// Labels in construction order. Empty if the slice is unlabeled.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().flat_map(|labels| labels.iter())
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.as_ref()?.get(index)
    }

    pub fn position(&self, label: &str) -> Result<usize, Error> {
        self.labels
            .as_ref()
            .and_then(|labels| labels.position(label))
            .ok_or_else(|| Error::KeyNotFound {
                label: label.to_string(),
            })
    }

    fn resolve(&self, key: SliceKey) -> Result<usize, Error> {
        match key {
            SliceKey::Index(index) => {
                let depth = self.depth();
                if index < depth {
                    Ok(index)
                } else {
                    Err(Error::IndexOutOfRange { index, depth })
                }
            }
            SliceKey::Label(label) => self.position(label),
        }
    }

    // `index` must already be resolved against the depth.
    fn plane(&self, index: usize) -> ArrayView2<'_, T> {
        match &self.planes {
            Planes::Single(data) => data.view(),
            Planes::Stack(data) => data.index_axis(Axis(2), index),
        }
    }

    fn plane_mut(&mut self, index: usize) -> ArrayViewMut2<'_, T> {
        match &mut self.planes {
            Planes::Single(data) => data.view_mut(),
            Planes::Stack(data) => data.index_axis_mut(Axis(2), index),
        }
    }

    /// The whole plane of a slice built from 2D data.
    pub fn single(&self) -> Option<ArrayView2<'_, T>> {
        match &self.planes {
            Planes::Single(data) => Some(data.view()),
            Planes::Stack(_) => None,
        }
    }

    pub fn single_mut(&mut self) -> Option<ArrayViewMut2<'_, T>> {
        match &mut self.planes {
            Planes::Single(data) => Some(data.view_mut()),
            Planes::Stack(_) => None,
        }
    }

    /// Plane at `index` along the depth axis. A 2D slice has exactly one plane, at 0.
    pub fn get(&self, index: usize) -> Result<ArrayView2<'_, T>, Error> {
        self.get_by_key(SliceKey::Index(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<ArrayViewMut2<'_, T>, Error> {
        self.get_by_key_mut(SliceKey::Index(index))
    }

    pub fn get_by_label(&self, label: &str) -> Result<ArrayView2<'_, T>, Error> {
        self.get_by_key(SliceKey::Label(label))
    }

    pub fn get_by_label_mut(&mut self, label: &str) -> Result<ArrayViewMut2<'_, T>, Error> {
        self.get_by_key_mut(SliceKey::Label(label))
    }

    pub fn get_by_key<'k>(&self, key: impl Into<SliceKey<'k>>) -> Result<ArrayView2<'_, T>, Error> {
        let index = self.resolve(key.into())?;
        Ok(self.plane(index))
    }

    pub fn get_by_key_mut<'k>(
        &mut self,
        key: impl Into<SliceKey<'k>>,
    ) -> Result<ArrayViewMut2<'_, T>, Error> {
        let index = self.resolve(key.into())?;
        Ok(self.plane_mut(index))
    }

    /// Overwrites one plane in place. `plane` must be exactly `(width, height)`.
    pub fn replace<'k, S>(
        &mut self,
        key: impl Into<SliceKey<'k>>,
        plane: &ArrayBase<S, Ix2>,
    ) -> Result<(), Error>
    where
        S: Data<Elem = T>,
        T: Clone,
    {
        if plane.dim() != (self.dims.width, self.dims.height) {
            return Err(Error::SliceShapeMismatch {
                shape: plane.shape().to_vec(),
                width: self.dims.width,
                height: self.dims.height,
            });
        }

        let index = self.resolve(key.into())?;
        trace!(id = %self.id(), index, "Replacing slice");
        self.plane_mut(index).assign(plane);
        Ok(())
    }

    /// Planes in depth order, paired with their label if the slice is labeled.
    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, ArrayView2<'_, T>)> + '_ {
        (0..self.depth()).map(move |i| (self.label(i), self.plane(i)))
    }

    /// All planes as one `(width, height, depth)` view. 2D data shows up with a depth of 1.
    pub fn stack(&self) -> ArrayView3<'_, T> {
        match &self.planes {
            Planes::Single(data) => data.view().insert_axis(Axis(2)),
            Planes::Stack(data) => data.view(),
        }
    }

    /// Gives back the storage in its original 2D or 3D shape.
    pub fn into_inner(self) -> ArrayD<T> {
        match self.planes {
            Planes::Single(data) => data.into_dyn(),
            Planes::Stack(data) => data.into_dyn(),
        }
    }

    fn element_count(&self) -> usize {
        match &self.planes {
            Planes::Single(data) => data.len(),
            Planes::Stack(data) => data.len(),
        }
    }
}

impl<T> GetSize for DataSlice<T> {
    fn get_heap_size(&self) -> usize {
        self.element_count() * std::mem::size_of::<T>()
            + self.object.get_heap_size()
            + self.labels.get_heap_size()
    }
}
