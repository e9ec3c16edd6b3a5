use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("Shape of data is {shape:?}, expected a 2D or 3D array")]
    #[diagnostic(
        code(stem_tbx::slice::invalid_rank),
        help("Pass a (width, height) image or a (width, height, depth) stack")
    )]
    InvalidRank { shape: Vec<usize> },

    #[error("Shape of data is {shape:?}, but (width, height) = ({width}, {height})")]
    #[diagnostic(code(stem_tbx::slice::shape_mismatch))]
    ShapeMismatch {
        shape: Vec<usize>,
        width: usize,
        height: usize,
    },

    #[error("Shape of data is {shape:?}, but every axis must have at least one element")]
    #[diagnostic(code(stem_tbx::slice::empty_axis))]
    EmptyAxis { shape: Vec<usize> },

    #[error("Got {labels} slice labels for a depth of {depth}")]
    #[diagnostic(
        code(stem_tbx::slice::label_count),
        help("Provide exactly one label per slice along the third axis")
    )]
    LabelCountMismatch { labels: usize, depth: usize },

    #[error("Slice label '{label}' is used more than once")]
    #[diagnostic(code(stem_tbx::slice::duplicate_label))]
    DuplicateLabel { label: String },

    #[error("Replacement slice has shape {shape:?}, but (width, height) = ({width}, {height})")]
    #[diagnostic(code(stem_tbx::slice::slice_shape_mismatch))]
    SliceShapeMismatch {
        shape: Vec<usize>,
        width: usize,
        height: usize,
    },

    #[error("No slice labeled '{label}'")]
    #[diagnostic(code(stem_tbx::slice::key_not_found))]
    KeyNotFound { label: String },

    #[error("Slice index {index} is out of range for a depth of {depth}")]
    #[diagnostic(code(stem_tbx::slice::index_out_of_range))]
    IndexOutOfRange { index: usize, depth: usize },

    #[error("Reordering data resulted in shape error: {0}")]
    #[diagnostic(code(stem_tbx::slice::reshape))]
    Shape(#[from] ndarray::ShapeError),
}

impl Error {
    /// Whether this error rejects the shape of the data rather than a lookup.
    pub fn is_shape_error(&self) -> bool {
        !matches!(self, Error::KeyNotFound { .. } | Error::IndexOutOfRange { .. })
    }
}
