// #![warn(clippy::pedantic)]
// #![warn(clippy::nursery)]
#![warn(clippy::complexity)]
#![warn(clippy::correctness)]
#![warn(clippy::perf)]
#![warn(clippy::style)]
#![warn(clippy::suspicious)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
// #![warn(clippy::unwrap_used)]
// #![warn(clippy::expect_used)]

pub mod geom;
pub mod object;
pub mod slice;

pub use geom::Dim2;
pub use object::{DataObject, ObjectId};
pub use slice::{DataSlice, Error, SliceKey, SliceKind, SliceLabels, SliceOptions};
