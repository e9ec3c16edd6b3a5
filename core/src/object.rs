use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use get_size::GetSize;
use serde::{Deserialize, Serialize};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of a data object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectId(u64);

impl ObjectId {
    fn next() -> Self {
        ObjectId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl GetSize for ObjectId {}

/// Identity shared by every data container in the toolbox.
#[derive(Debug, PartialEq, Eq, GetSize)]
pub struct DataObject {
    id: ObjectId,
    name: Option<String>,
}

impl DataObject {
    pub fn new(name: Option<String>) -> Self {
        Self {
            id: ObjectId::next(),
            name,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }
}

// A clone is a separate object and gets its own id.
impl Clone for DataObject {
    fn clone(&self) -> Self {
        Self::new(self.name.clone())
    }
}
