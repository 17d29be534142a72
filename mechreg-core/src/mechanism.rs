//! A registration paired with its source label.

use crate::{error::BoxError, registration::Registration};
use std::{borrow::Cow, fmt, sync::Arc};

/// One entry of a mechanism table.
///
/// The source label names where the mechanism came from (typically its model
/// description file) and is only used for banner text.
#[derive(Clone)]
pub struct Mechanism {
    source: Cow<'static, str>,
    registration: Arc<dyn Registration>,
}

impl Mechanism {
    /// Create a new mechanism entry.
    pub fn new<R: Registration>(source: impl Into<Cow<'static, str>>, registration: R) -> Self {
        Self {
            source: source.into(),
            registration: Arc::new(registration),
        }
    }

    /// The source label shown in the banner.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The registration entry point.
    pub fn registration(&self) -> &dyn Registration {
        &*self.registration
    }

    /// Run the registration entry point once.
    pub fn register(&self) -> Result<(), BoxError> {
        self.registration.register()
    }
}

impl fmt::Debug for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mechanism")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
