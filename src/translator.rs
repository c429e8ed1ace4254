use std::rc::Rc;

use crate::registry::Registry;

/// Handle UI code uses to translate text.
///
/// Clones share one [`Registry`], so a locale switch made through any clone
/// is seen by all of them on their next call.
#[derive(Debug, Clone)]
pub struct Translator {
    registry: Rc<Registry>,
}

impl Translator {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Rc::new(registry),
        }
    }

    pub fn t(&self, key: &str) -> String {
        self.registry.lookup(key).to_string()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
