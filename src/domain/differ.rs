use crate::config::DiffConfig;
use crate::domain::diff::comparison::Comparator;
use crate::domain::serializer::PrettyJson;
use std::cell::{RefCell, RefMut};

/// A comparison session: the rendering configuration plus the destination
/// every command writes to.
pub struct Differ {
    writer: RefCell<Box<dyn std::io::Write>>,
    config: DiffConfig,
}

impl Differ {
    pub fn new(writer: Box<dyn std::io::Write>, config: DiffConfig) -> Self {
        Differ {
            writer: RefCell::new(writer),
            config,
        }
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    pub fn comparator(&self) -> Comparator<PrettyJson> {
        Comparator::new(PrettyJson::new(self.config.indent), self.config.max_lines)
    }
}
