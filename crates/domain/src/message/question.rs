use crate::records::{RecordClass, RecordType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Dotted name, case preserved (e.g. `"example.com"`).
    pub name: String,
    pub record_type: RecordType,
    pub class: RecordClass,
}

impl Question {
    pub fn new(name: impl Into<String>, record_type: RecordType, class: RecordClass) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
        }
    }
}
