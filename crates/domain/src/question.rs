use std::fmt;
use std::sync::Arc;

use crate::dns_record::{QueryClass, RecordType};

/// The (name, type, class) triple a query asks about.
///
/// `name` is kept exactly as it arrived: no case folding, trailing dot intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question {
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub query_class: QueryClass,
}

impl Question {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType, query_class: QueryClass) -> Self {
        Self {
            name: name.into(),
            record_type,
            query_class,
        }
    }

    pub fn internet(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self::new(name, record_type, QueryClass::IN)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.query_class, self.record_type)
    }
}
