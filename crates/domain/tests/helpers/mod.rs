#![allow(dead_code)]
use ferrous_relay_domain::{QueryClass, Question, RecordType};

pub struct QuestionBuilder {
    name: String,
    record_type: RecordType,
    query_class: QueryClass,
}

impl QuestionBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com.".to_string(),
            record_type: RecordType::A,
            query_class: QueryClass::IN,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn query_class(mut self, query_class: QueryClass) -> Self {
        self.query_class = query_class;
        self
    }

    pub fn build(self) -> Question {
        Question::new(self.name, self.record_type, self.query_class)
    }
}
