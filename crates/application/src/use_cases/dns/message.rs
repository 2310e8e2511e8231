use ferrous_relay_domain::{QueryClass, Question, RecordType};
use hickory_proto::op::{Message, MessageType, Query, ResponseCode};

/// Builds the domain question from a decoded query section entry.
///
/// The name is taken verbatim in presentation form, so case and the trailing
/// dot survive into the cache key.
pub fn question_from_query(query: &Query) -> Question {
    Question::new(
        query.name().to_ascii(),
        RecordType::from_u16(u16::from(query.query_type())),
        QueryClass::from_u16(u16::from(query.query_class())),
    )
}

/// Answer-less reply to `query` carrying `code`.
///
/// Mirrors id, opcode, RD and the question section; sets QR and RA.
pub fn error_response(query: &Message, code: ResponseCode) -> Message {
    let mut response = Message::new();
    response
        .set_id(query.id())
        .set_message_type(MessageType::Response)
        .set_op_code(query.op_code())
        .set_recursion_desired(query.recursion_desired())
        .set_recursion_available(true)
        .set_response_code(code);
    response.add_queries(query.queries().iter().cloned());
    response
}
