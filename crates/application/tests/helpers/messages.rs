use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{rdata, DNSClass, Name, RData, Record, RecordType};
use std::net::Ipv4Addr;

pub fn query_message(id: u16, name: &str, record_type: RecordType) -> Message {
    let mut query = Query::query(Name::from_ascii(name).unwrap(), record_type);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(query);
    message
}

pub fn empty_query(id: u16) -> Message {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message
}

pub fn a_answer(query: &Message, ip: Ipv4Addr) -> Message {
    let mut response = response_for(query, ResponseCode::NoError);
    let name = query.queries()[0].name().clone();
    response.add_answer(Record::from_rdata(name, 300, RData::A(rdata::A(ip))));
    response
}

pub fn response_for(query: &Message, code: ResponseCode) -> Message {
    let mut response = Message::new();
    response
        .set_id(query.id())
        .set_message_type(MessageType::Response)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true)
        .set_recursion_available(true)
        .set_response_code(code);
    response.add_queries(query.queries().iter().cloned());
    response
}

pub fn first_a(message: &Message) -> Option<Ipv4Addr> {
    message.answers().iter().find_map(|record| match record.data() {
        Some(RData::A(a)) => Some(a.0),
        _ => None,
    })
}
