mod handle_dns_query;
pub mod message;

pub use handle_dns_query::{HandleDnsQueryUseCase, QueryOutcome, QueryResponse};
pub use message::{error_response, question_from_query};
