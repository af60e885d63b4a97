//! DNS wire format: header, question and response composition.
pub mod header;
pub mod message;
pub mod name;
pub mod opcode;
pub mod question;

pub use header::{Header, HEADER_LEN};
pub use message::compose;
pub use name::{DomainName, Labels, MAX_LABEL_LEN, MAX_NAME_LEN};
pub use opcode::{Opcode, ResponseCode};
pub use question::{Question, MIN_QUESTION_PACKET_LEN};
