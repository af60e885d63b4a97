use stub_dns_domain::{compose, Header, Question, ResponsePolicy, WireError};
use tracing::debug;

/// Turns one query datagram into its response datagram.
pub struct HandleDatagramUseCase {
    policy: ResponsePolicy,
}

impl HandleDatagramUseCase {
    pub fn new(policy: ResponsePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ResponsePolicy {
        &self.policy
    }

    /// Decodes the header and first question, re-encodes them under the
    /// response policy and returns the composed response.
    pub fn execute(&self, datagram: &[u8]) -> Result<Vec<u8>, WireError> {
        let query = Header::decode(datagram)?;
        let header_bytes = self.policy.response_header(&query).encode();

        let question = Question::decode(datagram)?;
        let question_bytes = question.encode();

        debug!(
            id = query.id,
            flags = query.flags(),
            opcode = %query.opcode,
            name = %question.name,
            qtype = question.qtype,
            qclass = question.qclass,
            "Query decoded"
        );

        Ok(compose(&header_bytes, &question_bytes))
    }
}

impl Default for HandleDatagramUseCase {
    fn default() -> Self {
        Self::new(ResponsePolicy::default())
    }
}
