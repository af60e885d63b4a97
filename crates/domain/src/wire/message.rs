/// Joins an encoded header and an encoded question section into a response
/// datagram, header first. Nothing is validated or rewritten at the boundary.
pub fn compose(header: &[u8], question: &[u8]) -> Vec<u8> {
    let mut response = Vec::with_capacity(header.len() + question.len());
    response.extend_from_slice(header);
    response.extend_from_slice(question);
    response
}
