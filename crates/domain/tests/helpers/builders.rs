#![allow(dead_code)]

/// Builds raw query datagrams for codec tests.
pub struct QueryBuilder {
    id: u16,
    flags: [u8; 2],
    qdcount: u16,
    ancount: u16,
    nscount: u16,
    arcount: u16,
    labels: Vec<Vec<u8>>,
    qtype: u16,
    qclass: u16,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x1234,
            flags: [0x01, 0x00],
            qdcount: 1,
            ancount: 0,
            nscount: 0,
            arcount: 0,
            labels: vec![b"codecrafters".to_vec(), b"io".to_vec()],
            qtype: 1,
            qclass: 1,
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, hi: u8, lo: u8) -> Self {
        self.flags = [hi, lo];
        self
    }

    pub fn counts(mut self, qd: u16, an: u16, ns: u16, ar: u16) -> Self {
        self.qdcount = qd;
        self.ancount = an;
        self.nscount = ns;
        self.arcount = ar;
        self
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.labels = domain
            .split('.')
            .map(|label| label.as_bytes().to_vec())
            .collect();
        self
    }

    pub fn raw_labels(mut self, labels: Vec<Vec<u8>>) -> Self {
        self.labels = labels;
        self
    }

    pub fn qtype(mut self, qtype: u16) -> Self {
        self.qtype = qtype;
        self
    }

    pub fn qclass(mut self, qclass: u16) -> Self {
        self.qclass = qclass;
        self
    }

    pub fn header_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(12);
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags);
        buf.extend_from_slice(&self.qdcount.to_be_bytes());
        buf.extend_from_slice(&self.ancount.to_be_bytes());
        buf.extend_from_slice(&self.nscount.to_be_bytes());
        buf.extend_from_slice(&self.arcount.to_be_bytes());
        buf
    }

    pub fn question_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        for label in &self.labels {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label);
        }
        buf.push(0x00); // root label
        buf.extend_from_slice(&self.qtype.to_be_bytes());
        buf.extend_from_slice(&self.qclass.to_be_bytes());
        buf
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = self.header_bytes();
        buf.extend_from_slice(&self.question_bytes());
        buf
    }
}
