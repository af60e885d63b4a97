use crate::errors::WireError;
use std::fmt;

/// Longest label allowed by RFC 1035 §2.3.4. Length bytes with either of the
/// top two bits set are compression pointers or reserved label types.
pub const MAX_LABEL_LEN: usize = 63;

/// Longest wire-encoded name, length bytes and root terminator included.
pub const MAX_NAME_LEN: usize = 255;

/// A domain name kept in its uncompressed wire form: length-prefixed labels
/// followed by the zero-length root label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName {
    wire: Vec<u8>,
}

impl DomainName {
    /// Walks the label chain starting at `offset` and returns the name together
    /// with the offset of the first byte after the terminator.
    ///
    /// The walk tracks its position explicitly: each length byte is read at the
    /// cursor, the cursor skips the label, and the next length byte is read
    /// from the new position.
    pub fn read(buf: &[u8], offset: usize) -> Result<(Self, usize), WireError> {
        let mut pos = offset;

        loop {
            if pos >= buf.len() {
                return Err(WireError::MalformedQuestion(format!(
                    "label chain starting at offset {} has no terminator",
                    offset
                )));
            }

            let label_len = buf[pos] as usize;
            if label_len == 0 {
                pos += 1;
                break;
            }
            if label_len > MAX_LABEL_LEN {
                return Err(WireError::MalformedQuestion(format!(
                    "unsupported label type 0x{:02x} at offset {}",
                    label_len, pos
                )));
            }

            pos += 1;
            if pos + label_len > buf.len() {
                return Err(WireError::MalformedQuestion(format!(
                    "label at offset {} needs {} bytes, {} available",
                    pos - 1,
                    label_len,
                    buf.len() - pos
                )));
            }
            pos += label_len;

            // one byte must remain for the root terminator
            if pos - offset >= MAX_NAME_LEN {
                return Err(WireError::MalformedQuestion(format!(
                    "name exceeds {} bytes",
                    MAX_NAME_LEN
                )));
            }
        }

        Ok((
            Self {
                wire: buf[offset..pos].to_vec(),
            },
            pos,
        ))
    }

    /// Builds a name from its dotted text form, e.g. `"codecrafters.io"`.
    /// A single trailing dot is accepted.
    pub fn from_dotted(name: &str) -> Result<Self, WireError> {
        let trimmed = name.strip_suffix('.').unwrap_or(name);
        if trimmed.is_empty() {
            return Err(WireError::EmptyDomain);
        }

        let mut wire = Vec::with_capacity(trimmed.len() + 2);
        for label in trimmed.split('.') {
            if label.is_empty() {
                return Err(WireError::MalformedQuestion(format!(
                    "empty label in '{}'",
                    name
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(WireError::MalformedQuestion(format!(
                    "label '{}' is longer than {} bytes",
                    label, MAX_LABEL_LEN
                )));
            }
            wire.push(label.len() as u8);
            wire.extend_from_slice(label.as_bytes());
        }
        wire.push(0);

        if wire.len() > MAX_NAME_LEN {
            return Err(WireError::MalformedQuestion(format!(
                "name exceeds {} bytes",
                MAX_NAME_LEN
            )));
        }

        Ok(Self { wire })
    }

    pub fn labels(&self) -> Labels<'_> {
        Labels {
            wire: &self.wire,
            pos: 0,
        }
    }

    pub fn label_count(&self) -> usize {
        self.labels().count()
    }

    pub fn wire_len(&self) -> usize {
        self.wire.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.wire
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for label in self.labels() {
            if !first {
                f.write_str(".")?;
            }
            first = false;
            f.write_str(&String::from_utf8_lossy(label))?;
        }
        if first {
            f.write_str(".")?;
        }
        Ok(())
    }
}

/// Iterator over the labels of a [`DomainName`], root label excluded.
pub struct Labels<'a> {
    wire: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for Labels<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let label_len = *self.wire.get(self.pos)? as usize;
        if label_len == 0 {
            return None;
        }
        let start = self.pos + 1;
        let label = self.wire.get(start..start + label_len)?;
        self.pos = start + label_len;
        Some(label)
    }
}
