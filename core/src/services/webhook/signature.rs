//! Signature header parsing

/// Parsed `ts=...;h1=...` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader {
    /// Timestamp exactly as sent; it is part of the signed payload
    pub timestamp: String,
    /// Every `h1` value; any one may match
    pub signatures: Vec<String>,
}

impl SignatureHeader {
    /// Parse a signature header
    ///
    /// Pairs are separated by `;`, keys and values are trimmed and unknown
    /// keys are ignored. Returns `None` when `ts` or `h1` is missing or empty.
    pub fn parse(header: &str) -> Option<Self> {
        let mut timestamp = None;
        let mut signatures = Vec::new();

        for part in header.split(';') {
            let Some((key, value)) = part.split_once('=') else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.trim() {
                "ts" => timestamp = Some(value.to_string()),
                "h1" => signatures.push(value.to_string()),
                _ => {}
            }
        }

        let timestamp = timestamp?;
        if signatures.is_empty() {
            return None;
        }
        Some(Self {
            timestamp,
            signatures,
        })
    }

    /// Timestamp as unix seconds, if it is a decimal integer
    pub fn unix_timestamp(&self) -> Option<i64> {
        self.timestamp.parse().ok()
    }
}
