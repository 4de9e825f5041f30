// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the container format for Ember scene files.
//!
//! Every persisted scene is a fixed-size [`SceneHeader`] followed by a
//! variable-length payload. The header names the strategy that encoded the
//! payload, so a loader can hand the payload to the matching decoder.

use std::fmt;

/// A unique byte sequence to identify Ember scene files. ("EMBERSCN").
pub const HEADER_MAGIC_BYTES: [u8; 8] = *b"EMBERSCN";
/// The header layout version written by this build.
pub const CURRENT_FORMAT_VERSION: u8 = 1;
const STRATEGY_ID_LEN: usize = 32;

/// An error raised while reading or building a scene file container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneFormatError {
    /// The byte slice is shorter than a header.
    TooShort {
        /// Number of bytes that were available.
        len: usize,
    },
    /// The file does not start with [`HEADER_MAGIC_BYTES`].
    InvalidMagic,
    /// A strategy id does not fit in the fixed-size header field.
    StrategyIdTooLong(String),
    /// The strategy id field is not valid UTF-8.
    InvalidStrategyId,
    /// The payload does not have the length announced by the header.
    PayloadLengthMismatch {
        /// Length recorded in the header.
        expected: u64,
        /// Length actually present after the header.
        actual: u64,
    },
}

impl fmt::Display for SceneFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneFormatError::TooShort { len } => write!(
                f,
                "Not enough bytes to form a valid header ({len} < {})",
                SceneHeader::SIZE
            ),
            SceneFormatError::InvalidMagic => {
                write!(f, "Invalid magic bytes; not an Ember scene file")
            }
            SceneFormatError::StrategyIdTooLong(id) => write!(
                f,
                "Strategy id '{id}' is longer than {STRATEGY_ID_LEN} bytes"
            ),
            SceneFormatError::InvalidStrategyId => {
                write!(f, "Strategy id in header is not valid UTF-8")
            }
            SceneFormatError::PayloadLengthMismatch { expected, actual } => write!(
                f,
                "Payload length mismatch: header says {expected} bytes, found {actual}"
            ),
        }
    }
}

impl std::error::Error for SceneFormatError {}

/// The fixed-size header at the beginning of every Ember scene file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneHeader {
    /// Magic bytes to identify the file type, must be `HEADER_MAGIC_BYTES`.
    pub magic_bytes: [u8; 8],
    /// The version of the header layout itself.
    pub format_version: u8,
    /// A null-padded UTF-8 string identifying the serialization strategy used.
    /// e.g., "EM_DOCUMENT_RON_V1".
    pub strategy_id: [u8; STRATEGY_ID_LEN],
    /// The length of the payload data that follows this header, in bytes.
    pub payload_length: u64,
}

/// A logical representation of a full scene file in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneFile {
    /// The parsed header data.
    pub header: SceneHeader,
    /// The raw, variable-length payload data.
    pub payload: Vec<u8>,
}

// The header is a fixed little-endian layout written byte by byte, not through serde.
impl SceneHeader {
    /// The total size of the header in bytes.
    pub const SIZE: usize = 8 + 1 + STRATEGY_ID_LEN + 8;

    /// Builds a header for a payload of `payload_length` bytes produced by `strategy_id`.
    pub fn new(strategy_id: &str, payload_length: u64) -> Result<Self, SceneFormatError> {
        let bytes = strategy_id.as_bytes();
        if bytes.len() > STRATEGY_ID_LEN {
            return Err(SceneFormatError::StrategyIdTooLong(strategy_id.to_string()));
        }
        let mut strategy_id_bytes = [0u8; STRATEGY_ID_LEN];
        strategy_id_bytes[..bytes.len()].copy_from_slice(bytes);

        Ok(Self {
            magic_bytes: HEADER_MAGIC_BYTES,
            format_version: CURRENT_FORMAT_VERSION,
            strategy_id: strategy_id_bytes,
            payload_length,
        })
    }

    /// Returns `true` when the header was written by a newer build than this one.
    pub fn is_newer_than_current(&self) -> bool {
        self.format_version > CURRENT_FORMAT_VERSION
    }

    /// Returns the strategy id with its null padding removed.
    pub fn strategy_id_str(&self) -> Result<&str, SceneFormatError> {
        std::str::from_utf8(&self.strategy_id)
            .map(|s| s.trim_end_matches('\0'))
            .map_err(|_| SceneFormatError::InvalidStrategyId)
    }

    /// Writes the header into its fixed byte layout.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..8].copy_from_slice(&self.magic_bytes);
        out[8] = self.format_version;
        out[9..9 + STRATEGY_ID_LEN].copy_from_slice(&self.strategy_id);
        out[9 + STRATEGY_ID_LEN..].copy_from_slice(&self.payload_length.to_le_bytes());
        out
    }

    /// Attempts to parse a `SceneHeader` from the beginning of a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SceneFormatError> {
        if bytes.len() < Self::SIZE {
            return Err(SceneFormatError::TooShort { len: bytes.len() });
        }

        let mut magic_bytes = [0u8; 8];
        magic_bytes.copy_from_slice(&bytes[0..8]);
        if magic_bytes != HEADER_MAGIC_BYTES {
            return Err(SceneFormatError::InvalidMagic);
        }

        let format_version = bytes[8];

        let mut strategy_id = [0u8; STRATEGY_ID_LEN];
        strategy_id.copy_from_slice(&bytes[9..9 + STRATEGY_ID_LEN]);

        let mut length_bytes = [0u8; 8];
        length_bytes.copy_from_slice(&bytes[9 + STRATEGY_ID_LEN..Self::SIZE]);
        let payload_length = u64::from_le_bytes(length_bytes);

        let header = Self {
            magic_bytes,
            format_version,
            strategy_id,
            payload_length,
        };
        // No migration exists; newer headers are read with the current layout.
        if header.is_newer_than_current() {
            log::warn!(
                "Scene header has format version {format_version}, newer than {CURRENT_FORMAT_VERSION}; reading it as version {CURRENT_FORMAT_VERSION}"
            );
        }
        Ok(header)
    }
}

impl SceneFile {
    /// Wraps `payload` in a container tagged with `strategy_id`.
    pub fn new(strategy_id: &str, payload: Vec<u8>) -> Result<Self, SceneFormatError> {
        let header = SceneHeader::new(strategy_id, payload.len() as u64)?;
        Ok(Self { header, payload })
    }

    /// Serializes the header followed by the payload.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(SceneHeader::SIZE + self.payload.len());
        out.extend_from_slice(&self.header.to_bytes());
        out.extend_from_slice(&self.payload);
        out
    }

    /// Parses a full scene file, checking the payload against the header's length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SceneFormatError> {
        let header = SceneHeader::from_bytes(bytes)?;
        let payload = &bytes[SceneHeader::SIZE..];
        if payload.len() as u64 != header.payload_length {
            return Err(SceneFormatError::PayloadLengthMismatch {
                expected: header.payload_length,
                actual: payload.len() as u64,
            });
        }
        Ok(Self {
            header,
            payload: payload.to_vec(),
        })
    }
}
