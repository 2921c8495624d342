//! Status values.
//!
//! A [`Status`] reports the outcome of an operation. The OK status holds no
//! allocation. Any other status owns one boxed block:
//!
//! ```text
//! [length:u32 LE][code:u8][message:length bytes]
//!       4B           1B       variable
//! ```
//!
//! The block is also the persisted form, see [`Status::encoded`] and
//! [`Status::from_encoded`].

use std::fmt::{self, Display};

/// Size of the fixed block header: 4-byte length plus 1-byte code.
const HEADER_LEN: usize = 5;

/// Separator placed between the primary and secondary message.
const MESSAGE_SEPARATOR: &[u8] = b": ";

/// Discriminant of a [`Status`].
///
/// The numeric values are part of the encoded form and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Code {
    Ok = 0,
    NotFound = 1,
    AlreadyExists = 2,
    Corruption = 3,
    NotSupported = 4,
    InvalidArgument = 5,
    IoError = 6,
    AssertionFailed = 7,
    AccessDenied = 8,
}

impl Code {
    /// Highest code value that may appear in an encoded block.
    pub const MAX: u8 = Code::AccessDenied as u8;

    /// Human-readable label used when rendering a status.
    pub fn label(self) -> &'static str {
        match self {
            Code::Ok => "OK",
            Code::NotFound => "Not found",
            Code::AlreadyExists => "Already exists",
            Code::Corruption => "Corruption",
            Code::NotSupported => "Not implemented",
            Code::InvalidArgument => "Invalid argument",
            Code::IoError => "IO error",
            Code::AssertionFailed => "Assertion failed",
            Code::AccessDenied => "Permission denied",
        }
    }

    /// Returns the code for a raw value, or `None` if it is out of range.
    pub fn from_u8(value: u8) -> Option<Self> {
        let code = match value {
            0 => Code::Ok,
            1 => Code::NotFound,
            2 => Code::AlreadyExists,
            3 => Code::Corruption,
            4 => Code::NotSupported,
            5 => Code::InvalidArgument,
            6 => Code::IoError,
            7 => Code::AssertionFailed,
            8 => Code::AccessDenied,
            _ => return None,
        };
        Some(code)
    }
}

impl From<Code> for u8 {
    fn from(code: Code) -> Self {
        code as u8
    }
}

impl TryFrom<u8> for Code {
    type Error = StatusDecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Code::from_u8(value).ok_or(StatusDecodeError::UnknownCode { code: value })
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors from parsing an encoded status block.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusDecodeError {
    /// The input is shorter than the 5-byte header.
    #[error("status block truncated: need at least 5 bytes, have {actual}")]
    TruncatedHeader { actual: usize },

    /// The declared message length disagrees with the bytes supplied.
    #[error("status block length mismatch: header declares {declared} message bytes, found {actual}")]
    LengthMismatch { declared: usize, actual: usize },

    /// The code byte is not a known error code.
    #[error("unknown status code {code}")]
    UnknownCode { code: u8 },

    /// OK has no encoded form.
    #[error("OK status has no encoded block")]
    OkBlock,
}

/// Outcome of an operation: success, or an error code with a message.
///
/// Cloning deep-copies the error block. Concurrent readers of one value need
/// no synchronization; mutation requires exclusive access, which `&mut`
/// already guarantees.
#[derive(PartialEq, Eq, Hash, Default)]
pub struct Status {
    /// `None` for OK, otherwise `[len:u32 LE][code:u8][message]`.
    state: Option<Box<[u8]>>,
}

macro_rules! status_constructors {
    ($( $code:ident => $ctor:ident, $ctor_with:ident, $is:ident; )*) => {
        impl Status {
            $(
                #[doc = concat!("Creates a `", stringify!($code), "` status with `msg`.")]
                pub fn $ctor(msg: impl AsRef<[u8]>) -> Self {
                    Self::new(Code::$code, msg.as_ref(), &[])
                }

                #[doc = concat!(
                    "Creates a `", stringify!($code),
                    "` status whose message is `msg`, followed by `\": \"` and `msg2` when `msg2` is non-empty."
                )]
                pub fn $ctor_with(msg: impl AsRef<[u8]>, msg2: impl AsRef<[u8]>) -> Self {
                    Self::new(Code::$code, msg.as_ref(), msg2.as_ref())
                }

                #[doc = concat!("Returns true if this is a `", stringify!($code), "` status.")]
                pub fn $is(&self) -> bool {
                    self.code() == Code::$code
                }
            )*
        }
    };
}

status_constructors! {
    NotFound => not_found, not_found_with, is_not_found;
    AlreadyExists => already_exists, already_exists_with, is_already_exists;
    Corruption => corruption, corruption_with, is_corruption;
    NotSupported => not_supported, not_supported_with, is_not_supported;
    InvalidArgument => invalid_argument, invalid_argument_with, is_invalid_argument;
    IoError => io_error, io_error_with, is_io_error;
    AssertionFailed => assertion_failed, assertion_failed_with, is_assertion_failed;
    AccessDenied => access_denied, access_denied_with, is_access_denied;
}

impl Status {
    /// Returns the success status.
    pub const fn ok() -> Self {
        Self { state: None }
    }

    /// Creates a status with an explicit code.
    ///
    /// `Code::Ok` ignores both messages and yields [`Status::ok`].
    ///
    /// # Panics
    ///
    /// Panics if the combined message exceeds `u32::MAX` bytes.
    pub fn new(code: Code, msg: &[u8], msg2: &[u8]) -> Self {
        if code == Code::Ok {
            return Self::ok();
        }
        let size = msg.len()
            + if msg2.is_empty() {
                0
            } else {
                MESSAGE_SEPARATOR.len() + msg2.len()
            };
        let Ok(encoded_size) = u32::try_from(size) else {
            panic!("status message of {size} bytes exceeds u32::MAX");
        };

        let mut block = Vec::with_capacity(HEADER_LEN + size);
        block.extend_from_slice(&encoded_size.to_le_bytes());
        block.push(code as u8);
        block.extend_from_slice(msg);
        if !msg2.is_empty() {
            block.extend_from_slice(MESSAGE_SEPARATOR);
            block.extend_from_slice(msg2);
        }
        Self {
            state: Some(block.into_boxed_slice()),
        }
    }

    /// Returns true if the status indicates success.
    pub fn is_ok(&self) -> bool {
        self.state.is_none()
    }

    /// Returns the discriminant.
    pub fn code(&self) -> Code {
        match &self.state {
            None => Code::Ok,
            // Blocks are only built by `new` and `from_encoded`, both of
            // which store a valid code byte.
            Some(block) => Code::from_u8(block[4]).unwrap_or(Code::IoError),
        }
    }

    /// Returns the numeric code.
    pub fn err_code(&self) -> u8 {
        self.code() as u8
    }

    /// Returns the message bytes; empty for OK.
    pub fn message(&self) -> &[u8] {
        match &self.state {
            None => &[],
            Some(block) => &block[HEADER_LEN..],
        }
    }

    /// Returns the encoded block, or `None` for OK.
    pub fn encoded(&self) -> Option<&[u8]> {
        self.state.as_deref()
    }

    /// Parses an encoded block produced by [`Status::encoded`].
    pub fn from_encoded(block: &[u8]) -> Result<Self, StatusDecodeError> {
        if block.len() < HEADER_LEN {
            return Err(StatusDecodeError::TruncatedHeader {
                actual: block.len(),
            });
        }
        let declared = u32::from_le_bytes([block[0], block[1], block[2], block[3]]) as usize;
        let actual = block.len() - HEADER_LEN;
        if declared != actual {
            return Err(StatusDecodeError::LengthMismatch { declared, actual });
        }
        match Code::try_from(block[4])? {
            Code::Ok => Err(StatusDecodeError::OkBlock),
            _ => Ok(Self {
                state: Some(Box::from(block)),
            }),
        }
    }

    /// Renders the status: `"OK"`, `"<label>: <message>"`, or `"<label>"`
    /// when the message is empty.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// Converts into a `Result`, mapping OK to `Ok(())`.
    pub fn into_result(self) -> crate::Result<()> {
        if self.is_ok() { Ok(()) } else { Err(self) }
    }
}

impl Clone for Status {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }

    /// Reassigns from `source`, doing nothing when both already hold the
    /// same state.
    fn clone_from(&mut self, source: &Self) {
        if self.state != source.state {
            self.state.clone_from(&source.state);
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.code().label();
        let message = self.message();
        if message.is_empty() {
            f.write_str(label)
        } else {
            write!(f, "{label}: {}", String::from_utf8_lossy(message))
        }
    }
}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Status")
            .field("code", &self.code())
            .field("message", &self.message().escape_ascii().to_string())
            .finish()
    }
}

impl std::error::Error for Status {}

impl From<crate::Result<()>> for Status {
    fn from(result: crate::Result<()>) -> Self {
        match result {
            Ok(()) => Status::ok(),
            Err(status) => status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_has_no_block() {
        let status = Status::ok();
        assert!(status.is_ok());
        assert_eq!(status.code(), Code::Ok);
        assert!(status.encoded().is_none());
        assert_eq!(status.to_display_string(), "OK");
    }

    #[test]
    fn block_layout_is_length_code_message() {
        let status = Status::corruption_with("bad block", "crc");
        let block = status.encoded().unwrap();
        assert_eq!(&block[..4], &14u32.to_le_bytes());
        assert_eq!(block[4], 3);
        assert_eq!(&block[5..], b"bad block: crc");
    }

    #[test]
    fn empty_secondary_message_adds_no_separator() {
        let status = Status::not_found_with("missing.txt", "");
        assert_eq!(status.message(), b"missing.txt");
    }

    #[test]
    fn empty_message_renders_label_only() {
        let status = Status::not_supported("");
        assert_eq!(status.to_display_string(), "Not implemented");
    }

    #[test]
    fn new_with_ok_code_is_ok() {
        let status = Status::new(Code::Ok, b"ignored", b"");
        assert!(status.is_ok());
    }

    #[test]
    fn decode_rejects_malformed_blocks() {
        assert_eq!(
            Status::from_encoded(&[1, 0, 0]),
            Err(StatusDecodeError::TruncatedHeader { actual: 3 })
        );
        assert_eq!(
            Status::from_encoded(&[4, 0, 0, 0, 1, b'a']),
            Err(StatusDecodeError::LengthMismatch {
                declared: 4,
                actual: 1
            })
        );
        assert_eq!(
            Status::from_encoded(&[0, 0, 0, 0, 9]),
            Err(StatusDecodeError::UnknownCode { code: 9 })
        );
        assert_eq!(
            Status::from_encoded(&[0, 0, 0, 0, 0]),
            Err(StatusDecodeError::OkBlock)
        );
    }

    #[test]
    fn result_conversions() {
        assert!(Status::ok().into_result().is_ok());
        let err = Status::access_denied("/root").into_result().unwrap_err();
        assert!(err.is_access_denied());

        let back = Status::from(Err::<(), _>(err));
        assert_eq!(back.to_display_string(), "Permission denied: /root");
    }
}
