use std::fmt;

use crate::{DebugLogError, OverflowPolicy};

/// Size of the message buffer used by the default policy.
pub const BUFFER_SIZE: usize = 4096;

/// String sink that refuses to grow to `limit` bytes or beyond.
///
/// Once a write has been refused every following write is refused too, so a `Display`
/// impl that ignores the error cannot sneak a shorter tail into the buffer.
struct BoundedBuffer {
    buf: String,
    limit: Option<usize>,
    overflowed: bool,
}

impl BoundedBuffer {
    fn bounded(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity.min(BUFFER_SIZE)),
            limit: Some(capacity),
            overflowed: false,
        }
    }

    fn unbounded() -> Self {
        Self {
            buf: String::new(),
            limit: None,
            overflowed: false,
        }
    }
}

impl fmt::Write for BoundedBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.overflowed {
            return Err(fmt::Error);
        }
        if let Some(limit) = self.limit {
            if self.buf.len() + s.len() >= limit {
                self.overflowed = true;
                return Err(fmt::Error);
            }
        }
        self.buf.push_str(s);
        Ok(())
    }
}

/// Formats `args` according to `policy`.
///
/// With [`OverflowPolicy::Drop`] the message must be strictly shorter than `capacity`
/// bytes. Under either policy the message must not be empty.
pub fn format_message(
    args: fmt::Arguments<'_>,
    policy: OverflowPolicy,
    capacity: usize,
) -> Result<String, DebugLogError> {
    let mut buffer = match policy {
        OverflowPolicy::Drop => BoundedBuffer::bounded(capacity),
        OverflowPolicy::Grow => BoundedBuffer::unbounded(),
    };

    let result = fmt::write(&mut buffer, args);
    if buffer.overflowed {
        return Err(DebugLogError::Truncated { capacity });
    }
    result?;

    if buffer.buf.is_empty() {
        return Err(DebugLogError::EmptyMessage);
    }
    Ok(buffer.buf)
}
