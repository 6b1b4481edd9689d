//! Space-to-`%20` rewriting over code-point buffers.
//!
//! The buffer is a `[char]` whose first `length` entries are live text and whose
//! tail is padding reserved for the expansion. Encoding runs back to front so every
//! char is moved exactly once and nothing past the padding is ever needed.

use tracing::{debug, warn};

use crate::error::{Result, UrlifyError};

const SPACE: char = ' ';
const ENCODED_SPACE: [char; 3] = ['%', '2', '0'];

/// Number of ASCII spaces (U+0020) in `chars`. Other whitespace is not counted.
pub fn count_spaces(chars: &[char]) -> usize {
    chars.iter().filter(|&&ch| ch == SPACE).count()
}

/// Length of the encoded text for `length` live chars holding `spaces` spaces.
///
/// A space already takes one slot, so each one grows the text by two.
pub fn encoded_len(length: usize, spaces: usize) -> usize {
    length + spaces * (ENCODED_SPACE.len() - 1)
}

/// Rewrite the first `length` chars of `buffer` in place, replacing every space with `%20`.
///
/// The padding after `length` must be long enough for the expansion; chars past the
/// encoded region are left untouched. On error the buffer is not modified.
///
/// ```
/// let mut buffer: Vec<char> = "Mr John Smith    ".chars().collect();
/// let encoded = urlify::urlify_in_place(&mut buffer, 13).unwrap();
/// assert_eq!(encoded.iter().collect::<String>(), "Mr%20John%20Smith");
/// ```
pub fn urlify_in_place(buffer: &mut [char], length: usize) -> Result<&[char]> {
    let capacity = buffer.len();
    if length > capacity {
        warn!(length, capacity, "logical length past end of buffer");
        return Err(UrlifyError::InvalidLength { length, capacity });
    }

    let spaces = count_spaces(&buffer[..length]);
    let final_len = encoded_len(length, spaces);
    if final_len > capacity {
        warn!(final_len, capacity, "not enough padding for encoded text");
        return Err(UrlifyError::InsufficientCapacity {
            needed: final_len,
            available: capacity,
        });
    }

    debug!(length, spaces, final_len, "encoding buffer in place");
    let start = rewrite_back_to_front(buffer, length, final_len);
    Ok(&buffer[start..final_len])
}

/// Encode the first `length` chars of `text`, using the rest of `text` as padding.
///
/// Same preconditions as [`urlify_in_place`], measured in chars rather than bytes.
pub fn urlify(text: &str, length: usize) -> Result<String> {
    let mut buffer: Vec<char> = text.chars().collect();
    let encoded = urlify_in_place(&mut buffer, length)?;
    Ok(encoded.iter().collect())
}

/// Encode the first `length` chars of `text` without relying on any padding.
///
/// The final length is computed up front and a single working buffer of exactly that
/// size is filled back to front.
pub fn urlify_unpadded(text: &str, length: usize) -> Result<String> {
    let mut spaces = 0;
    let mut available = 0;
    for ch in text.chars() {
        if available == length {
            break;
        }
        if ch == SPACE {
            spaces += 1;
        }
        available += 1;
    }
    if available < length {
        warn!(length, available, "logical length past end of text");
        return Err(UrlifyError::InvalidLength {
            length,
            capacity: available,
        });
    }

    let final_len = encoded_len(length, spaces);
    debug!(length, spaces, final_len, "encoding into fresh buffer");

    let mut buffer = Vec::with_capacity(final_len);
    buffer.extend(text.chars().take(length));
    buffer.resize(final_len, SPACE);

    let start = rewrite_back_to_front(&mut buffer, length, final_len);
    Ok(buffer[start..].iter().collect())
}

/// Build a buffer holding `content` followed by exactly the padding its encoding needs.
///
/// The logical length to pass along with it is `content.chars().count()`.
pub fn padded_buffer(content: &str) -> Vec<char> {
    let mut buffer: Vec<char> = content.chars().collect();
    let final_len = encoded_len(buffer.len(), count_spaces(&buffer));
    buffer.resize(final_len, SPACE);
    buffer
}

/// Move `buffer[..length]` into `buffer[..final_len]`, expanding spaces on the way.
///
/// Returns where the written region starts. The write cursor never drops below the
/// read cursor, so unread chars are never clobbered.
fn rewrite_back_to_front(buffer: &mut [char], length: usize, final_len: usize) -> usize {
    let mut index = final_len;

    for i in (0..length).rev() {
        let ch = buffer[i];
        if ch == SPACE {
            buffer[index - ENCODED_SPACE.len()..index].copy_from_slice(&ENCODED_SPACE);
            index -= ENCODED_SPACE.len();
        } else {
            buffer[index - 1] = ch;
            index -= 1;
        }
    }

    index
}
