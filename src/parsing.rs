//! Fixed column field helpers.
//!
//! Catalog numbers are not consistently padded, so a field is read from a
//! column window by consuming the longest valid number starting at the cursor.
//! The cursor then advances by what was actually consumed, not by the window width.
use crate::error::ParsingError;

/// Returns the length of the longest float descriptor at the start of `content`,
/// leading whitespaces included, or None if there is no number to consume.
fn float_prefix_len(content: &str) -> Option<usize> {
    let bytes = content.as_bytes();
    let mut ptr = bytes.iter().take_while(|b| b.is_ascii_whitespace()).count();

    if matches!(bytes.get(ptr), Some(b'+') | Some(b'-')) {
        ptr += 1;
    }

    let int_digits = bytes[ptr..].iter().take_while(|b| b.is_ascii_digit()).count();
    ptr += int_digits;

    let mut frac_digits = 0;
    if bytes.get(ptr) == Some(&b'.') {
        frac_digits = bytes[ptr + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if int_digits + frac_digits > 0 {
            ptr += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    // exponent is only consumed when complete
    if matches!(bytes.get(ptr), Some(b'e') | Some(b'E')) {
        let mut exp = ptr + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits = bytes[exp..].iter().take_while(|b| b.is_ascii_digit()).count();
        if exp_digits > 0 {
            ptr = exp + exp_digits;
        }
    }

    Some(ptr)
}

/// Parses the float starting at `content`, returns its value
/// and the number of bytes consumed.
pub(crate) fn parse_float_prefix(content: &str) -> Result<(f64, usize), ParsingError> {
    let size =
        float_prefix_len(content).ok_or(ParsingError::FloatParsing(content.to_string()))?;
    let value = content[..size]
        .trim_start()
        .parse::<f64>()
        .map_err(|_| ParsingError::FloatParsing(content[..size].to_string()))?;
    Ok((value, size))
}

/// Cursor over a catalog line
pub(crate) struct FieldCursor<'a> {
    line: &'a str,
    ptr: usize,
}

impl<'a> FieldCursor<'a> {
    /// Builds a cursor, starting at given column
    pub fn new(line: &'a str, ptr: usize) -> Self {
        Self { line, ptr }
    }
    /// Current column
    pub fn position(&self) -> usize {
        self.ptr
    }
    /// Remaining content, from current column
    pub fn remainder(&self) -> &'a str {
        self.line.get(self.ptr..).unwrap_or("")
    }
    /// Parses next float within a `width` wide column window,
    /// and advances by the number of bytes actually consumed.
    pub fn next_float(&mut self, width: usize) -> Result<f64, ParsingError> {
        let end = (self.ptr + width).min(self.line.len());
        let window = self
            .line
            .get(self.ptr..end)
            .filter(|w| !w.is_empty())
            .ok_or(ParsingError::MissingField { column: self.ptr })?;
        let (value, size) = parse_float_prefix(window)?;
        self.ptr += size;
        Ok(value)
    }
}
