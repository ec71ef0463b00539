use geo::{coord, Coord};

use crate::error::FieldError;

/// Extracts a coordinate from the fields of a delimited record. The field at
/// `start_offset` is x and the one following it is y. Numbers are parsed
/// verbatim (after trimming surrounding whitespace) without any rounding or
/// transformation.
///
/// # Examples
///
/// ```rust
/// use geo::coord;
/// use geodecode_core::input::delimited::extract;
///
/// let fields = ["a", "b", "5.0", "10.0", "c"];
/// assert_eq!(extract(&fields, 2).unwrap(), coord! { x: 5.0, y: 10.0 });
/// assert_eq!(extract(&fields, 3).unwrap_err().index(), 4);
/// ```
pub fn extract<S: AsRef<str>>(fields: &[S], start_offset: usize) -> Result<Coord, FieldError> {
    let x = number_at(fields, start_offset)?;
    let y = number_at(fields, start_offset + 1)?;
    Ok(coord! { x: x, y: y })
}

/// Splits `line` at every occurrence of `delimiter` and extracts the
/// coordinate starting at `start_offset`
pub fn extract_from_line(
    line: &str,
    delimiter: char,
    start_offset: usize,
) -> Result<Coord, FieldError> {
    let fields = line.split(delimiter).collect::<Vec<_>>();
    extract(&fields, start_offset)
}

fn number_at<S: AsRef<str>>(fields: &[S], index: usize) -> Result<f64, FieldError> {
    let value: &str = fields
        .get(index)
        .ok_or(FieldError::Missing {
            index,
            count: fields.len(),
        })?
        .as_ref();
    value
        .trim()
        .parse::<f64>()
        .map_err(|source| FieldError::NotANumber {
            index,
            value: value.to_string(),
            source,
        })
}
