use crate::format::FormatTag;

/// Configuration of a [`FormatMapper`](super::FormatMapper). Built once and
/// never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapperConfig {
    /// The format of the input lines
    format: FormatTag,

    /// The index of the first coordinate field in a delimited record
    start_offset: usize,

    /// The index after the last coordinate field. [`None`] if it has not
    /// been set explicitly.
    end_offset: Option<usize>,

    /// `true` if every decoded point should carry its input line
    carry_input_data: bool,
}

impl MapperConfig {
    /// Create a configuration for the given format with a start offset of 0
    /// and carry-mode disabled
    pub fn new(format: FormatTag) -> Self {
        Self {
            format,
            start_offset: 0,
            end_offset: None,
            carry_input_data: false,
        }
    }

    pub fn with_start_offset(mut self, start_offset: usize) -> Self {
        self.start_offset = start_offset;
        self
    }

    pub fn with_end_offset(mut self, end_offset: usize) -> Self {
        self.end_offset = Some(end_offset);
        self
    }

    pub fn with_carry_input_data(mut self, carry_input_data: bool) -> Self {
        self.carry_input_data = carry_input_data;
        self
    }

    pub fn format(&self) -> FormatTag {
        self.format
    }

    pub fn start_offset(&self) -> usize {
        self.start_offset
    }

    /// Returns the end offset. Defaults to the field right after the start
    /// offset. Points only ever read two fields, so this value does not
    /// influence point decoding.
    pub fn end_offset(&self) -> usize {
        self.end_offset.unwrap_or(self.start_offset.saturating_add(1))
    }

    pub fn carry_input_data(&self) -> bool {
        self.carry_input_data
    }
}
