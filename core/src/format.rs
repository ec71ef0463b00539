use std::{fmt, str::FromStr};

use itertools::Itertools;

use crate::error::UnknownFormatError;

/// The serialization of the lines handed to a
/// [`FormatMapper`](crate::mapper::FormatMapper)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatTag {
    Csv,
    Tsv,
    GeoJson,
    Wkt,
    Comma,
    Tab,
    QuestionMark,
    SingleQuote,
    Quote,
    Underscore,
    Dash,
    Percent,
    Tilde,
    Pipe,
    Semicolon,
}

/// How lines of a given [`FormatTag`] are turned into geometries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatFamily {
    /// Fields separated by the given character, coordinates read by offset
    Delimited(char),

    /// One Well-Known Text geometry per line
    Wkt,

    /// One GeoJSON geometry or feature per line
    GeoJson,
}

impl FormatTag {
    /// Every known format tag
    pub const ALL: [FormatTag; 15] = [
        FormatTag::Csv,
        FormatTag::Tsv,
        FormatTag::GeoJson,
        FormatTag::Wkt,
        FormatTag::Comma,
        FormatTag::Tab,
        FormatTag::QuestionMark,
        FormatTag::SingleQuote,
        FormatTag::Quote,
        FormatTag::Underscore,
        FormatTag::Dash,
        FormatTag::Percent,
        FormatTag::Tilde,
        FormatTag::Pipe,
        FormatTag::Semicolon,
    ];

    /// The canonical (upper-case) name of this tag
    pub fn name(&self) -> &'static str {
        match self {
            FormatTag::Csv => "CSV",
            FormatTag::Tsv => "TSV",
            FormatTag::GeoJson => "GEOJSON",
            FormatTag::Wkt => "WKT",
            FormatTag::Comma => "COMMA",
            FormatTag::Tab => "TAB",
            FormatTag::QuestionMark => "QUESTIONMARK",
            FormatTag::SingleQuote => "SINGLEQUOTE",
            FormatTag::Quote => "QUOTE",
            FormatTag::Underscore => "UNDERSCORE",
            FormatTag::Dash => "DASH",
            FormatTag::Percent => "PERCENT",
            FormatTag::Tilde => "TILDE",
            FormatTag::Pipe => "PIPE",
            FormatTag::Semicolon => "SEMICOLON",
        }
    }

    /// Returns the field delimiter or [`None`] if lines of this format are
    /// not split into fields
    pub fn delimiter(&self) -> Option<char> {
        match self.family() {
            FormatFamily::Delimited(d) => Some(d),
            FormatFamily::Wkt | FormatFamily::GeoJson => None,
        }
    }

    pub fn family(&self) -> FormatFamily {
        match self {
            FormatTag::Csv | FormatTag::Comma => FormatFamily::Delimited(','),
            FormatTag::Tsv | FormatTag::Tab => FormatFamily::Delimited('\t'),
            FormatTag::QuestionMark => FormatFamily::Delimited('?'),
            FormatTag::SingleQuote => FormatFamily::Delimited('\''),
            FormatTag::Quote => FormatFamily::Delimited('"'),
            FormatTag::Underscore => FormatFamily::Delimited('_'),
            FormatTag::Dash => FormatFamily::Delimited('-'),
            FormatTag::Percent => FormatFamily::Delimited('%'),
            FormatTag::Tilde => FormatFamily::Delimited('~'),
            FormatTag::Pipe => FormatFamily::Delimited('|'),
            FormatTag::Semicolon => FormatFamily::Delimited(';'),
            FormatTag::GeoJson => FormatFamily::GeoJson,
            FormatTag::Wkt => FormatFamily::Wkt,
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormatTag {
    type Err = UnknownFormatError;

    /// Parses a tag name, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        FormatTag::ALL
            .into_iter()
            .find(|tag| tag.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownFormatError {
                name: s.to_string(),
                expected: FormatTag::ALL.iter().map(FormatTag::name).join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use assertor::{assert_that, EqualityAssertion};

    use super::{FormatFamily, FormatTag};

    #[test]
    fn delimiters() {
        assert_that!(FormatTag::Csv.delimiter()).is_equal_to(Some(','));
        assert_that!(FormatTag::Tsv.delimiter()).is_equal_to(Some('\t'));
        assert_that!(FormatTag::Pipe.delimiter()).is_equal_to(Some('|'));
        assert_that!(FormatTag::Semicolon.delimiter()).is_equal_to(Some(';'));
        assert_that!(FormatTag::Wkt.delimiter()).is_equal_to(None);
        assert_that!(FormatTag::GeoJson.delimiter()).is_equal_to(None);
    }

    #[test]
    fn families() {
        assert_that!(FormatTag::Comma.family()).is_equal_to(FormatFamily::Delimited(','));
        assert_that!(FormatTag::Wkt.family()).is_equal_to(FormatFamily::Wkt);
        assert_that!(FormatTag::GeoJson.family()).is_equal_to(FormatFamily::GeoJson);
    }

    /// Every tag must parse back from its own name
    #[test]
    fn parse_names() {
        for tag in FormatTag::ALL {
            assert_that!(tag.to_string().parse::<FormatTag>()).is_equal_to(Ok(tag));
        }
        assert_that!("geojson".parse::<FormatTag>()).is_equal_to(Ok(FormatTag::GeoJson));
        assert_that!(" Tsv ".parse::<FormatTag>()).is_equal_to(Ok(FormatTag::Tsv));
    }

    #[test]
    fn parse_unknown() {
        let err = "wkb".parse::<FormatTag>().unwrap_err();
        assert_that!(err.name).is_equal_to("wkb".to_string());
        assert!(err.expected.starts_with("CSV, TSV, GEOJSON, WKT"));
    }
}
