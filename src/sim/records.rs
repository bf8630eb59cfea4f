//! Maze file reader: text → records.
//!
//! ## Format
//!   Line 1: `width height`
//!   Line 2: `startX startY`
//!   Line 3: `endX endY`
//!   Lines:  `x y marker`
//!
//! Blank lines and lines starting with `#` are skipped and do not count as
//! records. Numbers are kept signed here; range checks belong to the builder.
//!
//! ## Marker legend:
//!   `wall` / `b` = Wall          `coin` / `c` = Coin
//!   (case-insensitive; anything else is kept as `Unknown`)
//!
//! A broken header is fatal. A broken placement line is kept as
//! `Malformed` so the builder can reject it and carry on.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing {what} record")]
    MissingRecord { what: &'static str },
    #[error("line {line}: expected `{what}` as two integers, got `{text}`")]
    InvalidNumber {
        line: usize,
        what: &'static str,
        text: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Marker {
    Wall,
    Coin,
    Unknown(String),
}

impl Marker {
    pub fn parse(token: &str) -> Marker {
        match token.to_ascii_lowercase().as_str() {
            "wall" | "b" => Marker::Wall,
            "coin" | "c" => Marker::Coin,
            _ => Marker::Unknown(token.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementRecord {
    Place {
        line: usize,
        x: i64,
        y: i64,
        marker: Marker,
    },
    Malformed {
        line: usize,
        text: String,
    },
}

impl PlacementRecord {
    pub fn line(&self) -> usize {
        match self {
            PlacementRecord::Place { line, .. } | PlacementRecord::Malformed { line, .. } => *line,
        }
    }
}

/// Everything a maze file says, before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeRecords {
    pub size: (i64, i64),
    pub start: (i64, i64),
    pub end: (i64, i64),
    pub placements: Vec<PlacementRecord>,
}

// ══════════════════════════════════════════════════════════════
// Parsing
// ══════════════════════════════════════════════════════════════

pub fn parse(content: &str) -> Result<MazeRecords, RecordError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

    let size = parse_pair(lines.next(), "width height")?;
    let start = parse_pair(lines.next(), "startX startY")?;
    let end = parse_pair(lines.next(), "endX endY")?;
    let placements = lines.map(|(line, text)| parse_placement(line, text)).collect();

    Ok(MazeRecords {
        size,
        start,
        end,
        placements,
    })
}

fn parse_pair(
    entry: Option<(usize, &str)>,
    what: &'static str,
) -> Result<(i64, i64), RecordError> {
    let (line, text) = entry.ok_or(RecordError::MissingRecord { what })?;
    let parts: Vec<&str> = text.split_whitespace().collect();
    if let [a, b] = parts[..] {
        if let (Ok(a), Ok(b)) = (a.parse::<i64>(), b.parse::<i64>()) {
            return Ok((a, b));
        }
    }
    Err(RecordError::InvalidNumber {
        line,
        what,
        text: text.to_string(),
    })
}

fn parse_placement(line: usize, text: &str) -> PlacementRecord {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if let [x, y, marker] = parts[..] {
        if let (Ok(x), Ok(y)) = (x.parse::<i64>(), y.parse::<i64>()) {
            return PlacementRecord::Place {
                line,
                x,
                y,
                marker: Marker::parse(marker),
            };
        }
    }
    PlacementRecord::Malformed {
        line,
        text: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_header_and_placements() {
        let recs = parse("5 6\n1 1\n5 6\n2 2 wall\n3 3 coin\n").unwrap();
        assert_eq!(recs.size, (5, 6));
        assert_eq!(recs.start, (1, 1));
        assert_eq!(recs.end, (5, 6));
        assert_eq!(
            recs.placements,
            vec![
                PlacementRecord::Place { line: 4, x: 2, y: 2, marker: Marker::Wall },
                PlacementRecord::Place { line: 5, x: 3, y: 3, marker: Marker::Coin },
            ]
        );
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let recs = parse("# a maze\n\n3 3\n  1 1  \n# end\n3 3\n\n2 2 c\n").unwrap();
        assert_eq!(recs.size, (3, 3));
        assert_eq!(recs.end, (3, 3));
        assert_eq!(recs.placements.len(), 1);
        assert_eq!(recs.placements[0].line(), 8);
    }

    #[test]
    fn negative_numbers_survive_parsing() {
        let recs = parse("-1 4\n0 0\n1 1\n").unwrap();
        assert_eq!(recs.size, (-1, 4));
    }

    #[test]
    fn fewer_than_three_records_is_fatal() {
        assert_eq!(
            parse("3 3\n1 1\n"),
            Err(RecordError::MissingRecord { what: "endX endY" })
        );
        assert_eq!(
            parse(""),
            Err(RecordError::MissingRecord { what: "width height" })
        );
    }

    #[rstest]
    #[case("three three")]
    #[case("3")]
    #[case("3 3 3")]
    fn bad_header_is_fatal(#[case] header: &str) {
        let text = format!("{header}\n1 1\n2 2\n");
        assert!(matches!(
            parse(&text),
            Err(RecordError::InvalidNumber { line: 1, .. })
        ));
    }

    #[rstest]
    #[case("wall", Marker::Wall)]
    #[case("WALL", Marker::Wall)]
    #[case("b", Marker::Wall)]
    #[case("coin", Marker::Coin)]
    #[case("C", Marker::Coin)]
    #[case("door", Marker::Unknown("door".into()))]
    fn marker_tokens(#[case] token: &str, #[case] expected: Marker) {
        assert_eq!(Marker::parse(token), expected);
    }

    #[rstest]
    #[case("2 2")]
    #[case("x 2 wall")]
    #[case("2 2 wall extra")]
    fn broken_placement_is_kept_as_malformed(#[case] text: &str) {
        let recs = parse(&format!("3 3\n1 1\n3 3\n{text}\n")).unwrap();
        assert_eq!(
            recs.placements,
            vec![PlacementRecord::Malformed { line: 4, text: text.to_string() }]
        );
    }
}
