//! Row ordering with per-call type sniffing.
//!
//! A column is compared as integers only when the value in the *first* row is
//! a non-empty run of ASCII digits; otherwise the whole column is compared as
//! text (byte order). Later rows never influence the choice, so a column whose
//! first value is text but whose remaining values are numbers sorts
//! lexicographically.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::table::{ensure_width, Row};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    }
}

/// Decide how column `index` compares, looking at row 0 only.
pub fn sniff_kind(rows: &[Row], index: usize) -> ColumnKind {
    match rows.first().and_then(|r| r.get(index)) {
        Some(v) if !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit()) => ColumnKind::Integer,
        _ => ColumnKind::Text,
    }
}

/// Sort `rows` in place by column `index`.
///
/// On error (short row, unparseable integer) `rows` is left untouched.
pub fn sort_rows(rows: &mut Vec<Row>, index: usize, order: SortOrder) -> Result<()> {
    if rows.is_empty() {
        return Ok(());
    }
    ensure_width(rows, index)?;

    let mut perm: Vec<usize> = (0..rows.len()).collect();
    match sniff_kind(rows, index) {
        ColumnKind::Integer => {
            let keys = rows
                .iter()
                .map(|r| parse_integer(&r[index]))
                .collect::<Result<Vec<i64>>>()?;
            perm.sort_by(|&a, &b| order.apply(keys[a].cmp(&keys[b])));
        }
        ColumnKind::Text => {
            perm.sort_by(|&a, &b| order.apply(rows[a][index].cmp(&rows[b][index])));
        }
    }

    let mut taken: Vec<Option<Row>> = rows.drain(..).map(Some).collect();
    rows.extend(perm.into_iter().filter_map(|i| taken[i].take()));
    Ok(())
}

/// Leading-prefix integer conversion: skips leading whitespace, takes an
/// optional sign and the longest run of digits, and ignores whatever follows
/// (`" 25"` is 25, `"12abc"` is 12). No digits or overflow is an error.
fn parse_integer(value: &str) -> Result<i64> {
    let invalid = || Error::InvalidNumber {
        value: value.to_string(),
    };
    let s = value.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(invalid());
    }

    let mut n: i64 = 0;
    for b in rest[..digits].bytes() {
        let d = i64::from(b - b'0');
        let d = if negative { -d } else { d };
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add(d))
            .ok_or_else(invalid)?;
    }
    Ok(n)
}
