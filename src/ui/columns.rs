//! Fixed-width column layout for lists of short names

use unicode_width::UnicodeWidthStr;

/// Line width used when the terminal size is unknown
pub const DEFAULT_WIDTH: usize = 80;

/// Spaces between columns
const GUTTER: usize = 2;

/// Lays `names` out in as many columns as fit in `width`
///
/// Widths are terminal display columns, so wide (CJK) characters count as two
/// and combining marks as zero. Every cell is padded to the widest name, rows are filled left to right, and
/// the last cell of each row carries no padding. An empty list yields an empty
/// string; a single name yields exactly that name.
pub fn columnize<S: AsRef<str>>(names: &[S], width: usize) -> String {
    let Some(cell) = names.iter().map(|n| UnicodeWidthStr::width(n.as_ref())).max() else {
        return String::new();
    };
    let columns = ((width + GUTTER) / (cell + GUTTER)).max(1);

    names
        .chunks(columns)
        .map(|row| {
            let mut line = String::new();
            for (i, name) in row.iter().enumerate() {
                let name = name.as_ref();
                line.push_str(name);
                if i + 1 < row.len() {
                    let pad = cell - UnicodeWidthStr::width(name) + GUTTER;
                    line.extend(std::iter::repeat(' ').take(pad));
                }
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
