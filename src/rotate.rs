//! The turnways transforms.
//!
//! Everything this interpreter reads and shows is rotated a quarter turn:
//! what looks like row `i` of a turnways text is column `i` of the ordinary
//! horizontal text. [`flop`] rotates horizontal text into turnways form,
//! [`flip`] rotates turnways text back. The two are not exact inverses:
//! `flop` pads short rows with spaces, while `flip` drops everything past
//! the length of each row and lets the first row decide how many rows come
//! out.

/// Rotate horizontal text into turnways (column-major) form.
///
/// Output row `i` holds character `i` of every input row in order, with a
/// space substituted wherever an input row is too short.
pub fn flop(text: &str) -> String {
    let lines = text.lines().map(|line| line.chars().collect::<Vec<_>>()).collect::<Vec<_>>();

    let width = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let mut columns = vec![String::new(); width];

    for line in &lines {
        for (i, column) in columns.iter_mut().enumerate() {
            column.push(*line.get(i).unwrap_or(&' '));
        }
    }

    columns.join("\n")
}

/// Rotate turnways (column-major) text back into horizontal form.
///
/// The first row governs: its length is the number of output rows. Rows
/// shorter than the first contribute nothing to the output rows beyond
/// their own length; there is no padding.
pub fn flip(text: &str) -> String {
    let lines = text.lines().map(|line| line.chars().collect::<Vec<_>>()).collect::<Vec<_>>();

    let Some(first) = lines.first() else {
        return String::new();
    };

    let mut rows = Vec::with_capacity(first.len());

    for x in 0..first.len() {
        let mut row = String::new();
        for line in &lines {
            if let Some(c) = line.get(x) {
                row.push(*c);
            }
        }
        rows.push(row);
    }

    rows.join("\n")
}
