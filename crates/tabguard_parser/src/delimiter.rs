//! Delimiter detection.

/// Delimiters considered by [`detect_delimiter`], in tie-break order.
pub const CANDIDATE_DELIMITERS: [char; 4] = [',', ';', '\t', '|'];

const SAMPLE_LINES: usize = 10;

/// Guesses the field delimiter of `text`.
///
/// Each candidate is scored on the first non-blank lines by how often it
/// appears per line and how consistent that count is. Falls back to `,` when
/// no candidate appears at all.
///
/// # Example
///
/// ```rust
/// use tabguard_parser::detect_delimiter;
///
/// assert_eq!(detect_delimiter("a;b;c\n1;2;3\n"), ';');
/// assert_eq!(detect_delimiter("single column\n"), ',');
/// ```
pub fn detect_delimiter(text: &str) -> char {
    let sample: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(SAMPLE_LINES)
        .collect();

    if sample.is_empty() {
        return ',';
    }

    let mut best = ',';
    let mut best_score = 0.0f64;

    for candidate in CANDIDATE_DELIMITERS {
        let counts: Vec<f64> = sample
            .iter()
            .map(|line| count_unquoted(line, candidate) as f64)
            .collect();

        let avg = counts.iter().sum::<f64>() / counts.len() as f64;
        let variance = counts.iter().map(|c| (c - avg).powi(2)).sum::<f64>() / counts.len() as f64;
        let score = avg / (1.0 + variance.sqrt());

        if score > best_score {
            best_score = score;
            best = candidate;
        }
    }

    best
}

/// Counts `delimiter` outside double-quoted sections of a single line.
fn count_unquoted(line: &str, delimiter: char) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for c in line.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == delimiter && !in_quotes {
            count += 1;
        }
    }
    count
}
