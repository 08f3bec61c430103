//! Natural filename ordering for page entries.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compare two entry names the way a person reads them: digit runs compare
/// by numeric value, everything else compares case-insensitively.
///
/// "page2.jpg" sorts before "page10.jpg", and "Page03" ties with "page3"
/// up to the final raw-byte fallback, which keeps the order total and stable.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();
    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let da = take_digits(&mut ca);
                let db = take_digits(&mut cb);
                // Compare digit runs as unbounded integers: strip leading
                // zeros, then shorter run < longer run, then lexicographic.
                let ta = da.trim_start_matches('0');
                let tb = db.trim_start_matches('0');
                let ord = ta.len().cmp(&tb.len()).then_with(|| ta.cmp(tb));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                let xl = x.to_ascii_lowercase();
                let yl = y.to_ascii_lowercase();
                if xl != yl {
                    return xl.cmp(&yl);
                }
                ca.next();
                cb.next();
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut names: Vec<&str>) -> Vec<&str> {
        names.sort_by(|a, b| natural_cmp(a, b));
        names
    }

    #[test]
    fn numeric_runs_compare_by_value() {
        assert_eq!(
            sorted(vec!["page10.jpg", "page2.jpg", "page1.jpg"]),
            vec!["page1.jpg", "page2.jpg", "page10.jpg"]
        );
    }

    #[test]
    fn leading_zeros_do_not_change_the_value() {
        assert_eq!(
            sorted(vec!["03.png", "1.png", "002.png"]),
            vec!["1.png", "002.png", "03.png"]
        );
    }

    #[test]
    fn comparison_is_case_insensitive() {
        assert_eq!(natural_cmp("Page2.jpg", "page10.jpg"), Ordering::Less);
        assert_eq!(natural_cmp("apple", "BANANA"), Ordering::Less);
    }

    #[test]
    fn later_digit_runs_break_earlier_ties() {
        assert_eq!(natural_cmp("ch1/p2.jpg", "ch1/p10.jpg"), Ordering::Less);
        assert_eq!(natural_cmp("ch2/p1.jpg", "ch10/p1.jpg"), Ordering::Less);
    }

    #[test]
    fn plain_text_compares_lexicographically() {
        assert_eq!(sorted(vec!["cover.png", "back.png"]), vec!["back.png", "cover.png"]);
    }

    #[test]
    fn equal_values_fall_back_to_a_total_order() {
        assert_ne!(natural_cmp("01.jpg", "1.jpg"), Ordering::Equal);
        assert_eq!(natural_cmp("1.jpg", "1.jpg"), Ordering::Equal);
    }

    #[test]
    fn shorter_prefix_sorts_first() {
        assert_eq!(natural_cmp("page", "page1"), Ordering::Less);
    }

    #[test]
    fn huge_numbers_do_not_overflow() {
        assert_eq!(
            natural_cmp("p184467440737095516151.jpg", "p184467440737095516160.jpg"),
            Ordering::Less
        );
    }
}
