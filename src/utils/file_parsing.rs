/// Label used by data files for a value that was never recorded.
pub const UNKNOWN_VALUE: &str = "?";

#[inline]
pub fn strip_surrounding_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 {
        let (first, last) = (b[0], b[b.len() - 1]);
        if first == last && (first == b'\'' || first == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Splits one comma separated record into trimmed, unquoted fields.
///
/// Commas inside single or double quotes do not split. A trailing comma
/// yields a trailing empty field, so column counts stay honest.
pub fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(q) if ch == q => {
                quote = None;
                current.push(ch);
            }
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                current.push(ch);
            }
            None if ch == ',' => {
                fields.push(strip_surrounding_quotes(current.trim()).to_string());
                current.clear();
            }
            None => current.push(ch),
        }
    }
    fields.push(strip_surrounding_quotes(current.trim()).to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_quotes_works() {
        assert_eq!(strip_surrounding_quotes("'a,b'"), "a,b");
        assert_eq!(strip_surrounding_quotes(r#""x""#), "x");
        assert_eq!(strip_surrounding_quotes("'x\""), "'x\"");
        assert_eq!(strip_surrounding_quotes("nq"), "nq");
    }

    #[test]
    fn split_keeps_quoted_commas() {
        let fields = split_record(r#"republican, 'y,n' ,"n",?"#);
        assert_eq!(fields, vec!["republican", "y,n", "n", "?"]);
    }

    #[test]
    fn trailing_comma_gives_empty_field() {
        assert_eq!(split_record("a,b,"), vec!["a", "b", ""]);
        assert_eq!(split_record(""), vec![""]);
    }
}
