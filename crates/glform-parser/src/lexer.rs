//! Token-level parsers for designer statements.

use nom::{
    branch::alt,
    bytes::complete::{is_not, take_while, take_while1},
    character::complete::{anychar, char, digit0, digit1, multispace0, one_of},
    combinator::{map_res, opt, recognize},
    multi::{many0, separated_list0, separated_list1},
    sequence::{delimited, pair, terminated, tuple},
    IResult,
};

/// Parse an identifier (letter or underscore, then alphanumerics/underscores).
pub fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_alphabetic() || c == '_'),
        take_while(|c: char| c.is_alphanumeric() || c == '_'),
    ))(input)
}

/// Parse a dot-separated identifier path like `System.Windows.Forms.Button`.
pub fn dotted_path(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(char('.'), identifier)(input)
}

/// Parse a number: optional sign, digits with an optional decimal point, and
/// an optional C# literal suffix (`6F`, `1.5D`, `2M`).
pub fn number(input: &str) -> IResult<&str, f64> {
    terminated(
        map_res(
            recognize(pair(
                opt(one_of("+-")),
                alt((
                    recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                    recognize(pair(char('.'), digit1)),
                )),
            )),
            |s: &str| s.parse::<f64>(),
        ),
        opt(one_of("fFdDmM")),
    )(input)
}

/// Parse a double-quoted string literal, returning the raw text between the
/// quotes. Backslash escapes are skipped over but left as written.
pub fn string_literal(input: &str) -> IResult<&str, &str> {
    delimited(
        char('"'),
        recognize(many0(alt((
            is_not("\\\""),
            recognize(pair(char('\\'), anychar)),
        )))),
        char('"'),
    )(input)
}

/// Parse the raw argument text of a call: `(5, 6)` yields `5, 6`.
pub fn call_args(input: &str) -> IResult<&str, &str> {
    delimited(char('('), take_while(|c: char| c != ')'), char(')'))(input)
}

/// Parse the tail of an item list: `"a", "b"});`.
pub fn string_list(input: &str) -> IResult<&str, Vec<&str>> {
    delimited(
        multispace0,
        separated_list0(delimited(multispace0, char(','), multispace0), string_literal),
        tuple((
            multispace0,
            opt(char(',')),
            multispace0,
            char('}'),
            multispace0,
            char(')'),
            multispace0,
            char(';'),
        )),
    )(input)
}

/// A non-blank line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Trimmed content.
    pub content: &'a str,
    /// 1-based line number in the source.
    pub line_number: usize,
}

/// Split input into trimmed lines, dropping blank and comment-only lines.
pub fn split_lines(input: &str) -> Vec<Line<'_>> {
    input
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with("//") {
                None
            } else {
                Some(Line {
                    content: trimmed,
                    line_number: i + 1,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier() {
        assert_eq!(identifier("okButton = x"), Ok((" = x", "okButton")));
        assert_eq!(identifier("_tmp1;"), Ok((";", "_tmp1")));
        assert!(identifier("1abc").is_err());
    }

    #[test]
    fn test_dotted_path_stops_at_call() {
        let (rest, path) = dotted_path("panel.Controls.Add(this.ok);").unwrap();
        assert_eq!(path, vec!["panel", "Controls", "Add"]);
        assert_eq!(rest, "(this.ok);");
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(number("42").unwrap().1, 42.0);
        assert_eq!(number("-3.75").unwrap().1, -3.75);
        assert_eq!(number("+8").unwrap().1, 8.0);
        assert_eq!(number(".5").unwrap().1, 0.5);
        assert_eq!(number("6F"), Ok(("", 6.0)));
        assert_eq!(number("13.5f)"), Ok((")", 13.5)));
        assert!(number("abc").is_err());
        assert!(number("-").is_err());
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(string_literal(r#""Move facet";"#), Ok((";", "Move facet")));
        assert_eq!(string_literal(r#""";"#), Ok((";", "")));
        assert_eq!(
            string_literal(r#""say \"hi\"\n" rest"#),
            Ok((" rest", r#"say \"hi\"\n"#))
        );
        assert!(string_literal(r#""open"#).is_err());
    }

    #[test]
    fn test_call_args() {
        assert_eq!(call_args("(5, 6);"), Ok((";", "5, 6")));
        assert_eq!(call_args("();"), Ok((";", "")));
    }

    #[test]
    fn test_string_list() {
        let (rest, items) = string_list(r#" "A", "B",  "C"});"#).unwrap();
        assert_eq!(rest, "");
        assert_eq!(items, vec!["A", "B", "C"]);

        let (_, items) = string_list(r#""only",});"#).unwrap();
        assert_eq!(items, vec!["only"]);

        let (_, items) = string_list("});").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_split_lines_skips_blank_and_comments() {
        let input = "  // \n  // okButton\n\n  this.okButton.Text = \"OK\";\n";
        let lines = split_lines(input);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].content, "this.okButton.Text = \"OK\";");
        assert_eq!(lines[0].line_number, 4);
    }
}
