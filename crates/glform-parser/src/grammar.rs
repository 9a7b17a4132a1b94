//! Statement shapes recognized in a designer file.
//!
//! Every non-blank line is classified into one [`Statement`]. Anything that
//! does not match a known shape becomes [`Statement::Other`] and is ignored by
//! later stages.

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, space0, space1},
    combinator::all_consuming,
    error::{Error, ErrorKind},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

use glform_core::ParseError;

use crate::lexer::*;

/// Line that opens the declaration section.
pub const SECTION_MARKER: &str = "#endregion";

/// Suffix that closes a multi-line item list.
pub const LIST_TERMINATOR: &str = "});";

/// One classified input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    /// `#endregion`
    SectionMarker,
    /// `private System.Windows.Forms.Button okButton;`
    Declaration { source_type: &'a str, name: &'a str },
    /// `this.Name = "MoveFacet";`
    FormName(&'a str),
    /// `this.Text = "Move facet";`
    FormTitle(&'a str),
    /// `this.Controls.Add(this.okButton);`
    FormAdd(&'a str),
    /// `this.ClientSize = new System.Drawing.Size(213, 350);`
    ClientSize(CallArgs<'a>),
    /// `this.<control>.<property> ...`
    Member {
        control: &'a str,
        property: Member<'a>,
    },
    Other,
}

/// A property statement on a named control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Member<'a> {
    Location(CallArgs<'a>),
    Size(CallArgs<'a>),
    /// Raw string literal contents.
    Text(&'a str),
    /// Name of the contained control.
    AddChild(&'a str),
    /// Opening of `Items.AddRange(new object[] {`, carrying whatever follows
    /// the brace on the same line.
    ItemsStart(&'a str),
    /// Any other property; holds the property name.
    Unknown(&'a str),
}

/// Raw argument text of a constructor call such as `new Point(5, 6)`.
///
/// Kept unparsed until the statement is known to target a declared control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallArgs<'a>(pub &'a str);

impl<'a> CallArgs<'a> {
    /// Read the arguments as two integers, truncating toward zero.
    pub fn to_pair(self, line: usize) -> Result<(i32, i32), ParseError> {
        let fields: Vec<&str> = self.0.split(',').collect();
        let [first, second] = fields.as_slice() else {
            return Err(ParseError::InvalidFieldCount {
                args: self.0.to_string(),
                found: fields.len(),
                line,
            });
        };
        Ok((parse_integer(first, line)?, parse_integer(second, line)?))
    }
}

fn parse_integer(field: &str, line: usize) -> Result<i32, ParseError> {
    let field = field.trim();
    let invalid = || ParseError::InvalidNumber {
        value: field.to_string(),
        line,
    };
    let (_, value) = all_consuming(number)(field).map_err(|_| invalid())?;
    let truncated = value.trunc();
    if !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&truncated) {
        return Err(invalid());
    }
    Ok(truncated as i32)
}

/// Classify a trimmed line.
pub fn classify(content: &str) -> Statement<'_> {
    if content == SECTION_MARKER {
        return Statement::SectionMarker;
    }

    if let Ok((_, (source_type, name))) = declaration(content) {
        return Statement::Declaration { source_type, name };
    }

    let this_path: IResult<&str, Vec<&str>> = preceded(tag("this."), dotted_path)(content);
    let Ok((rest, path)) = this_path else {
        return Statement::Other;
    };

    match path.as_slice() {
        ["Name"] => assigned_string(rest).map_or(Statement::Other, Statement::FormName),
        ["Text"] => assigned_string(rest).map_or(Statement::Other, Statement::FormTitle),
        ["ClientSize"] => constructed(rest).map_or(Statement::Other, Statement::ClientSize),
        ["Controls", "Add"] => added_control(rest).map_or(Statement::Other, Statement::FormAdd),
        [control, property @ ..] if !property.is_empty() => Statement::Member {
            control: *control,
            property: classify_property(property, rest),
        },
        _ => Statement::Other,
    }
}

fn classify_property<'a>(property: &[&'a str], rest: &'a str) -> Member<'a> {
    let recognized = match property {
        ["Location"] => constructed(rest).map(Member::Location),
        ["Size"] => constructed(rest).map(Member::Size),
        ["Text"] => assigned_string(rest).map(Member::Text),
        ["Controls", "Add"] => added_control(rest).map(Member::AddChild),
        ["Items", "AddRange"] => item_list_open(rest).map(Member::ItemsStart),
        _ => None,
    };
    recognized.unwrap_or_else(|| Member::Unknown(property.first().copied().unwrap_or_default()))
}

/// Split an accumulated item list (the text after the opening brace) into
/// its string literals. Returns `None` if the list is not a plain list of
/// string literals.
pub fn parse_items(buffer: &str) -> Option<Vec<&str>> {
    all_consuming(terminated(string_list, space0))(buffer)
        .ok()
        .map(|(_, items)| items)
}

/// `private System.Windows.Forms.Button okButton;` → `("Button", "okButton")`
fn declaration(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, _) = pair(
        alt((tag("private"), tag("protected"), tag("internal"), tag("public"))),
        space1,
    )(input)?;
    let (input, path) = dotted_path(input)?;
    // Only Windows Forms controls; other components are not declarations.
    let source_type = match path.as_slice() {
        ["System", "Windows", "Forms", source_type] => *source_type,
        _ => return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify))),
    };
    let (input, name) = preceded(space1, identifier)(input)?;
    let (input, _) = pair(space0, char(';'))(input)?;
    Ok((input, (source_type, name)))
}

/// ` = "text";`
fn assigned_string(rest: &str) -> Option<&str> {
    let result: IResult<&str, &str> = delimited(
        tuple((space0, char('='), space0)),
        string_literal,
        pair(space0, char(';')),
    )(rest);
    result.ok().map(|(_, text)| text)
}

/// ` = new System.Drawing.Point(5, 6);`
fn constructed(rest: &str) -> Option<CallArgs<'_>> {
    let result: IResult<&str, &str> = delimited(
        tuple((space0, char('='), space0, tag("new"), space1, dotted_path, space0)),
        call_args,
        pair(space0, char(';')),
    )(rest);
    result.ok().map(|(_, args)| CallArgs(args))
}

/// `(this.okButton);`
fn added_control(rest: &str) -> Option<&str> {
    let result: IResult<&str, &str> = delimited(
        pair(char('('), space0),
        preceded(tag("this."), identifier),
        tuple((space0, char(')'), space0, char(';'))),
    )(rest);
    result.ok().map(|(_, name)| name)
}

/// `(new object[] {` → whatever follows the brace.
fn item_list_open(rest: &str) -> Option<&str> {
    let result: IResult<&str, _> = tuple((
        char('('),
        space0,
        tag("new"),
        space1,
        tag("object"),
        space0,
        char('['),
        space0,
        char(']'),
        space0,
        char('{'),
    ))(rest);
    result.ok().map(|(remaining, _)| remaining)
}
