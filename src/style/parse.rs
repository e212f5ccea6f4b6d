//! CSS declaration-list parsing using cssparser

use super::kebab_to_camel;
use crate::props::{StyleMap, StyleValue};
use cssparser::{Delimiter, ParseError, Parser, ParserInput};

/// Parse the contents of a `style` attribute into a style map.
///
/// Names come back camelCase and values verbatim (trimmed). Malformed
/// declarations are dropped, as a browser would.
pub fn parse_style_text(text: &str) -> StyleMap {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let mut styles = StyleMap::new();

    while !parser.is_exhausted() {
        let result: std::result::Result<(String, String), ParseError<'_, ()>> = parser
            .parse_until_after(Delimiter::Semicolon, |p| {
                p.skip_whitespace();
                let name = p.expect_ident()?.to_string();
                p.expect_colon()?;
                p.skip_whitespace();
                let start = p.position();
                while p.next_including_whitespace_and_comments().is_ok() {}
                Ok((name, p.slice_from(start).trim().to_string()))
            });

        match result {
            Ok((name, value)) if !value.is_empty() => {
                styles.insert(kebab_to_camel(&name).into_owned(), StyleValue::Str(value));
            }
            Ok((name, _)) => log::debug!("Dropping empty style declaration `{}`", name),
            Err(_) => log::debug!("Dropping malformed style declaration"),
        }
    }

    styles
}
