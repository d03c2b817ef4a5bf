use crate::{DefinitionKind, RawDefinition, SplitError};

/// Cuts the raw input into definitions, in source order, ignoring any
/// text between them.
///
/// A definition runs from its keyword through the brace that closes its
/// body. The scanner matches keywords anywhere in the text, byte by byte,
/// without requiring a word boundary.
pub fn split(source: &str) -> Result<Vec<RawDefinition<'_>>, SplitError> {
    let bytes = source.as_bytes();
    let mut definitions = Vec::new();
    let mut cursor = 0;

    while let Some((start, kind)) = next_keyword(bytes, cursor) {
        let mut position = start + kind.keyword().len();

        while position < bytes.len() && bytes[position].is_ascii_whitespace() {
            position += 1;
        }

        let name_start = position;
        while position < bytes.len() && is_identifier_byte(bytes[position]) {
            position += 1;
        }

        if position == name_start {
            return Err(SplitError::MalformedDefinition {
                keyword: kind.keyword(),
                offset: start,
            });
        }

        let name = &source[name_start..position];

        // Whatever sits between the name and the body — a type condition,
        // variable definitions in parentheses — is skipped without
        // interpretation.
        while position < bytes.len() && bytes[position] != b'{' {
            position += 1;
        }

        let mut depth = 0usize;
        let mut body_end = None;

        while position < bytes.len() {
            match bytes[position] {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;

                    if depth == 0 {
                        body_end = Some(position);
                        break;
                    }
                }
                _ => (),
            }

            position += 1;
        }

        let Some(end) = body_end else {
            return Err(SplitError::UnmatchedBrace { name: name.to_string() });
        };

        definitions.push(RawDefinition {
            kind,
            name,
            content: &source[start..=end],
        });

        cursor = end + 1;
    }

    Ok(definitions)
}

fn next_keyword(bytes: &[u8], from: usize) -> Option<(usize, DefinitionKind)> {
    (from..bytes.len()).find_map(|position| {
        if bytes[position..].starts_with(b"query") {
            Some((position, DefinitionKind::Query))
        } else if bytes[position..].starts_with(b"fragment") {
            Some((position, DefinitionKind::Fragment))
        } else {
            None
        }
    })
}

fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
