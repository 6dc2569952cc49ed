use crate::entities::decode_entities;
use memchr::memchr;

const COMMENT_START: &str = "<!--";
const COMMENT_END: &str = "-->";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Doctype(String),
    StartTag {
        name: String,
        attributes: Vec<(String, Option<String>)>,
        self_closing: bool,
    },
    EndTag(String),
    /// Comment payload, verbatim. Fragment markers arrive here as `[` and `]`.
    Comment(String),
    Text(String),
}

fn is_void_element(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn is_name_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'-' || c == b'_' || c == b':'
}

fn starts_with_ignore_ascii_case_at(haystack: &[u8], start: usize, needle: &[u8]) -> bool {
    haystack.len() >= start + needle.len()
        && haystack[start..start + needle.len()].eq_ignore_ascii_case(needle)
}

pub fn tokenize(input: &str) -> Vec<Token> {
    let bytes = input.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    // Slices are only cut at ASCII structural bytes, so every endpoint is a char boundary.
    while i < bytes.len() {
        if bytes[i] != b'<' {
            let end = memchr(b'<', &bytes[i..]).map_or(bytes.len(), |rel| i + rel);
            out.push(Token::Text(decode_entities(&input[i..end])));
            i = end;
            continue;
        }

        if input[i..].starts_with(COMMENT_START) {
            let body_start = i + COMMENT_START.len();
            match input[body_start..].find(COMMENT_END) {
                Some(len) => {
                    out.push(Token::Comment(input[body_start..body_start + len].to_string()));
                    i = body_start + len + COMMENT_END.len();
                }
                None => {
                    log::debug!(target: "markup.tokenizer", "unterminated comment at byte {i}");
                    out.push(Token::Comment(input[body_start..].to_string()));
                    i = bytes.len();
                }
            }
            continue;
        }

        if starts_with_ignore_ascii_case_at(bytes, i, b"<!doctype") {
            let rest = &input[i + 2..];
            let Some(end) = rest.find('>') else {
                log::debug!(target: "markup.tokenizer", "unterminated doctype at byte {i}");
                out.push(Token::Text(decode_entities(&input[i..])));
                break;
            };
            out.push(Token::Doctype(rest[..end].trim().to_string()));
            i += 2 + end + 1;
            continue;
        }

        if bytes.get(i + 1) == Some(&b'/') {
            let start = i + 2;
            let mut j = start;
            while j < bytes.len() && is_name_char(bytes[j]) {
                j += 1;
            }
            let name = input[start..j].to_ascii_lowercase();
            j = memchr(b'>', &bytes[j..]).map_or(bytes.len(), |rel| j + rel + 1);
            out.push(Token::EndTag(name));
            i = j;
            continue;
        }

        let start = i + 1;
        let mut j = start;
        while j < bytes.len() && is_name_char(bytes[j]) {
            j += 1;
        }
        if j == start {
            // A lone `<` that does not open a tag is text.
            let end = memchr(b'<', &bytes[i + 1..]).map_or(bytes.len(), |rel| i + 1 + rel);
            out.push(Token::Text(decode_entities(&input[i..end])));
            i = end;
            continue;
        }
        let name = input[start..j].to_ascii_lowercase();
        let (attributes, self_closing, next) = scan_attributes(input, j);
        let self_closing = self_closing || is_void_element(&name);
        out.push(Token::StartTag {
            name,
            attributes,
            self_closing,
        });
        i = next;
    }
    out
}

/// Scan attributes starting right after a tag name, returning the attributes,
/// whether the tag was self-closing and the byte offset after `>`.
fn scan_attributes(input: &str, mut k: usize) -> (Vec<(String, Option<String>)>, bool, usize) {
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut attributes = Vec::new();
    let skip_whitespace = |k: &mut usize| {
        while *k < len && bytes[*k].is_ascii_whitespace() {
            *k += 1;
        }
    };

    loop {
        skip_whitespace(&mut k);
        if k >= len {
            return (attributes, false, len);
        }
        match bytes[k] {
            b'>' => return (attributes, false, k + 1),
            b'/' if bytes.get(k + 1) == Some(&b'>') => return (attributes, true, k + 2),
            b'/' => {
                k += 1;
                continue;
            }
            _ => {}
        }
        let name_start = k;
        while k < len && is_name_char(bytes[k]) {
            k += 1;
        }
        if name_start == k {
            k += 1;
            continue;
        }
        let name = input[name_start..k].to_ascii_lowercase();

        skip_whitespace(&mut k);
        if k >= len || bytes[k] != b'=' {
            attributes.push((name, None));
            continue;
        }
        k += 1;
        skip_whitespace(&mut k);
        let value = if k < len && (bytes[k] == b'"' || bytes[k] == b'\'') {
            let quote = bytes[k];
            let vstart = k + 1;
            let vend = memchr(quote, &bytes[vstart..]).map_or(len, |rel| vstart + rel);
            k = (vend + 1).min(len);
            decode_entities(&input[vstart..vend])
        } else {
            let vstart = k;
            while k < len && !bytes[k].is_ascii_whitespace() && bytes[k] != b'>' {
                if bytes[k] == b'/' && bytes.get(k + 1) == Some(&b'>') {
                    break;
                }
                k += 1;
            }
            input[vstart..k].to_string()
        };
        attributes.push((name, Some(value)));
    }
}
