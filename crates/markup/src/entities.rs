use memchr::memchr;

const NAMED: &[(&str, char)] = &[
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&apos;", '\''),
    ("&nbsp;", '\u{00A0}'),
];

const MAX_HEX_DIGITS: usize = 6; // 0x10FFFF
const MAX_DEC_DIGITS: usize = 7; // 1114111

/// Decode the handful of entities a server renderer escapes text with.
///
/// Named: `&amp; &lt; &gt; &quot; &apos; &nbsp;`. Numeric: `&#215;` and `&#xD7;`,
/// semicolon-terminated and within the Unicode scalar range. Anything else is
/// passed through unchanged.
pub fn decode_entities(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut copy_start = 0;
    let mut i = 0;

    while let Some(rel) = memchr(b'&', &bytes[i..]) {
        i += rel;
        out.push_str(&s[copy_start..i]);
        match decode_at(s, i) {
            Some((ch, len)) => {
                out.push(ch);
                i += len;
            }
            None => {
                out.push('&');
                i += 1;
            }
        }
        copy_start = i;
    }
    out.push_str(&s[copy_start..]);
    out
}

/// Decode a single entity starting at `start` (which holds `&`), returning the
/// character and the number of bytes consumed.
fn decode_at(s: &str, start: usize) -> Option<(char, usize)> {
    let rest = &s[start..];
    if let Some((name, ch)) = NAMED.iter().find(|(name, _)| rest.starts_with(name)) {
        return Some((*ch, name.len()));
    }
    let numeric = rest.strip_prefix("&#")?;
    let (digits, radix, prefix_len) = match numeric.as_bytes().first() {
        Some(b'x') | Some(b'X') => (&numeric[1..], 16, 3),
        _ => (numeric, 10, 2),
    };
    let max = if radix == 16 {
        MAX_HEX_DIGITS
    } else {
        MAX_DEC_DIGITS
    };
    let end = digits
        .bytes()
        .take(max + 1)
        .position(|b| b == b';')
        .filter(|&end| end > 0)?;
    let value = u32::from_str_radix(&digits[..end], radix).ok()?;
    let ch = char::from_u32(value)?;
    Some((ch, prefix_len + end + 1))
}
