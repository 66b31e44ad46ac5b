//! Query string tokenizer and value parsers.
//!
//! Minimal percent-decoding and key-value extraction without external dependencies.

use alloc::string::String;
use alloc::vec::Vec;

use super::ParseWarning;
use super::instructions::{ChildRules, Instructions};
use crate::alignment::Alignment;
use crate::geometry::{Size, UnitPoint};
use crate::sizing::SizingRule;

/// Parse a query string into Instructions + warnings.
pub(crate) fn parse_query(query: &str) -> (Instructions, Vec<ParseWarning>) {
    let mut inst = Instructions::new();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key);
        let value = percent_decode(raw_value);
        let key_lower = key.to_ascii_lowercase();

        dispatch_key(&key_lower, &value, &mut inst, &mut warnings);
    }

    (inst, warnings)
}

fn dispatch_key(key: &str, value: &str, inst: &mut Instructions, warnings: &mut Vec<ParseWarning>) {
    match key {
        "align" | "alignment" => {
            if let Some(a) = Alignment::from_name(value.trim()) {
                set_or_warn(&mut inst.alignment, Some(a), key, value, warnings);
            } else {
                warnings.push(ParseWarning::ValueInvalid {
                    key: "align",
                    value: String::from(value),
                    reason: "expected an alignment name such as topleading|center|bottomtrailing",
                });
            }
        }

        "small" | "big" => {
            let field = if key == "small" {
                &mut inst.small
            } else {
                &mut inst.big
            };
            if let Some(s) = parse_size(value) {
                set_or_warn(field, Some(s), key, value, warnings);
            } else {
                warnings.push(ParseWarning::ValueInvalid {
                    key: static_key(key),
                    value: String::from(value),
                    reason: "expected WxH or W,H",
                });
            }
        }

        "w" | "width" | "h" | "height" => {
            let field = if key.starts_with('w') {
                &mut inst.w
            } else {
                &mut inst.h
            };
            if let Some(d) = parse_dimension(value) {
                set_or_warn(field, Some(d), key, value, warnings);
            } else {
                warnings.push(ParseWarning::ValueInvalid {
                    key: static_key(key),
                    value: String::from(value),
                    reason: "expected a non-negative number",
                });
            }
        }

        _ => match split_rule_key(key) {
            Some((is_offset, Ok(index))) => {
                let rules = inst.children.entry(index).or_default();
                let field = if is_offset {
                    &mut rules.offset
                } else {
                    &mut rules.size
                };
                if let Some(rule) = parse_rule(value) {
                    set_or_warn(field, Some(rule), key, value, warnings);
                } else {
                    if *rules == ChildRules::default() {
                        inst.children.remove(&index);
                    }
                    warnings.push(ParseWarning::ValueInvalid {
                        key: if is_offset { "offset" } else { "size" },
                        value: String::from(value),
                        reason: "expected unspecified|fraction(x,y)|refs(WxH,WxH)|slope(m,b)|fixed(WxH)",
                    });
                }
            }
            Some((is_offset, Err(reason))) => {
                warnings.push(ParseWarning::ValueInvalid {
                    key: if is_offset { "offset" } else { "size" },
                    value: String::from(value),
                    reason,
                });
            }
            None => {
                warnings.push(ParseWarning::KeyNotRecognized {
                    key: String::from(key),
                    value: String::from(value),
                });
            }
        },
    }
}

/// Set a field, warning on duplicate.
fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    if let Some(v) = parsed {
        if field.is_some() {
            warnings.push(ParseWarning::DuplicateKey {
                key: String::from(key),
                value: String::from(value),
            });
        }
        *field = Some(v);
    }
}

/// Split `size`, `offset`, `size.N`, `offset.N`.
///
/// Returns `(is_offset, index)`, or the reason the index suffix is unusable.
/// `usize::MAX` is rejected so a child count always fits in `usize`.
fn split_rule_key(key: &str) -> Option<(bool, Result<usize, &'static str>)> {
    let (name, suffix) = match key.split_once('.') {
        Some((name, suffix)) => (name, Some(suffix)),
        None => (key, None),
    };
    let is_offset = match name {
        "size" | "sizing" => false,
        "offset" => true,
        _ => return None,
    };
    let index = match suffix.map(str::parse::<usize>) {
        None => Ok(0),
        Some(Ok(usize::MAX)) => Err("child index out of range"),
        Some(Ok(i)) => Ok(i),
        Some(Err(_)) => Err("child index after the dot must be a non-negative integer"),
    };
    Some((is_offset, index))
}

// ---- Value parsers ----

fn parse_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_dimension(s: &str) -> Option<f64> {
    parse_f64(s).filter(|&v| v >= 0.0)
}

/// `WxH`, `W×H` or `W,H`.
fn parse_size(s: &str) -> Option<Size> {
    let s = s.trim();
    let (w, h) = s
        .split_once(['x', 'X', '×'])
        .or_else(|| s.split_once(','))?;
    Some(Size::new(parse_f64(w)?, parse_f64(h)?))
}

/// Parse `name(args)` or a bare name into a rule.
fn parse_rule(s: &str) -> Option<SizingRule> {
    let s = s.trim();
    let (name, args) = match s.find('(') {
        Some(open) => {
            let inner = s[open + 1..].strip_suffix(')')?;
            (&s[..open], Some(inner))
        }
        None => (s, None),
    };
    let name = name.trim().to_ascii_lowercase();
    let args: Vec<&str> = match args {
        Some(inner) if !inner.trim().is_empty() => inner.split(',').map(str::trim).collect(),
        _ => Vec::new(),
    };

    match (name.as_str(), args.as_slice()) {
        ("unspecified" | "none" | "auto", []) => Some(SizingRule::Unspecified),

        ("fraction" | "frac", [both]) => {
            let f = parse_f64(both)?;
            Some(SizingRule::Fraction(UnitPoint::new(f, f)))
        }
        ("fraction" | "frac", [x, y]) => {
            Some(SizingRule::Fraction(UnitPoint::new(parse_f64(x)?, parse_f64(y)?)))
        }

        ("refs" | "references", [small, big]) => {
            Some(SizingRule::references(parse_size(small)?, parse_size(big)?))
        }
        ("refs" | "references", [sw, sh, bw, bh]) => Some(SizingRule::references(
            Size::new(parse_f64(sw)?, parse_f64(sh)?),
            Size::new(parse_f64(bw)?, parse_f64(bh)?),
        )),

        ("slope" | "slopeintercept" | "linear", [m, b]) => {
            Some(SizingRule::slope_intercept(parse_f64(m)?, parse_f64(b)?))
        }

        ("fixed" | "size", [size]) => Some(SizingRule::Fixed(parse_size(size)?)),
        ("fixed" | "size", [w, h]) => Some(SizingRule::fixed(parse_f64(w)?, parse_f64(h)?)),

        _ => None,
    }
}

// ---- Query string tokenizer ----

/// Split query string on '&'.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    // Strip leading '?' if present (caller may or may not have stripped it)
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a URL component. Also handles '+' as space.
///
/// Decoded bytes that do not form valid UTF-8 are replaced with U+FFFD.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    out.push(hi << 4 | lo);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Canonical `&'static str` for keys reported in [`ParseWarning::ValueInvalid`].
fn static_key(key: &str) -> &'static str {
    match key {
        "small" => "small",
        "big" => "big",
        "w" | "width" => "w",
        "h" | "height" => "h",
        _ => "unknown",
    }
}
