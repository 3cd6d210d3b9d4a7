//! Printf-style positional substitution.
//!
//! Supports `%s`, `%d`/`%i`, `%f`, `%x`/`%X`, `%o`, `%b` and the `%%`
//! escape, with optional `-`/`0` flags, a decimal width, and a
//! precision (`.N`, honored by `%s` as truncation and by `%f` as the
//! number of fraction digits; `%f` defaults to 6).
//!
//! Arguments are consumed strictly in order. A template that consumes
//! more arguments than supplied, or fewer, is an error: silently
//! ignoring extras would mask a template bug. Widths and precisions
//! are bounded (`MAX_WIDTH`); anything larger is a [`FormatError`],
//! never a panic or an unbounded allocation.

use crate::arg::ArgValue;
use crate::error::FormatError;

const DEFAULT_FLOAT_PRECISION: usize = 6;

/// Widths and precisions above this are rejected. Templates come from
/// server-supplied locale files, so an absurd padding must not drive
/// an allocation.
const MAX_WIDTH: usize = 64 * 1024;

#[derive(Debug, Default)]
struct Spec {
    left_align: bool,
    zero_pad: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Substitute `args` into `template`, consuming one argument per
/// conversion specifier.
pub fn vsprintf(template: &str, args: &[ArgValue]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len() + 8);
    let mut chars = template.chars().peekable();
    let mut used = 0usize;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }

        let mut spec = Spec::default();
        loop {
            match chars.peek() {
                Some('-') => {
                    spec.left_align = true;
                    chars.next();
                }
                Some('0') => {
                    spec.zero_pad = true;
                    chars.next();
                }
                _ => break,
            }
        }
        if let Some(width) = take_number(&mut chars)? {
            spec.width = Some(width);
        }
        if chars.peek() == Some(&'.') {
            chars.next();
            spec.precision = Some(take_number(&mut chars)?.unwrap_or(0));
        }

        let Some(conversion) = chars.next() else {
            return Err(FormatError::TruncatedConversion);
        };

        let Some(arg) = args.get(used) else {
            return Err(FormatError::MissingArguments {
                expected: used + 1,
                given: args.len(),
            });
        };
        used += 1;

        let rendered = render(conversion, arg, &spec, used)?;
        out.push_str(&padded(rendered, &spec));
    }

    if used < args.len() {
        return Err(FormatError::ExtraArguments {
            expected: used,
            given: args.len(),
        });
    }
    Ok(out)
}

fn take_number(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Result<Option<usize>, FormatError> {
    let mut n: Option<usize> = None;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        let grown = n
            .unwrap_or(0)
            .checked_mul(10)
            .and_then(|v| v.checked_add(d as usize))
            .filter(|v| *v <= MAX_WIDTH)
            .ok_or(FormatError::WidthOverflow)?;
        n = Some(grown);
    }
    Ok(n)
}

fn render(
    conversion: char,
    arg: &ArgValue,
    spec: &Spec,
    position: usize,
) -> Result<String, FormatError> {
    let mismatch = || FormatError::TypeMismatch {
        conversion,
        kind: arg.kind(),
        position,
    };

    match conversion {
        's' => {
            let mut s = match arg {
                ArgValue::Str(s) => s.clone(),
                ArgValue::Int(i) => i.to_string(),
                ArgValue::Float(f) => f.to_string(),
                ArgValue::Bool(b) => b.to_string(),
            };
            if let Some(precision) = spec.precision {
                s = s.chars().take(precision).collect();
            }
            Ok(s)
        }
        'd' | 'i' => match arg {
            ArgValue::Int(i) => Ok(i.to_string()),
            _ => Err(mismatch()),
        },
        'f' => {
            let v = match arg {
                ArgValue::Float(f) => *f,
                ArgValue::Int(i) => *i as f64,
                _ => return Err(mismatch()),
            };
            let precision = spec.precision.unwrap_or(DEFAULT_FLOAT_PRECISION);
            Ok(format!("{v:.precision$}"))
        }
        'x' => match arg {
            ArgValue::Int(i) => Ok(format!("{i:x}")),
            _ => Err(mismatch()),
        },
        'X' => match arg {
            ArgValue::Int(i) => Ok(format!("{i:X}")),
            _ => Err(mismatch()),
        },
        'o' => match arg {
            ArgValue::Int(i) => Ok(format!("{i:o}")),
            _ => Err(mismatch()),
        },
        'b' => match arg {
            ArgValue::Int(i) => Ok(format!("{i:b}")),
            _ => Err(mismatch()),
        },
        other => Err(FormatError::UnsupportedConversion(other)),
    }
}

fn padded(rendered: String, spec: &Spec) -> String {
    let Some(width) = spec.width else {
        return rendered;
    };
    let len = rendered.chars().count();
    if len >= width {
        return rendered;
    }
    let fill = width - len;

    if spec.left_align {
        let mut s = rendered;
        s.extend(std::iter::repeat(' ').take(fill));
        return s;
    }
    if spec.zero_pad {
        // Zeros go between the sign and the digits.
        let (sign, digits) = match rendered.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", rendered.as_str()),
        };
        return format!("{sign}{}{digits}", "0".repeat(fill));
    }
    format!("{}{rendered}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fmt(template: &str, args: &[ArgValue]) -> String {
        vsprintf(template, args).unwrap()
    }

    #[test]
    fn string_substitution() {
        assert_eq!(fmt("bonjour %s", &["Paul".into()]), "bonjour Paul");
        assert_eq!(
            fmt("%s and %s", &["salt".into(), "pepper".into()]),
            "salt and pepper"
        );
    }

    #[test]
    fn string_conversion_stringifies_scalars() {
        assert_eq!(fmt("%s", &[3i64.into()]), "3");
        assert_eq!(fmt("%s", &[true.into()]), "true");
    }

    #[test]
    fn integer_conversions() {
        assert_eq!(fmt("%d items", &[42i64.into()]), "42 items");
        assert_eq!(fmt("%i", &[(-7i64).into()]), "-7");
        assert_eq!(fmt("%x/%X/%o/%b", &[255i64.into(), 255i64.into(), 8i64.into(), 5i64.into()]), "ff/FF/10/101");
    }

    #[test]
    fn float_precision() {
        assert_eq!(fmt("%f", &[1.5f64.into()]), "1.500000");
        assert_eq!(fmt("%.2f", &[1.005e2f64.into()]), "100.50");
        assert_eq!(fmt("%.0f", &[2.6f64.into()]), "3");
        // %f accepts integers.
        assert_eq!(fmt("%.1f", &[4i64.into()]), "4.0");
    }

    #[test]
    fn width_and_flags() {
        assert_eq!(fmt("%5d", &[42i64.into()]), "   42");
        assert_eq!(fmt("%-5d|", &[42i64.into()]), "42   |");
        assert_eq!(fmt("%05d", &[42i64.into()]), "00042");
        assert_eq!(fmt("%05d", &[(-42i64).into()]), "-0042");
        assert_eq!(fmt("%.3s", &["bonjour".into()]), "bon");
    }

    #[test]
    fn percent_escape_consumes_no_argument() {
        assert_eq!(fmt("100%% sure", &[]), "100% sure");
        assert_eq!(fmt("%d%%", &[99i64.into()]), "99%");
    }

    #[test]
    fn missing_arguments() {
        assert_eq!(
            vsprintf("%s and %s", &["salt".into()]).unwrap_err(),
            FormatError::MissingArguments {
                expected: 2,
                given: 1
            }
        );
    }

    #[test]
    fn extra_arguments() {
        assert_eq!(
            vsprintf("%s", &["a".into(), "b".into()]).unwrap_err(),
            FormatError::ExtraArguments {
                expected: 1,
                given: 2
            }
        );
    }

    #[test]
    fn type_mismatch() {
        assert_eq!(
            vsprintf("%d", &["Paul".into()]).unwrap_err(),
            FormatError::TypeMismatch {
                conversion: 'd',
                kind: "string",
                position: 1
            }
        );
        assert_eq!(
            vsprintf("%f", &[true.into()]).unwrap_err(),
            FormatError::TypeMismatch {
                conversion: 'f',
                kind: "bool",
                position: 1
            }
        );
    }

    #[test]
    fn unsupported_and_truncated_conversions() {
        assert_eq!(
            vsprintf("%q", &["a".into()]).unwrap_err(),
            FormatError::UnsupportedConversion('q')
        );
        assert_eq!(
            vsprintf("dangling %", &[]).unwrap_err(),
            FormatError::TruncatedConversion
        );
        assert_eq!(
            vsprintf("%05", &[1i64.into()]).unwrap_err(),
            FormatError::TruncatedConversion
        );
    }

    #[test]
    fn oversized_width_or_precision_is_an_error() {
        // Does not fit in a usize at all.
        assert_eq!(
            vsprintf("%99999999999999999999999999s", &["a".into()]).unwrap_err(),
            FormatError::WidthOverflow
        );
        assert_eq!(
            vsprintf("%.99999999999999999999999999f", &[1.0f64.into()]).unwrap_err(),
            FormatError::WidthOverflow
        );
        // Fits, but would pad an absurd amount.
        assert_eq!(
            vsprintf("%999999999d", &[1i64.into()]).unwrap_err(),
            FormatError::WidthOverflow
        );
    }
}
