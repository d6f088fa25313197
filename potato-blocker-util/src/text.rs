use std::fmt::{Display, Write};

/// Substitutes each `{}` in `template` with the next argument, in order.
///
/// Surplus placeholders are left as-is and surplus arguments are ignored, so a
/// mismatched translation degrades to readable text instead of failing.
pub fn fill_placeholders(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut args = args.iter();
    let mut rest = template;

    while let Some(index) = rest.find("{}") {
        out.push_str(&rest[..index]);
        match args.next() {
            // Writing into a String cannot fail
            Some(arg) => {
                let _ = write!(out, "{arg}");
            }
            None => out.push_str("{}"),
        }
        rest = &rest[index + 2..];
    }
    out.push_str(rest);
    out
}

/// Removes `§x` formatting codes, for writing chat text into logs.
pub fn strip_formatting(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '§' {
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}
