//! Stylesheet text generation

use crate::rule::{Breakpoint, StyleRule};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Plain decimal number: optional sign, digits with optional fraction
    // (or a bare fraction), optional exponent. Nothing else.
    static ref NUMERIC_REGEX: Regex =
        Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$").unwrap();
}

/// Check whether a value is a plain number and should receive a unit suffix
pub fn is_numeric(value: &str) -> bool {
    NUMERIC_REGEX.is_match(value)
}

/// Append the unit to numeric values, leave everything else untouched
pub fn format_value(value: &str, unit: Option<&str>) -> String {
    match unit {
        Some(unit) if is_numeric(value) => format!("{}{}", value, unit),
        _ => value.to_string(),
    }
}

/// Generate the stylesheet for a sequence of rules.
///
/// Output is the desktop blocks, then the tablet blocks wrapped in
/// `@media (max-width: 1024px)`, then the mobile blocks wrapped in
/// `@media (max-width: 767px)`. Empty media sections are omitted.
///
/// # Examples
/// ```
/// use custif_style::{generate, StyleRule};
/// let css = generate(&[StyleRule::desktop("#a", "height", "500").with_unit("px")]);
/// assert_eq!(css, "#a { height: 500px; }");
/// assert_eq!(generate(&[]), "");
/// ```
pub fn generate(rules: &[StyleRule]) -> String {
    let mut desktop = String::new();
    let mut tablet = String::new();
    let mut mobile = String::new();

    for rule in rules {
        for &breakpoint in Breakpoint::all() {
            let Some(value) = rule.value_by_breakpoint.present(breakpoint) else {
                continue;
            };
            let buffer = match breakpoint {
                Breakpoint::Desktop => &mut desktop,
                Breakpoint::Tablet => &mut tablet,
                Breakpoint::Mobile => &mut mobile,
            };
            buffer.push_str(&format!(
                "{} {{ {}: {}; }}",
                rule.selector,
                rule.property,
                format_value(value, rule.unit.as_deref())
            ));
        }
    }

    let mut css = desktop;
    for (breakpoint, buffer) in [(Breakpoint::Tablet, tablet), (Breakpoint::Mobile, mobile)] {
        if buffer.is_empty() {
            continue;
        }
        if let Some(width) = breakpoint.max_width() {
            css.push_str(&format!("@media (max-width: {}px) {{ {} }}", width, buffer));
        }
    }

    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("500"));
        assert!(is_numeric("0"));
        assert!(is_numeric("-12.5"));
        assert!(is_numeric(".5"));
        assert!(is_numeric("1e3"));
        assert!(!is_numeric("500px"));
        assert!(!is_numeric(" 500"));
        assert!(!is_numeric("100%"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("auto"));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value("500", Some("px")), "500px");
        assert_eq!(format_value("500px", Some("px")), "500px");
        assert_eq!(format_value("500", None), "500");
        assert_eq!(format_value("auto", Some("px")), "auto");
    }

    #[test]
    fn test_generate_single_desktop_rule() {
        let rules = vec![StyleRule::desktop("#a", "height", "500").with_unit("px")];
        assert_eq!(generate(&rules), "#a { height: 500px; }");
    }

    #[test]
    fn test_generate_empty() {
        assert_eq!(generate(&[]), "");
    }

    #[test]
    fn test_generate_all_breakpoints() {
        let rules = vec![StyleRule::desktop("#a iframe", "height", "500")
            .with_tablet("400")
            .with_mobile("300")
            .with_unit("px")];
        assert_eq!(
            generate(&rules),
            "#a iframe { height: 500px; }\
             @media (max-width: 1024px) { #a iframe { height: 400px; } }\
             @media (max-width: 767px) { #a iframe { height: 300px; } }"
        );
    }
}
