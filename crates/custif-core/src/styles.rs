//! Block editor layout to style rules

use crate::settings::{BackgroundStyle, BlockLayout, BorderConfig, BorderRadius, BorderSide};
use custif_style::{Breakpoint, BreakpointValues, StyleRule, StyleSheet};

const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

/// Properties keyed by name in first-assignment order; reassigning keeps
/// the original position
#[derive(Default)]
struct Declarations(Vec<(String, String)>);

impl Declarations {
    fn set(&mut self, property: String, value: &str) {
        match self.0.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.0.push((property, value.to_string())),
        }
    }

    fn side(&mut self, side: &BorderSide, prefix: &str) {
        if let Some(color) = &side.color {
            self.set(format!("{}-color", prefix), color);
        }
        if let Some(style) = &side.style {
            self.set(format!("{}-style", prefix), style);
        }
        if let Some(width) = &side.width {
            self.set(format!("{}-width", prefix), width);
        }
    }

    fn into_rules(self, selector: &str) -> impl Iterator<Item = StyleRule> + '_ {
        self.0
            .into_iter()
            .map(move |(property, value)| StyleRule::desktop(selector, property, value))
    }
}

fn border_declarations(border: &BorderConfig) -> Declarations {
    let mut decl = Declarations::default();

    let sides = border.sides();
    if sides.is_empty() {
        decl.side(&border.all, "border");
    } else {
        for (name, side) in sides {
            decl.side(side, &format!("border-{}", name));
        }
    }

    match &border.radius {
        Some(BorderRadius::Uniform(radius)) => decl.set("border-radius".to_string(), radius),
        Some(BorderRadius::Corners(corners)) => {
            let corners = [
                ("border-top-left-radius", &corners.top_left),
                ("border-top-right-radius", &corners.top_right),
                ("border-bottom-left-radius", &corners.bottom_left),
                ("border-bottom-right-radius", &corners.bottom_right),
            ];
            for (property, value) in corners {
                if let Some(value) = value {
                    decl.set(property.to_string(), value);
                }
            }
        }
        None => {}
    }

    if let Some(style) = &border.all.style {
        decl.set("border-style".to_string(), style);
    }

    decl
}

fn background_declarations(layout: &BlockLayout) -> Declarations {
    let mut decl = Declarations::default();
    let bg = &layout.background;

    let value = match bg.style {
        Some(BackgroundStyle::Solid) if !bg.gradient.is_empty() => bg.gradient.clone(),
        Some(BackgroundStyle::Solid) => bg.color.clone(),
        Some(BackgroundStyle::Image) if !bg.image_url.is_empty() => {
            format!("url({})", bg.image_url)
        }
        _ => String::new(),
    };
    if value.is_empty() {
        return decl;
    }

    decl.set("background".to_string(), &value);
    if bg.style == Some(BackgroundStyle::Image) {
        decl.set("background-size".to_string(), "cover");
        decl.set("background-position".to_string(), "center");
        decl.set("background-repeat".to_string(), "no-repeat");
    }
    decl
}

/// Build the instance stylesheet for wrapper `id`.
///
/// Rules target `#{id}` (width, alignment, background) and `#{id} iframe`
/// (height, padding, border, shadow). Height is left to the auto-height
/// script when `auto_height` is on.
pub fn build_style_sheet(id: &str, layout: &BlockLayout, auto_height: bool) -> StyleSheet {
    let wrapper = format!("#{}", id);
    let frame = format!("#{} iframe", id);
    let mut sheet = StyleSheet::new();

    if !auto_height {
        sheet.push(responsive_rule(&frame, "height", &layout.height).with_unit("px"));
    }
    sheet.push(responsive_rule(&wrapper, "width", &layout.width).with_unit("px"));

    for side in SIDES {
        let values = BreakpointValues {
            desktop: layout.padding.side(side).map(str::to_string),
            tablet: layout.padding_tablet.side(side).map(str::to_string),
            mobile: layout.padding_mobile.side(side).map(str::to_string),
        };
        sheet.push(responsive_rule(&frame, &format!("padding-{}", side), &values));
    }

    if let Some(align) = layout.align {
        let (left, right) = align.margins();
        sheet.push(StyleRule::desktop(&wrapper, "margin-left", left));
        sheet.push(StyleRule::desktop(&wrapper, "margin-right", right));
    }

    sheet.extend(background_declarations(layout).into_rules(&wrapper));

    match &layout.border {
        Some(border) => sheet.extend(border_declarations(border).into_rules(&frame)),
        None => sheet.push(StyleRule::desktop(&frame, "border", "none")),
    }

    if let Some(shadow) = &layout.shadow {
        sheet.push(StyleRule::desktop(&frame, "box-shadow", shadow.to_css()));
    }

    sheet
}

fn responsive_rule(selector: &str, property: &str, values: &BreakpointValues) -> StyleRule {
    Breakpoint::all()
        .iter()
        .fold(StyleRule::new(selector, property), |rule, &bp| {
            rule.with_value(bp, values.get(bp).map(str::to_string))
        })
}
