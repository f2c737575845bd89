use super::PlotError;
use plotters::style::RGBColor;

/// the default color cycle, addressable as `tab:<name>` or `C0` to `C9`
const TABLEAU_COLORS: [(&str, RGBColor); 10] = [
    ("blue", RGBColor(0x1f, 0x77, 0xb4)),
    ("orange", RGBColor(0xff, 0x7f, 0x0e)),
    ("green", RGBColor(0x2c, 0xa0, 0x2c)),
    ("red", RGBColor(0xd6, 0x27, 0x28)),
    ("purple", RGBColor(0x94, 0x67, 0xbd)),
    ("brown", RGBColor(0x8c, 0x56, 0x4b)),
    ("pink", RGBColor(0xe3, 0x77, 0xc2)),
    ("gray", RGBColor(0x7f, 0x7f, 0x7f)),
    ("olive", RGBColor(0xbc, 0xbd, 0x22)),
    ("cyan", RGBColor(0x17, 0xbe, 0xcf)),
];

/// the CSS4 color names
const NAMED_COLORS: [(&str, RGBColor); 148] = [
    ("aliceblue", RGBColor(0xf0, 0xf8, 0xff)),
    ("antiquewhite", RGBColor(0xfa, 0xeb, 0xd7)),
    ("aqua", RGBColor(0x00, 0xff, 0xff)),
    ("aquamarine", RGBColor(0x7f, 0xff, 0xd4)),
    ("azure", RGBColor(0xf0, 0xff, 0xff)),
    ("beige", RGBColor(0xf5, 0xf5, 0xdc)),
    ("bisque", RGBColor(0xff, 0xe4, 0xc4)),
    ("black", RGBColor(0x00, 0x00, 0x00)),
    ("blanchedalmond", RGBColor(0xff, 0xeb, 0xcd)),
    ("blue", RGBColor(0x00, 0x00, 0xff)),
    ("blueviolet", RGBColor(0x8a, 0x2b, 0xe2)),
    ("brown", RGBColor(0xa5, 0x2a, 0x2a)),
    ("burlywood", RGBColor(0xde, 0xb8, 0x87)),
    ("cadetblue", RGBColor(0x5f, 0x9e, 0xa0)),
    ("chartreuse", RGBColor(0x7f, 0xff, 0x00)),
    ("chocolate", RGBColor(0xd2, 0x69, 0x1e)),
    ("coral", RGBColor(0xff, 0x7f, 0x50)),
    ("cornflowerblue", RGBColor(0x64, 0x95, 0xed)),
    ("cornsilk", RGBColor(0xff, 0xf8, 0xdc)),
    ("crimson", RGBColor(0xdc, 0x14, 0x3c)),
    ("cyan", RGBColor(0x00, 0xff, 0xff)),
    ("darkblue", RGBColor(0x00, 0x00, 0x8b)),
    ("darkcyan", RGBColor(0x00, 0x8b, 0x8b)),
    ("darkgoldenrod", RGBColor(0xb8, 0x86, 0x0b)),
    ("darkgray", RGBColor(0xa9, 0xa9, 0xa9)),
    ("darkgreen", RGBColor(0x00, 0x64, 0x00)),
    ("darkgrey", RGBColor(0xa9, 0xa9, 0xa9)),
    ("darkkhaki", RGBColor(0xbd, 0xb7, 0x6b)),
    ("darkmagenta", RGBColor(0x8b, 0x00, 0x8b)),
    ("darkolivegreen", RGBColor(0x55, 0x6b, 0x2f)),
    ("darkorange", RGBColor(0xff, 0x8c, 0x00)),
    ("darkorchid", RGBColor(0x99, 0x32, 0xcc)),
    ("darkred", RGBColor(0x8b, 0x00, 0x00)),
    ("darksalmon", RGBColor(0xe9, 0x96, 0x7a)),
    ("darkseagreen", RGBColor(0x8f, 0xbc, 0x8f)),
    ("darkslateblue", RGBColor(0x48, 0x3d, 0x8b)),
    ("darkslategray", RGBColor(0x2f, 0x4f, 0x4f)),
    ("darkslategrey", RGBColor(0x2f, 0x4f, 0x4f)),
    ("darkturquoise", RGBColor(0x00, 0xce, 0xd1)),
    ("darkviolet", RGBColor(0x94, 0x00, 0xd3)),
    ("deeppink", RGBColor(0xff, 0x14, 0x93)),
    ("deepskyblue", RGBColor(0x00, 0xbf, 0xff)),
    ("dimgray", RGBColor(0x69, 0x69, 0x69)),
    ("dimgrey", RGBColor(0x69, 0x69, 0x69)),
    ("dodgerblue", RGBColor(0x1e, 0x90, 0xff)),
    ("firebrick", RGBColor(0xb2, 0x22, 0x22)),
    ("floralwhite", RGBColor(0xff, 0xfa, 0xf0)),
    ("forestgreen", RGBColor(0x22, 0x8b, 0x22)),
    ("fuchsia", RGBColor(0xff, 0x00, 0xff)),
    ("gainsboro", RGBColor(0xdc, 0xdc, 0xdc)),
    ("ghostwhite", RGBColor(0xf8, 0xf8, 0xff)),
    ("gold", RGBColor(0xff, 0xd7, 0x00)),
    ("goldenrod", RGBColor(0xda, 0xa5, 0x20)),
    ("gray", RGBColor(0x80, 0x80, 0x80)),
    ("green", RGBColor(0x00, 0x80, 0x00)),
    ("greenyellow", RGBColor(0xad, 0xff, 0x2f)),
    ("grey", RGBColor(0x80, 0x80, 0x80)),
    ("honeydew", RGBColor(0xf0, 0xff, 0xf0)),
    ("hotpink", RGBColor(0xff, 0x69, 0xb4)),
    ("indianred", RGBColor(0xcd, 0x5c, 0x5c)),
    ("indigo", RGBColor(0x4b, 0x00, 0x82)),
    ("ivory", RGBColor(0xff, 0xff, 0xf0)),
    ("khaki", RGBColor(0xf0, 0xe6, 0x8c)),
    ("lavender", RGBColor(0xe6, 0xe6, 0xfa)),
    ("lavenderblush", RGBColor(0xff, 0xf0, 0xf5)),
    ("lawngreen", RGBColor(0x7c, 0xfc, 0x00)),
    ("lemonchiffon", RGBColor(0xff, 0xfa, 0xcd)),
    ("lightblue", RGBColor(0xad, 0xd8, 0xe6)),
    ("lightcoral", RGBColor(0xf0, 0x80, 0x80)),
    ("lightcyan", RGBColor(0xe0, 0xff, 0xff)),
    ("lightgoldenrodyellow", RGBColor(0xfa, 0xfa, 0xd2)),
    ("lightgray", RGBColor(0xd3, 0xd3, 0xd3)),
    ("lightgreen", RGBColor(0x90, 0xee, 0x90)),
    ("lightgrey", RGBColor(0xd3, 0xd3, 0xd3)),
    ("lightpink", RGBColor(0xff, 0xb6, 0xc1)),
    ("lightsalmon", RGBColor(0xff, 0xa0, 0x7a)),
    ("lightseagreen", RGBColor(0x20, 0xb2, 0xaa)),
    ("lightskyblue", RGBColor(0x87, 0xce, 0xfa)),
    ("lightslategray", RGBColor(0x77, 0x88, 0x99)),
    ("lightslategrey", RGBColor(0x77, 0x88, 0x99)),
    ("lightsteelblue", RGBColor(0xb0, 0xc4, 0xde)),
    ("lightyellow", RGBColor(0xff, 0xff, 0xe0)),
    ("lime", RGBColor(0x00, 0xff, 0x00)),
    ("limegreen", RGBColor(0x32, 0xcd, 0x32)),
    ("linen", RGBColor(0xfa, 0xf0, 0xe6)),
    ("magenta", RGBColor(0xff, 0x00, 0xff)),
    ("maroon", RGBColor(0x80, 0x00, 0x00)),
    ("mediumaquamarine", RGBColor(0x66, 0xcd, 0xaa)),
    ("mediumblue", RGBColor(0x00, 0x00, 0xcd)),
    ("mediumorchid", RGBColor(0xba, 0x55, 0xd3)),
    ("mediumpurple", RGBColor(0x93, 0x70, 0xdb)),
    ("mediumseagreen", RGBColor(0x3c, 0xb3, 0x71)),
    ("mediumslateblue", RGBColor(0x7b, 0x68, 0xee)),
    ("mediumspringgreen", RGBColor(0x00, 0xfa, 0x9a)),
    ("mediumturquoise", RGBColor(0x48, 0xd1, 0xcc)),
    ("mediumvioletred", RGBColor(0xc7, 0x15, 0x85)),
    ("midnightblue", RGBColor(0x19, 0x19, 0x70)),
    ("mintcream", RGBColor(0xf5, 0xff, 0xfa)),
    ("mistyrose", RGBColor(0xff, 0xe4, 0xe1)),
    ("moccasin", RGBColor(0xff, 0xe4, 0xb5)),
    ("navajowhite", RGBColor(0xff, 0xde, 0xad)),
    ("navy", RGBColor(0x00, 0x00, 0x80)),
    ("oldlace", RGBColor(0xfd, 0xf5, 0xe6)),
    ("olive", RGBColor(0x80, 0x80, 0x00)),
    ("olivedrab", RGBColor(0x6b, 0x8e, 0x23)),
    ("orange", RGBColor(0xff, 0xa5, 0x00)),
    ("orangered", RGBColor(0xff, 0x45, 0x00)),
    ("orchid", RGBColor(0xda, 0x70, 0xd6)),
    ("palegoldenrod", RGBColor(0xee, 0xe8, 0xaa)),
    ("palegreen", RGBColor(0x98, 0xfb, 0x98)),
    ("paleturquoise", RGBColor(0xaf, 0xee, 0xee)),
    ("palevioletred", RGBColor(0xdb, 0x70, 0x93)),
    ("papayawhip", RGBColor(0xff, 0xef, 0xd5)),
    ("peachpuff", RGBColor(0xff, 0xda, 0xb9)),
    ("peru", RGBColor(0xcd, 0x85, 0x3f)),
    ("pink", RGBColor(0xff, 0xc0, 0xcb)),
    ("plum", RGBColor(0xdd, 0xa0, 0xdd)),
    ("powderblue", RGBColor(0xb0, 0xe0, 0xe6)),
    ("purple", RGBColor(0x80, 0x00, 0x80)),
    ("rebeccapurple", RGBColor(0x66, 0x33, 0x99)),
    ("red", RGBColor(0xff, 0x00, 0x00)),
    ("rosybrown", RGBColor(0xbc, 0x8f, 0x8f)),
    ("royalblue", RGBColor(0x41, 0x69, 0xe1)),
    ("saddlebrown", RGBColor(0x8b, 0x45, 0x13)),
    ("salmon", RGBColor(0xfa, 0x80, 0x72)),
    ("sandybrown", RGBColor(0xf4, 0xa4, 0x60)),
    ("seagreen", RGBColor(0x2e, 0x8b, 0x57)),
    ("seashell", RGBColor(0xff, 0xf5, 0xee)),
    ("sienna", RGBColor(0xa0, 0x52, 0x2d)),
    ("silver", RGBColor(0xc0, 0xc0, 0xc0)),
    ("skyblue", RGBColor(0x87, 0xce, 0xeb)),
    ("slateblue", RGBColor(0x6a, 0x5a, 0xcd)),
    ("slategray", RGBColor(0x70, 0x80, 0x90)),
    ("slategrey", RGBColor(0x70, 0x80, 0x90)),
    ("snow", RGBColor(0xff, 0xfa, 0xfa)),
    ("springgreen", RGBColor(0x00, 0xff, 0x7f)),
    ("steelblue", RGBColor(0x46, 0x82, 0xb4)),
    ("tan", RGBColor(0xd2, 0xb4, 0x8c)),
    ("teal", RGBColor(0x00, 0x80, 0x80)),
    ("thistle", RGBColor(0xd8, 0xbf, 0xd8)),
    ("tomato", RGBColor(0xff, 0x63, 0x47)),
    ("turquoise", RGBColor(0x40, 0xe0, 0xd0)),
    ("violet", RGBColor(0xee, 0x82, 0xee)),
    ("wheat", RGBColor(0xf5, 0xde, 0xb3)),
    ("white", RGBColor(0xff, 0xff, 0xff)),
    ("whitesmoke", RGBColor(0xf5, 0xf5, 0xf5)),
    ("yellow", RGBColor(0xff, 0xff, 0x00)),
    ("yellowgreen", RGBColor(0x9a, 0xcd, 0x32)),
];

/// Parse a color given as a single letter shorthand (`"r"`, `"k"`, ...), a
/// color name (`"cornflowerblue"`), an entry of the default color cycle
/// (`"tab:blue"`, `"C0"`) or a hex string (`"#6495ed"`, `"#f00"`).
/// Parsing is case insensitive.
pub(crate) fn parse_color(color: &str) -> Result<RGBColor, PlotError> {
    let unknown = || PlotError::UnknownColor {
        color: color.to_string(),
    };
    let normalized = color.trim().to_ascii_lowercase();

    if let Some(hex) = normalized.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(unknown);
    }

    if let Some(name) = normalized.strip_prefix("tab:") {
        let name = if name == "grey" { "gray" } else { name };
        return lookup(&TABLEAU_COLORS, name).ok_or_else(unknown);
    }

    if let Some(index) = normalized.strip_prefix('c') {
        if let Ok(index) = index.parse::<usize>() {
            return TABLEAU_COLORS
                .get(index)
                .map(|(_, rgb)| *rgb)
                .ok_or_else(unknown);
        }
    }

    let shorthand = match normalized.as_str() {
        "b" => Some(RGBColor(0x00, 0x00, 0xff)),
        "g" => Some(RGBColor(0x00, 0x80, 0x00)),
        "r" => Some(RGBColor(0xff, 0x00, 0x00)),
        "c" => Some(RGBColor(0x00, 0xbf, 0xbf)),
        "m" => Some(RGBColor(0xbf, 0x00, 0xbf)),
        "y" => Some(RGBColor(0xbf, 0xbf, 0x00)),
        "k" => Some(RGBColor(0x00, 0x00, 0x00)),
        "w" => Some(RGBColor(0xff, 0xff, 0xff)),
        _ => None,
    };

    shorthand
        .or_else(|| lookup(&NAMED_COLORS, &normalized))
        .ok_or_else(unknown)
}

fn lookup(table: &[(&str, RGBColor)], name: &str) -> Option<RGBColor> {
    table
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, rgb)| *rgb)
}

fn parse_hex(hex: &str) -> Option<RGBColor> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let channel = |idx: usize| {
                u8::from_str_radix(&hex[idx..idx + 1], 16)
                    .ok()
                    .map(|v| v * 17)
            };
            Some(RGBColor(channel(0)?, channel(1)?, channel(2)?))
        }
        6 => {
            let channel = |idx: usize| u8::from_str_radix(&hex[idx..idx + 2], 16).ok();
            Some(RGBColor(channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}
