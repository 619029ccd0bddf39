use crossterm::style::Color;

pub struct Theme {
    pub fg: Color,
    pub banner: Color,    // Blue
    pub label: Color,     // Cyan for labels
    pub in_range: Color,  // Orange for target member bytes
    pub padding: Color,   // Red for filler bytes
    pub muted: Color,     // Grey for out-of-range markers
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb {
        r: 205,
        g: 214,
        b: 244,
    },
    banner: Color::Rgb {
        r: 137,
        g: 180,
        b: 250,
    },
    label: Color::Rgb {
        r: 148,
        g: 226,
        b: 213,
    },
    in_range: Color::Rgb {
        r: 250,
        g: 179,
        b: 135,
    },
    padding: Color::Rgb {
        r: 243,
        g: 139,
        b: 168,
    },
    muted: Color::Rgb {
        r: 108,
        g: 112,
        b: 134,
    },
};
