use ratatui::style::Color;

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub bg: Color,
    pub sidebar: Color,
    pub surface: Color,
    pub accent: Color,
    pub text_main: Color,
    pub text_dim: Color,
    pub border: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
}

pub const THEMES: &[Theme] = &[
    Theme {
        name: "Lotus",
        bg: Color::Rgb(18, 16, 24),      // #121018
        sidebar: Color::Rgb(30, 26, 40), // #1E1A28
        surface: Color::Rgb(30, 26, 40),
        accent: Color::Rgb(196, 141, 255),    // #C48DFF
        text_main: Color::Rgb(240, 235, 250), // #F0EBFA
        text_dim: Color::Rgb(130, 122, 150),
        border: Color::Rgb(56, 48, 76),
        success: Color::Rgb(134, 222, 164),
        warning: Color::Rgb(250, 200, 120),
        danger: Color::Rgb(250, 125, 150),
    },
    Theme {
        name: "Garden",
        bg: Color::Rgb(14, 20, 16),
        sidebar: Color::Rgb(22, 32, 25),
        surface: Color::Rgb(22, 32, 25),
        accent: Color::Rgb(120, 210, 160),
        text_main: Color::Rgb(230, 242, 234),
        text_dim: Color::Rgb(110, 135, 120),
        border: Color::Rgb(42, 60, 48),
        success: Color::Rgb(120, 210, 160),
        warning: Color::Rgb(235, 200, 120),
        danger: Color::Rgb(230, 120, 120),
    },
    Theme {
        name: "Dawn",
        bg: Color::Rgb(26, 20, 20),
        sidebar: Color::Rgb(38, 28, 28),
        surface: Color::Rgb(38, 28, 28),
        accent: Color::Rgb(255, 170, 130),
        text_main: Color::Rgb(250, 238, 230),
        text_dim: Color::Rgb(150, 125, 115),
        border: Color::Rgb(64, 48, 44),
        success: Color::Rgb(170, 215, 140),
        warning: Color::Rgb(255, 200, 110),
        danger: Color::Rgb(240, 110, 120),
    },
];
