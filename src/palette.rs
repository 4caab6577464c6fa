use embedded_graphics::pixelcolor::Rgb888;

/**
 * Every colour the launcher paints with. Built once at startup and handed to the screens and
 * controls that need it, rather than living in module-level globals.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background_dark: Rgb888,
    pub background_medium: Rgb888,
    pub text: Rgb888,
    pub text_secondary: Rgb888,

    pub accent: Rgb888,
    pub accent_hover: Rgb888,
    pub light_blue: Rgb888,
    pub light_blue_hover: Rgb888,
    pub green: Rgb888,
    pub green_hover: Rgb888,
    pub orange: Rgb888,
    pub orange_hover: Rgb888,
    pub red: Rgb888,
    pub red_hover: Rgb888,
}

impl Default for Palette {
    fn default() -> Palette {
        Palette {
            background_dark: Rgb888::new(26, 32, 44),
            background_medium: Rgb888::new(45, 55, 72),
            text: Rgb888::new(226, 232, 240),
            text_secondary: Rgb888::new(148, 163, 184),

            accent: Rgb888::new(99, 102, 241),
            accent_hover: Rgb888::new(79, 70, 229),
            light_blue: Rgb888::new(59, 130, 246),
            light_blue_hover: Rgb888::new(69, 120, 226),
            green: Rgb888::new(34, 197, 94),
            green_hover: Rgb888::new(24, 167, 84),
            orange: Rgb888::new(251, 146, 60),
            orange_hover: Rgb888::new(231, 136, 50),
            red: Rgb888::new(239, 68, 68),
            red_hover: Rgb888::new(209, 58, 58),
        }
    }
}
