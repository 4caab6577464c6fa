use crate::palette::Palette;
use crate::render::FontSet;

/**
 * Everything the screens need that used to be process-wide setup: colours and fonts. Built once by
 * `initialize` and passed explicitly to the controller and renderer. The window itself belongs to
 * the windowing layer, which creates it when the event loop resumes.
 */
pub struct LauncherContext {
    pub palette: Palette,
    pub fonts: FontSet,
}

impl LauncherContext {
    pub fn initialize() -> LauncherContext {
        LauncherContext {
            palette: Palette::default(),
            fonts: FontSet::load(),
        }
    }
}
