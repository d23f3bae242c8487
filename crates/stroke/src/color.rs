use gpui::{hsla, Hsla};
use strum_macros::{Display, EnumIter};

/// The ink colors offered in the color dropdown, in menu order.
#[derive(Clone, Copy, Debug, Default, Display, EnumIter, PartialEq, Eq, Hash)]
pub enum NamedColor {
    #[default]
    Black,
    Red,
    Green,
    Blue,
    Yellow,
}

impl NamedColor {
    pub fn hsla(self) -> Hsla {
        match self {
            NamedColor::Black => gpui::black(),
            NamedColor::Red => hsla(0.0, 1.0, 0.5, 1.0),
            NamedColor::Green => hsla(1.0 / 3.0, 1.0, 0.5, 1.0),
            NamedColor::Blue => hsla(2.0 / 3.0, 1.0, 0.5, 1.0),
            NamedColor::Yellow => hsla(1.0 / 6.0, 1.0, 0.5, 1.0),
        }
    }
}

impl From<NamedColor> for Hsla {
    fn from(color: NamedColor) -> Self {
        color.hsla()
    }
}
