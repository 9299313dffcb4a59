/// The four headline depths the renderer knows how to present. Each level maps
/// to exactly one semantic tag and one stable set of style classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    One,
    Two,
    Three,
    Four,
}

impl HeadingLevel {
    /// Maps a markdown heading depth (1-4) to a level. Deeper headings have no
    /// preset and are the caller's problem.
    pub fn from_depth(depth: u8) -> Option<HeadingLevel> {
        match depth {
            1 => Some(HeadingLevel::One),
            2 => Some(HeadingLevel::Two),
            3 => Some(HeadingLevel::Three),
            4 => Some(HeadingLevel::Four),
            _ => None,
        }
    }

    pub(crate) fn tag(self) -> &'static str {
        match self {
            HeadingLevel::One => "h1",
            HeadingLevel::Two => "h2",
            HeadingLevel::Three => "h3",
            HeadingLevel::Four => "h4",
        }
    }

    pub(crate) fn preset_classes(self) -> &'static str {
        match self {
            HeadingLevel::One => "text-4xl font-bold pt-10 mb-6",
            HeadingLevel::Two => "text-2xl font-semibold mt-10 mb-4",
            HeadingLevel::Three => "text-xl font-semibold mt-6 mb-3",
            HeadingLevel::Four => "font-semibold mt-4 mb-2",
        }
    }
}
