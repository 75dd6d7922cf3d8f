use std::fmt;

/// Width and height in whole cells, e.g. the visible part of a terminal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Self::new(width, height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pair() {
        let size: Size = (120, 40).into();
        assert_eq!(size, Size::new(120, 40));
        assert_eq!(Size::default(), Size::new(0, 0));
        assert_eq!(size.to_string(), "120x40");
    }
}
