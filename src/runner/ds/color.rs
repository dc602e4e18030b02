use std::fmt;

/// 24 bit colour, packed as `0xRRGGBB` when it crosses into script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Rgb { red, green, blue }
    }

    /// Bits above the low 24 are ignored.
    pub fn from_uint(color: u32) -> Self {
        Rgb {
            red: ((color >> 16) & 0xff) as u8,
            green: ((color >> 8) & 0xff) as u8,
            blue: (color & 0xff) as u8,
        }
    }

    pub fn to_uint(&self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
    }
}

impl From<u32> for Rgb {
    fn from(color: u32) -> Self {
        Rgb::from_uint(color)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_uint())
    }
}
