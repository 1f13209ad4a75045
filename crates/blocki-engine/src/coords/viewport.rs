use winit::dpi::PhysicalSize;

/// Viewport size in physical pixels, anchored at the origin.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl From<PhysicalSize<u32>> for Viewport {
    fn from(size: PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_physical_size() {
        let v = Viewport::from(PhysicalSize::new(800, 600));
        assert_eq!(v, Viewport::new(800, 600));
        assert!(v.is_valid());
    }

    #[test]
    fn zero_sized_is_invalid() {
        assert!(!Viewport::new(0, 600).is_valid());
        assert!(!Viewport::default().is_valid());
    }
}
