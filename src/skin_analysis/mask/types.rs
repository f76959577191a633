//! Skin mask types

/// Binary per-pixel skin classification, row-major, same size as its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinMask {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl SkinMask {
    pub fn new(width: u32, height: u32, data: Vec<bool>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> bool,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self::new(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        self.data[y as usize * self.width as usize + x as usize]
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    pub fn count_skin(&self) -> usize {
        self.data.iter().filter(|&&skin| skin).count()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }
}
