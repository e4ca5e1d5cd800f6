/// Read-only row access shared by the f32 and 8-bit gray buffers.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    /// Map every pixel through `f`, producing a tightly packed row-major buffer.
    fn map_pixels<T>(&self, mut f: impl FnMut(Self::Pixel) -> T) -> Vec<T>
    where
        Self: Sized,
    {
        let mut out = Vec::with_capacity(self.width() * self.height());
        for row in self.rows() {
            out.extend(row.iter().map(|&p| f(p)));
        }
        out
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }
}
