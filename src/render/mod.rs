//! Pixel sinks provided by the crate.
//!
//! The algorithms only ever talk to [`PixelSink`](crate::raster::PixelSink);
//! these are two ready-made implementations:
//!
//! - [`FrameBuffer`]: borrowed, bounds-checked view into an existing buffer,
//!   one buffer cell per pixel
//! - [`Canvas`]: owning buffer with a zoomable, centered [`Viewport`] and
//!   image export

mod canvas;
mod framebuffer;

pub use canvas::{Canvas, Viewport};
pub use framebuffer::FrameBuffer;

/// Number of cells in a `width × height` buffer, computed without `u32`
/// overflow.
#[inline]
pub(crate) fn buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn buffer_len_does_not_wrap_at_u32() {
        // 70000² > u32::MAX
        assert_eq!(buffer_len(70_000, 70_000), 4_900_000_000);
        assert_eq!(buffer_len(u32::MAX, 2), 2 * u32::MAX as usize);
    }
}
