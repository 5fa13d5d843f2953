//! [`Surface`] implementation on top of embedded-graphics.
//!
//! Wraps any `DrawTarget<Color = Rgb565>` (a panel driver, a framebuffer or
//! the desktop simulator) and keeps the text state (font, size, colour and
//! cursor) that the cursor-based [`Surface`] text API expects.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};

use super::{Font, Surface};

/// Font used when no font has been selected.
pub const DEFAULT_FONT: &MonoFont<'static> = &FONT_6X10;

/// Adapter exposing an embedded-graphics draw target as a [`Surface`].
///
/// # Examples
/// ```ignore
/// let display = SimulatorDisplay::<Rgb565>::new(Size::new(320, 240));
/// let mut screen = Screen::new(GraphicsSurface::new(display));
/// ```
pub struct GraphicsSurface<D> {
    target: D,
    font: Font,
    scale: u8,
    text_color: Rgb565,
    cursor: Point,
}

impl<D> GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D) -> Self {
        Self {
            target,
            font: None,
            scale: 1,
            text_color: Rgb565::WHITE,
            cursor: Point::zero(),
        }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Give back the wrapped draw target.
    pub fn into_inner(self) -> D {
        self.target
    }

    /// Current text cursor.
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    fn text_style(&self) -> MonoTextStyle<'static, Rgb565> {
        MonoTextStyle::new(self.font.unwrap_or(DEFAULT_FONT), self.text_color)
    }

    /// Default-font text hangs below the cursor, selected fonts sit on it.
    fn baseline(&self) -> Baseline {
        if self.font.is_some() {
            Baseline::Alphabetic
        } else {
            Baseline::Top
        }
    }

    fn magnification(&self) -> u32 {
        u32::from(self.scale.max(1))
    }
}

impl<D> Surface for GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), Self::Error> {
        self.target.fill_solid(&area, color)
    }

    fn draw_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), Self::Error> {
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(color)
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        area.into_styled(style).draw(&mut self.target)
    }

    fn draw_bitmap(
        &mut self,
        top_left: Point,
        bitmap: &[u8],
        size: Size,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        let stride = size.width.div_ceil(8) as usize;
        let pixels = (0..size.height)
            .flat_map(|y| (0..size.width).map(move |x| (x, y)))
            .filter(|&(x, y)| {
                bitmap
                    .get(y as usize * stride + x as usize / 8)
                    .is_some_and(|&byte| byte & (0x80u8 >> (x % 8)) != 0)
            })
            .map(|(x, y)| Pixel(top_left + Point::new(x as i32, y as i32), color));

        self.target.draw_iter(pixels)
    }

    fn draw_color_bitmap(
        &mut self,
        top_left: Point,
        bitmap: &[u16],
        size: Size,
    ) -> Result<(), Self::Error> {
        let area = Rectangle::new(top_left, size);
        let colors = bitmap.iter().map(|&raw| Rgb565::from(RawU16::new(raw)));
        self.target.fill_contiguous(&area, colors)
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn set_text_size(&mut self, scale: u8) {
        self.scale = scale.max(1);
    }

    fn set_text_color(&mut self, color: Rgb565) {
        self.text_color = color;
    }

    fn measure_text(&self, text: &str, origin: Point) -> Rectangle {
        let metrics = self
            .text_style()
            .measure_string(text, origin, self.baseline());
        let bounds = metrics.bounding_box;
        let scale = self.magnification();

        Rectangle::new(
            origin + (bounds.top_left - origin) * scale as i32,
            bounds.size * scale,
        )
    }

    fn set_cursor(&mut self, position: Point) {
        self.cursor = position;
    }

    fn draw_text(&mut self, text: &str) -> Result<(), Self::Error> {
        let style = self.text_style();
        let baseline = self.baseline();
        let origin = self.cursor;
        let scale = self.magnification();

        let next = if scale == 1 {
            Text::with_baseline(text, origin, style, baseline).draw(&mut self.target)?
        } else {
            let mut magnified = Magnified {
                target: &mut self.target,
                origin,
                scale,
            };
            let next = Text::with_baseline(text, origin, style, baseline).draw(&mut magnified)?;
            origin + (next - origin) * scale as i32
        };

        self.cursor = next;
        Ok(())
    }
}

/// Draw target that blows every pixel up into a `scale x scale` block,
/// anchored at `origin`.
struct Magnified<'a, D> {
    target: &'a mut D,
    origin: Point,
    scale: u32,
}

impl<D> Dimensions for Magnified<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn bounding_box(&self) -> Rectangle {
        self.target.bounding_box()
    }
}

impl<D> DrawTarget for Magnified<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Color = Rgb565;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let block = Size::new_equal(self.scale);
        for Pixel(point, color) in pixels {
            let top_left = self.origin + (point - self.origin) * self.scale as i32;
            self.target
                .fill_solid(&Rectangle::new(top_left, block), color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    fn surface() -> GraphicsSurface<MockDisplay<Rgb565>> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        GraphicsSurface::new(display)
    }

    #[test]
    fn test_fill_rect_covers_area() {
        let mut surface = surface();
        surface
            .fill_rect(
                Rectangle::new(Point::new(1, 2), Size::new(3, 2)),
                Rgb565::RED,
            )
            .unwrap();

        let display = surface.target();
        assert_eq!(display.get_pixel(Point::new(1, 2)), Some(Rgb565::RED));
        assert_eq!(display.get_pixel(Point::new(3, 3)), Some(Rgb565::RED));
        assert_eq!(display.get_pixel(Point::new(4, 3)), None);
        assert_eq!(display.get_pixel(Point::new(1, 4)), None);
    }

    #[test]
    fn test_draw_rect_strokes_inside_edge_only() {
        let mut surface = surface();
        surface
            .draw_rect(
                Rectangle::new(Point::new(0, 0), Size::new(4, 4)),
                Rgb565::GREEN,
            )
            .unwrap();

        let display = surface.target();
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(Rgb565::GREEN));
        assert_eq!(display.get_pixel(Point::new(3, 3)), Some(Rgb565::GREEN));
        assert_eq!(display.get_pixel(Point::new(1, 1)), None);
        assert_eq!(display.get_pixel(Point::new(4, 0)), None);
    }

    #[test]
    fn test_mono_bitmap_draws_set_bits_only() {
        let mut surface = surface();
        // 10 pixels wide -> two bytes per row.
        let bitmap = [0b1000_0000, 0b0100_0000, 0b0000_0001, 0b0000_0000];
        surface
            .draw_bitmap(Point::new(2, 2), &bitmap, Size::new(10, 2), Rgb565::BLUE)
            .unwrap();

        let display = surface.target();
        assert_eq!(display.get_pixel(Point::new(2, 2)), Some(Rgb565::BLUE));
        assert_eq!(display.get_pixel(Point::new(11, 2)), Some(Rgb565::BLUE));
        assert_eq!(display.get_pixel(Point::new(9, 3)), Some(Rgb565::BLUE));
        assert_eq!(display.get_pixel(Point::new(3, 2)), None);
        assert_eq!(display.get_pixel(Point::new(2, 3)), None);
    }

    #[test]
    fn test_color_bitmap_decodes_raw_words() {
        let mut surface = surface();
        let bitmap = [0xF800, 0x07E0, 0x001F, 0xFFFF];
        surface
            .draw_color_bitmap(Point::new(0, 0), &bitmap, Size::new(2, 2))
            .unwrap();

        let display = surface.target();
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(Rgb565::RED));
        assert_eq!(display.get_pixel(Point::new(1, 0)), Some(Rgb565::GREEN));
        assert_eq!(display.get_pixel(Point::new(0, 1)), Some(Rgb565::BLUE));
        assert_eq!(display.get_pixel(Point::new(1, 1)), Some(Rgb565::WHITE));
    }

    #[test]
    fn test_measure_default_font_is_top_anchored() {
        let surface = surface();
        let bounds = surface.measure_text("ab", Point::zero());
        assert_eq!(bounds.top_left, Point::zero());
        assert_eq!(bounds.size, Size::new(12, 10));
    }

    #[test]
    fn test_measure_scales_with_text_size() {
        let mut surface = surface();
        surface.set_text_size(3);
        let bounds = surface.measure_text("ab", Point::new(5, 5));
        assert_eq!(bounds.top_left, Point::new(5, 5));
        assert_eq!(bounds.size, Size::new(36, 30));
    }

    #[test]
    fn test_measure_selected_font_sits_on_baseline() {
        let mut surface = surface();
        surface.set_font(Some(&FONT_6X10));
        let bounds = surface.measure_text("a", Point::zero());
        assert!(bounds.top_left.y < 0);
        assert_eq!(bounds.size.width, 6);
    }

    #[test]
    fn test_draw_text_advances_cursor() {
        let mut surface = surface();
        surface.set_cursor(Point::new(0, 0));
        surface.draw_text("ab").unwrap();
        assert_eq!(surface.cursor(), Point::new(12, 0));

        surface.set_text_size(2);
        surface.set_cursor(Point::new(0, 20));
        surface.draw_text("a").unwrap();
        assert_eq!(surface.cursor(), Point::new(12, 20));
    }
}
