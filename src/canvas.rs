//! Square RGBA raster with the handful of vector primitives the icon needs.
//!
//! Coordinates follow raster conventions: pixel `(x, y)` covers
//! `[x, x+1) × [y, y+1)`, bounding boxes are inclusive on both ends and
//! angles are degrees measured clockwise from 3 o'clock (y points down).
//! Everything is rasterised without anti-aliasing.

use image::{ImageBuffer, Rgba, RgbaImage};
use log::debug;
use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use crate::error::{IconError, Result};

// Control point distance of a cubic approximating a quarter circle.
const KAPPA: f32 = 0.552_284_8;

// Angular resolution of flattened arcs, in degrees.
const ARC_STEP_DEG: f32 = 0.5;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Inclusive pixel bounding box `(x0, y0)-(x1, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Same box in continuous space, or `None` when it is empty.
    fn rect(self) -> Option<Rect> {
        Rect::from_ltrb(
            self.x0 as f32,
            self.y0 as f32,
            (self.x1 + 1) as f32,
            (self.y1 + 1) as f32,
        )
    }
}

pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocate a fully transparent `size`×`size` canvas.
    pub fn new(size: u32) -> Result<Self> {
        let pixmap = Pixmap::new(size, size).ok_or(IconError::Canvas(size))?;
        Ok(Self { pixmap })
    }

    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn rounded_rect(&mut self, bounds: Bounds, radius: f32, fill: Rgba<u8>) -> Result<()> {
        const WHAT: &str = "rounded rectangle";
        if !radius.is_finite() || radius < 0.0 {
            return Err(IconError::Geometry(WHAT));
        }
        let rect = bounds.rect().ok_or(IconError::Geometry(WHAT))?;
        let path = rounded_rect_path(rect, radius).ok_or(IconError::Geometry(WHAT))?;
        debug!("{WHAT} {bounds:?} r={radius} fill={:?}", fill.0);
        self.fill(&path, fill);
        Ok(())
    }

    /// Fill the ellipse inscribed in `bounds`.
    pub fn ellipse(&mut self, bounds: Bounds, fill: Rgba<u8>) -> Result<()> {
        let path = bounds
            .rect()
            .and_then(PathBuilder::from_oval)
            .ok_or(IconError::Geometry("ellipse"))?;
        debug!("ellipse {bounds:?} fill={:?}", fill.0);
        self.fill(&path, fill);
        Ok(())
    }

    /// Stroke the clockwise sweep from `start` to `end` of the ellipse inscribed
    /// in `bounds`. An `end` below `start` wraps through 0°. The band is `width`
    /// thick and its outer edge touches the bounding ellipse.
    pub fn arc(
        &mut self,
        bounds: Bounds,
        start: f32,
        end: f32,
        color: Rgba<u8>,
        width: f32,
    ) -> Result<()> {
        const WHAT: &str = "arc";
        if !(start.is_finite() && end.is_finite() && width.is_finite() && width > 0.0) {
            return Err(IconError::Geometry(WHAT));
        }
        let rect = bounds.rect().ok_or(IconError::Geometry(WHAT))?;

        let sweep = arc_sweep(start, end);
        if sweep == 0.0 {
            debug!("{WHAT} {bounds:?} {start}..{end} is empty, skipped");
            return Ok(());
        }

        let rx = rect.width() / 2.0 - width / 2.0;
        let ry = rect.height() / 2.0 - width / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return Err(IconError::Geometry(WHAT));
        }
        let cx = rect.left() + rect.width() / 2.0;
        let cy = rect.top() + rect.height() / 2.0;

        let steps = ((sweep / ARC_STEP_DEG).ceil() as usize).max(1);
        let mut pb = PathBuilder::new();
        for i in 0..=steps {
            let theta = (start + sweep * i as f32 / steps as f32).to_radians();
            let (x, y) = (cx + rx * theta.cos(), cy + ry * theta.sin());
            if i == 0 {
                pb.move_to(x, y);
            } else {
                pb.line_to(x, y);
            }
        }
        if sweep >= 360.0 {
            pb.close();
        }
        let path = pb.finish().ok_or(IconError::Geometry(WHAT))?;

        debug!("{WHAT} {bounds:?} {start}..{end} (sweep {sweep}) w={width} color={:?}", color.0);
        self.stroke(&path, color, width);
        Ok(())
    }

    /// Stroke connected segments through pixel centres with rounded joints.
    pub fn polyline(&mut self, points: &[(i32, i32)], color: Rgba<u8>, width: f32) -> Result<()> {
        const WHAT: &str = "polyline";
        let [first, rest @ ..] = points else {
            return Err(IconError::Geometry(WHAT));
        };
        if rest.is_empty() || !(width.is_finite() && width > 0.0) {
            return Err(IconError::Geometry(WHAT));
        }

        let mut pb = PathBuilder::new();
        pb.move_to(first.0 as f32 + 0.5, first.1 as f32 + 0.5);
        for &(x, y) in rest {
            pb.line_to(x as f32 + 0.5, y as f32 + 0.5);
        }
        let path = pb.finish().ok_or(IconError::Geometry(WHAT))?;

        debug!("{WHAT} {} points w={width} color={:?}", points.len(), color.0);
        self.stroke(&path, color, width);
        Ok(())
    }

    /// Straight-alpha colour of one pixel, `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        // Pixmap::pixel only bounds-checks the flat index, so x past the edge wraps.
        if x >= self.pixmap.width() || y >= self.pixmap.height() {
            return None;
        }
        self.pixmap.pixel(x, y).map(|px| {
            let c = px.demultiply();
            Rgba([c.red(), c.green(), c.blue(), c.alpha()])
        })
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        let size = self.size();
        ImageBuffer::from_fn(size, size, |x, y| self.pixel(x, y).unwrap_or(TRANSPARENT))
    }

    fn fill(&mut self, path: &Path, color: Rgba<u8>) {
        self.pixmap
            .fill_path(path, &paint(color), FillRule::Winding, Transform::identity(), None);
    }

    fn stroke(&mut self, path: &Path, color: Rgba<u8>, width: f32) {
        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &paint(color), &stroke, Transform::identity(), None);
    }
}

fn paint(color: Rgba<u8>) -> Paint<'static> {
    let [r, g, b, a] = color.0;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = false;
    paint
}

/// Clockwise extent in degrees from `start` to `end`, wrapping through 0°.
fn arc_sweep(start: f32, end: f32) -> f32 {
    let span = end - start;
    if span >= 360.0 {
        360.0
    } else {
        span.rem_euclid(360.0)
    }
}

fn rounded_rect_path(rect: Rect, radius: f32) -> Option<Path> {
    let r = radius.min(rect.width().min(rect.height()) / 2.0);
    if r <= 0.0 {
        return Some(PathBuilder::from_rect(rect));
    }
    let (l, t, rt, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    let k = r * KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(l + r, t);
    pb.line_to(rt - r, t);
    pb.cubic_to(rt - r + k, t, rt, t + r - k, rt, t + r);
    pb.line_to(rt, b - r);
    pb.cubic_to(rt, b - r + k, rt - r + k, b, rt - r, b);
    pb.line_to(l + r, b);
    pb.cubic_to(l + r - k, b, l, b - r + k, l, b - r);
    pb.line_to(l, t + r);
    pb.cubic_to(l, t + r - k, l + r - k, t, l + r, t);
    pb.close();
    pb.finish()
}
