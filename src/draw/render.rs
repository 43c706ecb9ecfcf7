//! Cairo-based rendering of stroke segments.

use super::segment::{Segment, StrokeStyle};

/// Commits one segment into the surface behind `ctx`.
///
/// Round caps and joins make consecutive short segments read as one smooth
/// stroke. No interpolation happens between samples: sparse move events
/// simply produce longer straight segments.
///
/// The context's operator, source and line settings are restored afterwards.
pub fn render_segment(ctx: &cairo::Context, segment: &Segment) -> Result<(), cairo::Error> {
    ctx.save()?;

    ctx.set_operator(segment.style.operator());
    match segment.style {
        StrokeStyle::Pen { color, .. } => {
            ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        }
        // Only the source alpha matters for destination-out
        StrokeStyle::Eraser { .. } => ctx.set_source_rgba(0.0, 0.0, 0.0, 1.0),
    }
    ctx.set_line_width(segment.style.width());
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(segment.from.x.value(), segment.from.y.value());
    ctx.line_to(segment.to.x.value(), segment.to.y.value());
    let stroked = ctx.stroke();

    ctx.restore()?;
    stroked
}

/// Erases the whole surface behind `ctx` to fully transparent.
pub fn clear_context(ctx: &cairo::Context) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Clear);
    let painted = ctx.paint();
    ctx.restore()?;
    painted
}
