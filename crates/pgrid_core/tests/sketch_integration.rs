//! Integration tests for the frame loop
//!
//! Drives a sketch the way the application does (step, then draw) and checks
//! the visible outcome of pointer sweeps.

use pgrid_core::{DrawList, PointerSample, Shape, Sketch, SketchParams, Vec2};

fn sweep(sketch: &mut Sketch, out: &mut DrawList, from: Vec2, to: Vec2, frames: u32) {
    let step = (to - from) / frames as f32;
    let mut pos = from;
    for _ in 0..frames {
        let sample = PointerSample::new(pos + step, step);
        sketch.step(Some(sample));
        sketch.draw(Some(sample), out);
        pos += step;
    }
}

// ==================== Pointer Sweep Tests ====================

#[test]
fn test_fast_sweep_disturbs_points_near_path() {
    let mut sketch = Sketch::new(SketchParams::default(), Vec2::new(800.0, 600.0), Some(1));
    let mut out = DrawList::new();

    sweep(&mut sketch, &mut out, Vec2::new(0.0, 300.0), Vec2::new(800.0, 300.0), 40);

    let zone = sketch.params().field.active_zone;
    for p in sketch.grid().points() {
        if (p.origin.y - 300.0).abs() > zone {
            assert!(!p.activated, "point far from the path activated: {:?}", p.origin);
        }
    }
    assert!(sketch.grid().points().iter().any(|p| p.distortion > 0.0));
    assert!(sketch
        .grid()
        .points()
        .iter()
        .all(|p| p.distortion <= sketch.grid().spacing()));
}

#[test]
fn test_connectors_follow_fast_pointer() {
    let mut sketch = Sketch::new(SketchParams::default(), Vec2::new(800.0, 600.0), Some(2));
    let mut out = DrawList::new();

    // Idle frame: two strokes per link + one glyph per point, nothing else
    sketch.step(None);
    sketch.draw(None, &mut out);
    let idle_lines = out.line_count();
    assert_eq!(idle_lines, 2 * sketch.grid().links().len());
    assert_eq!(out.rect_count(), sketch.grid().len());

    // 20 px/frame at the centre adds 4 two-segment connectors
    let sample = PointerSample::new(Vec2::new(400.0, 300.0), Vec2::new(20.0, 0.0));
    sketch.step(Some(sample));
    sketch.draw(Some(sample), &mut out);
    let connectors: Vec<_> = out.shapes()[out.len() - 8..].to_vec();
    for shape in connectors {
        match shape {
            Shape::Line { weight, .. } => assert!(weight <= 0.7 + 1e-6),
            other => panic!("expected connector line, got {:?}", other),
        }
    }
}

#[test]
fn test_points_settle_after_pointer_leaves() {
    let mut sketch = Sketch::new(SketchParams::default(), Vec2::new(640.0, 480.0), Some(3));
    let mut out = DrawList::new();

    sweep(&mut sketch, &mut out, Vec2::new(100.0, 100.0), Vec2::new(540.0, 380.0), 30);
    assert!(sketch.grid().points().iter().any(|p| p.activated));

    let away = PointerSample::new(Vec2::new(5000.0, 5000.0), Vec2::ZERO);
    for _ in 0..200 {
        sketch.step(Some(away));
    }
    sketch.draw(Some(away), &mut out);

    for p in sketch.grid().points() {
        assert!(!p.activated);
        assert!(p.offset().length() < 1e-3);
        assert!(p.distortion < 1e-3);
    }
    // Back to the idle picture
    assert_eq!(out.line_count(), 2 * sketch.grid().links().len());
}
