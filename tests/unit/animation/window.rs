use super::*;

fn line(n: i64) -> Vec<Point> {
    (0..n).map(|i| Point::new(0, i)).collect()
}

fn xs(poly: &[Point]) -> Vec<i64> {
    poly.iter().map(|p| p.x).collect()
}

#[test]
fn closed_windows_start_every_step() {
    let windows: Vec<Window> = (0..4).map(|f| Window::select(3, f, 12, true).unwrap()).collect();
    assert_eq!(
        windows,
        vec![
            Window::Span { start: 0, end: 3 },
            Window::Span { start: 3, end: 6 },
            Window::Span { start: 6, end: 9 },
            Window::Wrapped { start: 9, end: 0 },
        ]
    );

    let pts = line(12);
    let starts: Vec<i64> = windows
        .iter()
        .map(|w| w.polylines(&pts)[0][0].x)
        .collect();
    assert_eq!(starts, vec![0, 3, 6, 9]);
    assert_eq!(xs(&windows[3].polylines(&pts)[0]), vec![9, 10, 11, 0]);
}

#[test]
fn open_wrap_splits_into_two_polylines() {
    let pts = line(10);
    let w = Window::select(4, 2, 10, false).unwrap();
    assert_eq!(w, Window::Split { start: 8, end: 2 });
    let polys = w.polylines(&pts);
    assert_eq!(polys.len(), 2);
    assert_eq!(xs(&polys[0]), vec![8, 9]);
    assert_eq!(xs(&polys[1]), vec![0, 1, 2]);
}

#[test]
fn full_cycle_step_wraps_to_same_index() {
    // step == len: start and end coincide, which counts as a wrap.
    let w = Window::select(5, 1, 5, true).unwrap();
    assert_eq!(w, Window::Wrapped { start: 0, end: 0 });
    let pts = line(5);
    assert_eq!(xs(&w.polylines(&pts)[0]), vec![0, 1, 2, 3, 4, 0]);
}

#[test]
fn empty_point_list_has_no_window() {
    assert_eq!(Window::select(3, 0, 0, true), None);
    assert_eq!(Window::select(0, 7, 0, false), None);
}

#[test]
fn large_step_and_frame_stay_in_range() {
    let idx = ((usize::MAX as u128) * (usize::MAX as u128) % 7) as usize;
    // frame + 1 saturates, so start and end coincide and the window wraps.
    assert_eq!(
        Window::select(usize::MAX, usize::MAX, 7, true),
        Some(Window::Wrapped {
            start: idx,
            end: idx
        })
    );
    assert_eq!(
        Window::select(usize::MAX, 2, 7, false),
        Window::select(usize::MAX % 7, 2, 7, false)
    );
}

#[test]
fn mismatched_points_yield_nothing() {
    let w = Window::Span { start: 3, end: 9 };
    assert!(w.polylines(&line(5)).is_empty());
}
