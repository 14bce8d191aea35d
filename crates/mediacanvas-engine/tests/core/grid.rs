use mediacanvas_engine::{CanvasSession, GridSystem};

#[test]
fn test_half_cell_rounds_up() {
    let grid = GridSystem::new(20.0, true).unwrap();
    assert_eq!(grid.snap_value(10.0), 20.0);
    assert_eq!(grid.snap_value(-10.0), 0.0);
    assert_eq!(grid.snap_value(29.9), 20.0);
}

#[test]
fn test_grid_change_does_not_resnap_existing_objects() {
    let mut canvas = CanvasSession::new(800.0, 600.0, 20.0).unwrap();
    let id = canvas.add_object(13.0, 27.0, 50.0, 50.0, 1, 1).unwrap();
    assert_eq!(canvas.object(id).map(|o| (o.x, o.y)), Some((20.0, 20.0)));

    canvas.set_grid_size(50.0).unwrap();
    assert_eq!(canvas.object(id).map(|o| (o.x, o.y)), Some((20.0, 20.0)));

    canvas.move_object(id, 74.0, 76.0).unwrap();
    assert_eq!(canvas.object(id).map(|o| (o.x, o.y)), Some((50.0, 100.0)));
}

#[test]
fn test_snapping_disabled_keeps_raw_values() {
    let mut canvas = CanvasSession::new(800.0, 600.0, 20.0).unwrap();
    canvas.set_snap_enabled(false);
    let id = canvas.add_object(13.0, 27.0, 5.0, 7.0, 1, 1).unwrap();
    let object = canvas.object(id).copied().unwrap();
    assert_eq!((object.x, object.y, object.width, object.height), (13.0, 27.0, 5.0, 7.0));
}

#[test]
fn test_created_objects_never_smaller_than_a_cell() {
    let mut canvas = CanvasSession::new(800.0, 600.0, 20.0).unwrap();
    let id = canvas.add_object(0.0, 0.0, 3.0, 3.0, 1, 1).unwrap();
    assert_eq!(canvas.object(id).map(|o| (o.width, o.height)), Some((20.0, 20.0)));
}
