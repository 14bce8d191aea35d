use mediacanvas_engine::CanvasSession;

fn canvas() -> CanvasSession {
    CanvasSession::new(800.0, 600.0, 20.0).unwrap()
}

#[test]
fn test_history_caps_at_max_depth() {
    let mut canvas = canvas();
    let id = canvas.add_object(0.0, 0.0, 20.0, 20.0, 1, 1).unwrap();
    for i in 1..=150 {
        canvas.move_object(id, i as f32 * 20.0, 0.0).unwrap();
    }
    assert_eq!(canvas.history().len(), 100);

    let mut undone = 0;
    while canvas.undo() {
        undone += 1;
    }
    assert_eq!(undone, 100);
    // 151 commands were recorded; the oldest 51 (the add and 50 moves) are
    // gone, so the earliest reachable state is the 50th move.
    assert_eq!(canvas.object(id).map(|o| o.x), Some(1000.0));
}

#[test]
fn test_redo_branch_invalidated_by_new_command() {
    let mut canvas = canvas();
    let id = canvas.add_object(0.0, 0.0, 20.0, 20.0, 1, 1).unwrap();
    canvas.move_object(id, 100.0, 0.0).unwrap();
    assert!(canvas.undo());
    assert!(canvas.can_redo());

    canvas.move_object(id, 0.0, 200.0).unwrap();
    assert!(!canvas.can_redo());
    assert!(!canvas.redo());
    assert_eq!(canvas.object(id).map(|o| (o.x, o.y)), Some((0.0, 200.0)));
}

#[test]
fn test_undo_add_then_redo_keeps_id() {
    let mut canvas = canvas();
    let id = canvas.add_object(40.0, 40.0, 20.0, 20.0, 5, 2).unwrap();
    assert!(canvas.undo());
    assert!(!canvas.contains(id));
    assert!(canvas.redo());
    assert_eq!(canvas.object(id).map(|o| o.asset_id), Some(5));

    let next = canvas.add_object(0.0, 0.0, 20.0, 20.0, 1, 1).unwrap();
    assert!(next > id);
}

#[test]
fn test_batch_delete_is_one_step() {
    let mut canvas = canvas();
    let a = canvas.add_object(0.0, 0.0, 20.0, 20.0, 1, 1).unwrap();
    let b = canvas.add_object(40.0, 0.0, 20.0, 20.0, 2, 1).unwrap();
    let c = canvas.add_object(80.0, 0.0, 20.0, 20.0, 3, 1).unwrap();

    assert_eq!(canvas.delete_objects(&[a, c, 999, a]), 2);
    assert_eq!(canvas.object_count(), 1);
    assert_eq!(canvas.history().undo_label(), Some("Delete Objects"));

    assert!(canvas.undo());
    assert_eq!(canvas.object_count(), 3);
    assert_eq!(canvas.object_id_at(0), Some(a));
    assert_eq!(canvas.object_id_at(1), Some(b));
    assert_eq!(canvas.object_id_at(2), Some(c));
}

#[test]
fn test_delete_objects_with_unknown_ids_records_nothing() {
    let mut canvas = canvas();
    canvas.add_object(0.0, 0.0, 20.0, 20.0, 1, 1).unwrap();
    let depth = canvas.history().undo_depth();
    assert_eq!(canvas.delete_objects(&[42, 43]), 0);
    assert_eq!(canvas.history().undo_depth(), depth);
}

#[test]
fn test_clear_forgets_history_but_not_ids() {
    let mut canvas = canvas();
    let first = canvas.add_object(0.0, 0.0, 20.0, 20.0, 1, 1).unwrap();
    canvas.clear();
    assert!(!canvas.can_undo());
    assert_eq!(canvas.object_count(), 0);
    let second = canvas.add_object(0.0, 0.0, 20.0, 20.0, 1, 1).unwrap();
    assert!(second > first);
}
