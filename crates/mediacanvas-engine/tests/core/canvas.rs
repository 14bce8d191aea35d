use mediacanvas_engine::{CanvasError, CanvasSession, NewObject};

fn canvas() -> CanvasSession {
    CanvasSession::new(800.0, 600.0, 20.0).unwrap()
}

#[test]
fn test_add_move_undo_scenario() {
    let mut canvas = canvas();
    let id = canvas.add_object(0.0, 0.0, 100.0, 100.0, 1, 1).unwrap();
    assert_eq!(id, 1);

    canvas.move_object(id, 205.0, 203.0).unwrap();
    assert_eq!(canvas.object(id).map(|o| (o.x, o.y)), Some((200.0, 200.0)));
    assert!(canvas.contains(id));

    assert!(canvas.undo());
    assert_eq!(canvas.object(id).map(|o| (o.x, o.y)), Some((0.0, 0.0)));
    assert!(canvas.contains(id));
}

#[test]
fn test_culling_counts_only_objects_in_view() {
    let mut canvas = canvas();
    canvas.add_object(0.0, 0.0, 100.0, 100.0, 1, 1).unwrap();
    canvas.add_object(300.0, 200.0, 100.0, 100.0, 1, 1).unwrap();
    canvas.add_object(600.0, 400.0, 100.0, 100.0, 1, 1).unwrap();
    canvas.add_object(2000.0, 2000.0, 100.0, 100.0, 1, 1).unwrap();
    canvas.add_object(-900.0, 100.0, 100.0, 100.0, 1, 1).unwrap();

    assert_eq!(canvas.update_viewport(), 3);
}

#[test]
fn test_batch_move_undoes_atomically() {
    let mut canvas = canvas();
    let a = canvas.add_object(0.0, 0.0, 40.0, 40.0, 1, 1).unwrap();
    let b = canvas.add_object(100.0, 0.0, 40.0, 40.0, 1, 1).unwrap();
    let version = canvas.state_version();

    canvas.begin_batch_move();
    canvas.add_to_batch_move(a, 200.0, 200.0).unwrap();
    canvas.add_to_batch_move(b, 300.0, 200.0).unwrap();
    assert!(canvas.end_batch_move().unwrap());
    assert_eq!(canvas.state_version(), version.wrapping_add(1));

    assert!(canvas.undo());
    assert_eq!(canvas.object(a).map(|o| (o.x, o.y)), Some((0.0, 0.0)));
    assert_eq!(canvas.object(b).map(|o| (o.x, o.y)), Some((100.0, 0.0)));
    // Only the two adds remain.
    assert_eq!(canvas.history().undo_depth(), 2);
}

#[test]
fn test_batch_resize_snaps_targets() {
    let mut canvas = canvas();
    let a = canvas.add_object(0.0, 0.0, 40.0, 40.0, 1, 1).unwrap();
    canvas.begin_batch_resize();
    canvas.add_to_batch_resize(a, 11.0, 9.0, 57.0, 3.0).unwrap();
    canvas.end_batch_resize().unwrap();
    let o = canvas.object(a).copied().unwrap();
    assert_eq!((o.x, o.y, o.width, o.height), (20.0, 0.0, 60.0, 20.0));

    canvas.undo();
    let o = canvas.object(a).copied().unwrap();
    assert_eq!((o.x, o.y, o.width, o.height), (0.0, 0.0, 40.0, 40.0));
}

#[test]
fn test_unknown_ids_are_rejected_without_side_effects() {
    let mut canvas = canvas();
    let version = canvas.state_version();
    assert_eq!(
        canvas.move_object(9, 0.0, 0.0),
        Err(CanvasError::UnknownObject(9))
    );
    assert!(canvas.delete_object(9).is_err());
    assert!(canvas.resize_object(9, 0.0, 0.0, 10.0, 10.0).is_err());
    canvas.begin_batch_move();
    assert!(canvas.add_to_batch_move(9, 0.0, 0.0).is_err());
    assert!(!canvas.end_batch_move().unwrap());
    assert_eq!(canvas.state_version(), version);
    assert!(!canvas.can_undo());
}

#[test]
fn test_invalid_geometry_rejected() {
    let mut canvas = canvas();
    assert!(matches!(
        canvas.add_object(0.0, 0.0, 0.0, 10.0, 1, 1),
        Err(CanvasError::InvalidSize { .. })
    ));
    assert!(matches!(
        canvas.add_object(f32::NAN, 0.0, 10.0, 10.0, 1, 1),
        Err(CanvasError::NonFiniteCoordinate { .. })
    ));
    assert_eq!(canvas.object_count(), 0);
    // Rejected adds must not consume ids.
    assert_eq!(canvas.add_object(0.0, 0.0, 20.0, 20.0, 1, 1), Ok(1));
}

#[test]
fn test_builder_with_rotation_and_z() {
    let mut canvas = canvas();
    let id = canvas
        .add(
            NewObject::new(0.0, 0.0, 100.0, 40.0)
                .asset(3)
                .kind(2)
                .rotation(std::f32::consts::FRAC_PI_2)
                .z_index(7),
        )
        .unwrap();
    let o = canvas.object(id).copied().unwrap();
    assert_eq!((o.asset_id, o.object_type, o.z_index), (3, 2, 7));

    canvas.rotate_object(id, 0.0).unwrap();
    assert_eq!(canvas.object(id).map(|o| o.rotation), Some(0.0));
    canvas.undo();
    assert_eq!(
        canvas.object(id).map(|o| o.rotation),
        Some(std::f32::consts::FRAC_PI_2)
    );
}

#[test]
fn test_index_follows_moves_and_undo() {
    let mut canvas = canvas();
    let id = canvas.add_object(0.0, 0.0, 40.0, 40.0, 1, 1).unwrap();
    canvas.move_object(id, 5000.0, 5000.0).unwrap();
    assert_eq!(canvas.update_viewport(), 0);
    assert_eq!(canvas.object_at(5010.0, 5010.0), Some(id));

    canvas.undo();
    assert_eq!(canvas.update_viewport(), 1);
    assert_eq!(canvas.object_at(5010.0, 5010.0), None);
}

#[test]
fn test_state_version_increments_per_mutation() {
    let mut canvas = canvas();
    let v0 = canvas.state_version();
    let id = canvas.add_object(0.0, 0.0, 40.0, 40.0, 1, 1).unwrap();
    canvas.move_object(id, 40.0, 40.0).unwrap();
    canvas.undo();
    canvas.redo();
    assert_eq!(canvas.state_version(), v0.wrapping_add(4));
    canvas.update_viewport();
    assert_eq!(canvas.state_version(), v0.wrapping_add(4));
}

#[test]
fn test_overlapping_large_items_keep_index_small() {
    let mut canvas = canvas();
    let ids: Vec<_> = (0..5)
        .map(|_| canvas.add_object(0.0, 0.0, 4000.0, 4000.0, 1, 1).unwrap())
        .collect();
    assert!(canvas.index_stats().total_nodes < 100);

    canvas.move_object(ids[0], 100.0, 100.0).unwrap();
    assert!(canvas.undo());
    assert!(canvas.redo());
    let stats = canvas.index_stats();
    assert!(stats.total_nodes < 100, "{stats:?}");
    assert!(stats.total_items < 100, "{stats:?}");
    assert_eq!(canvas.update_viewport(), 5);
}

#[test]
fn test_objects_and_camera_serialize_for_snapshots() {
    let mut canvas = canvas();
    canvas
        .add(NewObject::new(40.0, 60.0, 80.0, 20.0).asset(9).kind(2).z_index(4))
        .unwrap();
    canvas.pan(-120.0, 40.0);

    let objects: Vec<_> = canvas.objects().copied().collect();
    let json = serde_json::to_string(&objects).unwrap();
    let restored: Vec<mediacanvas_engine::CanvasObject> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, objects);
    assert_eq!(restored[0].bounds(), objects[0].bounds());

    let camera = canvas.camera();
    let value = serde_json::to_value(camera).unwrap();
    assert_eq!(value["zoom"], 1.0);
    assert_eq!(serde_json::from_value::<mediacanvas_engine::Camera>(value).unwrap(), camera);
}
