use mediacanvas_engine::{Aabb, CanvasSession, Viewport};

#[test]
fn test_viewport_bounds_scale_with_zoom() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.center_on(0.0, 0.0);
    vp.set_zoom(2.0);
    assert_eq!(vp.bounds(), Aabb::new(-200.0, -150.0, 400.0, 300.0));
}

#[test]
fn test_screen_world_round_trip() {
    let mut vp = Viewport::new(1024.0, 768.0);
    vp.pan(-37.0, 12.5);
    vp.zoom_at(100.0, 200.0, 0.75);
    let (wx, wy) = vp.screen_to_world(300.0, 400.0);
    let (sx, sy) = vp.world_to_screen(wx, wy);
    assert!((sx - 300.0).abs() < 1e-3);
    assert!((sy - 400.0).abs() < 1e-3);
}

#[test]
fn test_zoom_limits_from_config() {
    let mut config = mediacanvas_engine::CanvasConfig::new(800.0, 600.0, 20.0);
    config.min_zoom = 0.5;
    config.max_zoom = 2.0;
    let mut canvas = CanvasSession::with_config(&config).unwrap();
    canvas.zoom(400.0, 300.0, 5.0);
    assert_eq!(canvas.camera().zoom, 2.0);
    canvas.zoom(400.0, 300.0, -5.0);
    assert_eq!(canvas.camera().zoom, 0.5);
}

#[test]
fn test_visible_sorted_by_z_index() {
    let mut canvas = CanvasSession::new(800.0, 600.0, 20.0).unwrap();
    let back = canvas.add_object(0.0, 0.0, 100.0, 100.0, 1, 1).unwrap();
    let front = canvas.add_object(40.0, 40.0, 100.0, 100.0, 2, 1).unwrap();
    canvas.set_z_index(back, 5).unwrap();

    assert_eq!(canvas.update_viewport(), 2);
    assert_eq!(canvas.visible_ids(), &[front, back]);
    assert_eq!(canvas.visible_object(1).map(|o| o.asset_id), Some(1));
}

#[test]
fn test_transform_follows_camera() {
    let mut canvas = CanvasSession::new(800.0, 600.0, 20.0).unwrap();
    canvas.add_object(100.0, 100.0, 40.0, 20.0, 1, 1).unwrap();
    canvas.update_viewport();
    let t = canvas.transform(0).unwrap();
    assert_eq!((t.x, t.y, t.width, t.height), (100.0, 100.0, 40.0, 20.0));

    canvas.pan(100.0, 0.0);
    canvas.update_viewport();
    let t = canvas.transform(0).unwrap();
    assert_eq!(t.x, 0.0);
    assert!(canvas.transform(1).is_none());
}

#[test]
fn test_hit_test_prefers_top_most() {
    let mut canvas = CanvasSession::new(800.0, 600.0, 20.0).unwrap();
    let a = canvas.add_object(0.0, 0.0, 100.0, 100.0, 1, 1).unwrap();
    let b = canvas.add_object(40.0, 40.0, 100.0, 100.0, 2, 1).unwrap();
    assert_eq!(canvas.object_at(60.0, 60.0), Some(b));
    assert_eq!(canvas.object_at(10.0, 10.0), Some(a));
    assert_eq!(canvas.object_at(500.0, 500.0), None);

    assert_eq!(canvas.bring_to_front(a).unwrap(), 1);
    assert_eq!(canvas.object_at_screen(60.0, 60.0), Some(a));
}
