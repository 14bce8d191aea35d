use mediacanvas_engine::{Aabb, SpatialIndex};

fn small_index() -> SpatialIndex {
    SpatialIndex::new(Aabb::new(-100.0, -100.0, 200.0, 200.0), 4, 8)
}

#[test]
fn test_spatial_index_creation() {
    let index = small_index();
    let stats = index.stats();
    assert_eq!(stats.total_items, 0);
    assert_eq!(stats.total_nodes, 1);
    assert_eq!(index.boundary(), Aabb::new(-100.0, -100.0, 200.0, 200.0));
}

#[test]
fn test_spatial_index_insert_and_query() {
    let mut index = small_index();
    assert!(index.insert(1, &Aabb::new(-50.0, -50.0, 10.0, 10.0)));
    assert!(index.insert(2, &Aabb::new(40.0, 40.0, 10.0, 10.0)));

    assert_eq!(index.query(&Aabb::new(-60.0, -60.0, 30.0, 30.0)), vec![1]);
    assert_eq!(index.query(&Aabb::new(35.0, 35.0, 10.0, 10.0)), vec![2]);
    assert!(index.query(&Aabb::new(0.0, 0.0, 5.0, 5.0)).is_empty());
}

#[test]
fn test_straddling_object_reported_once() {
    let mut index = small_index();
    // Fill enough to force subdivision, then add one object across the
    // center lines so it lands in all four quadrants.
    for id in 1..=8 {
        let offset = id as f32 * 5.0;
        index.insert(id, &Aabb::new(-90.0 + offset, -90.0, 2.0, 2.0));
    }
    index.insert(99, &Aabb::new(-10.0, -10.0, 20.0, 20.0));

    let hits = index.query(&Aabb::new(-100.0, -100.0, 200.0, 200.0));
    assert_eq!(hits.iter().filter(|id| **id == 99).count(), 1);
    assert_eq!(hits.len(), 9);
    assert!(index.stats().total_items >= 9);
}

#[test]
fn test_remove_straddling_object() {
    let mut index = small_index();
    for id in 1..=6 {
        index.insert(id, &Aabb::new(id as f32 * 10.0, 10.0, 5.0, 5.0));
    }
    let wide = Aabb::new(-20.0, -20.0, 40.0, 40.0);
    index.insert(50, &wide);
    assert!(index.remove(50, &wide));
    assert!(!index
        .query(&Aabb::new(-100.0, -100.0, 200.0, 200.0))
        .contains(&50));
    assert!(!index.remove(50, &wide));
}

#[test]
fn test_out_of_world_objects_still_queryable() {
    let mut index = small_index();
    let far = Aabb::new(500.0, 500.0, 10.0, 10.0);
    assert!(!index.insert(7, &far));
    assert_eq!(index.stats().overflow_items, 1);
    assert_eq!(index.query(&Aabb::new(490.0, 490.0, 30.0, 30.0)), vec![7]);
    assert!(index.remove(7, &far));
    assert_eq!(index.stats().overflow_items, 0);
}

#[test]
fn test_identical_bounds_respect_max_depth() {
    let mut index = SpatialIndex::new(Aabb::new(0.0, 0.0, 100.0, 100.0), 1, 5);
    for id in 1..=50 {
        index.insert(id, &Aabb::new(10.0, 10.0, 1.0, 1.0));
    }
    let stats = index.stats();
    assert!(stats.max_depth <= 5);
    assert_eq!(index.query_point(10.5, 10.5).len(), 50);
}

#[test]
fn test_rebuild_replaces_contents() {
    let mut index = small_index();
    index.insert(1, &Aabb::new(0.0, 0.0, 10.0, 10.0));
    index.rebuild(vec![
        (2, Aabb::new(20.0, 20.0, 5.0, 5.0)),
        (3, Aabb::new(-30.0, 20.0, 5.0, 5.0)),
    ]);
    let mut hits = index.query(&Aabb::new(-100.0, -100.0, 200.0, 200.0));
    hits.sort_unstable();
    assert_eq!(hits, vec![2, 3]);
}

#[test]
fn test_clear() {
    let mut index = small_index();
    for id in 1..=20 {
        index.insert(id, &Aabb::new(id as f32, id as f32, 1.0, 1.0));
    }
    index.clear();
    let stats = index.stats();
    assert_eq!(stats.total_items, 0);
    assert_eq!(stats.total_nodes, 1);
}
