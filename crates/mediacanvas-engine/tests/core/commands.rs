use mediacanvas_engine::commands::{
    AddObject, BatchMove, DeleteObject, MoveObject, ResizeObject, RotateObject,
};
use mediacanvas_engine::{Aabb, CanvasCommand, CanvasObject, ObjectStore};

fn object(id: u32, x: f32) -> CanvasObject {
    CanvasObject {
        id,
        x,
        y: 0.0,
        width: 50.0,
        height: 50.0,
        rotation: 0.0,
        z_index: 0,
        object_type: 1,
        asset_id: id * 10,
    }
}

fn store() -> ObjectStore {
    let mut store = ObjectStore::new();
    for i in 0..3 {
        let id = store.allocate_id().unwrap();
        store.insert(object(id, i as f32 * 100.0));
    }
    store
}

fn snapshot(store: &ObjectStore) -> Vec<CanvasObject> {
    store.iter().copied().collect()
}

#[test]
fn test_every_command_round_trips() {
    let commands = vec![
        CanvasCommand::Add(AddObject {
            object: object(4, 400.0),
        }),
        CanvasCommand::Delete(DeleteObject {
            object: object(2, 100.0),
        }),
        CanvasCommand::Move(MoveObject {
            id: 1,
            old_x: 0.0,
            old_y: 0.0,
            new_x: 30.0,
            new_y: 40.0,
        }),
        CanvasCommand::Resize(ResizeObject {
            id: 3,
            old: Aabb::new(200.0, 0.0, 50.0, 50.0),
            new: Aabb::new(180.0, 20.0, 90.0, 10.0),
        }),
        CanvasCommand::BatchMove(BatchMove {
            entries: vec![
                MoveObject {
                    id: 1,
                    old_x: 0.0,
                    old_y: 0.0,
                    new_x: 5.0,
                    new_y: 5.0,
                },
                MoveObject {
                    id: 3,
                    old_x: 200.0,
                    old_y: 0.0,
                    new_x: 205.0,
                    new_y: 5.0,
                },
            ],
        }),
        CanvasCommand::Rotate(RotateObject {
            id: 2,
            old_rotation: 0.0,
            new_rotation: 1.0,
        }),
    ];

    for command in commands {
        let mut store = store();
        let before = snapshot(&store);
        command.execute(&mut store);
        let after = snapshot(&store);
        assert_ne!(before, after, "{} changed nothing", command.name());

        command.undo(&mut store);
        assert_eq!(snapshot(&store), before, "{} undo", command.name());

        command.execute(&mut store);
        assert_eq!(snapshot(&store), after, "{} redo", command.name());
    }
}

#[test]
fn test_delete_undo_restores_creation_order() {
    let mut store = store();
    let cmd = CanvasCommand::Delete(DeleteObject {
        object: object(1, 0.0),
    });
    cmd.execute(&mut store);
    assert_eq!(store.ids(), &[2, 3]);
    cmd.undo(&mut store);
    assert_eq!(store.ids(), &[1, 2, 3]);
    assert_eq!(store.get(1).map(|o| o.asset_id), Some(10));
}
