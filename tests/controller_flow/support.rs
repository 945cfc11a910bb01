use floorplan_editor::{
    point, AppController, AppIntent, AppState, EditorTool, PointerButton, Room, RoomId,
};

/// Test-Sitzung: Controller + State mit fortlaufender Uhr.
pub struct Session {
    pub controller: AppController,
    pub state: AppState,
    clock_ms: u64,
}

impl Session {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self {
            controller: AppController::new(),
            state: AppState::new(),
            clock_ms: 0,
        }
    }

    pub fn with_tool(tool: EditorTool) -> Self {
        let mut session = Self::new();
        session.send(AppIntent::SetEditorToolRequested { tool });
        session
    }

    pub fn send(&mut self, intent: AppIntent) {
        self.controller
            .handle_intent(&mut self.state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    /// Maustaste drücken; jeder Klick liegt eine Sekunde nach dem vorigen.
    pub fn down(&mut self, x: f32, z: f32) {
        self.clock_ms += 1000;
        self.down_at(x, z, self.clock_ms);
    }

    pub fn down_at(&mut self, x: f32, z: f32, time_ms: u64) {
        self.clock_ms = self.clock_ms.max(time_ms);
        self.send(AppIntent::PointerDown {
            world_pos: Some(point(x, z)),
            button: PointerButton::Primary,
            time_ms,
        });
    }

    pub fn move_to(&mut self, x: f32, z: f32) {
        self.send(AppIntent::PointerMove {
            world_pos: Some(point(x, z)),
        });
    }

    pub fn up(&mut self, x: f32, z: f32) {
        self.send(AppIntent::PointerUp {
            world_pos: Some(point(x, z)),
            button: PointerButton::Primary,
        });
    }

    pub fn right_up(&mut self, x: f32, z: f32) {
        self.send(AppIntent::PointerUp {
            world_pos: Some(point(x, z)),
            button: PointerButton::Secondary,
        });
    }

    pub fn click(&mut self, x: f32, z: f32) {
        self.down(x, z);
        self.up(x, z);
    }

    /// Zieht eine Ecke von `from` nach `to` (mit einem Zwischenschritt).
    pub fn drag(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.down(from.0, from.1);
        self.move_to((from.0 + to.0) * 0.5, (from.1 + to.1) * 0.5);
        self.move_to(to.0, to.1);
        self.up(to.0, to.1);
    }

    /// Zeichnet ein Rechteck per Klick-Klick und gibt die neue Raum-ID zurück.
    pub fn draw_rectangle(&mut self, a: (f32, f32), c: (f32, f32)) -> RoomId {
        self.send(AppIntent::SetEditorToolRequested {
            tool: EditorTool::RectangularWall,
        });
        self.click(a.0, a.1);
        self.click(c.0, c.1);
        self.last_room_id()
    }

    /// Zeichnet ein Polygon per Einzelklicks und schließt es am Startpunkt.
    pub fn draw_polygon(&mut self, points: &[(f32, f32)]) -> RoomId {
        self.send(AppIntent::SetEditorToolRequested {
            tool: EditorTool::PolygonWall,
        });
        for &(x, z) in points {
            self.click(x, z);
        }
        let (x, z) = points[0];
        self.click(x, z);
        self.last_room_id()
    }

    pub fn last_room_id(&self) -> RoomId {
        self.state
            .rooms
            .list_rooms()
            .last()
            .map(|room| room.id())
            .expect("mindestens ein Raum")
    }

    pub fn room(&self, id: RoomId) -> &Room {
        self.state.rooms.room(id).expect("Raum vorhanden")
    }

    /// Prüft Ring-Schluss und Symmetrie der geteilten Kanten aller Räume.
    pub fn assert_invariants(&self) {
        for room in self.state.rooms.rooms() {
            let points = room.points();
            assert_eq!(points.first(), points.last(), "Ring von {} offen", room.id());
            assert_eq!(room.edges().len(), points.len() - 1);
            assert!(room.vertex_count() >= 3);
            for shared in room.shared_edges() {
                let other = self.room(shared.other_room);
                assert!(
                    other.shared_edges().iter().any(|s| s.other_room == room.id()
                        && s.edge_index == shared.other_edge_index
                        && s.other_edge_index == shared.edge_index),
                    "Geteilte Kante {}/{} nicht symmetrisch",
                    room.id(),
                    shared.edge_index
                );
            }
        }
    }
}
