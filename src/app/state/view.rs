/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// 3D-Ansicht aktiv (Zeichnen und Ziehen gesperrt)
    pub is_3d_mode: bool,
    /// Grid-Snapping für neue und verschobene Punkte
    pub grid_snap_enabled: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand (2D, Grid-Snapping an).
    pub fn new() -> Self {
        Self {
            is_3d_mode: false,
            grid_snap_enabled: true,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
