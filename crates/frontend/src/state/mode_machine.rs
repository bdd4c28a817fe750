//! Main-table modes and the advisory transition table.
//!
//! Unexpected transitions are logged and then performed anyway: the table
//! documents the intended navigation graph, it does not enforce it.

/// Which entity occupies the primary view surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MainTable {
    None,
    #[default]
    Remito,
    Cliente,
    Producto,
    ListaPrecio,
}

/// Rendering surface derived from the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveModule {
    None,
    #[default]
    Remito,
    ListaPrecio,
}

impl MainTable {
    pub const ALL: [MainTable; 5] = [
        MainTable::None,
        MainTable::Remito,
        MainTable::Cliente,
        MainTable::Producto,
        MainTable::ListaPrecio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MainTable::None => "none",
            MainTable::Remito => "remito",
            MainTable::Cliente => "cliente",
            MainTable::Producto => "producto",
            MainTable::ListaPrecio => "listaPrecio",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == raw)
    }

    /// Targets reachable from this mode without a warning.
    pub fn allowed_transitions(&self) -> &'static [MainTable] {
        use MainTable as M;
        match self {
            M::None => &[M::None, M::Remito, M::ListaPrecio],
            M::Remito => &[M::Remito, M::Cliente, M::Producto, M::None, M::ListaPrecio],
            M::Cliente => &[M::Cliente, M::Remito, M::None, M::ListaPrecio],
            M::Producto => &[M::Producto, M::Remito, M::None, M::ListaPrecio],
            M::ListaPrecio => &[M::ListaPrecio, M::None, M::Remito],
        }
    }

    pub fn can_transition_to(&self, next: MainTable) -> bool {
        self.allowed_transitions().contains(&next)
    }
}

/// Moves to `requested`, warning when the edge is not in the table.
pub fn transition(current: MainTable, requested: MainTable) -> MainTable {
    if !current.can_transition_to(requested) {
        log::warn!(
            "Unexpected mode transition: {} -> {}",
            current.as_str(),
            requested.as_str()
        );
    }
    requested
}

/// Like [`transition`] for a mode name coming from the DOM. Unknown names
/// keep the current mode.
pub fn transition_named(current: MainTable, requested: &str) -> MainTable {
    match MainTable::parse(requested) {
        Some(next) => transition(current, next),
        None => {
            log::warn!("Invalid mode: {:?}", requested);
            current
        }
    }
}

pub fn active_module(mode: MainTable) -> ActiveModule {
    match mode {
        MainTable::ListaPrecio => ActiveModule::ListaPrecio,
        MainTable::None => ActiveModule::None,
        MainTable::Remito | MainTable::Cliente | MainTable::Producto => ActiveModule::Remito,
    }
}

pub fn is_remito_flow(mode: MainTable) -> bool {
    matches!(
        mode,
        MainTable::Remito | MainTable::Cliente | MainTable::Producto
    )
}
