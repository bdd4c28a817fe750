use super::store::AppState;
use contracts::domain::a002_cliente::Cliente;
use contracts::domain::a003_producto::Producto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailKind {
    Cliente,
    Producto,
}

impl DetailKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailKind::Cliente => "cliente",
            DetailKind::Producto => "producto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    NotFound,
    Error,
}

/// Status of a single-entity fetch.
///
/// Fields are private so that only the constructors below can build a slot:
/// `Ready` always carries data, and no other status does.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSlot<T> {
    entity_id: Option<String>,
    status: DetailStatus,
    data: Option<T>,
    error_message: Option<String>,
}

impl<T> Default for DetailSlot<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T> DetailSlot<T> {
    pub fn idle() -> Self {
        Self {
            entity_id: None,
            status: DetailStatus::Idle,
            data: None,
            error_message: None,
        }
    }

    pub fn loading(entity_id: impl Into<String>) -> Self {
        Self {
            entity_id: Some(entity_id.into()),
            status: DetailStatus::Loading,
            data: None,
            error_message: None,
        }
    }

    pub fn ready(entity_id: impl Into<String>, data: T) -> Self {
        Self {
            entity_id: Some(entity_id.into()),
            status: DetailStatus::Ready,
            data: Some(data),
            error_message: None,
        }
    }

    pub fn not_found(entity_id: impl Into<String>) -> Self {
        Self {
            entity_id: Some(entity_id.into()),
            status: DetailStatus::NotFound,
            data: None,
            error_message: None,
        }
    }

    pub fn error(entity_id: Option<String>, message: impl Into<String>) -> Self {
        Self {
            entity_id,
            status: DetailStatus::Error,
            data: None,
            error_message: Some(message.into()),
        }
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn status(&self) -> DetailStatus {
        self.status
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_idle(&self) -> bool {
        self.status == DetailStatus::Idle
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectionStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// Status of a collection fetch (price lists).
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSlot<T> {
    status: CollectionStatus,
    items: Vec<T>,
    error_message: Option<String>,
}

impl<T> Default for CollectionSlot<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T> CollectionSlot<T> {
    pub fn idle() -> Self {
        Self {
            status: CollectionStatus::Idle,
            items: Vec::new(),
            error_message: None,
        }
    }

    pub fn loading() -> Self {
        Self {
            status: CollectionStatus::Loading,
            ..Self::idle()
        }
    }

    pub fn ready(items: Vec<T>) -> Self {
        Self {
            status: CollectionStatus::Ready,
            items,
            error_message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: CollectionStatus::Error,
            items: Vec::new(),
            error_message: Some(message.into()),
        }
    }

    pub fn status(&self) -> CollectionStatus {
        self.status
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

/// An entity that owns a detail slot in [`AppState`].
pub trait DetailEntity: Clone + 'static {
    const KIND: DetailKind;

    fn slot(state: &AppState) -> &DetailSlot<Self>;

    fn slot_mut(state: &mut AppState) -> &mut DetailSlot<Self>;
}

impl DetailEntity for Cliente {
    const KIND: DetailKind = DetailKind::Cliente;

    fn slot(state: &AppState) -> &DetailSlot<Self> {
        &state.cliente_detail
    }

    fn slot_mut(state: &mut AppState) -> &mut DetailSlot<Self> {
        &mut state.cliente_detail
    }
}

impl DetailEntity for Producto {
    const KIND: DetailKind = DetailKind::Producto;

    fn slot(state: &AppState) -> &DetailSlot<Self> {
        &state.producto_detail
    }

    fn slot_mut(state: &mut AppState) -> &mut DetailSlot<Self> {
        &mut state.producto_detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_carries_data() {
        let slot = DetailSlot::ready("7", 42);
        assert_eq!(slot.status(), DetailStatus::Ready);
        assert_eq!(slot.data(), Some(&42));
        assert_eq!(slot.entity_id(), Some("7"));
    }

    #[test]
    fn test_non_ready_statuses_have_no_data() {
        let slots: Vec<DetailSlot<i32>> = vec![
            DetailSlot::idle(),
            DetailSlot::loading("1"),
            DetailSlot::not_found("1"),
            DetailSlot::error(None, "boom"),
        ];
        for slot in slots {
            assert!(slot.data().is_none(), "{:?}", slot.status());
        }
    }

    #[test]
    fn test_error_keeps_message() {
        let slot: DetailSlot<()> = DetailSlot::error(Some("3".into()), "No se pudo");
        assert_eq!(slot.error_message(), Some("No se pudo"));
        assert_eq!(slot.entity_id(), Some("3"));
    }
}
