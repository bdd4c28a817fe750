use crate::domain::common::BusinessId;
use crate::shared::date::parse_fecha_to_timestamp;
use serde::{Deserialize, Serialize};

// ============================================================================
// Item
// ============================================================================

/// Product reference inside an item. Payloads spell the id as `ID` or `id`;
/// both resolve to the same field here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductoRef {
    #[serde(alias = "ID")]
    pub id: Option<BusinessId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "transaccionCVItemId")]
    pub transaccion_cv_item_id: Option<BusinessId>,
    pub transaccion_id: Option<BusinessId>,
    pub producto: ProductoRef,
    pub descripcion: String,
    pub cantidad: Option<f64>,
    pub precio: Option<f64>,
}

// ============================================================================
// Remito
// ============================================================================

/// Delivery note as shown in the main table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Remito {
    pub transaccion_id: Option<BusinessId>,
    pub numero_remito: String,
    pub fecha: String,
    pub observacion: String,
    pub cliente_id: Option<BusinessId>,
    pub comision_vendedor: Option<f64>,
    pub deposito_id: Option<BusinessId>,
    pub circuito_contable_id: Option<BusinessId>,
    pub items: Vec<Item>,
}

impl Remito {
    pub fn timestamp(&self) -> Option<i64> {
        parse_fecha_to_timestamp(Some(&self.fecha))
    }

    /// Whether this remito belongs to the given transaction id (string form).
    pub fn has_transaccion(&self, transaccion_id: &str) -> bool {
        self.transaccion_id
            .as_ref()
            .is_some_and(|id| id.as_str() == transaccion_id)
    }

    /// Ordering key: newest date first, then highest numeric transaction id.
    pub(crate) fn sort_key(&self) -> (Option<i64>, Option<i64>) {
        (
            self.timestamp(),
            self.transaccion_id.as_ref().and_then(BusinessId::numeric),
        )
    }
}
