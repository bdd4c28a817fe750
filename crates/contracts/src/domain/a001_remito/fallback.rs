use super::aggregate::Remito;
use super::mapper::normalize_remitos_payload;
use serde_json::json;

/// Sample data shown when the remito list cannot be fetched.
pub fn fallback_remitos() -> Vec<Remito> {
    normalize_remitos_payload(&json!([
        {
            "transaccionId": 38925753,
            "numeroRemito": "X-0001-00000064",
            "fecha": "2023-06-01",
            "observacion": "VALOR DECLARADO $340.500  ",
            "clienteId": 5182181,
            "comisionVendedor": 0,
            "depositoId": -2,
            "circuitoContableId": -2,
            "transaccionProductoItem": [
                {
                    "transaccionCVItemId": 48344936,
                    "transaccionId": 38925753,
                    "producto": { "ID": 1672624, "id": 1672624 },
                    "descripcion": "12.5x8x19 Bolsa Marron 100g C/M",
                    "cantidad": 4000,
                    "precio": 0
                }
            ]
        }
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_dataset() {
        let remitos = fallback_remitos();
        assert_eq!(remitos.len(), 1);
        let remito = &remitos[0];
        assert!(remito.has_transaccion("38925753"));
        assert_eq!(remito.numero_remito, "X-0001-00000064");
        assert_eq!(remito.cliente_id.as_ref().unwrap().as_str(), "5182181");
        assert_eq!(remito.items.len(), 1);
        assert_eq!(
            remito.items[0].producto.id.as_ref().unwrap().as_str(),
            "1672624"
        );
    }
}
