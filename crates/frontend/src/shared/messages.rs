//! User-facing texts.

pub struct UiMessages {
    pub remitos_load_error: &'static str,
    pub no_remitos: &'static str,
    pub lista_precio_loading: &'static str,
    pub lista_precios_load_error: &'static str,
    pub no_lista_precios: &'static str,
    pub no_items: &'static str,
    pub cliente_loading: &'static str,
    pub cliente_not_found: &'static str,
    pub cliente_load_error: &'static str,
    pub producto_loading: &'static str,
    pub producto_not_found: &'static str,
    pub producto_load_error: &'static str,
    pub producto_unidad_medida_not_found: &'static str,
    pub producto_tasa_iva_not_found: &'static str,
    pub producto_cuenta_contable_not_found: &'static str,
    pub identificacion_tributaria_not_found: &'static str,
    pub categoria_fiscal_not_found: &'static str,
    pub empty_state_title: &'static str,
}

pub const UI_MESSAGES: UiMessages = UiMessages {
    remitos_load_error:
        "No se pudo cargar la lista de remitos desde la API. Se muestran datos de ejemplo.",
    no_remitos: "No hay remitos para mostrar.",
    lista_precio_loading: "Cargando listado de precios...",
    lista_precios_load_error: "No se pudo cargar el listado de precios desde la API.",
    no_lista_precios: "No hay listas de precio para mostrar.",
    no_items: "Esta transaccion no tiene items.",
    cliente_loading: "Cargando cliente...",
    cliente_not_found: "No se encontro el cliente para el id seleccionado.",
    cliente_load_error: "No se pudo cargar el cliente seleccionado.",
    producto_loading: "Cargando producto...",
    producto_not_found: "No se encontro el producto para el id seleccionado.",
    producto_load_error: "No se pudo cargar el producto seleccionado.",
    producto_unidad_medida_not_found: "El producto no tiene datos de unidadMedida.",
    producto_tasa_iva_not_found: "El producto no tiene datos de tasaIva.",
    producto_cuenta_contable_not_found: "El producto no tiene datos de cuentaContable.",
    identificacion_tributaria_not_found:
        "El cliente no tiene datos de identificacionTributaria.",
    categoria_fiscal_not_found: "El cliente no tiene datos de categoriaFiscal.",
    empty_state_title: "Selecciona un modulo",
};
