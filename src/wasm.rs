// WebAssembly bindings for editor front-ends
use crate::index::TypeCatalog;
use crate::path::PropertyPath;
use crate::types::TypeDescriptor;
use crate::TypeResolver;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ProptypeWasm {
    resolver: TypeResolver<TypeCatalog>,
}

#[wasm_bindgen]
impl ProptypeWasm {
    /// Build from optional catalog TOML layered over the platform types
    #[wasm_bindgen(constructor)]
    pub fn new(catalog_content: Option<String>) -> Result<ProptypeWasm, JsValue> {
        let mut index = TypeCatalog::platform();
        if let Some(content) = catalog_content {
            let user = TypeCatalog::load_from_str(&content)
                .map_err(|e| JsValue::from_str(&format!("Failed to load catalog: {}", e)))?;
            index.merge(user);
        }
        Ok(Self {
            resolver: TypeResolver::new(index),
        })
    }

    /// Returns JSON string of the type report
    #[wasm_bindgen]
    pub fn describe(&self, type_text: &str) -> Result<String, JsValue> {
        let t = parse_type(type_text)?;
        serde_json::to_string(&self.resolver.report(&t))
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize report: {}", e)))
    }

    /// Returns JSON of the parsed value, or "null" when the type is not validated
    #[wasm_bindgen]
    pub fn check(&self, type_text: &str, value: &str) -> Result<String, JsValue> {
        let t = parse_type(type_text)?;
        let parsed = match self.resolver.get_parser(&t) {
            Some(parser) => Some(
                parser
                    .parse(value)
                    .map_err(|e| JsValue::from_str(&e.to_string()))?,
            ),
            None => None,
        };
        serde_json::to_string(&parsed)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize value: {}", e)))
    }

    #[wasm_bindgen]
    pub fn format(&self, type_text: &str) -> Result<String, JsValue> {
        let t = parse_type(type_text)?;
        Ok(self.resolver.format(&t))
    }

    /// Returns the type text reached by `path`, or None when undetermined
    #[wasm_bindgen]
    pub fn navigate(&self, type_text: &str, path: &str) -> Result<Option<String>, JsValue> {
        let t = parse_type(type_text)?;
        let path = PropertyPath::parse(path).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let target = self
            .resolver
            .navigate(&t, &path)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(target.map(|t| t.to_string()))
    }
}

fn parse_type(text: &str) -> Result<TypeDescriptor, JsValue> {
    TypeDescriptor::parse(text)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse type: {}", e)))
}
