use fxhash::FxHashMap;

/// Name of the conventional default export.
pub const DEFAULT_EXPORT: &str = "default";

#[derive(Debug, Clone, PartialEq)]
pub enum ModuleValue {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Namespace(ModuleNamespace),
}

impl ModuleValue {
    pub fn is_undefined(&self) -> bool {
        matches!(self, ModuleValue::Undefined)
    }
}

impl From<bool> for ModuleValue {
    fn from(v: bool) -> Self {
        ModuleValue::Bool(v)
    }
}

impl From<f64> for ModuleValue {
    fn from(v: f64) -> Self {
        ModuleValue::Number(v)
    }
}

impl From<i32> for ModuleValue {
    fn from(v: i32) -> Self {
        ModuleValue::Number(v as f64)
    }
}

impl From<&str> for ModuleValue {
    fn from(v: &str) -> Self {
        ModuleValue::String(v.to_string())
    }
}

impl From<String> for ModuleValue {
    fn from(v: String) -> Self {
        ModuleValue::String(v)
    }
}

impl From<ModuleNamespace> for ModuleValue {
    fn from(v: ModuleNamespace) -> Self {
        ModuleValue::Namespace(v)
    }
}

/// Namespace-like result of a module load, a flat map of named exports.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModuleNamespace {
    exports: FxHashMap<String, ModuleValue>,
}

impl ModuleNamespace {
    pub fn new() -> Self {
        Default::default()
    }

    /// Namespace holding a single default export.
    pub fn with_default<V: Into<ModuleValue>>(value: V) -> Self {
        let mut ns = Self::new();
        ns.insert(DEFAULT_EXPORT, value);
        ns
    }

    pub fn insert<V: Into<ModuleValue>>(&mut self, name: &str, value: V) {
        self.exports.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ModuleValue> {
        self.exports.get(name)
    }

    pub fn has_default(&self) -> bool {
        self.exports.contains_key(DEFAULT_EXPORT)
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }

    /// The default export if the module has one, the whole namespace
    /// otherwise.
    pub fn into_default(mut self) -> ModuleValue {
        match self.exports.remove(DEFAULT_EXPORT) {
            Some(value) => value,
            None => ModuleValue::Namespace(self),
        }
    }
}
