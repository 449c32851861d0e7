use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use serde_json;

use super::managererror::{
    parse_json_value,
    ManagerError
};

// ─────────────────────────────────────────────────────────────────────────────
// ManagerBuilder
// ─────────────────────────────────────────────────────────────────────────────

/// 載入期間可寫入的 name → object 對照表，載入完成後以 `build` 凍結。
pub struct ManagerBuilder<V: ?Sized> {
    map: HashMap<String, Arc<V>>
}

impl<V: ?Sized> ManagerBuilder<V> {
    pub fn new() -> ManagerBuilder<V> {
        ManagerBuilder { map: HashMap::new() }
    }

    pub fn insert(&mut self, name: String, value: Arc<V>) -> Result<(), ManagerError> {
        if self.contains(&name) {
            return Err(ManagerError::DuplicateNameError(name));
        }
        self.map.insert(name, value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<Arc<V>, ManagerError> {
        self.map
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::NameNotFoundError(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn build(self) -> FrozenManager<V> {
        FrozenManager { map: self.map }
    }
}

impl<V: ?Sized> Default for ManagerBuilder<V> {
    fn default() -> Self {
        ManagerBuilder::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FrozenManager
// ─────────────────────────────────────────────────────────────────────────────

/// Read-only catalogue of shared objects, safe to hand across threads.
pub struct FrozenManager<V: ?Sized> {
    map: HashMap<String, Arc<V>>
}

impl<V: ?Sized> FrozenManager<V> {
    pub fn get(&self, name: &str) -> Result<Arc<V>, ManagerError> {
        self.map
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::NameNotFoundError(name.to_owned()))
    }

    /// Names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.map.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// IManager
// ─────────────────────────────────────────────────────────────────────────────

/// Loader turning JSON definitions into catalogue entries.
///
/// `S` carries whatever already-frozen catalogues the definitions may refer
/// to by name.
pub trait IManager<V: ?Sized, S> {
    fn insert_obj_from_json(
        &self,
        builder: &mut ManagerBuilder<V>,
        json_value: serde_json::Value,
        supports: &S,
    ) -> Result<(), ManagerError>;

    fn insert_obj_from_json_vec(
        &self,
        builder: &mut ManagerBuilder<V>,
        json_vec: &[serde_json::Value],
        supports: &S,
    ) -> Result<(), ManagerError> {
        for json_value in json_vec.iter() {
            self.insert_obj_from_json(builder, json_value.clone(), supports)?;
        }
        Ok(())
    }

    fn load(&self, json_vec: &[serde_json::Value], supports: &S) -> Result<FrozenManager<V>, ManagerError> {
        let mut builder = ManagerBuilder::new();
        self.insert_obj_from_json_vec(&mut builder, json_vec, supports)?;
        Ok(builder.build())
    }

    /// Loads a file holding either one definition or an array of them.
    fn from_reader(&self, file_path: &str, supports: &S) -> Result<FrozenManager<V>, ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = parse_json_value(json_value)?;
            self.load(&json_array, supports)
        } else {
            self.load(&[json_value], supports)
        }
    }
}
