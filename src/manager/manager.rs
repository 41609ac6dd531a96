use std::cell::{
    RefCell,
    RefMut
};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::thermocouple::coefficient::{
    CoefficientTable,
    ColdSegment,
    HotSegment
};
use crate::thermocouple::typee::TYPE_E;

use super::managererror::ManagerError;


pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    /// Parses and checks one object without touching the map.
    fn obj_from_json(&self, json_value: serde_json::Value) -> Result<(String, V), ManagerError>;

    fn insert_obj(&self, name: String, obj: V) {
        self.map().insert(name, obj);
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let (name, obj) = self.obj_from_json(json_value)?;
        self.insert_obj(name, obj);
        Ok(())
    }

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    /// All or nothing: the map is only updated once every object parsed.
    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        let staged = json_vec
            .iter()
            .map(|j| self.obj_from_json(j.clone()))
            .collect::<Result<Vec<(String, V)>, ManagerError>>()?;
        for (name, obj) in staged {
            self.insert_obj(name, obj);
        }
        Ok(())
    }

    /// Loads either a single object or an array of objects from a JSON file.
    fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = ManagerError::from_json_or_json_parse_error(json_value)?;
            self.insert_obj_from_json_vec(&json_array)
        } else {
            self.insert_obj_from_json(json_value)
        }
    }
}


#[derive(Deserialize)]
struct CoefficientTableJsonProp {
    name: String,
    cold: ColdSegment,
    hot: Vec<HotSegment>,
}

/// Named coefficient tables. Every table is validated on insertion.
pub struct TableManager {
    map_cell: RefCell<HashMap<String, Arc<CoefficientTable>>>,
}

impl TableManager {
    pub fn new() -> TableManager {
        TableManager { map_cell: RefCell::new(HashMap::new()) }
    }

    /// Registry pre-populated with the built-in type E table under `"E"`.
    pub fn with_builtins() -> TableManager {
        let manager = TableManager::new();
        manager.map().insert("E".to_owned(), Arc::new(TYPE_E));
        manager
    }

    pub fn insert(&self, name: &str, table: CoefficientTable) -> Result<(), ManagerError> {
        table.validate()?;
        self.insert_obj(name.to_owned(), Arc::new(table));
        Ok(())
    }
}

impl Default for TableManager {
    fn default() -> Self {
        TableManager::new()
    }
}

impl IManager<Arc<CoefficientTable>> for TableManager {
    fn map(&self) -> RefMut<'_, HashMap<String, Arc<CoefficientTable>>> {
        self.map_cell.borrow_mut()
    }

    fn obj_from_json(&self, json_value: serde_json::Value) -> Result<(String, Arc<CoefficientTable>), ManagerError> {
        let json_prop: CoefficientTableJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        let table = CoefficientTable::from_segments(json_prop.cold, &json_prop.hot)?;
        table.validate()?;
        Ok((json_prop.name, Arc::new(table)))
    }

    fn insert_obj(&self, name: String, obj: Arc<CoefficientTable>) {
        info!(
            name = name.as_str(),
            segments = obj.calibrated_segment_count(),
            "registered coefficient table"
        );
        self.map().insert(name, obj);
    }
}
