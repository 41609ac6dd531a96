use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    TableManager
};
use crate::thermocouple::coefficient::CoefficientTable;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    thermocouple: Vec<serde_json::Value>,
}

/// Coefficient tables available to an application, keyed by thermocouple
/// type name. Starts out with the built-in tables; configuration files add
/// to or replace them.
pub struct Configuration {
    table_manager: TableManager,
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration { table_manager: TableManager::with_builtins() }
    }

    pub fn table_manager(&self) -> &TableManager {
        &self.table_manager
    }

    pub fn table(&self, name: &str) -> Result<Arc<CoefficientTable>, ManagerError> {
        self.table_manager.get(name)
    }

    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.load(json_prop)
    }

    pub fn from_json_str(&self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        self.load(json_prop)
    }

    fn load(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        self.table_manager.insert_obj_from_json_vec(&json_prop.thermocouple)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
