//! Procedures known to one translation run.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::warn;

use super::ast::Procedure;

#[derive(Debug, Default)]
pub struct Registry {
    procs: HashMap<String, Procedure>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a procedure under its lower-cased name. A later definition
    /// with the same name replaces the earlier one.
    pub fn define(&mut self, name: &str, params: Vec<String>, body: Vec<String>) -> &Procedure {
        let key = name.to_lowercase();
        let proc = Procedure {
            name: key.clone(),
            params,
            body,
        };
        match self.procs.entry(key) {
            Entry::Occupied(mut e) => {
                warn!("procedure `{}` redefined, the new definition wins", e.key());
                e.insert(proc);
                e.into_mut()
            }
            Entry::Vacant(e) => e.insert(proc),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Procedure> {
        self.procs.get(&name.to_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.procs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procs.is_empty()
    }
}
