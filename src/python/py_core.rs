//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{ActionMethod, ActionRecord};

/// Python wrapper for ActionRecord.
///
/// Combatants and methods are exposed as lowercase strings.
#[pyclass(name = "ActionRecord", frozen)]
#[derive(Clone, Debug)]
pub struct PyActionRecord(pub ActionRecord);

#[pymethods]
impl PyActionRecord {
    /// "attack" or "heal".
    #[getter]
    fn method(&self) -> &'static str {
        match self.0.method() {
            ActionMethod::Attack => "attack",
            ActionMethod::Heal => "heal",
        }
    }

    #[getter]
    fn actor(&self) -> &'static str {
        self.0.actor().as_str()
    }

    /// The combatant hit, or None for heals.
    #[getter]
    fn victim(&self) -> Option<&'static str> {
        self.0.victim().map(|v| v.as_str())
    }

    #[getter]
    fn points(&self) -> i64 {
        self.0.points()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "ActionRecord(method={:?}, actor={:?}, victim={:?}, points={})",
            self.method(),
            self.actor(),
            self.victim(),
            self.points()
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
