//! PyO3 bindings: the `nirvana` extension module.
//!
//! Module init walks [`MODULE`] once and installs each export as a
//! positional-only Python callable. Argument errors surface as `TypeError`.

use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyCFunction, PyDict, PyTuple};

use crate::boundary::{reject_keywords, ArgumentError, Truthy, Uncoercible};
use crate::registry::{Export, MODULE};

/// A Python call argument; truthy per `bool(obj)`.
struct HostValue<'py>(Bound<'py, PyAny>);

impl Truthy for HostValue<'_> {
    fn truthy(&self) -> Result<bool, Uncoercible> {
        self.0.is_truthy().map_err(|err| {
            let py = self.0.py();
            let type_name = self
                .0
                .get_type()
                .name()
                .map(|name| name.to_string())
                .unwrap_or_else(|_| String::from("object"));
            Uncoercible::new(type_name, err.value(py).to_string())
        })
    }
}

impl From<ArgumentError> for PyErr {
    fn from(err: ArgumentError) -> Self {
        PyTypeError::new_err(err.to_string())
    }
}

fn install(module: &Bound<'_, PyModule>, export: &'static Export) -> PyResult<()> {
    let function = PyCFunction::new_closure(
        module.py(),
        Some(export.c_name),
        Some(export.c_doc),
        move |args: &Bound<'_, PyTuple>, kwargs: Option<&Bound<'_, PyDict>>| -> PyResult<bool> {
            reject_keywords(export.name, kwargs.map_or(0, |kwargs| kwargs.len()))?;

            let values: Vec<HostValue<'_>> = args.iter().map(HostValue).collect();
            let values: Vec<&dyn Truthy> = values.iter().map(|value| value as &dyn Truthy).collect();
            Ok(export.call(&values)?)
        },
    )?;
    module.add(export.name, function)
}

/// The `nirvana` native module.
#[pymodule]
pub fn nirvana(m: &Bound<'_, PyModule>) -> PyResult<()> {
    for export in MODULE.exports {
        install(m, export)?;
    }
    m.add("__doc__", MODULE.doc)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    tracing::debug!(
        module = MODULE.name,
        exports = MODULE.exports.len(),
        "installed exports"
    );
    Ok(())
}
