//! The `nirvana` extension module, driven from an embedded interpreter.
//!
//! Run with `cargo test --features python`.

#![cfg(feature = "python")]

mod common;

use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;
use pyo3::wrap_pymodule;

fn with_module<F>(f: F)
where
    F: for<'py> FnOnce(Python<'py>, &Bound<'py, PyModule>),
{
    common::init_tracing();
    pyo3::prepare_freethreaded_python();
    Python::with_gil(|py| {
        let module = wrap_pymodule!(nirvana::python::nirvana)(py);
        f(py, module.bind(py));
    });
}

macro_rules! nand {
    ($module:expr, $args:expr) => {
        $module
            .getattr("nand")
            .and_then(|nand| nand.call1($args))
            .and_then(|out| out.extract::<bool>())
    };
}

#[test]
fn test_module_attributes() {
    with_module(|_, module| {
        let doc: String = module.getattr("__doc__").unwrap().extract().unwrap();
        assert_eq!(doc, nirvana::MODULE.doc);

        let version: String = module.getattr("__version__").unwrap().extract().unwrap();
        assert_eq!(version, env!("CARGO_PKG_VERSION"));

        let name: String = module
            .getattr("nand")
            .unwrap()
            .getattr("__name__")
            .unwrap()
            .extract()
            .unwrap();
        assert_eq!(name, "nand");
    });
}

#[test]
fn test_truth_table() {
    with_module(|_, module| {
        assert!(nand!(module, (false, false)).unwrap());
        assert!(nand!(module, (true, false)).unwrap());
        assert!(nand!(module, (false, true)).unwrap());
        assert!(!nand!(module, (true, true)).unwrap());
    });
}

#[test]
fn test_python_truthiness() {
    with_module(|_, module| {
        assert!(!nand!(module, (1, "x")).unwrap());
        assert!(nand!(module, (0, 1.5)).unwrap());
        assert!(nand!(module, ("", true)).unwrap());
        assert!(nand!(module, (Option::<i32>::None, true)).unwrap());
        assert!(nand!(module, (vec![0u8], Vec::<u8>::new())).unwrap());
    });
}

#[test]
fn test_arity_errors() {
    with_module(|py, module| {
        let err = nand!(module, (true,)).unwrap_err();
        assert!(err.is_instance_of::<PyTypeError>(py));
        assert_eq!(
            err.value(py).to_string(),
            "nand() takes exactly 2 arguments (1 given)"
        );

        let err = nand!(module, (true, true, true)).unwrap_err();
        assert!(err.is_instance_of::<PyTypeError>(py));

        let err = module.getattr("nand").unwrap().call0().unwrap_err();
        assert!(err.is_instance_of::<PyTypeError>(py));
    });
}

#[test]
fn test_keywords_rejected() {
    with_module(|py, module| {
        let kwargs = PyDict::new(py);
        kwargs.set_item("b", true).unwrap();
        let err = module
            .getattr("nand")
            .unwrap()
            .call((true,), Some(&kwargs))
            .unwrap_err();
        assert!(err.is_instance_of::<PyTypeError>(py));
        assert_eq!(err.value(py).to_string(), "nand() takes no keyword arguments");
    });
}

#[test]
fn test_uncoercible_argument() {
    with_module(|py, module| {
        let defs = PyModule::from_code(
            py,
            c"class Opaque:\n    def __bool__(self):\n        raise ValueError('no truth value')\n",
            c"opaque.py",
            c"opaque",
        )
        .unwrap();
        let opaque = defs.getattr("Opaque").unwrap().call0().unwrap();

        let err = nand!(module, (true, opaque)).unwrap_err();
        assert!(err.is_instance_of::<PyTypeError>(py));
        assert!(!err.is_instance_of::<PyValueError>(py));

        let message = err.value(py).to_string();
        assert!(message.starts_with("nand() argument 2:"), "{message}");
        assert!(message.contains("Opaque"), "{message}");
        assert!(message.contains("no truth value"), "{message}");
    });
}
