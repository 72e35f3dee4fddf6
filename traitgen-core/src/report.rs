//! Output formatting - human summary and JSON.

use serde::Serialize;
use serde_json::json;

use crate::compiler::Compiler;
use crate::unit::GeneratedUnit;

/// JSON shape of one compiled unit.
#[derive(Debug, Serialize)]
pub struct UnitReport<'a> {
    pub qualified_name: String,
    #[serde(flatten)]
    pub unit: &'a GeneratedUnit,
    pub source: String,
}

impl<'a> UnitReport<'a> {
    pub fn new(compiler: &'a Compiler) -> Self {
        Self {
            qualified_name: compiler.unit().qualified_name(),
            unit: compiler.unit(),
            source: compiler.export_as_abstract_methods(),
        }
    }
}

/// One-paragraph human summary of a unit.
pub fn summary(unit: &GeneratedUnit) -> String {
    let mut out = format!(
        "{} <- {} ({} method(s), {} import(s))",
        unit.qualified_name(),
        unit.source_type(),
        unit.methods().len(),
        unit.imports().len()
    );
    for method in unit.methods() {
        out.push_str(&format!("\n  - {} {}()", method.visibility, method.name));
    }
    out
}

/// Prints a human summary of each unit to stderr.
pub fn print_summary(units: &[&GeneratedUnit]) {
    for unit in units {
        eprintln!("{}", summary(unit));
    }
}

/// Renders compiled units as a JSON document.
pub fn to_json(compilers: &[Compiler]) -> serde_json::Result<String> {
    let units: Vec<UnitReport> = compilers.iter().map(UnitReport::new).collect();
    serde_json::to_string_pretty(&json!({ "units": units }))
}

/// Prints compiled units in JSON format.
///
/// Falls back to an error object on stdout if serialization fails.
pub fn print_json(compilers: &[Compiler]) {
    match to_json(compilers) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            println!("{}", json!({ "error": e.to_string() }));
        }
    }
}
