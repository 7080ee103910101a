//! Loaders for the two instance files: variable domains and constraints.
//!
//! Both formats are line-oriented. The variable file declares one variable
//! per line (`name: v1 v2 v3 ...`); the constraint file declares one binary
//! constraint per line (`left op right`). Loading problems is fatal;
//! everything after loading is pure search.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SolverError};
use crate::solver::{
    constraint::{Constraint, ConstraintOp},
    domain::{Domain, Domains},
    engine::VariableId,
    variables::VariableRegistry,
};

/// Operator symbols in the order the constraint parser scans for them.
/// The scan is by symbol priority, not by position in the line: a line
/// containing both `=` and `<` always parses as an equality.
const OPERATOR_SCAN_ORDER: [char; 4] = ['=', '!', '>', '<'];

/// Reads a variable file from disk. See [`parse_variables`].
pub fn load_variables(path: &Path) -> Result<(VariableRegistry, Domains)> {
    let text = fs::read_to_string(path).map_err(|source| SolverError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let loaded = parse_variables(&text)?;
    debug!(path = %path.display(), variables = loaded.0.len(), "loaded variable file");
    Ok(loaded)
}

/// Parses variable lines.
///
/// The name is everything before the first `:` (trimmed); the values are
/// whitespace-separated integers. A line without a `:`, or with a token
/// that is not an integer, is a fatal load error. Lines that are empty
/// after trimming are skipped. A repeated name replaces the earlier domain.
pub fn parse_variables(text: &str) -> Result<(VariableRegistry, Domains)> {
    let mut registry = VariableRegistry::new();
    let mut domains = Domains::new();

    for (number, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let (name, rest) = line.split_once(':').ok_or_else(|| {
            SolverError::MalformedVariableLine {
                line: number + 1,
                reason: "missing `:` separator".to_string(),
            }
        })?;
        let values = rest
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|_| SolverError::MalformedVariableLine {
                        line: number + 1,
                        reason: format!("`{token}` is not an integer"),
                    })
            })
            .collect::<Result<Vec<i64>, SolverError>>()?;

        let id = registry.intern(name.trim());
        domains.insert(id, Domain::new(values));
    }

    Ok((registry, domains))
}

/// Reads a constraint file from disk. See [`parse_constraints`].
pub fn load_constraints(path: &Path, registry: &VariableRegistry) -> Result<Vec<Constraint>> {
    let text = fs::read_to_string(path).map_err(|source| SolverError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let constraints = parse_constraints(&text, registry)?;
    debug!(path = %path.display(), constraints = constraints.len(), "loaded constraint file");
    Ok(constraints)
}

/// Parses constraint lines.
///
/// The operator is the first symbol found scanning the line for the
/// characters in [`OPERATOR_SCAN_ORDER`]; the text before it (trimmed)
/// names the left variable and the text after it the right. Lines
/// containing none of the four symbols are silently skipped. A constraint
/// naming an undeclared variable is a fatal load error.
pub fn parse_constraints(text: &str, registry: &VariableRegistry) -> Result<Vec<Constraint>> {
    let mut constraints = Vec::new();
    for raw in text.lines() {
        let Some((position, symbol)) = OPERATOR_SCAN_ORDER
            .iter()
            .find_map(|op| raw.find(*op).map(|position| (position, *op)))
        else {
            continue;
        };
        let op = ConstraintOp::try_from(symbol)?;
        let left = resolve(registry, raw[..position].trim())?;
        let right = resolve(registry, raw[position + 1..].trim())?;
        constraints.push(Constraint::new(left, op, right));
    }
    Ok(constraints)
}

fn resolve(registry: &VariableRegistry, name: &str) -> Result<VariableId> {
    registry
        .id_of(name)
        .ok_or_else(|| SolverError::UnknownVariable(name.to_string()).into())
}
