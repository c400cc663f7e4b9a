//! `grimoire rules`: list the constraint registry.

use serde::Serialize;

use grimoire_core::domain::{
    CONSTRAINT_REGISTRY, ConstraintDef, EntityKind, Field, RuleId, rules::constraints_of,
};

use crate::{cli::RulesArgs, error::CliResult, output::OutputManager};

/// One registry row as rendered by the CLI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RuleRow {
    entity: EntityKind,
    field: Field,
    rule: RuleId,
    description: String,
}

impl From<&ConstraintDef> for RuleRow {
    fn from(def: &ConstraintDef) -> Self {
        Self {
            entity: def.entity,
            field: def.field,
            rule: def.rule,
            description: def.description(),
        }
    }
}

pub fn execute(args: RulesArgs, output: OutputManager) -> CliResult<()> {
    let rows = select(args.entity, args.rule);

    if output.is_json() {
        output.json(&rows)?;
        return Ok(());
    }

    if rows.is_empty() {
        let scope = args
            .entity
            .map(|e| e.to_string())
            .unwrap_or_else(|| "any entity".into());
        match args.rule {
            Some(rule) => output.info(&format!("No {rule} constraints declared for {scope}"))?,
            None => output.info(&format!("No constraints declared for {scope}"))?,
        }
        return Ok(());
    }

    output.header("Field constraints:")?;
    for row in &rows {
        output.print(&format!(
            "  {:<22} {:<14} {}",
            format!("{}.{}", row.entity, row.field),
            row.rule.as_str(),
            row.description
        ))?;
    }
    Ok(())
}

fn select(entity: Option<EntityKind>, rule: Option<RuleId>) -> Vec<RuleRow> {
    let defs: Vec<&ConstraintDef> = match entity {
        Some(kind) => constraints_of(kind).collect(),
        None => CONSTRAINT_REGISTRY.iter().collect(),
    };
    defs.into_iter()
        .filter(|def| rule.is_none_or(|r| def.rule == r))
        .map(RuleRow::from)
        .collect()
}
