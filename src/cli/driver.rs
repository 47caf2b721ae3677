//! Resolve a service's symbol table.

use anyhow::{Context, Result};
use serde::Serialize;
use shapegen_symbols::{ServerCodegenContext, SymbolProvider};
use std::sync::Arc;
use tracing::debug;

use super::args::{CliArgs, OutputFormat};
use super::config::{load_model, resolve_settings};
use super::reporter::Reporter;

/// One resolved data shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SymbolRow {
    pub shape: String,
    pub shape_type: String,
    pub kind: String,
    #[serde(rename = "type")]
    pub rust_type: String,
    pub namespace: Option<String>,
    pub unconstrained: bool,
    /// Part of a recursive shape group.
    pub recursive: bool,
    /// What an unconstrained collection wrapper holds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wraps: Option<String>,
}

/// Resolve every data shape of the service closure, in closure order.
pub fn collect_rows(ctx: &ServerCodegenContext, unconstrained_only: bool) -> Result<Vec<SymbolRow>> {
    ctx.analyze()?;
    let provider = ctx.symbol_provider();
    let result = ctx.reachability().result()?;
    let closure = result.closure();

    let mut rows = Vec::new();
    for id in closure.iter() {
        let shape = ctx.model().expect_shape(id)?;
        if !shape.is_data_shape() {
            continue;
        }
        let symbol = provider
            .to_symbol(id)
            .with_context(|| format!("failed to resolve {id}"))?;
        let unconstrained = symbol.kind.is_unconstrained();
        if unconstrained_only && !unconstrained {
            continue;
        }
        rows.push(SymbolRow {
            shape: id.to_string(),
            shape_type: shape.shape_type().to_string(),
            kind: symbol.kind.to_string(),
            rust_type: symbol.rust_type.render(false),
            namespace: symbol.namespace().map(str::to_string),
            unconstrained,
            recursive: result.cycle_of(id).is_some(),
            wraps: provider.wrapped_type(id)?.map(|ty| ty.render(true)),
        });
    }
    debug!(rows = rows.len(), "symbol table");
    Ok(rows)
}

/// Run the command and return what should be printed to stdout.
pub fn run(args: &CliArgs, color: bool) -> Result<String> {
    let model = Arc::new(load_model(&args.model)?);
    let settings = resolve_settings(args)?;
    let ctx = ServerCodegenContext::new(model, settings)
        .context("failed to set up the generation run")?;
    let rows = collect_rows(&ctx, args.unconstrained_only)?;

    match args.format {
        OutputFormat::Text => Ok(Reporter::new(color).render(&rows)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&rows)?;
            out.push('\n');
            Ok(out)
        }
    }
}
