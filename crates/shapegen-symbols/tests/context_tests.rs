use super::*;
use crate::provider::SymbolProvider;
use crate::reachability::ReachabilityStrategy;
use crate::test_utils::*;
use shapegen_model::ModelBuilder;

fn constrained_model() -> ModelBuilder {
    base_service()
        .list(id("test#ListA"), id("test#StructureC"))
        .structure(id("test#StructureC"), vec![required_string("string")])
}

#[test]
fn test_context_requires_a_service() {
    let model = Arc::new(constrained_model().build().unwrap());

    let settings = ServerRustSettings::for_service(id("test#ListA"), "x");
    assert!(matches!(
        ServerCodegenContext::new(Arc::clone(&model), settings),
        Err(SymbolError::Model(_))
    ));

    let settings = ServerRustSettings::for_service(id("test#Missing"), "x");
    assert!(matches!(
        ServerCodegenContext::new(model, settings),
        Err(SymbolError::UnknownShape(_))
    ));
}

#[test]
fn test_context_uses_configured_strategy() {
    let ctx = context_with(constrained_model(), ReachabilityStrategy::Fixpoint);
    assert_eq!(ctx.reachability().strategy(), ReachabilityStrategy::Fixpoint);
    assert_eq!(ctx.service(), &service_id());
    assert_eq!(ctx.settings().module_name, "test_service");
    assert!(ctx.model().contains(&id("test#ListA")));
}

#[test]
fn test_analyze_computes_reachability() {
    let ctx = context(constrained_model());
    assert!(!ctx.reachability().is_computed());
    ctx.analyze().unwrap();
    assert!(ctx.reachability().is_computed());
    assert_eq!(ctx.reachability().result().unwrap().reachable_count(), 3);
}

#[test]
fn test_analyze_in_debug_mode() {
    let model = Arc::new(constrained_model().build().unwrap());
    let mut settings = ServerRustSettings::for_service(service_id(), "test_service");
    settings.codegen_config.debug_mode = true;
    let ctx = ServerCodegenContext::new(model, settings).unwrap();
    ctx.analyze().unwrap();
    assert!(ctx.reachability().is_computed());
}

#[test]
fn test_contexts_do_not_share_caches() {
    let first = context(constrained_model());
    let second = context(constrained_model());
    first.symbol_provider().to_symbol(&id("test#ListA")).unwrap();
    assert!(first.reachability().is_computed());
    assert!(!second.reachability().is_computed());

    assert_eq!(
        first.symbol_provider().to_symbol(&id("test#ListA")).unwrap(),
        second.symbol_provider().to_symbol(&id("test#ListA")).unwrap()
    );
}

#[test]
fn test_symbol_provider_is_shared_within_a_run() {
    let ctx = context(constrained_model());
    assert!(Arc::ptr_eq(&ctx.symbol_provider(), &ctx.symbol_provider()));
}
