use crewdeck_domain::feature::{DEFAULT_ORDER, FeatureDescriptor};
use crewdeck_kernel::FeatureRegistry;

fn descriptor(id: &str, order: u32, enabled: bool) -> FeatureDescriptor {
    FeatureDescriptor::builder()
        .id(id)
        .name(format!("Feature {id}"))
        .icon(format!("icon.{id}"))
        .component(format!("view.{id}"))
        .order(order)
        .enabled(enabled)
        .build()
}

#[test]
fn get_all_sorts_ascending_with_stable_ties() {
    let registry = FeatureRegistry::new();
    registry.register(descriptor("charlie", 3, true));
    registry.register(descriptor("alpha", 1, true));
    registry.register(descriptor("bravo", 3, true));
    registry.register(descriptor("delta", 2, true));

    let ids: Vec<_> = registry.get_all().into_iter().map(|d| d.id).collect();
    // "charlie" and "bravo" share order 3; registration order breaks the tie.
    assert_eq!(ids, ["alpha", "delta", "charlie", "bravo"]);
}

#[test]
fn unspecified_order_sorts_last() {
    let registry = FeatureRegistry::new();
    registry.register(descriptor("late", DEFAULT_ORDER, true));
    registry.register(descriptor("early", 1, true));

    let ids: Vec<_> = registry.get_all().into_iter().map(|d| d.id).collect();
    assert_eq!(ids, ["early", "late"]);
}

#[test]
fn get_enabled_filters_without_reordering() {
    let registry = FeatureRegistry::new();
    registry.register(descriptor("a", 1, true));
    registry.register(descriptor("b", 2, false));
    registry.register(descriptor("c", 3, true));

    let ids: Vec<_> = registry.get_enabled().into_iter().map(|d| d.id).collect();
    assert_eq!(ids, ["a", "c"]);
}

#[test]
fn unregister_is_idempotent() {
    let registry = FeatureRegistry::new();
    registry.register(descriptor("a", 1, true));

    registry.unregister("a");
    registry.unregister("a");
    registry.unregister("never-there");

    assert!(registry.is_empty());
    assert!(registry.get("a").is_none());
}

#[test]
fn clear_drops_everything() {
    let registry = FeatureRegistry::new();
    registry.register(descriptor("a", 1, true));
    registry.register(descriptor("b", 2, true));
    assert_eq!(registry.len(), 2);

    registry.clear();
    assert!(registry.is_empty());
    assert!(!registry.has("a"));
}

#[test]
fn rejected_descriptor_reports_every_bad_field_but_registers_nothing() {
    let registry = FeatureRegistry::new();
    registry.register(
        FeatureDescriptor::builder()
            .id("UPPER")
            .name("")
            .icon("")
            .component("")
            .build(),
    );
    assert!(registry.is_empty());
}

#[test]
fn handles_share_state_across_clones() {
    let registry = FeatureRegistry::new();
    let clone = registry.clone();

    registry.register(descriptor("a", 1, true));
    assert!(clone.has("a"));

    clone.unregister("a");
    assert!(registry.is_empty());
}
