use super::*;

#[test]
fn catalog_covers_all_sixteen_regions() {
    assert_eq!(REGIONS.len(), 16);
    assert_eq!(region_names().len(), 16);
}

#[test]
fn comunas_for_known_region_are_nonempty() {
    let comunas = comunas_for("Metropolitana de Santiago");
    assert!(comunas.contains(&"Santiago"));
    assert!(comunas.contains(&"San Joaquín"));
}

#[test]
fn comunas_for_unknown_region_is_empty() {
    assert!(comunas_for("Atlántida").is_empty());
    assert!(comunas_for("").is_empty());
}

#[test]
fn every_region_has_at_least_one_comuna() {
    for (region, comunas) in REGIONS {
        assert!(!comunas.is_empty(), "{region} has no comunas");
    }
}
