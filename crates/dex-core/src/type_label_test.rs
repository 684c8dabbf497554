use super::*;

#[test]
fn type_label_trims_and_rejects_blank() {
    assert_eq!(TypeLabel::try_new("  fire ").unwrap(), "fire");
    assert!(TypeLabel::try_new("   ").is_none());
    assert!(TypeLabel::try_new("").is_none());
}

#[test]
fn type_label_deserialize_rejects_blank() {
    let ok: TypeLabel = serde_yaml::from_str("grass").unwrap();
    assert_eq!(ok.as_str(), "grass");
    assert!(serde_yaml::from_str::<TypeLabel>("''").is_err());
}

#[test]
fn type_filter_any_sentinel() {
    assert_eq!(TypeFilter::parse(None), TypeFilter::Any);
    assert_eq!(TypeFilter::parse(Some("")), TypeFilter::Any);
    assert_eq!(TypeFilter::parse(Some(ANY_TYPE)), TypeFilter::Any);
    assert_eq!(TypeFilter::parse(Some(" (any) ")), TypeFilter::Any);
}

#[test]
fn type_filter_label() {
    let filter = TypeFilter::parse(Some("fire"));
    assert_eq!(filter.label().map(TypeLabel::as_str), Some("fire"));
    assert_eq!(filter.to_string(), "fire");
    assert_eq!(TypeFilter::Any.to_string(), "(any)");
}
