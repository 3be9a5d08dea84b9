use brandhub_test_utils::{brand_with_bad_hex, memory_service, valid_brand};

#[test]
fn bad_hex_fixture_differs_only_in_palette() {
    let good = valid_brand("a", "Broken Palette");
    let bad = brand_with_bad_hex("a");

    assert_eq!(bad.colors.len(), good.colors.len() + 1);
    assert_eq!(bad.name, good.name);
}

#[tokio::test]
async fn memory_service_starts_empty() {
    let service = memory_service();
    assert!(service.fetch_brands().await.unwrap().is_empty());
}
