use super::*;

#[test]
fn catalog_has_three_products() {
    assert_eq!(products().len(), 3);
}

#[test]
fn catalog_entries_have_non_empty_copy() {
    for product in products() {
        assert!(!product.title.is_empty(), "product {} has no title", product.id);
        assert!(!product.description.is_empty(), "product {} has no description", product.id);
        assert!(!product.price.is_empty(), "product {} has no price", product.id);
    }
}

#[test]
fn catalog_order_is_stable_across_reads() {
    let first = products().iter().map(|p| p.id).collect::<Vec<_>>();
    for _ in 0..5 {
        let again = products().iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(again, first);
    }
    assert_eq!(first, vec![1, 2, 3]);
}

#[test]
fn catalog_ids_are_unique() {
    let ids = products().iter().map(|p| p.id).collect::<std::collections::HashSet<_>>();
    assert_eq!(ids.len(), products().len());
}

#[test]
fn product_image_prompt_and_alt_include_title() {
    let seo = &products()[1];
    assert_eq!(seo.image_prompt(), "SEO Optimizasyon service visual");
    assert_eq!(seo.image_alt(), "Visual representation of SEO Optimizasyon service");
}
