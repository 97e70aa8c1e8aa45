//! Resolution behaviour over the sample dictionary.

use bgdict::{DictError, StorageError};

use crate::common::{failing_resolver, sample_resolver, FailingStore};

#[tokio::test]
async fn test_unknown_id_is_not_found_not_an_empty_word() {
    let resolver = sample_resolver();
    for id in [0, -1, 9999] {
        let err = resolver.resolve_by_id(id).await.unwrap_err();
        assert!(err.is_not_found(), "id {} should be NotFound", id);
    }
}

#[tokio::test]
async fn test_word_attaches_type_and_translation() {
    let resolver = sample_resolver();
    let word = resolver.resolve_by_id(102).await.unwrap();

    assert_eq!(word.name, "ябълка");
    assert_eq!(word.name_stressed, "я`бълка");
    assert_eq!(word.name_broken, "я-бъл-ка");
    assert_eq!(word.type_id, 2);
    assert_eq!(word.word_type.unwrap().name, "noun_female");
    assert_eq!(word.translation.unwrap().content, "apple");
}

#[tokio::test]
async fn test_word_without_relations() {
    let resolver = sample_resolver();
    let word = resolver.resolve_by_id(104).await.unwrap();

    assert_eq!(word.type_id, 0);
    assert!(word.word_type.is_none());
    assert!(word.translation.is_none());
}

#[tokio::test]
async fn test_derivative_match_wins_over_canonical_name() {
    let resolver = sample_resolver();

    // "пиша" is both a derivative form and a canonical word.
    let results = resolver.resolve_by_query("пиша").await.unwrap();
    assert_eq!(results.len(), 1);

    let derivative = results[0].derivative.as_ref().unwrap();
    assert_eq!(derivative.id, 1004);
    assert_eq!(derivative.is_infinitive, 1);
    assert_eq!(derivative.base_word, results[0].base_word);
}

#[tokio::test]
async fn test_only_first_derivative_match_is_returned() {
    let resolver = sample_resolver();

    let results = resolver.resolve_by_query("градът").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].derivative.as_ref().unwrap().id, 1001);
    assert_eq!(results[0].base_word.id, 100);
    assert_eq!(results[0].base_word.translation.as_ref().unwrap().content, "city");

    // The simple form lookup still lists every match.
    let forms = resolver.find_derivative_matches("градът").await.unwrap();
    let ids: Vec<i32> = forms.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![1001, 1002]);
}

#[tokio::test]
async fn test_canonical_homonyms_are_all_returned() {
    let resolver = sample_resolver();

    let results = resolver.resolve_by_query("град").await.unwrap();
    let ids: Vec<i32> = results.iter().map(|r| r.base_word.id).collect();
    assert_eq!(ids, vec![100, 101]);
    assert!(results.iter().all(|r| r.derivative.is_none()));
}

#[tokio::test]
async fn test_no_match_is_empty_not_error() {
    let resolver = sample_resolver();
    assert!(resolver.resolve_by_query("несъществуващо").await.unwrap().is_empty());
    assert!(resolver
        .find_derivative_matches("несъществуващо")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_derived_forms_default_null_columns() {
    let resolver = sample_resolver();
    let forms = resolver.resolve_derived_forms_of(103).await.unwrap();

    assert_eq!(forms.len(), 2);
    assert!(forms.iter().all(|f| f.is_consistent()));

    let imperfect = &forms[1];
    assert_eq!(imperfect.name, "пишех");
    assert_eq!(imperfect.description, "");
    assert_eq!(imperfect.is_infinitive, 0);
}

#[tokio::test]
async fn test_search_many_skips_failing_query() {
    let resolver = failing_resolver(FailingStore::on_query("градове"));

    let results = resolver
        .resolve_many_by_query(vec!["градове".to_string(), "ябълка".to_string()])
        .await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].base_word.id, 102);
}

#[tokio::test]
async fn test_search_many_preserves_input_order() {
    let resolver = sample_resolver();

    let results = resolver
        .resolve_many_by_query(vec![
            "ябълки".to_string(),
            "град".to_string(),
            "няма".to_string(),
            "пишех".to_string(),
        ])
        .await;

    let ids: Vec<i32> = results.iter().map(|r| r.base_word.id).collect();
    assert_eq!(ids, vec![102, 100, 101, 103]);
}

#[tokio::test]
async fn test_many_by_id_is_all_or_nothing() {
    let resolver = sample_resolver();

    let batch = resolver.resolve_many_by_id(vec![100, 103]).await.unwrap();
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0].derivative_forms.len(), 2);
    assert_eq!(batch[1].derivative_forms.len(), 2);

    // 100 resolves on its own, but the batch still fails.
    assert!(resolver.resolve_many_by_id(vec![100]).await.is_ok());
    let err = resolver.resolve_many_by_id(vec![100, 9999]).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_many_by_id_surfaces_storage_failure() {
    let resolver = failing_resolver(FailingStore::on_id(103));

    let err = resolver
        .resolve_many_by_id(vec![100, 103, 102])
        .await
        .unwrap_err();
    assert!(matches!(err, DictError::Storage(StorageError::Connection(_))));
}
