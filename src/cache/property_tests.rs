//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check key derivation and cache-aside behavior over
//! arbitrary queries.

use proptest::prelude::*;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::cache::{CacheKey, CacheStore, MemoryStore, NullStore};
use crate::error::Result;
use crate::search::{CachedSearchTool, ResponseType, SearchDepth, SearchProvider, SearchRequest};

// == Test Doubles ==
#[derive(Default)]
struct CountingProvider {
    calls: AtomicUsize,
}

#[async_trait]
impl SearchProvider for CountingProvider {
    async fn search(&self, query: &str, depth: SearchDepth, max_results: u32) -> Result<Value> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!({ "query": query, "depth": depth, "max": max_results, "call": call }))
    }
}

// == Strategies ==
/// Any printable query, including leading/trailing whitespace and colons
fn query_strategy() -> impl Strategy<Value = String> {
    "[ -~]{1,80}"
}

fn depth_strategy() -> impl Strategy<Value = SearchDepth> {
    prop_oneof![Just(SearchDepth::Basic), Just(SearchDepth::Advanced)]
}

/// Depth strings that are not exactly `basic` or `advanced`
fn invalid_depth_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{0,12}".prop_filter("must be invalid", |s| s != "basic" && s != "advanced")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Same inputs always give the same key.
    #[test]
    fn prop_key_deterministic(
        query in query_strategy(),
        depth in depth_strategy(),
        max in 1u32..50
    ) {
        prop_assert_eq!(
            CacheKey::new(depth, max, &query),
            CacheKey::new(depth, max, &query)
        );
    }

    // Changing any one field changes the key.
    #[test]
    fn prop_key_distinct_per_field(
        query in query_strategy(),
        other_query in query_strategy(),
        depth in depth_strategy(),
        max in 1u32..50,
        other_max in 1u32..50
    ) {
        let key = CacheKey::new(depth, max, &query);

        if other_query != query {
            prop_assert_ne!(&key, &CacheKey::new(depth, max, &other_query));
        }
        if other_max != max {
            prop_assert_ne!(&key, &CacheKey::new(depth, other_max, &query));
        }
        let other_depth = match depth {
            SearchDepth::Basic => SearchDepth::Advanced,
            SearchDepth::Advanced => SearchDepth::Basic,
        };
        prop_assert_ne!(&key, &CacheKey::new(other_depth, max, &query));
    }

    // Invalid depths behave exactly like "advanced".
    #[test]
    fn prop_invalid_depth_normalizes(query in query_strategy(), raw in invalid_depth_strategy()) {
        let request = SearchRequest::new(query.clone(), &raw, 5);

        prop_assert_eq!(request.depth(), SearchDepth::Advanced);
        prop_assert_eq!(request.warnings().len(), 1);
        prop_assert_eq!(
            CacheKey::for_request(&request),
            CacheKey::new(SearchDepth::Advanced, 5, &query)
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // A second identical call is a hit with the byte-identical payload.
    #[test]
    fn prop_second_call_is_cached(
        query in query_strategy(),
        depth in depth_strategy(),
        max in 1u32..20
    ) {
        let provider = Arc::new(CountingProvider::default());
        let tool = CachedSearchTool::new(provider.clone(), Arc::new(MemoryStore::new()), Some(300));

        let (first, second) = tokio_test::block_on(async {
            let first = tool.search(&query, depth.as_str(), max).await;
            let second = tool.search(&query, depth.as_str(), max).await;
            (first, second)
        });

        prop_assert_eq!(first.response_type, Some(ResponseType::Generated));
        prop_assert_eq!(second.response_type, Some(ResponseType::Cached));
        prop_assert_eq!(first.response, second.response);
        prop_assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    // Different result counts never share an entry.
    #[test]
    fn prop_max_results_do_not_share_entries(
        query in query_strategy(),
        max in 1u32..20,
        other_max in 1u32..20
    ) {
        prop_assume!(max != other_max);

        let provider = Arc::new(CountingProvider::default());
        let store = Arc::new(MemoryStore::new());
        let tool = CachedSearchTool::new(provider.clone(), store.clone(), Some(300));

        let second = tokio_test::block_on(async {
            tool.search(&query, "advanced", max).await;
            tool.search(&query, "advanced", other_max).await
        });

        prop_assert_eq!(second.response_type, Some(ResponseType::Generated));
        prop_assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
        prop_assert_eq!(tokio_test::block_on(store.len()), 2);
    }

    // Without a store every call reaches the provider.
    #[test]
    fn prop_disabled_store_never_short_circuits(query in query_strategy(), repeats in 2usize..5) {
        let provider = Arc::new(CountingProvider::default());
        let store: Arc<dyn CacheStore> = Arc::new(NullStore);
        let tool = CachedSearchTool::new(provider.clone(), store, Some(300));

        for _ in 0..repeats {
            let result = tokio_test::block_on(tool.search(&query, "advanced", 5));
            prop_assert_eq!(result.response_type, Some(ResponseType::Generated));
        }
        prop_assert_eq!(provider.calls.load(Ordering::SeqCst), repeats);
    }
}
