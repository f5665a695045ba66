//! The static argument table is built once even when the first calls race.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::sync::Barrier;
use std::thread;

use pawx_arrayy::{static_arg_count, StaticArrayy, Value, METHODS};

#[test]
fn concurrent_first_calls_agree_with_method_table() {
    const THREADS: usize = 8;
    let barrier = Barrier::new(THREADS);

    let results: Vec<Vec<Option<usize>>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    let count = StaticArrayy::dispatch("count", vec![Value::from(vec![1, 2])]);
                    assert_eq!(count.unwrap(), Value::Int(2));
                    METHODS
                        .iter()
                        .map(|def| static_arg_count(def.name))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let expected: Vec<Option<usize>> = METHODS.iter().map(|def| Some(def.params + 2)).collect();
    for table in results {
        assert_eq!(table, expected);
    }
}
