use super::helpers::*;
use crate::*;
use std::sync::Arc;
use std::thread;

fn workers() -> usize {
    thread::available_parallelism().map_or(4, |n| n.get()).max(2)
}

#[test]
fn parallel_puts_through_one_bucket() {
    let mut rng = rng();
    let n = 10_000;
    let keys = shuffled_numeric_keys(n, &mut rng);
    let set = OrdSet::new();
    let bkt = set.bucket("");
    let threads = workers();

    thread::scope(|s| {
        for t in 0..threads {
            let keys = &keys;
            let bkt = &bkt;
            s.spawn(move || {
                for k in keys.iter().skip(t).step_by(threads) {
                    bkt.put(k);
                }
            });
        }
    });

    assert_eq!(bkt.keys(), sorted_desc(&keys));
}

#[test]
fn buckets_on_different_threads_share_the_set() {
    let set = Arc::new(OrdSet::new());
    let names = ["alpha/", "beta/", "gamma/", "delta/"];

    let handles: Vec<_> = names
        .iter()
        .map(|&name| {
            let set = Arc::clone(&set);
            thread::spawn(move || {
                let bkt = set.bucket(name);
                for i in 0..1_500 {
                    bkt.put(&format!("{:04}", i));
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(set.len(), names.len() * 1_500);
    for name in names {
        let keys = set.bucket(name).keys();
        assert_eq!(keys.len(), 1_500, "bucket {}", name);
        assert!(is_strictly_descending(&keys));
    }
}

#[test]
fn readers_run_alongside_writers() {
    let set = OrdSet::new();
    let mut rng = rng();
    let keys = shuffled_numeric_keys(5_000, &mut rng);

    thread::scope(|s| {
        s.spawn(|| {
            for k in &keys {
                set.put(k);
            }
        });
        for _ in 0..2 {
            s.spawn(|| {
                for _ in 0..50 {
                    let snapshot = set.keys();
                    assert!(is_strictly_descending(&snapshot));
                    let scanned = set.bucket("").keys();
                    assert!(is_strictly_descending(&scanned));
                }
            });
        }
    });

    assert_eq!(set.len(), 5_000);
}

#[test]
fn concurrent_put_and_delete_keep_invariants() {
    let set = OrdSet::new();
    for i in 0..4_000 {
        set.put(&format!("{:04}", i));
    }

    thread::scope(|s| {
        s.spawn(|| {
            for i in (0..4_000).step_by(2) {
                assert!(set.delete(&format!("{:04}", i)));
            }
        });
        s.spawn(|| {
            for i in 4_000..6_000 {
                set.put(&format!("{:04}", i));
            }
        });
    });

    let keys = set.keys();
    assert_eq!(keys.len(), 2_000 + 2_000);
    assert!(is_strictly_descending(&keys));
    assert!(!set.has("0000"));
    assert!(set.has("0001"));
    assert!(set.has("5999"));
}
