extern crate ordered_collections;
extern crate rand;

use self::rand::{thread_rng, Rng};
use ordered_collections::bst::BstSet;

#[test]
fn int_test_bst_set() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = BstSet::new();
    let mut expected = Vec::new();
    for _ in 0..100_000 {
        let key = rng.gen::<u32>();

        if set.insert(key) {
            expected.push(key);
        }
    }

    expected.sort();

    assert_eq!(set.len(), expected.len());
    assert_eq!(set.min(), expected.first());
    assert_eq!(set.max(), expected.last());
    assert_eq!(
        set.iter().collect::<Vec<&u32>>(),
        expected.iter().collect::<Vec<&u32>>(),
    );

    for key in &expected {
        assert!(set.contains(key));
    }

    thread_rng().shuffle(&mut expected);

    let mut expected_len = expected.len();
    for key in expected {
        assert_eq!(set.remove(&key), Some(key));
        expected_len -= 1;
        assert_eq!(set.len(), expected_len);
    }
    assert!(set.is_empty());
}
