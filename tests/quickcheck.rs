use avl_map::map::{self, Map};
use compare::Compare;
use quickcheck::{Arbitrary, Gen};

pub trait OccupiedEntry<K, C> where C: Compare<K> {
    fn entry<'a, V>(&self, map: &'a mut Map<K, V, C>) -> Option<map::OccupiedEntry<'a, K, V>>;
}

#[derive(Clone, Debug)]
pub struct RemoveEntry<R>(R);

impl<R> Arbitrary for RemoveEntry<R> where R: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Self { RemoveEntry(R::arbitrary(gen)) }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(RemoveEntry))
    }
}

impl<R, K, C> Remove<K, C> for RemoveEntry<R> where R: OccupiedEntry<K, C>, C: Compare<K> {
    fn remove<V>(&self, map: &mut Map<K, V, C>) -> Option<(K, V)> {
        self.0.entry(map).map(map::OccupiedEntry::remove)
    }
}

#[derive(Clone, Debug)]
pub struct RemoveCurrent<Q>(Q);

impl<Q> Arbitrary for RemoveCurrent<Q> where Q: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Self { RemoveCurrent(Q::arbitrary(gen)) }
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(RemoveCurrent))
    }
}

impl<Q, K, C> Remove<K, C> for RemoveCurrent<Q> where C: Compare<K> + Compare<Q, K> {
    fn remove<V>(&self, map: &mut Map<K, V, C>) -> Option<(K, V)> {
        map.find_mut(&self.0).remove_current()
    }
}

macro_rules! occupied_entry {
    ($K:ty, $V:ty, $R:ty) => {
        mod occupied_entry {
            remove!{$K, $V, crate::RemoveEntry<$R>}
        }
    }
}

pub trait Remove<K, C> where C: Compare<K> {
    fn remove<V>(&self, map: &mut Map<K, V, C>) -> Option<(K, V)>;
}

macro_rules! remove {
    ($K:ty, $V:ty, $R:ty) => {
        mod remove {
            use crate::Remove;
            use quickcheck::{quickcheck, TestResult};
            use avl_map::Map;

            #[test]
            fn removes_key() {
                fn test(mut map: Map<$K, $V>, removal: $R) -> TestResult {
                    match removal.remove(&mut map) {
                        None => TestResult::discard(),
                        Some((ref key, _)) => TestResult::from_bool(
                            !map.contains_key(key) &&
                            map.get(key).is_none() &&
                            map.get_mut(key).is_none() &&
                            map.find(key) == map.end() &&
                            map.iter().find(|e| e.0 == key).is_none()
                        ),
                    }
                }

                quickcheck(test as fn(Map<$K, $V>, $R) -> TestResult);
            }

            #[test]
            fn affects_no_others() {
                fn test(mut map: Map<$K, $V>, removal: $R) -> bool {
                    let old_map = map.clone();

                    match removal.remove(&mut map) {
                        None => map == old_map,
                        Some((ref key, _)) =>
                            map.iter().collect::<Vec<_>>() ==
                               old_map.iter().filter(|e| e.0 != key).collect::<Vec<_>>()
                    }
                }

                quickcheck(test as fn(Map<$K, $V>, $R) -> bool);
            }

            #[test]
            fn sets_len() {
                fn test(mut map: Map<$K, $V>, removal: $R) -> bool {
                    let old_len = map.len();

                    match removal.remove(&mut map) {
                        None => map.len() == old_len,
                        Some(_) => map.len() == old_len - 1,
                    }
                }

                quickcheck(test as fn(Map<$K, $V>, $R) -> bool);
            }
        }
    }
}

#[derive(Clone, Debug)]
struct Find<Q>(Q);

impl<Q> Arbitrary for Find<Q> where Q: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Self { Find(Q::arbitrary(gen)) }
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> { Box::new(self.0.shrink().map(Find)) }
}

impl<Q, K, C> Remove<K, C> for Find<Q> where C: Compare<K> + Compare<Q, K> {
    fn remove<V>(&self, map: &mut Map<K, V, C>) -> Option<(K, V)> { map.remove(&self.0) }
}

impl<K, C> OccupiedEntry<K, C> for Find<K> where K: Clone, C: Compare<K> {
    fn entry<'a, V>(&self, map: &'a mut Map<K, V, C>) -> Option<map::OccupiedEntry<'a, K, V>> {
        match map.entry(self.0.clone()) {
            map::Entry::Occupied(e) => Some(e),
            map::Entry::Vacant(_) => None,
        }
    }
}

/// Inserts an entry unless its key is present, returning `true` if it was inserted.
pub trait Insert<K> {
    fn key(&self) -> K;
    fn insert<V, C>(self, map: &mut Map<K, V, C>, value: V) -> bool where C: Compare<K>;
}

impl<K> Insert<K> for Find<K> where K: Clone {
    fn key(&self) -> K { self.0.clone() }

    fn insert<V, C>(self, map: &mut Map<K, V, C>, value: V) -> bool where C: Compare<K> {
        map.insert(self.0, value).1
    }
}

#[derive(Clone, Debug)]
pub struct FindEntry<K>(K);

impl<K> Arbitrary for FindEntry<K> where K: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Self { FindEntry(K::arbitrary(gen)) }
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> { Box::new(self.0.shrink().map(FindEntry)) }
}

impl<K> Insert<K> for FindEntry<K> where K: Clone {
    fn key(&self) -> K { self.0.clone() }

    fn insert<V, C>(self, map: &mut Map<K, V, C>, value: V) -> bool where C: Compare<K> {
        match map.entry(self.0) {
            map::Entry::Occupied(_) => false,
            map::Entry::Vacant(e) => { e.insert(value); true }
        }
    }
}

#[derive(Clone, Debug)]
pub struct CursorInsert<K>(K, bool);

impl<K> Arbitrary for CursorInsert<K> where K: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Self { CursorInsert(K::arbitrary(gen), bool::arbitrary(gen)) }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new((self.0.clone(), self.1).shrink().map(|(key, at_end)| CursorInsert(key, at_end)))
    }
}

impl<K> Insert<K> for CursorInsert<K> where K: Clone {
    fn key(&self) -> K { self.0.clone() }

    fn insert<V, C>(self, map: &mut Map<K, V, C>, value: V) -> bool where C: Compare<K> {
        let mut cursor = if self.1 { map.end_mut() } else { map.begin_mut() };
        cursor.insert(self.0, value)
    }
}

macro_rules! insert {
    ($K:ty, $V:ty, $R:ty) => {
        mod insert {
            use crate::Insert;
            use quickcheck::quickcheck;
            use avl_map::Map;

            #[test]
            fn sets_len() {
                fn test(mut map: Map<$K, $V>, r: $R, value: $V) -> bool {
                    let old_len = map.len();

                    if r.insert(&mut map, value) {
                        map.len() == old_len + 1
                    } else {
                        map.len() == old_len
                    }
                }

                quickcheck(test as fn(Map<$K, $V>, $R, $V) -> bool);
            }

            #[test]
            fn inserts_key() {
                fn test(mut map: Map<$K, $V>, r: $R, value: $V) -> bool {
                    let key = r.key();
                    r.insert(&mut map, value);

                    map.contains_key(&key) &&
                    map.count(&key) == 1 &&
                    map.find(&key).key() == Some(&key) &&
                    map.iter().filter(|e| *e.0 == key).count() == 1
                }

                quickcheck(test as fn(Map<$K, $V>, $R, $V) -> bool);
            }

            #[test]
            fn keeps_old_value() {
                fn test(mut map: Map<$K, $V>, r: $R, value: $V) -> bool {
                    let key = r.key();
                    let old_value = map.get(&key).cloned();
                    let inserted = r.insert(&mut map, value);

                    match old_value {
                        Some(old_value) => !inserted && map.get(&key) == Some(&old_value),
                        None => inserted && map.get(&key) == Some(&value),
                    }
                }

                quickcheck(test as fn(Map<$K, $V>, $R, $V) -> bool);
            }

            #[test]
            fn affects_no_others() {
                fn test(mut map: Map<$K, $V>, r: $R, value: $V) -> bool {
                    let old_map = map.clone();
                    let key = r.key();
                    r.insert(&mut map, value);

                    map.iter().filter(|e| *e.0 != key).collect::<Vec<_>>() ==
                        old_map.iter().filter(|e| *e.0 != key).collect::<Vec<_>>()
                }

                quickcheck(test as fn(Map<$K, $V>, $R, $V) -> bool);
            }
        }
    }
}

mod find {
    mod entry {
        use quickcheck::quickcheck;
        use avl_map::map::{Entry, Map};

        #[test]
        fn agrees_with_get() {
            fn test(mut map: Map<u32, u16>, key: u32) -> bool {
                let value = map.get(&key).cloned();

                match map.entry(key) {
                    Entry::Occupied(e) => value == Some(*e.get()),
                    Entry::Vacant(_) => value.is_none(),
                }
            }

            quickcheck(test as fn(Map<u32, u16>, u32) -> bool);
        }

        insert!{u32, u16, crate::FindEntry<u32>}
    }

    mod cursor {
        insert!{u32, u16, crate::CursorInsert<u32>}
        remove!{u32, u16, crate::RemoveCurrent<u32>}
    }

    insert!{u32, u16, crate::Find<u32>}
    occupied_entry!{u32, u16, crate::Find<u32>}
    remove!{u32, u16, crate::Find<u32>}
}

#[derive(Clone, Debug)]
struct Max;

impl Arbitrary for Max { fn arbitrary(_gen: &mut Gen) -> Self { Max } }

impl<K, C> Remove<K, C> for Max where C: Compare<K> {
    fn remove<V>(&self, map: &mut Map<K, V, C>) -> Option<(K, V)> { map.remove_last() }
}

impl<K, C> OccupiedEntry<K, C> for Max where C: Compare<K> {
    fn entry<'a, V>(&self, map: &'a mut Map<K, V, C>) -> Option<map::OccupiedEntry<'a, K, V>> {
        map.last_entry()
    }
}

mod last {
    use quickcheck::quickcheck;
    use avl_map::Map;

    #[test]
    fn agrees_with_iter() {
        fn test(map: Map<u32, u16>) -> bool {
            map.last() == map.iter().rev().next() && map.rbegin().key_value() == map.last()
        }

        quickcheck(test as fn(Map<u32, u16>) -> bool);
    }

    occupied_entry!{u32, u16, crate::Max}
    remove!{u32, u16, crate::Max}
}

#[derive(Clone, Debug)]
struct Min;

impl Arbitrary for Min { fn arbitrary(_gen: &mut Gen) -> Self { Min } }

impl<K, C> Remove<K, C> for Min where C: Compare<K> {
    fn remove<V>(&self, map: &mut Map<K, V, C>) -> Option<(K, V)> { map.remove_first() }
}

impl<K, C> OccupiedEntry<K, C> for Min where C: Compare<K> {
    fn entry<'a, V>(&self, map: &'a mut Map<K, V, C>) -> Option<map::OccupiedEntry<'a, K, V>> {
        map.first_entry()
    }
}

mod first {
    use quickcheck::quickcheck;
    use avl_map::Map;

    #[test]
    fn agrees_with_iter() {
        fn test(map: Map<u32, u16>) -> bool {
            map.first() == map.iter().next() && map.begin().key_value() == map.first()
        }

        quickcheck(test as fn(Map<u32, u16>) -> bool);
    }

    occupied_entry!{u32, u16, crate::Min}
    remove!{u32, u16, crate::Min}
}

#[derive(Clone, Debug)]
struct Succ<Q>(Q, bool);

impl<Q> Arbitrary for Succ<Q> where Q: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Self { Succ(Q::arbitrary(gen), bool::arbitrary(gen)) }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new((self.0.clone(), self.1).shrink().map(|(key, inc)| Succ(key, inc)))
    }
}

impl<Q, K, C> Remove<K, C> for Succ<Q> where C: Compare<K> + Compare<Q, K> {
    fn remove<V>(&self, map: &mut Map<K, V, C>) -> Option<(K, V)> {
        map.remove_succ(&self.0, self.1)
    }
}

impl<Q, K, C> OccupiedEntry<K, C> for Succ<Q> where C: Compare<K> + Compare<Q, K> {
    fn entry<'a, V>(&self, map: &'a mut Map<K, V, C>) -> Option<map::OccupiedEntry<'a, K, V>> {
        map.succ_entry(&self.0, self.1)
    }
}

mod succ {
    use quickcheck::quickcheck;
    use avl_map::Map;

    #[test]
    fn exclusive_agrees_with_iter() {
        fn test(map: Map<u32, u16>, key: u32) -> bool {
            map.succ(&key, false) == map.iter().find(|e| *e.0 > key)
        }

        quickcheck(test as fn(Map<u32, u16>, u32) -> bool);
    }

    #[test]
    fn inclusive_agrees_with_iter() {
        fn test(map: Map<u32, u16>, key: u32) -> bool {
            map.succ(&key, true) == map.iter().find(|e| *e.0 >= key)
        }

        quickcheck(test as fn(Map<u32, u16>, u32) -> bool);
    }

    #[test]
    fn bounds_agree_with_succ() {
        fn test(map: Map<u32, u16>, key: u32) -> bool {
            let (lower, upper) = map.equal_range(&key);

            lower == map.lower_bound(&key) && upper == map.upper_bound(&key) &&
            lower.key_value() == map.succ(&key, true) &&
            upper.key_value() == map.succ(&key, false)
        }

        quickcheck(test as fn(Map<u32, u16>, u32) -> bool);
    }

    occupied_entry!{u32, u16, crate::Succ<u32>}
    remove!{u32, u16, crate::Succ<u32>}
}

#[derive(Clone, Debug)]
struct Pred<Q>(Q, bool);

impl<Q> Arbitrary for Pred<Q> where Q: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Self { Pred(Q::arbitrary(gen), bool::arbitrary(gen)) }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new((self.0.clone(), self.1).shrink().map(|(key, inc)| Pred(key, inc)))
    }
}

impl<Q, K, C> Remove<K, C> for Pred<Q> where C: Compare<K> + Compare<Q, K> {
    fn remove<V>(&self, map: &mut Map<K, V, C>) -> Option<(K, V)> {
        map.remove_pred(&self.0, self.1)
    }
}

impl<Q, K, C> OccupiedEntry<K, C> for Pred<Q> where C: Compare<K> + Compare<Q, K> {
    fn entry<'a, V>(&self, map: &'a mut Map<K, V, C>) -> Option<map::OccupiedEntry<'a, K, V>> {
        map.pred_entry(&self.0, self.1)
    }
}

mod pred {
    use quickcheck::quickcheck;
    use avl_map::Map;

    #[test]
    fn exclusive_agrees_with_iter() {
        fn test(map: Map<u32, u16>, key: u32) -> bool {
            map.pred(&key, false) == map.iter().rev().find(|e| *e.0 < key)
        }

        quickcheck(test as fn(Map<u32, u16>, u32) -> bool);
    }

    #[test]
    fn inclusive_agrees_with_iter() {
        fn test(map: Map<u32, u16>, key: u32) -> bool {
            map.pred(&key, true) == map.iter().rev().find(|e| *e.0 <= key)
        }

        quickcheck(test as fn(Map<u32, u16>, u32) -> bool);
    }

    occupied_entry!{u32, u16, crate::Pred<u32>}
    remove!{u32, u16, crate::Pred<u32>}
}

mod iter {
    use quickcheck::quickcheck;
    use avl_map::Map;

    #[quickcheck_macros::quickcheck]
    fn ascends(map: Map<u32, u16>) -> bool {
        map.iter().zip(map.iter().skip(1)).all(|(e1, e2)| e1.0 < e2.0)
    }

    #[quickcheck_macros::quickcheck]
    fn descends_when_reversed(map: Map<u32, u16>) -> bool {
        map.iter().rev().zip(map.iter().rev().skip(1)).all(|(e2, e1)| e2.0 > e1.0)
    }

    #[quickcheck_macros::quickcheck]
    fn agrees_with_into_iter(map: Map<u32, u16>) -> bool {
        let borrowed: Vec<_> = map.iter().map(|(&k, &v)| (k, v)).collect();
        borrowed == map.into_iter().collect::<Vec<_>>()
    }

    #[quickcheck_macros::quickcheck]
    fn agrees_with_cursors(map: Map<u32, u16>) -> bool {
        let mut forward = vec![];
        let mut cursor = map.begin();

        while cursor != map.end() {
            forward.push(cursor.key_value().unwrap());
            cursor.move_next();
        }

        let mut backward = vec![];
        let mut cursor = map.rbegin();

        while cursor != map.rend() {
            backward.push(cursor.key_value().unwrap());
            cursor.move_next();
        }

        backward.reverse();
        forward == map.iter().collect::<Vec<_>>() && forward == backward
    }

    #[test]
    fn size_hint_is_exact() {
        fn test(map: Map<u32, u16>) -> bool {
            let mut len = map.len();
            let mut it = map.iter();

            loop {
                if it.size_hint() != (len, Some(len)) { return false; }
                if it.next().is_none() { break; }
                len -= 1;
            }

            len == 0 && it.size_hint() == (0, Some(0))
        }

        quickcheck(test as fn(Map<u32, u16>) -> bool);
    }
}

mod range {
    use quickcheck::{quickcheck, Arbitrary, Gen};
    use std::ops::Bound::*;
    use avl_map::Map;

    #[derive(Clone, Debug)]
    struct Bound<T>(std::ops::Bound<T>);

    impl<T> Bound<T> {
        fn as_ref(&self) -> std::ops::Bound<&T> {
            match self.0 {
                Included(ref t) => Included(t),
                Excluded(ref t) => Excluded(t),
                Unbounded => Unbounded,
            }
        }

        fn admits_from_below(&self, key: &T) -> bool where T: Ord {
            match self.0 {
                Included(ref t) => key >= t,
                Excluded(ref t) => key > t,
                Unbounded => true,
            }
        }

        fn admits_from_above(&self, key: &T) -> bool where T: Ord {
            match self.0 {
                Included(ref t) => key <= t,
                Excluded(ref t) => key < t,
                Unbounded => true,
            }
        }
    }

    impl<T> Arbitrary for Bound<T> where T: Arbitrary {
        fn arbitrary(gen: &mut Gen) -> Self {
            Bound(match u8::arbitrary(gen) % 3 {
                0 => Included(T::arbitrary(gen)),
                1 => Excluded(T::arbitrary(gen)),
                _ => Unbounded,
            })
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            match self.0 {
                Included(ref t) => Box::new(t.shrink().map(|t| Bound(Included(t)))),
                Excluded(ref t) => Box::new(t.shrink().map(|t| Bound(Excluded(t)))),
                Unbounded => Box::new(None::<Self>.into_iter()),
            }
        }
    }

    #[test]
    fn range() {
        fn test(map: Map<u32, u16>, min: Bound<u32>, max: Bound<u32>) -> bool {
            let r = map.range(min.as_ref(), max.as_ref());

            let i = map.iter()
                .filter(|e| min.admits_from_below(e.0) && max.admits_from_above(e.0));

            r.collect::<Vec<_>>() == i.collect::<Vec<_>>()
        }

        quickcheck(test as fn(Map<u32, u16>, Bound<u32>, Bound<u32>) -> bool);
    }

    #[test]
    fn range_rev() {
        fn test(map: Map<u32, u16>, min: Bound<u32>, max: Bound<u32>) -> bool {
            let r = map.range(min.as_ref(), max.as_ref()).rev();

            let i = map.iter().rev()
                .filter(|e| min.admits_from_below(e.0) && max.admits_from_above(e.0));

            r.collect::<Vec<_>>() == i.collect::<Vec<_>>()
        }

        quickcheck(test as fn(Map<u32, u16>, Bound<u32>, Bound<u32>) -> bool);
    }

    #[test]
    fn remove_range() {
        fn test(mut map: Map<u32, u16>, min: Bound<u32>, max: Bound<u32>) -> bool {
            let old_map = map.clone();
            let removed = map.remove_range(min.as_ref(), max.as_ref());

            let kept: Vec<_> = old_map.iter()
                .filter(|e| !(min.admits_from_below(e.0) && max.admits_from_above(e.0)))
                .collect();

            removed == old_map.len() - kept.len() && map.iter().collect::<Vec<_>>() == kept
        }

        quickcheck(test as fn(Map<u32, u16>, Bound<u32>, Bound<u32>) -> bool);
    }
}
