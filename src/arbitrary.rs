use compare::Compare;
use quickcheck::{Arbitrary, Gen};
use crate::Map;

impl<K, V, C> Arbitrary for Map<K, V, C>
    where K: Arbitrary, V: Arbitrary, C: 'static + Clone + Compare<K> + Default + Send {

    fn arbitrary(gen: &mut Gen) -> Self {
        Vec::<(K, V)>::arbitrary(gen).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let cmp = self.cmp().clone();
        let entries: Vec<(K, V)> = self.clone().into_iter().collect();

        Box::new(entries.shrink().map(move |entries| {
            let mut map = Map::with_cmp(cmp.clone());
            map.extend(entries);
            map
        }))
    }
}
