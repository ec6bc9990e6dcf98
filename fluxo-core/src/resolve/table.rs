use std::collections::HashMap;

use super::CoordinateResolver;
use crate::model::{GeoPoint, ZoneId};

/// fixed mapping from zone ids to coordinates, e.g. the hand-maintained
/// municipality table shipped with the RMGSL dataset configuration.
pub struct TableResolver {
    table: HashMap<ZoneId, GeoPoint>,
}

impl TableResolver {
    pub fn new(table: HashMap<ZoneId, GeoPoint>) -> TableResolver {
        TableResolver { table }
    }

    pub fn from_pairs<I>(pairs: I) -> TableResolver
    where
        I: IntoIterator<Item = (ZoneId, GeoPoint)>,
    {
        TableResolver {
            table: pairs.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl CoordinateResolver for TableResolver {
    fn resolve(&self, zone: &ZoneId) -> Option<GeoPoint> {
        self.table.get(zone).copied()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_known_zone_resolves() {
        let resolver = TableResolver::from_pairs(vec![(
            ZoneId("São Luís".to_string()),
            GeoPoint::new(-2.5307, -44.3068),
        )]);
        let point = resolver
            .resolve(&ZoneId("São Luís".to_string()))
            .expect("test invariant failed: table entry must resolve");
        assert_eq!(point, GeoPoint::new(-2.5307, -44.3068));
    }

    #[test]
    fn test_unknown_zone_is_absent_not_an_error() {
        let resolver = TableResolver::from_pairs(vec![]);
        assert_eq!(resolver.resolve(&ZoneId("Raposa".to_string())), None);
    }
}
