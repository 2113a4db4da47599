use std::collections::BTreeMap;

use astrodata_protocol::model::star::{
    CreateStar,
    Star,
    StarId,
};

use crate::error::Error;

/// In-memory record store. Ids are assigned sequentially from 1 and listing
/// is in id order, so a fetched collection is stable across unchanged state.
#[derive(Debug, Default)]
pub struct Catalog {
    next_id: i64,
    stars: BTreeMap<StarId, Star>,
}

impl Catalog {
    pub fn list(&self) -> Vec<Star> {
        self.stars.values().cloned().collect()
    }

    pub fn get(&self, id: StarId) -> Option<&Star> {
        self.stars.get(&id)
    }

    pub fn insert(&mut self, create: CreateStar) -> Result<Star, Error> {
        if let Some(existing) = self.stars.values().find(|star| star.name == create.name) {
            return Err(Error::StarAlreadyExists {
                name: create.name,
                id: existing.id,
            });
        }

        self.next_id += 1;
        let star = Star {
            id: StarId(self.next_id),
            name: create.name,
            magnitude: create.magnitude,
            distance: create.distance,
            spectral_type: create.spectral_type,
        };
        self.stars.insert(star.id, star.clone());
        Ok(star)
    }

    pub fn remove(&mut self, id: StarId) -> Option<Star> {
        self.stars.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str) -> CreateStar {
        CreateStar {
            name: name.to_owned(),
            magnitude: 0.0,
            distance: 1.0,
            spectral_type: "G2V".to_owned(),
        }
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let mut catalog = Catalog::default();
        let a = catalog.insert(create("Sirius")).unwrap();
        let b = catalog.insert(create("Vega")).unwrap();
        assert_eq!(a.id, StarId(1));
        assert_eq!(b.id, StarId(2));
    }

    #[test]
    fn listing_is_in_id_order() {
        let mut catalog = Catalog::default();
        catalog.insert(create("Vega")).unwrap();
        catalog.insert(create("Altair")).unwrap();
        catalog.insert(create("Deneb")).unwrap();
        let ids: Vec<StarId> = catalog.list().into_iter().map(|star| star.id).collect();
        assert_eq!(ids, vec![StarId(1), StarId(2), StarId(3)]);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut catalog = Catalog::default();
        let existing = catalog.insert(create("Sirius")).unwrap();
        let error = catalog.insert(create("Sirius")).unwrap_err();
        match error {
            Error::StarAlreadyExists { name, id } => {
                assert_eq!(name, "Sirius");
                assert_eq!(id, existing.id);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn removed_ids_are_not_reused() {
        let mut catalog = Catalog::default();
        let a = catalog.insert(create("Sirius")).unwrap();
        assert!(catalog.remove(a.id).is_some());
        assert!(catalog.remove(a.id).is_none());
        let b = catalog.insert(create("Sirius")).unwrap();
        assert_eq!(b.id, StarId(2));
    }
}
