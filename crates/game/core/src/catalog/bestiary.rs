use std::collections::BTreeMap;

use super::{CatalogError, KindId, MonsterKind};

/// Named registry of monster kinds.
///
/// Kinds are static lookup data: nothing in a running game mutates them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bestiary {
    kinds: BTreeMap<KindId, MonsterKind>,
    names: BTreeMap<String, KindId>,
}

impl Bestiary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four classic kinds, each protected by the one ranked below it.
    pub fn classic() -> Self {
        let mut bestiary = Self::new();
        for (name, kind) in [
            ("imp", MonsterKind::IMP),
            ("demon", MonsterKind::DEMON),
            ("spectre", MonsterKind::SPECTRE),
            ("baron_of_hell", MonsterKind::BARON_OF_HELL),
        ] {
            bestiary.kinds.insert(kind.id, kind);
            bestiary.names.insert(name.to_owned(), kind.id);
        }
        bestiary
    }

    /// Builds a bestiary from named kinds, checking that every protector
    /// refers to a registered kind.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (S, MonsterKind)>,
        S: Into<String>,
    {
        let mut bestiary = Self::new();
        for (name, kind) in entries {
            bestiary.insert(name, kind)?;
        }
        bestiary.check_protectors()?;
        Ok(bestiary)
    }

    /// Registers a kind under `name`.
    ///
    /// Protector references are not checked here so that kinds may be
    /// registered in any order; see [`Bestiary::check_protectors`].
    pub fn insert(&mut self, name: impl Into<String>, kind: MonsterKind) -> Result<(), CatalogError> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(CatalogError::DuplicateName(name));
        }
        if self.kinds.contains_key(&kind.id) {
            return Err(CatalogError::DuplicateKind(kind.id));
        }
        if kind.ammunition == 0 {
            return Err(CatalogError::ZeroAmmunition(kind.id));
        }
        self.kinds.insert(kind.id, kind);
        self.names.insert(name, kind.id);
        Ok(())
    }

    /// Fails on the first kind whose protector is not registered.
    pub fn check_protectors(&self) -> Result<(), CatalogError> {
        for kind in self.kinds.values() {
            if let Some(protector) = kind.protector
                && !self.kinds.contains_key(&protector)
            {
                return Err(CatalogError::UnknownProtector {
                    kind: kind.id,
                    protector,
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, id: KindId) -> Option<&MonsterKind> {
        self.kinds.get(&id)
    }

    pub fn by_name(&self, name: &str) -> Result<MonsterKind, CatalogError> {
        self.names
            .get(name)
            .and_then(|id| self.kinds.get(id))
            .copied()
            .ok_or_else(|| CatalogError::UnknownKind(name.to_owned()))
    }

    pub fn name_of(&self, id: KindId) -> Option<&str> {
        self.names
            .iter()
            .find(|(_, kind)| **kind == id)
            .map(|(name, _)| name.as_str())
    }

    /// Kinds in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &MonsterKind> {
        self.kinds.values()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Weapon;

    #[test]
    fn classic_chain_is_consistent() {
        let bestiary = Bestiary::classic();
        assert_eq!(bestiary.len(), 4);
        bestiary.check_protectors().unwrap();

        let baron = bestiary.by_name("baron_of_hell").unwrap();
        assert_eq!(baron.protector, Some(MonsterKind::SPECTRE.id));
        assert_eq!(bestiary.name_of(KindId(1)), Some("demon"));
        assert_eq!(baron.danger(), 4);
    }

    #[test]
    fn rejects_duplicates() {
        let mut bestiary = Bestiary::classic();
        let err = bestiary.insert("imp", MonsterKind::new(KindId(9), Weapon::Fist, 1, 0));
        assert_eq!(err, Err(CatalogError::DuplicateName("imp".into())));

        let err = bestiary.insert("zombie", MonsterKind::IMP);
        assert_eq!(err, Err(CatalogError::DuplicateKind(KindId(0))));
    }

    #[test]
    fn rejects_kinds_that_cannot_be_attacked() {
        let ghost = MonsterKind::new(KindId(4), Weapon::Fist, 0, 1);
        let err = Bestiary::classic().insert("ghost", ghost);
        assert_eq!(err, Err(CatalogError::ZeroAmmunition(KindId(4))));
    }

    #[test]
    fn rejects_dangling_protector() {
        let orphan = MonsterKind::new(KindId(0), Weapon::Fist, 1, 1).protected_by(KindId(7));
        let err = Bestiary::from_entries([("orphan", orphan)]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownProtector {
                kind: KindId(0),
                protector: KindId(7),
            }
        );
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = Bestiary::classic().by_name("cyberdemon").unwrap_err();
        assert_eq!(err, CatalogError::UnknownKind("cyberdemon".into()));
    }
}
