//! Nutrient tables for food products.

use std::fmt;

use super::product::FoodKind;

/// Nutrients every food product lists, in table order.
pub const BASE_NUTRIENTS: [&str; 4] = ["Calories(kcal)", "Fat(g)", "Carbs(g)", "Protein(g)"];

/// Extra entry appended for energy drinks.
pub const CAFFEINE: &str = "Caffeine(mg)";

/// An ordered, complete nutrient table.
///
/// Holds exactly [`FoodKind::nutrient_count`] values. Tables are never edited in place; a new
/// table replaces the old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutrientTable {
    kind: FoodKind,
    values: Vec<i32>,
}

impl NutrientTable {
    pub fn new(kind: FoodKind, values: &[i32]) -> Result<Self, TableSizeError> {
        let expected = kind.nutrient_count();
        let found = values.len();
        if found < expected {
            return Err(TableSizeError::Missing {
                kind,
                expected,
                found,
            });
        }
        if found > expected {
            return Err(TableSizeError::TooMany {
                kind,
                expected,
                found,
            });
        }
        Ok(Self {
            kind,
            values: values.to_vec(),
        })
    }

    /// Nutrient names for `kind`, in table order.
    pub fn names(kind: FoodKind) -> impl Iterator<Item = &'static str> {
        let caffeine = kind.has_caffeine().then_some(CAFFEINE);
        BASE_NUTRIENTS.into_iter().chain(caffeine)
    }

    pub fn kind(&self) -> FoodKind {
        self.kind
    }

    /// `(name, amount)` pairs in table order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        Self::names(self.kind).zip(self.values.iter().copied())
    }

    pub fn values(&self) -> Vec<i32> {
        self.values.clone()
    }

    pub fn get(&self, nutrient: &str) -> Option<i32> {
        self.entries()
            .find(|(name, _)| *name == nutrient)
            .map(|(_, amount)| amount)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for NutrientTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, amount) in self.entries() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{name}={amount}")?;
            first = false;
        }
        Ok(())
    }
}

/// Parsed nutrient amounts for one product, before they are checked against its variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NutrientValues {
    pub kcal: i32,
    pub fat: i32,
    pub carbs: i32,
    pub protein: i32,
    pub caffeine: Option<i32>,
}

impl NutrientValues {
    /// Values in table order.
    pub fn to_vec(&self) -> Vec<i32> {
        let mut values = vec![self.kcal, self.fat, self.carbs, self.protein];
        values.extend(self.caffeine);
        values
    }
}

/// A table was given the wrong number of values for its food kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableSizeError {
    #[error("Missing fields: {kind} needs {expected} nutrient values, got {found}")]
    Missing {
        kind: FoodKind,
        expected: usize,
        found: usize,
    },
    #[error("Too many fields: {kind} takes {expected} nutrient values, got {found}")]
    TooMany {
        kind: FoodKind,
        expected: usize,
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_drink_table_has_caffeine_last() {
        let table = NutrientTable::new(FoodKind::EnergyDrink, &[110, 0, 27, 0, 80]).unwrap();
        let entries: Vec<_> = table.entries().collect();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0], ("Calories(kcal)", 110));
        assert_eq!(entries[4], ("Caffeine(mg)", 80));
        assert_eq!(table.get("Carbs(g)"), Some(27));
    }

    #[test]
    fn test_table_size_is_checked_per_kind() {
        assert!(NutrientTable::new(FoodKind::ProteinBar, &[200, 8, 20, 20]).is_ok());
        assert!(matches!(
            NutrientTable::new(FoodKind::ProteinBar, &[200, 8, 20, 20, 5]),
            Err(TableSizeError::TooMany { expected: 4, found: 5, .. })
        ));
        assert!(matches!(
            NutrientTable::new(FoodKind::EnergyDrink, &[110, 0, 27, 0]),
            Err(TableSizeError::Missing { expected: 5, found: 4, .. })
        ));
    }

    #[test]
    fn test_display_lists_entries() {
        let table = NutrientTable::new(FoodKind::ProteinPowder, &[380, 6, 8, 75]).unwrap();
        assert_eq!(
            table.to_string(),
            "Calories(kcal)=380, Fat(g)=6, Carbs(g)=8, Protein(g)=75"
        );
    }
}
