//! Closed catalog enums

use std::fmt;

/// Airplane manufacturer catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Manufacturer {
    Airbus,
    Boeing,
}

impl Manufacturer {
    /// Every manufacturer, in catalog order
    pub const ALL: [Manufacturer; 2] = [Manufacturer::Airbus, Manufacturer::Boeing];

    /// Returns the catalog name
    pub fn name(&self) -> &'static str {
        match self {
            Manufacturer::Airbus => "Airbus",
            Manufacturer::Boeing => "Boeing",
        }
    }

    /// Looks up a manufacturer by its exact catalog name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Airplane model catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AirplaneModel {
    /// Boeing 747-8
    B747_8,
    /// Boeing 767
    B767,
    /// Boeing 777
    B777,
    /// Airbus A220
    A220,
    /// Airbus A330
    A330,
    /// Airbus A350
    A350,
}

impl AirplaneModel {
    /// Every model, in catalog order
    pub const ALL: [AirplaneModel; 6] = [
        AirplaneModel::B747_8,
        AirplaneModel::B767,
        AirplaneModel::B777,
        AirplaneModel::A220,
        AirplaneModel::A330,
        AirplaneModel::A350,
    ];

    /// Returns the catalog name
    pub fn name(&self) -> &'static str {
        match self {
            AirplaneModel::B747_8 => "747-8",
            AirplaneModel::B767 => "767",
            AirplaneModel::B777 => "777",
            AirplaneModel::A220 => "A220",
            AirplaneModel::A330 => "A330",
            AirplaneModel::A350 => "A350",
        }
    }

    /// Looks up a model by its exact catalog name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// The manufacturer this model is paired with.
    ///
    /// Every model belongs to exactly one manufacturer.
    pub fn manufacturer(&self) -> Manufacturer {
        match self {
            AirplaneModel::B747_8 | AirplaneModel::B767 | AirplaneModel::B777 => {
                Manufacturer::Boeing
            }
            AirplaneModel::A220 | AirplaneModel::A330 | AirplaneModel::A350 => {
                Manufacturer::Airbus
            }
        }
    }
}

impl fmt::Display for AirplaneModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
