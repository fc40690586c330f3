//! Runtime vehicle profiles and catalog selection.

use payback_config::{PowertrainConfig, VehicleConfig};
use thiserror::Error;

/// Drive class together with its class-appropriate consumption rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Powertrain {
    /// Combustion engine rated by fuel economy in kilometres per litre.
    Combustion { km_per_liter: f64 },
    /// Battery electric rated by energy use in kilowatt-hours per kilometre.
    Electric { kwh_per_km: f64 },
}

impl Powertrain {
    /// Drive class of this powertrain.
    pub fn class(&self) -> VehicleClass {
        match self {
            Powertrain::Combustion { .. } => VehicleClass::Combustion,
            Powertrain::Electric { .. } => VehicleClass::Electric,
        }
    }
}

/// Drive class used to filter catalog candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleClass {
    Combustion,
    Electric,
}

impl VehicleClass {
    /// Lowercase label used in reports and error messages.
    pub fn label(self) -> &'static str {
        match self {
            VehicleClass::Combustion => "combustion",
            VehicleClass::Electric => "electric",
        }
    }

    fn matches(self, config: &VehicleConfig) -> bool {
        matches!(
            (self, &config.powertrain),
            (VehicleClass::Combustion, PowertrainConfig::Combustion { .. })
                | (VehicleClass::Electric, PowertrainConfig::Electric { .. })
        )
    }
}

/// Runtime vehicle representation consumed by the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleProfile {
    pub name: String,
    pub price_usd: f64,
    pub powertrain: Powertrain,
}

/// Errors surfaced when selecting or converting vehicles.
#[derive(Debug, Error)]
pub enum VehicleError {
    #[error("vehicle '{0}' not found in catalog")]
    NotFound(String),
    #[error("catalog contains no {0} vehicles")]
    EmptyClass(&'static str),
    #[error("powertrain configuration is not supported")]
    UnsupportedPowertrain,
}

/// Convert a `VehicleConfig` into its runtime `VehicleProfile` representation.
pub fn from_config(config: &VehicleConfig) -> Result<VehicleProfile, VehicleError> {
    let powertrain = match &config.powertrain {
        PowertrainConfig::Combustion { km_per_liter } => Powertrain::Combustion {
            km_per_liter: *km_per_liter,
        },
        PowertrainConfig::Electric { kwh_per_km } => Powertrain::Electric {
            kwh_per_km: *kwh_per_km,
        },
        PowertrainConfig::Unsupported => {
            return Err(VehicleError::UnsupportedPowertrain);
        }
    };

    Ok(VehicleProfile {
        name: config.display_name(),
        price_usd: config.price_usd,
        powertrain,
    })
}

/// Select a vehicle of the given class by optional display name, defaulting
/// to the first catalog entry of that class.
pub fn select(
    configs: &[VehicleConfig],
    class: VehicleClass,
    requested: Option<&str>,
) -> Result<VehicleProfile, VehicleError> {
    let candidates: Vec<&VehicleConfig> = configs.iter().filter(|cfg| class.matches(cfg)).collect();
    if candidates.is_empty() {
        return Err(VehicleError::EmptyClass(class.label()));
    }

    let chosen = if let Some(name) = requested {
        let upper = name.to_uppercase();
        candidates
            .iter()
            .find(|cfg| cfg.display_name().to_uppercase() == upper)
            .copied()
            .ok_or_else(|| VehicleError::NotFound(name.to_string()))?
    } else {
        candidates[0]
    };

    from_config(chosen)
}
