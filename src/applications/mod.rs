//! Insurance application form schema.
//!
//! DESIGN
//! ======
//! Four closed form shapes share a flattened [`PersonalInfo`] block and are
//! discriminated by the `insurance_type` field. [`InsuranceApplicationData`]
//! is an internally tagged enum, so a record deserializes into exactly one
//! variant or fails. Field names follow the backend's wire keys through
//! serde renames; Rust-side names are English.
//!
//! The types carry no defaults: every required field must be supplied when
//! a value is built. Blank-string checks are exposed via `missing_fields`
//! for callers that gate submission.


mod check;
pub mod health;
pub mod life;
pub mod mandatory_health;
pub mod personal;
pub mod vehicle;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use health::{FamilyMember, HealthInsuranceApplication, MedicalHistory};
pub use life::{Beneficiary, HealthDeclaration, LifeInsuranceApplication};
pub use mandatory_health::MandatoryHealthApplication;
pub use personal::{Gender, PersonalInfo, YesNo};
pub use vehicle::{
    AccidentHistory, DriverLicense, InsuranceHistory, UsagePurpose, VehicleClass, VehicleInfo,
    VehicleInsuranceApplication,
};

/// Discriminant values of the `insurance_type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceType {
    Life,
    Health,
    Vehicle,
    MandatoryHealth,
}

impl InsuranceType {
    pub const ALL: [Self; 4] = [Self::Life, Self::Health, Self::Vehicle, Self::MandatoryHealth];

    /// Wire value of the discriminant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Life => "life",
            Self::Health => "health",
            Self::Vehicle => "vehicle",
            Self::MandatoryHealth => "mandatory_health",
        }
    }

    /// Customer-facing product line name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Life => "Bảo Hiểm Nhân Thọ",
            Self::Health => "Bảo Hiểm Sức Khỏe",
            Self::Vehicle => "Bảo Hiểm Xe",
            Self::MandatoryHealth => "Bảo Hiểm Y Tế Bắt Buộc",
        }
    }
}

impl fmt::Display for InsuranceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown insurance type: {0}")]
pub struct UnknownInsuranceType(pub String);

impl FromStr for InsuranceType {
    type Err = UnknownInsuranceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownInsuranceType(s.to_owned()))
    }
}

/// One submittable application record, tagged by `insurance_type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "insurance_type", rename_all = "snake_case")]
pub enum InsuranceApplicationData {
    Life(LifeInsuranceApplication),
    Health(HealthInsuranceApplication),
    Vehicle(VehicleInsuranceApplication),
    MandatoryHealth(MandatoryHealthApplication),
}

impl InsuranceApplicationData {
    pub fn insurance_type(&self) -> InsuranceType {
        match self {
            Self::Life(_) => InsuranceType::Life,
            Self::Health(_) => InsuranceType::Health,
            Self::Vehicle(_) => InsuranceType::Vehicle,
            Self::MandatoryHealth(_) => InsuranceType::MandatoryHealth,
        }
    }

    /// Identifier of the selected insurance package.
    pub fn package_id(&self) -> &str {
        match self {
            Self::Life(app) => &app.package_id,
            Self::Health(app) => &app.package_id,
            Self::Vehicle(app) => &app.package_id,
            Self::MandatoryHealth(app) => &app.package_id,
        }
    }

    pub fn personal(&self) -> &PersonalInfo {
        match self {
            Self::Life(app) => &app.personal,
            Self::Health(app) => &app.personal,
            Self::Vehicle(app) => &app.personal,
            Self::MandatoryHealth(app) => &app.personal,
        }
    }

    pub fn personal_mut(&mut self) -> &mut PersonalInfo {
        match self {
            Self::Life(app) => &mut app.personal,
            Self::Health(app) => &mut app.personal,
            Self::Vehicle(app) => &mut app.personal,
            Self::MandatoryHealth(app) => &mut app.personal,
        }
    }

    /// Wire keys of required fields that are still blank.
    pub fn missing_fields(&self) -> Vec<String> {
        match self {
            Self::Life(app) => app.missing_fields(),
            Self::Health(app) => app.missing_fields(),
            Self::Vehicle(app) => app.missing_fields(),
            Self::MandatoryHealth(app) => app.missing_fields(),
        }
    }

    pub fn is_submittable(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl From<LifeInsuranceApplication> for InsuranceApplicationData {
    fn from(app: LifeInsuranceApplication) -> Self {
        Self::Life(app)
    }
}

impl From<HealthInsuranceApplication> for InsuranceApplicationData {
    fn from(app: HealthInsuranceApplication) -> Self {
        Self::Health(app)
    }
}

impl From<VehicleInsuranceApplication> for InsuranceApplicationData {
    fn from(app: VehicleInsuranceApplication) -> Self {
        Self::Vehicle(app)
    }
}

impl From<MandatoryHealthApplication> for InsuranceApplicationData {
    fn from(app: MandatoryHealthApplication) -> Self {
        Self::MandatoryHealth(app)
    }
}
