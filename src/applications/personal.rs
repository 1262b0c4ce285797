//! Personal-information block and the small closed enums shared by every
//! application form.

use serde::{Deserialize, Serialize};

use super::check::FieldCheck;

/// Applicant gender as offered on the forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "Nam")]
    Male,
    #[serde(rename = "Nu")]
    Female,
    #[serde(rename = "Khac")]
    Other,
}

/// A yes/no answer to a declaration question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    #[serde(rename = "Co")]
    Yes,
    #[serde(rename = "Khong")]
    No,
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }
}

/// Identity and contact details of the applicant.
///
/// Flattened into the top level of every application record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(rename = "ho_ten")]
    pub full_name: String,
    /// Date of birth as entered on the form.
    #[serde(rename = "ngay_sinh")]
    pub date_of_birth: String,
    #[serde(rename = "gioi_tinh")]
    pub gender: Gender,
    /// National ID (CMND/CCCD) number.
    #[serde(rename = "so_cmnd")]
    pub national_id: String,
    #[serde(rename = "dia_chi")]
    pub address: String,
    #[serde(rename = "sdt")]
    pub phone: String,
    pub email: String,
    #[serde(rename = "quoc_tich")]
    pub nationality: String,
    /// Place where the national ID was issued.
    #[serde(rename = "noi_cap")]
    pub id_issue_place: String,
    #[serde(rename = "ngay_cap", default, skip_serializing_if = "Option::is_none")]
    pub id_issue_date: Option<String>,
}

impl PersonalInfo {
    pub(crate) fn check(&self, check: &mut FieldCheck) {
        check
            .require("ho_ten", &self.full_name)
            .require("ngay_sinh", &self.date_of_birth)
            .require("so_cmnd", &self.national_id)
            .require("dia_chi", &self.address)
            .require("sdt", &self.phone)
            .require("email", &self.email)
            .require("quoc_tich", &self.nationality)
            .require("noi_cap", &self.id_issue_place);
    }
}
