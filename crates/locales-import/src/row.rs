use crate::submission::Submission;

pub const COL_NAME: &str = "Nom de l'entreprise";
pub const COL_ADDRESS: &str = "Adresse";
pub const COL_WEBSITE: &str = "Site internet";
pub const COL_SECTOR: &str = "Secteur";
pub const COL_LOGO: &str = "Logo";
pub const COL_LATITUDE: &str = "Latitude";
pub const COL_LONGITUDE: &str = "Longitude";

/// Header of the directory sheet, in column order.
pub const COLUMNS: [&str; 7] = [
    COL_NAME,
    COL_ADDRESS,
    COL_WEBSITE,
    COL_SECTOR,
    COL_LOGO,
    COL_LATITUDE,
    COL_LONGITUDE,
];

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryRow {
    pub name: String,
    pub address: String,
    pub website: String,
    pub sector: String,
    pub logo: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl DirectoryRow {
    pub fn text_cells(&self) -> [(&'static str, &str); 5] {
        [
            (COL_NAME, &self.name),
            (COL_ADDRESS, &self.address),
            (COL_WEBSITE, &self.website),
            (COL_SECTOR, &self.sector),
            (COL_LOGO, &self.logo),
        ]
    }

    pub fn coordinate_cells(&self) -> [(&'static str, Option<f64>); 2] {
        [(COL_LATITUDE, self.latitude), (COL_LONGITUDE, self.longitude)]
    }
}

impl From<Submission> for DirectoryRow {
    /// Coordinates are filled later on by geocoding.
    fn from(sub: Submission) -> Self {
        Self {
            name: sub.name,
            address: sub.address,
            website: sub.website,
            sector: sub.sector,
            logo: sub.logo,
            latitude: None,
            longitude: None,
        }
    }
}
