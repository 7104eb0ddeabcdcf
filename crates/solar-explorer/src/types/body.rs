//! Celestial body record

use serde::{de, Deserialize, Deserializer, Serialize};

/// One dataset entry describing a solar-system object
///
/// The six displayed attributes come first. Numeric attributes may be absent
/// (or `null`) in the source document; absence is kept as `None` and is never
/// replaced with a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    /// Display label
    pub name: String,
    /// Number of known moons; integral floats such as `1.0` are accepted
    #[serde(
        default,
        deserialize_with = "deserialize_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub satellites: Option<u32>,
    /// Mean radius in kilometres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_km: Option<f64>,
    /// Orbital semi-major axis in astronomical units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semi_major_axis_au: Option<f64>,
    /// Orbital eccentricity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eccentricity: Option<f64>,
    /// Mean density in g/cm³
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density_g_cm3: Option<f64>,

    // Orbital elements produced by the CSV converter, not displayed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inclination_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument_of_periapsis_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude_of_ascending_node_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean_anomaly_deg: Option<f64>,
    /// Classification, e.g. "Planet" or "Dwarf Planet"
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub body_type: Option<String>,
}

/// Whole, non-negative number that fits a satellite count
pub(crate) fn count_from_f64(value: f64) -> Option<u32> {
    (value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX)).then(|| value as u32)
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer)?
        .map(|value| {
            count_from_f64(value)
                .ok_or_else(|| de::Error::custom(format!("invalid satellite count: {}", value)))
        })
        .transpose()
}

impl CelestialBody {
    /// Create a body with only a name; every attribute starts absent
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            satellites: None,
            radius_km: None,
            semi_major_axis_au: None,
            eccentricity: None,
            density_g_cm3: None,
            inclination_deg: None,
            argument_of_periapsis_deg: None,
            longitude_of_ascending_node_deg: None,
            mean_anomaly_deg: None,
            body_type: None,
        }
    }

    /// Set the six displayed attributes at once
    pub fn with_attributes(
        mut self,
        satellites: u32,
        radius_km: f64,
        semi_major_axis_au: f64,
        eccentricity: f64,
        density_g_cm3: f64,
    ) -> Self {
        self.satellites = Some(satellites);
        self.radius_km = Some(radius_km);
        self.semi_major_axis_au = Some(semi_major_axis_au);
        self.eccentricity = Some(eccentricity);
        self.density_g_cm3 = Some(density_g_cm3);
        self
    }

    pub fn with_radius(mut self, radius_km: f64) -> Self {
        self.radius_km = Some(radius_km);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_dataset_entry() {
        let json = r#"{
            "name": "Earth",
            "satellites": 1,
            "radius_km": 6371,
            "semi_major_axis_au": 1.0,
            "eccentricity": 0.0167,
            "density_g_cm3": 5.51
        }"#;
        let body: CelestialBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.name, "Earth");
        assert_eq!(body.satellites, Some(1));
        assert_eq!(body.radius_km, Some(6371.0));
        assert_eq!(body.body_type, None);
    }

    #[test]
    fn test_missing_and_null_attributes() {
        let json = r#"{"name": "Ceres", "satellites": null, "type": "Dwarf Planet"}"#;
        let body: CelestialBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.satellites, None);
        assert_eq!(body.radius_km, None);
        assert_eq!(body.body_type.as_deref(), Some("Dwarf Planet"));
    }

    #[test]
    fn test_integral_float_count() {
        let body: CelestialBody =
            serde_json::from_str(r#"{"name": "Earth", "satellites": 1.0}"#).unwrap();
        assert_eq!(body.satellites, Some(1));

        let err = serde_json::from_str::<CelestialBody>(r#"{"name": "Earth", "satellites": 1.5}"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid satellite count"));
    }

    #[test]
    fn test_absent_attributes_are_omitted() {
        let json = serde_json::to_string(&CelestialBody::new("Vulcan").with_radius(10.0)).unwrap();
        assert_eq!(json, r#"{"name":"Vulcan","radius_km":10.0}"#);
    }

    #[test]
    fn test_serialize_omits_absent_orbital_elements() {
        let body = CelestialBody::new("Mars").with_attributes(2, 3390.0, 1.524, 0.0934, 3.93);
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("inclination_deg").is_none());
        assert!(value.get("type").is_none());
        assert_eq!(value["satellites"], 2);
    }
}
