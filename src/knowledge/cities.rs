//! City to state mapping for major Indian cities

use crate::matching::title_case;

static CITY_STATE_MAP: &[(&str, &str)] = &[
    // Metro cities
    ("Delhi", "Delhi"),
    ("New Delhi", "Delhi"),
    ("Mumbai", "Maharashtra"),
    ("Kolkata", "West Bengal"),
    ("Chennai", "Tamil Nadu"),
    ("Bangalore", "Karnataka"),
    ("Bengaluru", "Karnataka"),
    ("Hyderabad", "Telangana"),
    ("Ahmedabad", "Gujarat"),
    ("Pune", "Maharashtra"),
    // North
    ("Jaipur", "Rajasthan"),
    ("Lucknow", "Uttar Pradesh"),
    ("Kanpur", "Uttar Pradesh"),
    ("Chandigarh", "Punjab"),
    ("Amritsar", "Punjab"),
    ("Ludhiana", "Punjab"),
    ("Shimla", "Himachal Pradesh"),
    ("Dehradun", "Uttarakhand"),
    // East
    ("Patna", "Bihar"),
    ("Ranchi", "Jharkhand"),
    ("Bhubaneswar", "Odisha"),
    ("Cuttack", "Odisha"),
    ("Guwahati", "Assam"),
    // West
    ("Surat", "Gujarat"),
    ("Vadodara", "Gujarat"),
    ("Rajkot", "Gujarat"),
    ("Nagpur", "Maharashtra"),
    ("Nashik", "Maharashtra"),
    // South
    ("Coimbatore", "Tamil Nadu"),
    ("Madurai", "Tamil Nadu"),
    ("Kochi", "Kerala"),
    ("Thiruvananthapuram", "Kerala"),
    ("Vijayawada", "Andhra Pradesh"),
    ("Visakhapatnam", "Andhra Pradesh"),
    ("Mysore", "Karnataka"),
    ("Mangalore", "Karnataka"),
    // Central
    ("Bhopal", "Madhya Pradesh"),
    ("Indore", "Madhya Pradesh"),
    ("Raipur", "Chhattisgarh"),
];

/// State and union territory names as spelled by the city map and the risk
/// calendar. Explicit state input is snapped to these before any lookup.
pub static KNOWN_STATES: &[&str] = &[
    "Andaman and Nicobar",
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chandigarh",
    "Chhattisgarh",
    "Dadra and Nagar Haveli",
    "Delhi",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jammu and Kashmir",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Puducherry",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

/// State for a known city; `None` when the city is not mapped
#[must_use]
pub fn state_for_city(city: &str) -> Option<&'static str> {
    let normalized = title_case(city.trim());
    CITY_STATE_MAP
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|&(_, state)| state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Jaipur", Some("Rajasthan"))]
    #[case(" new delhi ", Some("Delhi"))]
    #[case("BHUBANESWAR", Some("Odisha"))]
    #[case("Atlantis", None)]
    #[case("", None)]
    fn test_state_for_city(#[case] city: &str, #[case] expected: Option<&str>) {
        assert_eq!(state_for_city(city), expected);
    }

    #[test]
    fn test_every_mapped_state_is_known() {
        for (city, state) in CITY_STATE_MAP {
            assert!(KNOWN_STATES.contains(state), "{city} maps to unknown {state}");
        }
    }
}
