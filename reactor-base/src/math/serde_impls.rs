#![allow(clippy::missing_inline_in_public_items)]

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::math::{Cuboid, GridCoordinate};

#[derive(Debug, Deserialize, Serialize)]
struct CuboidSer {
    // Inclusive on both ends, like `Cuboid` itself.
    lower: [GridCoordinate; 3],
    upper: [GridCoordinate; 3],
}

impl Serialize for Cuboid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        CuboidSer {
            lower: self.lower_bounds().into(),
            upper: self.upper_bounds().into(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cuboid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let CuboidSer { lower, upper } = CuboidSer::deserialize(deserializer)?;
        Cuboid::checked_from_bounds(lower, upper).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;

    #[test]
    fn cuboid_json() {
        let cuboid = Cuboid::from_bounds([-1, 2, 3], [4, 5, 6]);
        let json = serde_json::to_string(&cuboid).unwrap();
        assert_eq!(json, r#"{"lower":[-1,2,3],"upper":[4,5,6]}"#);
        assert_eq!(serde_json::from_str::<Cuboid>(&json).unwrap(), cuboid);
    }

    #[test]
    fn inverted_cuboid_json_is_rejected() {
        let error =
            serde_json::from_str::<Cuboid>(r#"{"lower":[0,0,0],"upper":[0,-1,0]}"#).unwrap_err();
        assert!(
            error.to_string().starts_with(
                "cuboid's lower bounds [0, 0, 0] are greater than its upper bounds [0, -1, 0]"
            ),
            "{error}"
        );
    }
}
