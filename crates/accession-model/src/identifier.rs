use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Institution-assigned identifier for a single-component digital object.
///
/// Renders as `<prefix>_<collection>_<object:06>_<component:04>`, for example
/// `curivsc_ms381_000001_0001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalIdentifier {
    pub prefix: String,
    pub collection: String,
    pub object_number: u32,
    pub component_number: u16,
}

impl LocalIdentifier {
    pub fn new(
        prefix: impl Into<String>,
        collection: impl Into<String>,
        object_number: u32,
        component_number: u16,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            collection: collection.into(),
            object_number,
            component_number,
        }
    }
}

impl fmt::Display for LocalIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{:06}_{:04}",
            self.prefix, self.collection, self.object_number, self.component_number
        )
    }
}

impl FromStr for LocalIdentifier {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidIdentifier(value.to_string());
        // Prefix and collection may not contain underscores; the numeric parts are the last two.
        let mut parts = value.rsplitn(3, '_');
        let component = parts.next().ok_or_else(invalid)?;
        let object = parts.next().ok_or_else(invalid)?;
        let head = parts.next().ok_or_else(invalid)?;
        let (prefix, collection) = head.split_once('_').ok_or_else(invalid)?;
        if prefix.is_empty() || collection.is_empty() || collection.contains('_') {
            return Err(invalid());
        }
        if object.len() < 6 || component.len() < 4 {
            return Err(invalid());
        }
        let object_number = object.parse::<u32>().map_err(|_| invalid())?;
        let component_number = component.parse::<u16>().map_err(|_| invalid())?;
        Ok(Self::new(prefix, collection, object_number, component_number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_zero_padded_parts() {
        let id = LocalIdentifier::new("curivsc", "ms381", 42, 1);
        assert_eq!(id.to_string(), "curivsc_ms381_000042_0001");
    }

    #[test]
    fn parses_rendered_form() {
        let id: LocalIdentifier = "curivsc_ms381_000042_0001".parse().unwrap();
        assert_eq!(id.object_number, 42);
        assert_eq!(id.component_number, 1);
        assert_eq!(id.prefix, "curivsc");
        assert_eq!(id.collection, "ms381");
    }

    #[test]
    fn rejects_malformed_values() {
        for bad in ["", "curivsc", "curivsc_ms381_12_0001", "a_b_c_000001_0001", "x_y_abcdef_0001"] {
            assert!(bad.parse::<LocalIdentifier>().is_err(), "{bad}");
        }
    }
}
