use serde::Deserialize;

/// Tankopedia vehicle, only the fields requested by the client.
#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct Vehicle {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn tankopedia_ok() -> Result {
        let vehicles = serde_json::from_str::<HashMap<String, Option<Vehicle>>>(
            // language=json
            r#"{"111":{"short_name":"T-34-1 Bp","name":"T-34-1 Bp","tier":7},"42":null}"#,
        )?;
        assert_eq!(vehicles["111"].as_ref().map(|vehicle| vehicle.name.as_str()), Some("T-34-1 Bp"));
        assert_eq!(vehicles["42"], None);
        Ok(())
    }
}
